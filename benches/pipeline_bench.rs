//! Performance benchmarks for heart-sound processing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pulsegram_dsp::{analyze_recording, encode_wav, extract_heart_segment, ProcessingConfig};

fn synthetic_capture(sample_rate: u32, seconds: usize) -> Vec<f64> {
    (0..sample_rate as usize * seconds)
        .map(|i| {
            (i as f64 * 40.0 * 2.0 * std::f64::consts::PI / sample_rate as f64).sin() * 0.5
        })
        .collect()
}

fn bench_segment_extraction(c: &mut Criterion) {
    let samples = synthetic_capture(44100, 50);
    let config = ProcessingConfig::default();

    c.bench_function("extract_heart_segment_50s", |b| {
        b.iter(|| {
            let _ = extract_heart_segment(black_box(&samples), black_box(44100), &config);
        });
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let samples = synthetic_capture(44100, 50);
    let config = ProcessingConfig::default();

    c.bench_function("analyze_recording_50s", |b| {
        b.iter(|| {
            let _ = analyze_recording(black_box(&samples), black_box(44100), config.clone());
        });
    });
}

fn bench_wav_encode(c: &mut Criterion) {
    let samples = synthetic_capture(44100, 50);

    c.bench_function("encode_wav_50s", |b| {
        b.iter(|| {
            let _ = encode_wav(black_box(&samples), black_box(44100));
        });
    });
}

criterion_group!(
    benches,
    bench_segment_extraction,
    bench_full_analysis,
    bench_wav_encode
);
criterion_main!(benches);
