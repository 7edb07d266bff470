//! # Pulsegram DSP
//!
//! A heart-sound (phonocardiogram) analysis engine: it extracts a heartbeat
//! waveform from a noisy raw audio capture and produces a display-ready
//! smoothed trace, a numeric heart-rate estimate, and lossless round-trip
//! WAV storage of the captured audio.
//!
//! ## Features
//!
//! - **Zero-phase bandpass filtering**: cascaded Butterworth biquads run
//!   forward and backward so beat timings stay aligned with the raw signal
//! - **Segment extraction**: DC removal, edge tapering, and transient
//!   trimming around a fixed mid-recording analysis window
//! - **Heart-rate estimation**: adaptive peak detection over the rectified
//!   segment with a physiological bpm ceiling
//! - **WAV codec**: canonical mono 16-bit PCM container, byte-exact for
//!   interoperability with standard decoders
//!
//! ## Quick Start
//!
//! ```no_run
//! use pulsegram_dsp::{analyze_recording, ProcessingConfig};
//!
//! // Capture hands the core mono samples in [-1.0, 1.0]
//! let samples: Vec<f64> = vec![]; // Your recording
//! let sample_rate = 44100;
//!
//! let result = analyze_recording(&samples, sample_rate, ProcessingConfig::default())?;
//!
//! println!("Heart rate: {} bpm", result.heart_rate.bpm_or_zero());
//! println!("Chart points: {}", result.chart.len());
//! # Ok::<(), pulsegram_dsp::ProcessingError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Raw capture -> Segment Extractor (DC removal -> Zero-Phase Filter ->
//! Windowing/Trimming) -> {Downsampler -> chart}, {Peak Detector ->
//! Heart-Rate Estimator -> bpm}
//! ```
//!
//! The WAV codec operates independently on the raw capture for storage.
//! Every operation is a pure, synchronous function of its inputs; a host
//! that parallelizes across recordings needs no synchronization here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod filter;
pub mod io;
pub mod preprocessing;

// Re-export main types
pub use analysis::result::{AnalysisMetadata, ChartPoint, HeartRate, RecordingAnalysis};
pub use config::ProcessingConfig;
pub use error::ProcessingError;
pub use features::heart_rate::estimate_heart_rate;
pub use io::wav::{decode_wav, encode_wav};
pub use preprocessing::segment::extract_heart_segment;

use preprocessing::downsample::downsample;
use preprocessing::segment::{extract_with_offset, ExtractedSegment};

fn build_chart(
    extracted: &ExtractedSegment,
    sample_rate: u32,
    config: &ProcessingConfig,
) -> Result<Vec<ChartPoint>, ProcessingError> {
    let decimated = downsample(&extracted.samples, config.chart_decimation)?;
    let step = config.chart_decimation as f64 / sample_rate as f64;
    Ok(decimated
        .iter()
        .enumerate()
        .map(|(i, &amplitude)| ChartPoint {
            time: extracted.start_offset_seconds + i as f64 * step,
            amplitude,
        })
        .collect())
}

/// Produce the downsampled `{time, amplitude}` trace for charting
///
/// Extracts the heart segment, decimates it by `config.chart_decimation`,
/// and stamps each point with its absolute position on the raw recording
/// timeline.
///
/// # Errors
///
/// Returns `ProcessingError` for unusable input (empty buffer, zero sample
/// rate, capture shorter than the segment start, zero decimation factor).
pub fn chart_points(
    samples: &[f64],
    sample_rate: u32,
    config: &ProcessingConfig,
) -> Result<Vec<ChartPoint>, ProcessingError> {
    let extracted = extract_with_offset(samples, sample_rate, config)?;
    build_chart(&extracted, sample_rate, config)
}

/// Analyze one recording end to end
///
/// Runs segment extraction once and derives both consumer artifacts from
/// it: the decimated chart trace and the heart-rate estimate.
///
/// # Arguments
///
/// * `samples` - Mono samples, nominally in [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Processing configuration
///
/// # Errors
///
/// Returns `ProcessingError` if the capture cannot be processed at all; an
/// undetectable heart rate is NOT an error and comes back as
/// [`HeartRate::NoEstimate`].
pub fn analyze_recording(
    samples: &[f64],
    sample_rate: u32,
    config: ProcessingConfig,
) -> Result<RecordingAnalysis, ProcessingError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Analyzing recording: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    let extracted = extract_with_offset(samples, sample_rate, &config)?;

    let heart_rate = estimate_heart_rate(&extracted.samples, sample_rate, &config);
    let chart = build_chart(&extracted, sample_rate, &config)?;

    Ok(RecordingAnalysis {
        heart_rate,
        chart,
        metadata: AnalysisMetadata {
            duration_seconds: samples.len() as f64 / sample_rate as f64,
            sample_rate,
            processing_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
