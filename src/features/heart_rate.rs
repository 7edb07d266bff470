//! Heart-rate estimation from peak spacing

use crate::analysis::result::HeartRate;
use crate::config::ProcessingConfig;
use crate::features::peaks::find_peaks;

/// Estimate beats per minute from a processed heart segment
///
/// Rectifies the segment, detects peaks with a minimum spacing derived from
/// the configured bpm ceiling (`floor(60 * sample_rate / max_bpm)`, i.e.
/// `sample_rate / 3` at the default 180 bpm), and converts the mean
/// peak-to-peak interval into beats per minute.
///
/// Fewer than two peaks yields [`HeartRate::NoEstimate`]; that is an
/// expected outcome for silent or degenerate captures, not an error.
pub fn estimate_heart_rate(
    processed: &[f64],
    sample_rate: u32,
    config: &ProcessingConfig,
) -> HeartRate {
    if sample_rate == 0 || processed.is_empty() {
        return HeartRate::NoEstimate;
    }

    let rectified: Vec<f64> = processed.iter().map(|v| v.abs()).collect();
    let max_abs = rectified.iter().fold(0.0f64, |acc, &v| acc.max(v));
    let min_distance = (60.0 * sample_rate as f64 / config.max_bpm).floor() as usize;

    let peaks = find_peaks(
        &rectified,
        min_distance,
        Some(config.peak_threshold_ratio * max_abs),
    );
    if peaks.len() < 2 {
        log::debug!("Only {} peak(s) detected, no heart-rate estimate", peaks.len());
        return HeartRate::NoEstimate;
    }

    let mean_interval = peaks
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64)
        .sum::<f64>()
        / (peaks.len() - 1) as f64;

    let bpm = (60.0 * sample_rate as f64 / mean_interval).round() as u32;
    log::debug!(
        "{} peaks, mean interval {:.1} samples -> {} bpm",
        peaks.len(),
        mean_interval,
        bpm
    );
    HeartRate::Bpm(bpm)
}
