//! Cascaded bandpass filter
//!
//! Chains `order` repetitions of (high-pass at the low cutoff, low-pass at
//! the high cutoff) to form a steep band limiter. Higher order buys roll-off
//! steepness at the cost of group delay and edge artifact, which is why the
//! pipeline trims transients after filtering.

use crate::filter::biquad::{apply_stage, BiquadCoeffs};

/// Apply a cascaded bandpass filter
///
/// # Arguments
///
/// * `data` - Input samples
/// * `low_cutoff_hz` - High-pass cutoff (lower band edge)
/// * `high_cutoff_hz` - Low-pass cutoff (upper band edge)
/// * `sample_rate` - Sample rate in Hz
/// * `order` - Number of high-pass/low-pass stage pairs
///
/// # Returns
///
/// A new buffer of the same length
pub fn band_pass(
    data: &[f64],
    low_cutoff_hz: f64,
    high_cutoff_hz: f64,
    sample_rate: u32,
    order: usize,
) -> Vec<f64> {
    log::debug!(
        "Bandpass cascade: {} samples, {:.1}-{:.1} Hz at {} Hz, order {}",
        data.len(),
        low_cutoff_hz,
        high_cutoff_hz,
        sample_rate,
        order
    );

    let high_pass = BiquadCoeffs::high_pass(low_cutoff_hz, sample_rate);
    let low_pass = BiquadCoeffs::low_pass(high_cutoff_hz, sample_rate);

    let mut filtered = data.to_vec();
    for _ in 0..order {
        filtered = apply_stage(&filtered, high_pass);
        filtered = apply_stage(&filtered, low_pass);
    }

    filtered
}
