//! Edge tapering and transient trimming
//!
//! The half-cosine taper suppresses edge discontinuities before any further
//! slicing; trimming discards the filter startup artifact at both ends of a
//! filtered buffer.

use std::f64::consts::PI;

/// Taper both ends of a buffer with a half-cosine envelope
///
/// For window size `W` and half-width `H = W/2`, the first `min(H, N)`
/// samples are scaled by `0.5*(1 - cos(2*pi*i/W))` and the last `H` samples
/// by the mirrored formula. Interior samples are untouched.
pub fn apply_hanning_taper(data: &[f64], window_size: usize) -> Vec<f64> {
    let mut windowed = data.to_vec();
    if window_size == 0 || windowed.is_empty() {
        return windowed;
    }

    let half = window_size / 2;

    for i in 0..half.min(windowed.len()) {
        windowed[i] *= 0.5 * (1.0 - (2.0 * PI * i as f64 / window_size as f64).cos());
    }

    let start = windowed.len().saturating_sub(half);
    let last = windowed.len() - 1;
    for i in start..windowed.len() {
        windowed[i] *= 0.5 * (1.0 - (2.0 * PI * (last - i) as f64 / window_size as f64).cos());
    }

    windowed
}

/// Discard filter startup transients from both ends
///
/// Drops `floor(trim_seconds * sample_rate)` samples from each end, but only
/// if the buffer holds more than twice that many; shorter buffers pass
/// through untrimmed.
pub fn trim_transients(data: &[f64], sample_rate: u32, trim_seconds: f64) -> Vec<f64> {
    let transient = (trim_seconds * sample_rate as f64).floor() as usize;
    if data.len() > 2 * transient {
        data[transient..data.len() - transient].to_vec()
    } else {
        log::warn!(
            "Buffer of {} samples too short to trim {} from each end, passing through",
            data.len(),
            transient
        );
        data.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taper_center_untouched() {
        let data = vec![1.0; 101];
        let out = apply_hanning_taper(&data, 50);
        // Half-width 25: indices 25..76 are interior.
        assert_eq!(out[50], 1.0);
        assert_eq!(out[25], 1.0);
        assert_eq!(out[75], 1.0);
    }

    #[test]
    fn test_taper_endpoints_zeroed() {
        let data = vec![1.0; 500];
        let out = apply_hanning_taper(&data, 100);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[499], 0.0);
    }

    #[test]
    fn test_taper_attenuation_grows_with_window() {
        let data = vec![1.0; 5000];
        let narrow = apply_hanning_taper(&data, 200);
        let wide = apply_hanning_taper(&data, 2000);
        // A wider window attenuates near-edge samples more strongly.
        assert!(wide[1] < narrow[1]);
        assert!(narrow[1] < 1.0);
        assert!(wide[4998] < narrow[4998]);
    }

    #[test]
    fn test_taper_symmetric() {
        let data = vec![1.0; 1001];
        let out = apply_hanning_taper(&data, 400);
        for i in 0..200 {
            let mirror = out[out.len() - 1 - i];
            assert!((out[i] - mirror).abs() < 1e-12, "asymmetry at {}", i);
        }
    }

    #[test]
    fn test_trim_drops_both_ends() {
        let data: Vec<f64> = (0..2000).map(|i| i as f64).collect();
        let out = trim_transients(&data, 1000, 0.5);
        assert_eq!(out.len(), 1000);
        assert_eq!(out[0], 500.0);
        assert_eq!(out[999], 1499.0);
    }

    #[test]
    fn test_trim_short_buffer_passthrough() {
        let data: Vec<f64> = (0..800).map(|i| i as f64).collect();
        let out = trim_transients(&data, 1000, 0.5);
        assert_eq!(out, data);

        // Exactly twice the trim width still passes through.
        let data: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let out = trim_transients(&data, 1000, 0.5);
        assert_eq!(out, data);
    }
}
