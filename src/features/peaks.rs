//! Adaptive peak detection
//!
//! Finds local maxima subject to a minimum spacing and an amplitude
//! threshold. The minimum-distance rule is enforced greedily in a single
//! left-to-right pass with a last-larger-wins tie-break: a candidate that
//! arrives inside the exclusion window of the most recently accepted peak
//! replaces it if, and only if, its value is strictly larger.

/// Fraction of the maximum absolute value used when no explicit threshold
/// is given
const DEFAULT_THRESHOLD_RATIO: f64 = 0.3;

/// The last accepted peak, held out of the result until a candidate lands
/// far enough away to make it final. Keeping this as explicit state (rather
/// than mutating the tail of a growing list) makes the replacement rule
/// testable in isolation.
#[derive(Debug, Clone, Copy)]
struct PendingPeak {
    index: usize,
    value: f64,
}

/// Find peaks in a signal
///
/// A candidate index `i` must be interior (`0 < i < len-1`), a strict local
/// maximum (`data[i] > data[i-1]` and `data[i] > data[i+1]`), and exceed the
/// amplitude threshold (`|data[i]| > threshold`).
///
/// # Arguments
///
/// * `data` - Signal to scan
/// * `min_distance` - Minimum index spacing between accepted peaks
/// * `threshold` - Amplitude threshold; `None` uses 0.3 x max absolute value
///
/// # Returns
///
/// Strictly increasing peak indices, possibly empty. Any two consecutive
/// indices differ by at least `min_distance`.
pub fn find_peaks(data: &[f64], min_distance: usize, threshold: Option<f64>) -> Vec<usize> {
    if data.len() < 3 {
        return Vec::new();
    }

    let threshold = threshold.unwrap_or_else(|| {
        let max_abs = data.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
        DEFAULT_THRESHOLD_RATIO * max_abs
    });

    log::debug!(
        "Finding peaks: {} samples, min_distance={}, threshold={:.4}",
        data.len(),
        min_distance,
        threshold
    );

    let mut accepted: Vec<usize> = Vec::new();
    let mut pending: Option<PendingPeak> = None;

    for i in 1..data.len() - 1 {
        let value = data[i];
        if !(value > data[i - 1] && value > data[i + 1] && value.abs() > threshold) {
            continue;
        }

        match pending {
            None => pending = Some(PendingPeak { index: i, value }),
            Some(last) => {
                if i - last.index >= min_distance {
                    accepted.push(last.index);
                    pending = Some(PendingPeak { index: i, value });
                } else if value > last.value {
                    // Last-larger-wins inside the exclusion window.
                    pending = Some(PendingPeak { index: i, value });
                }
            }
        }
    }

    if let Some(last) = pending {
        accepted.push(last.index);
    }

    log::debug!("Found {} peaks", accepted.len());
    accepted
}
