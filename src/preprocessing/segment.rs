//! Heart segment extraction
//!
//! Selects a fixed mid-recording window of the raw capture and routes it
//! through DC removal, zero-phase bandpass filtering, edge tapering, and
//! transient trimming to produce the canonical heart segment. The final
//! slice-of-a-slice isolates the steadiest portion of the capture away from
//! filter edge effects at both extraction boundaries.

use crate::config::ProcessingConfig;
use crate::error::ProcessingError;
use crate::filter::zero_phase::zero_phase_band_pass;
use crate::preprocessing::dc_offset::remove_dc_offset;
use crate::preprocessing::window::{apply_hanning_taper, trim_transients};

/// A processed segment together with where it starts on the raw timeline
///
/// The offset lets the chart plot the segment against absolute recording
/// time regardless of which trimming steps actually applied.
#[derive(Debug, Clone)]
pub(crate) struct ExtractedSegment {
    /// Processed samples
    pub samples: Vec<f64>,
    /// Seconds between the start of the raw capture and `samples[0]`
    pub start_offset_seconds: f64,
}

pub(crate) fn extract_with_offset(
    samples: &[f64],
    sample_rate: u32,
    config: &ProcessingConfig,
) -> Result<ExtractedSegment, ProcessingError> {
    if samples.is_empty() {
        return Err(ProcessingError::InvalidInput(
            "Empty sample buffer".to_string(),
        ));
    }
    if sample_rate == 0 {
        return Err(ProcessingError::InvalidInput(
            "Invalid sample rate".to_string(),
        ));
    }

    let start = (config.segment_start_seconds * sample_rate as f64).floor() as usize;
    let end = (config.segment_end_seconds * sample_rate as f64).floor() as usize;
    if start >= samples.len() {
        return Err(ProcessingError::InvalidInput(format!(
            "Capture of {} samples ends before the {}s segment start",
            samples.len(),
            config.segment_start_seconds
        )));
    }

    let raw_segment = &samples[start..end.min(samples.len())];
    log::debug!(
        "Extracting heart segment: {} of {} samples at {} Hz",
        raw_segment.len(),
        samples.len(),
        sample_rate
    );
    let mut offset_seconds = config.segment_start_seconds;

    let mut processed = remove_dc_offset(raw_segment);
    processed = zero_phase_band_pass(
        &processed,
        config.low_cutoff_hz,
        config.high_cutoff_hz,
        sample_rate,
        config.zero_phase_sub_order,
    );
    processed = apply_hanning_taper(&processed, config.hanning_window_size);

    let before_trim = processed.len();
    processed = trim_transients(&processed, sample_rate, config.transient_trim_seconds);
    if processed.len() < before_trim {
        offset_seconds += config.transient_trim_seconds;
    }

    // Steady sub-window of the already-processed buffer, when long enough.
    let steady_start = (config.steady_start_seconds * sample_rate as f64).floor() as usize;
    let steady_end = (config.steady_end_seconds * sample_rate as f64).floor() as usize;
    if processed.len() > steady_end {
        processed = processed[steady_start..steady_end].to_vec();
        offset_seconds += config.steady_start_seconds;
    }

    Ok(ExtractedSegment {
        samples: processed,
        start_offset_seconds: offset_seconds,
    })
}

/// Extract the canonical heart segment from a raw capture
///
/// Pipeline: slice the configured mid-recording window, remove DC, apply the
/// zero-phase bandpass, taper the edges, trim transients, then keep the
/// steady sub-window when the processed buffer is long enough.
///
/// # Errors
///
/// Returns `ProcessingError::InvalidInput` for an empty buffer, a zero
/// sample rate, or a capture that ends before the configured segment start.
pub fn extract_heart_segment(
    samples: &[f64],
    sample_rate: u32,
    config: &ProcessingConfig,
) -> Result<Vec<f64>, ProcessingError> {
    extract_with_offset(samples, sample_rate, config).map(|s| s.samples)
}
