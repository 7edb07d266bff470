//! Configuration parameters for heart-sound processing

/// Processing configuration parameters
///
/// Every tunable of the pipeline lives here; nothing in the DSP stages is a
/// hidden constant. The defaults reproduce the stethoscope capture setup the
/// pipeline was tuned against (10-100 Hz passband, 20-second mid-recording
/// segment). A narrower passband variant (e.g. 10-15 Hz for low-frequency
/// heart tones) is reachable by overriding `low_cutoff_hz`/`high_cutoff_hz`.
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    // Bandpass filter
    /// Low cutoff of the heart-sound passband in Hz (default: 10.0)
    pub low_cutoff_hz: f64,

    /// High cutoff of the heart-sound passband in Hz (default: 100.0)
    pub high_cutoff_hz: f64,

    /// Cascade order used for each direction of the zero-phase filter
    /// (default: 3; net effective order is twice this)
    pub zero_phase_sub_order: usize,

    // Windowing and trimming
    /// Hanning taper window size in samples (default: 2000)
    pub hanning_window_size: usize,

    /// Seconds discarded from each end of a filtered buffer to remove
    /// filter startup transients (default: 0.5)
    pub transient_trim_seconds: f64,

    // Segment extraction
    /// Start of the analysis segment within the raw capture, in seconds
    /// (default: 25.0)
    pub segment_start_seconds: f64,

    /// End of the analysis segment within the raw capture, in seconds
    /// (default: 45.0)
    pub segment_end_seconds: f64,

    /// Start of the steady sub-window within the processed segment, in
    /// seconds (default: 2.5)
    pub steady_start_seconds: f64,

    /// End of the steady sub-window within the processed segment, in
    /// seconds (default: 12.5)
    pub steady_end_seconds: f64,

    // Chart rendering
    /// Decimation factor applied before charting (default: 300)
    pub chart_decimation: usize,

    // Heart-rate estimation
    /// Peak amplitude threshold as a fraction of the buffer's maximum
    /// absolute value (default: 0.3)
    pub peak_threshold_ratio: f64,

    /// Physiological heart-rate ceiling in beats per minute; sets the
    /// minimum spacing between detected beats (default: 180.0)
    pub max_bpm: f64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            low_cutoff_hz: 10.0,
            high_cutoff_hz: 100.0,
            zero_phase_sub_order: 3,
            hanning_window_size: 2000,
            transient_trim_seconds: 0.5,
            segment_start_seconds: 25.0,
            segment_end_seconds: 45.0,
            steady_start_seconds: 2.5,
            steady_end_seconds: 12.5,
            chart_decimation: 300,
            peak_threshold_ratio: 0.3,
            max_bpm: 180.0,
        }
    }
}
