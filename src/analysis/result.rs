//! Analysis result types

use serde::{Deserialize, Serialize};

/// Heart-rate estimation outcome
///
/// An explicit tagged type instead of a zero sentinel, so "measured zero"
/// and "unmeasurable" can never be conflated. Collaborators that persist the
/// legacy sentinel convention can use [`HeartRate::bpm_or_zero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeartRate {
    /// Fewer than two beats were detected; no estimate is available
    NoEstimate,
    /// Estimated beats per minute (rounded)
    Bpm(u32),
}

impl HeartRate {
    /// True when an estimate is available
    pub fn is_estimate(&self) -> bool {
        matches!(self, HeartRate::Bpm(_))
    }

    /// The estimate, or the legacy 0 sentinel when unavailable
    pub fn bpm_or_zero(&self) -> u32 {
        match self {
            HeartRate::Bpm(v) => *v,
            HeartRate::NoEstimate => 0,
        }
    }
}

/// One charted point of the processed trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Seconds from the start of the raw recording
    pub time: f64,
    /// Processed amplitude
    pub amplitude: f64,
}

/// Everything the surrounding application consumes for one recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingAnalysis {
    /// Heart-rate estimate
    pub heart_rate: HeartRate,
    /// Downsampled processed trace for charting
    pub chart: Vec<ChartPoint>,
    /// Processing metadata
    pub metadata: AnalysisMetadata,
}

/// Processing metadata attached to each analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Raw capture duration in seconds
    pub duration_seconds: f64,
    /// Capture sample rate in Hz
    pub sample_rate: u32,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
    /// Version of the processing pipeline
    pub algorithm_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bpm_or_zero_sentinel() {
        assert_eq!(HeartRate::NoEstimate.bpm_or_zero(), 0);
        assert_eq!(HeartRate::Bpm(72).bpm_or_zero(), 72);
        assert!(!HeartRate::NoEstimate.is_estimate());
        assert!(HeartRate::Bpm(0).is_estimate());
    }

    #[test]
    fn test_heart_rate_serde_round_trip() {
        let json = serde_json::to_string(&HeartRate::Bpm(72)).unwrap();
        let back: HeartRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HeartRate::Bpm(72));
    }
}
