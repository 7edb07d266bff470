//! Analysis result types

pub mod result;

pub use result::{AnalysisMetadata, ChartPoint, HeartRate, RecordingAnalysis};
