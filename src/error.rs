//! Error types for the heart-sound processing core

use std::fmt;

/// Errors that can occur during recording processing
///
/// Degenerate DSP inputs (buffers too short for a stage's assumptions) are
/// handled by per-stage pass-through policies and never surface here; only
/// unusable caller input and malformed WAV data are hard failures.
#[derive(Debug, Clone)]
pub enum ProcessingError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Malformed or truncated WAV data on decode
    MalformedWav(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ProcessingError::MalformedWav(msg) => write!(f, "Malformed WAV: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}
