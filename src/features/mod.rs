//! Feature extraction
//!
//! Peak detection over a processed segment and the heart-rate estimate
//! derived from peak spacing.

pub mod heart_rate;
pub mod peaks;

pub use heart_rate::estimate_heart_rate;
pub use peaks::find_peaks;
