//! Buffer conditioning stages
//!
//! Everything between the raw capture and the feature extractors: DC
//! removal, edge tapering, transient trimming, segment extraction, and
//! chart decimation. Each stage consumes a slice and produces a fresh
//! buffer; no stage mutates its input.

pub mod dc_offset;
pub mod downsample;
pub mod segment;
pub mod window;

pub use dc_offset::remove_dc_offset;
pub use downsample::downsample;
pub use segment::extract_heart_segment;
pub use window::{apply_hanning_taper, trim_transients};
