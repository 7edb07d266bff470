//! IIR filtering stages
//!
//! The filter stack is built leaf-up: a single biquad section, a cascaded
//! bandpass made of high-pass/low-pass section pairs, and a zero-phase
//! wrapper that runs the cascade forward and backward so peak positions
//! stay time-aligned with the input.

pub mod biquad;
pub mod cascade;
pub mod zero_phase;

pub use biquad::{apply_stage, BiquadCoeffs, StageKind};
pub use cascade::band_pass;
pub use zero_phase::zero_phase_band_pass;
