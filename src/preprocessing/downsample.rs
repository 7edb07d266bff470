//! Chart decimation

use crate::error::ProcessingError;

/// Keep every `factor`-th sample, preserving order
///
/// Purely a rendering aid to bound the number of charted points; the
/// analytical pipeline never sees decimated data. Output length is
/// `ceil(len / factor)` and `out[i] == data[i * factor]`.
///
/// # Errors
///
/// Returns `ProcessingError::InvalidInput` for a zero factor.
pub fn downsample(data: &[f64], factor: usize) -> Result<Vec<f64>, ProcessingError> {
    if factor == 0 {
        return Err(ProcessingError::InvalidInput(
            "Downsample factor must be > 0".to_string(),
        ));
    }

    Ok(data.iter().step_by(factor).copied().collect())
}
