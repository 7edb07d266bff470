//! DC offset removal

/// Subtract the arithmetic mean from every sample
///
/// An empty buffer is returned as-is.
pub fn remove_dc_offset(data: &[f64]) -> Vec<f64> {
    if data.is_empty() {
        return Vec::new();
    }

    let mean = data.iter().sum::<f64>() / data.len() as f64;
    data.iter().map(|&v| v - mean).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_constant_bias() {
        let data: Vec<f64> = (0..100).map(|i| 0.25 + (i as f64 * 0.3).sin()).collect();
        let out = remove_dc_offset(&data);
        let mean = out.iter().sum::<f64>() / out.len() as f64;
        assert!(mean.abs() < 1e-12);
    }

    #[test]
    fn test_empty_passthrough() {
        assert!(remove_dc_offset(&[]).is_empty());
    }
}
