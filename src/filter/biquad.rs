//! Biquad filter stage
//!
//! A single Butterworth-style second-order IIR section, the atomic building
//! block of the bandpass cascade. Coefficients are derived via the bilinear
//! transform and held in a small immutable value struct; applying a stage is
//! a pure function from one buffer to a new one.

/// Filter stage type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Attenuates content below the cutoff
    HighPass,
    /// Attenuates content above the cutoff
    LowPass,
}

/// Coefficients of one second-order section
///
/// Valid only for the sample rate they were derived at; re-derive when the
/// recording rate changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    /// Feedforward coefficient for x[n]
    pub a0: f64,
    /// Feedforward coefficient for x[n-1]
    pub a1: f64,
    /// Feedforward coefficient for x[n-2]
    pub a2: f64,
    /// Feedback coefficient for y[n-1]
    pub b1: f64,
    /// Feedback coefficient for y[n-2]
    pub b2: f64,
}

impl BiquadCoeffs {
    /// Derive coefficients for a stage via the bilinear transform
    ///
    /// `omega = tan(pi * fc / fs)`, `k = 1 / (1 + sqrt(2)*omega + omega^2)`.
    /// Both stage types share the feedback terms; only the feedforward side
    /// differs.
    pub fn new(kind: StageKind, cutoff_hz: f64, sample_rate: u32) -> Self {
        let omega = (std::f64::consts::PI * cutoff_hz / sample_rate as f64).tan();
        let omega2 = omega * omega;
        let k = 1.0 / (1.0 + std::f64::consts::SQRT_2 * omega + omega2);

        let (a0, a1, a2) = match kind {
            StageKind::HighPass => (k, -2.0 * k, k),
            StageKind::LowPass => {
                let a0 = k * omega2;
                (a0, 2.0 * a0, a0)
            }
        };

        Self {
            a0,
            a1,
            a2,
            b1: 2.0 * k * (omega2 - 1.0),
            b2: k * (1.0 - std::f64::consts::SQRT_2 * omega + omega2),
        }
    }

    /// High-pass section at `cutoff_hz`
    pub fn high_pass(cutoff_hz: f64, sample_rate: u32) -> Self {
        Self::new(StageKind::HighPass, cutoff_hz, sample_rate)
    }

    /// Low-pass section at `cutoff_hz`
    pub fn low_pass(cutoff_hz: f64, sample_rate: u32) -> Self {
        Self::new(StageKind::LowPass, cutoff_hz, sample_rate)
    }
}

/// Apply one biquad section to a buffer
///
/// Direct-form recurrence for `n >= 2`:
/// `y[n] = a0*x[n] + a1*x[n-1] + a2*x[n-2] - b1*y[n-1] - b2*y[n-2]`
///
/// Edge policy: `y[0]` is seeded with the mean of the first 10 input samples
/// (suppresses the startup transient spike a cold filter would produce) and
/// `y[1]` copies `x[1]` verbatim. Inputs shorter than 2 samples are returned
/// unchanged.
pub fn apply_stage(data: &[f64], coeffs: BiquadCoeffs) -> Vec<f64> {
    if data.len() < 2 {
        return data.to_vec();
    }

    let mut out = Vec::with_capacity(data.len());

    // Seed with the leading-sample average; the divisor stays at the
    // nominal 10 even when fewer samples are available.
    let seed: f64 = data.iter().take(10).sum::<f64>() / 10.0;
    out.push(seed);
    out.push(data[1]);

    for n in 2..data.len() {
        let y = coeffs.a0 * data[n] + coeffs.a1 * data[n - 1] + coeffs.a2 * data[n - 2]
            - coeffs.b1 * out[n - 1]
            - coeffs.b2 * out[n - 2];
        out.push(y);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_passthrough() {
        let coeffs = BiquadCoeffs::high_pass(10.0, 44100);

        let empty: Vec<f64> = vec![];
        assert_eq!(apply_stage(&empty, coeffs), empty);

        let one = vec![0.7];
        assert_eq!(apply_stage(&one, coeffs), one);
    }

    #[test]
    fn test_edge_seeding() {
        let coeffs = BiquadCoeffs::low_pass(100.0, 44100);
        let data: Vec<f64> = (0..32).map(|i| (i as f64 * 0.1).sin()).collect();
        let out = apply_stage(&data, coeffs);

        assert_eq!(out.len(), data.len());
        let seed: f64 = data.iter().take(10).sum::<f64>() / 10.0;
        assert_eq!(out[0], seed);
        assert_eq!(out[1], data[1]);
    }

    #[test]
    fn test_highpass_removes_constant_offset() {
        let coeffs = BiquadCoeffs::high_pass(10.0, 1000);
        let data = vec![1.0; 4000];
        let out = apply_stage(&data, coeffs);

        // A constant is pure DC; the tail of the response must decay to ~0.
        let tail = &out[out.len() - 100..];
        for &v in tail {
            assert!(v.abs() < 1e-3, "residual DC: {}", v);
        }
    }

    #[test]
    fn test_lowpass_passes_constant_offset() {
        let coeffs = BiquadCoeffs::low_pass(100.0, 1000);
        let data = vec![0.5; 4000];
        let out = apply_stage(&data, coeffs);

        // DC sits far below the cutoff; the tail must settle at the input level.
        let tail = &out[out.len() - 100..];
        for &v in tail {
            assert!((v - 0.5).abs() < 1e-3, "settled value: {}", v);
        }
    }

    #[test]
    fn test_coefficients_shared_feedback_terms() {
        let hp = BiquadCoeffs::high_pass(25.0, 48000);
        let lp = BiquadCoeffs::low_pass(25.0, 48000);
        assert_eq!(hp.b1, lp.b1);
        assert_eq!(hp.b2, lp.b2);
    }
}
