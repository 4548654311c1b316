//! Easing curves.

use std::f64::consts::PI;

/// Easing curve applied to a program's normalized progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ease {
    /// Constant velocity (`none` in most animation libraries).
    #[default]
    Linear,
    /// Fast start, quartic settle: `1 - (1 - t)^4`, the `power3.out` curve.
    Power3Out,
    /// Symmetric sine in-out, used for breathing/floating motion.
    SineInOut,
}

impl Ease {
    /// Map progress in `[0, 1]` to eased progress. Input outside the range is clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASES: [Ease; 3] = [Ease::Linear, Ease::Power3Out, Ease::SineInOut];

    #[test]
    fn given_any_ease_when_at_endpoints_then_exact() {
        for ease in EASES {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn given_out_of_range_input_when_applied_then_clamped() {
        for ease in EASES {
            assert!(ease.apply(-0.5).abs() < 1e-12);
            assert!((ease.apply(1.5) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn given_power3_out_when_early_then_ahead_of_linear() {
        assert!(Ease::Power3Out.apply(0.25) > 0.25);
    }

    #[test]
    fn given_power3_out_when_halfway_then_quartic_settle() {
        // 1 - 0.5^4
        assert!((Ease::Power3Out.apply(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn given_sine_in_out_when_halfway_then_half() {
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn given_any_ease_when_sampled_then_monotonic() {
        for ease in EASES {
            let mut last = 0.0;
            for step in 0..=100 {
                let value = ease.apply(f64::from(step) / 100.0);
                assert!(value >= last - 1e-12, "{ease:?} regressed at {step}");
                last = value;
            }
        }
    }
}
