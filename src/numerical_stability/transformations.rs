//! Numerical stability utilities for the logit link.
//!
//! The helpers here evaluate odds ratios and exponentials in a guarded
//! form so that the vector routines never produce overflow, underflow to an
//! exact zero, or `log(0)` on the linear-predictor scale.
//!
//! # Provided items
//! - [`THRESH`] / [`MTHRESH`]: saturation bounds on the linear predictor.
//! - [`DOUBLE_EPS`] / [`INVEPS`]: lower and upper saturation values.
//! - [`ratio_over_complement`]: `x / (1 - x)` on `[0, 1]`.
//! - [`ratio_over_complement_additive`]: `x / (1 + x)`.
//! - [`saturated_exp`]: `exp(x)` clamped outside `[-threshold, threshold]`.
//! - [`y_log_y`]: `y · ln(y / μ)` with `0 · ln(0 / μ) = 0`.

/// Upper saturation bound on the linear predictor.
pub const THRESH: f64 = 30.0;

/// Lower saturation bound on the linear predictor.
pub const MTHRESH: f64 = -30.0;

/// Machine epsilon for `f64`; the lower saturation floor.
pub const DOUBLE_EPS: f64 = f64::EPSILON;

/// Reciprocal of machine epsilon; the upper saturation value.
pub const INVEPS: f64 = 1.0 / DOUBLE_EPS;

/// A scalar fell outside the closed unit interval.
///
/// Carries only the offending value; callers that iterate over a vector
/// attach the element index when converting into their own error type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarDomainError {
    pub value: f64,
}

impl std::error::Error for ScalarDomainError {}

impl std::fmt::Display for ScalarDomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Value {} out of range (0, 1)", self.value)
    }
}

/// Odds of a probability: `x / (1 - x)`.
///
/// Parameters
/// ----------
/// - `x`: probability-scale input. Must satisfy `0 ≤ x ≤ 1`.
///
/// Returns
/// -------
/// - `Ok(x / (1 - x))`. The endpoints are not rejected: `x = 0` gives `0`
///   and `x = 1` gives `+∞`. A NaN input is returned as NaN.
/// - `Err(ScalarDomainError)` when `x < 0` or `x > 1`.
#[inline]
pub fn ratio_over_complement(x: f64) -> Result<f64, ScalarDomainError> {
    if x < 0.0 || x > 1.0 {
        return Err(ScalarDomainError { value: x });
    }
    Ok(x / (1.0 - x))
}

/// Inverse odds: `x / (1 + x)`. No domain restriction.
#[inline]
pub fn ratio_over_complement_additive(x: f64) -> f64 {
    x / (1.0 + x)
}

/// Exponential with symmetric saturation.
///
/// Returns `floor` for `x < -threshold`, `1 / floor` for `x > threshold`,
/// and `exp(x)` otherwise. The exponential is only ever evaluated on
/// `[-threshold, threshold]`, so with the default bounds the result lies in
/// `[DOUBLE_EPS, INVEPS]`.
#[inline]
pub fn saturated_exp(x: f64, threshold: f64, floor: f64) -> f64 {
    if x < -threshold {
        floor
    } else if x > threshold {
        1.0 / floor
    } else {
        x.exp()
    }
}

/// `y · ln(y / μ)`, defined as `0` when `y == 0`.
#[inline]
pub fn y_log_y(y: f64, mu: f64) -> f64 {
    if y != 0.0 { y * (y / mu).ln() } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The closed-interval domain check of `ratio_over_complement`,
    //   including the IEEE pass-through at 0, 1 and NaN.
    // - Both saturation branches and the interior branch of `saturated_exp`.
    // - The zero convention of `y_log_y`.
    //
    // They intentionally DO NOT cover:
    // - Vector-level error reporting; see `family::logit` and
    //   `family::binomial`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the odds formula on interior points.
    //
    // Given
    // -----
    // - x ∈ {0.25, 0.5, 0.8}.
    //
    // Expect
    // ------
    // - x / (1 - x) ∈ {1/3, 1, 4}.
    fn ratio_over_complement_interior_matches_formula() {
        // Arrange
        let cases = [(0.25, 1.0 / 3.0), (0.5, 1.0), (0.8, 4.0)];

        for (x, expected) in cases {
            // Act
            let got = ratio_over_complement(x).unwrap();

            // Assert
            assert_relative_eq!(got, expected, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure values strictly outside [0, 1] are rejected with the offending
    // value as payload.
    //
    // Given
    // -----
    // - x = -0.1 and x = 1.1.
    //
    // Expect
    // ------
    // - `Err(ScalarDomainError { value: x })` in both cases.
    fn ratio_over_complement_outside_unit_interval_is_rejected() {
        for x in [-0.1, 1.1] {
            // Act
            let result = ratio_over_complement(x);

            // Assert
            assert_eq!(result, Err(ScalarDomainError { value: x }));
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin down the endpoint pass-through: 0 and 1 are accepted and produce
    // 0 and +∞; NaN is returned unchanged.
    //
    // Given
    // -----
    // - x ∈ {0.0, 1.0, NaN}.
    //
    // Expect
    // ------
    // - `Ok(0.0)`, `Ok(+∞)`, `Ok(NaN)`.
    fn ratio_over_complement_endpoints_pass_through() {
        // Act / Assert
        assert_eq!(ratio_over_complement(0.0), Ok(0.0));
        assert_eq!(ratio_over_complement(1.0), Ok(f64::INFINITY));
        assert!(ratio_over_complement(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn ratio_over_complement_additive_inverts_odds() {
        // Arrange
        let p = 0.3;
        let odds = ratio_over_complement(p).unwrap();

        // Act
        let back = ratio_over_complement_additive(odds);

        // Assert
        assert_relative_eq!(back, p, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify the three branches of `saturated_exp` under the default bounds.
    //
    // Given
    // -----
    // - x ∈ {-31, 31, 2}.
    //
    // Expect
    // ------
    // - DOUBLE_EPS, INVEPS, and exp(2) respectively.
    fn saturated_exp_clamps_outside_threshold() {
        // Act / Assert
        assert_eq!(saturated_exp(-31.0, THRESH, DOUBLE_EPS), DOUBLE_EPS);
        assert_eq!(saturated_exp(31.0, THRESH, DOUBLE_EPS), INVEPS);
        assert_relative_eq!(saturated_exp(2.0, THRESH, DOUBLE_EPS), 2.0_f64.exp());
    }

    #[test]
    // Purpose
    // -------
    // The thresholds themselves belong to the interior branch.
    //
    // Given
    // -----
    // - x = ±THRESH.
    //
    // Expect
    // ------
    // - exp(±30), not the saturation values.
    fn saturated_exp_threshold_is_inclusive_interior() {
        assert_eq!(saturated_exp(THRESH, THRESH, DOUBLE_EPS), THRESH.exp());
        assert_eq!(saturated_exp(MTHRESH, THRESH, DOUBLE_EPS), MTHRESH.exp());
    }

    #[test]
    fn y_log_y_uses_zero_convention() {
        // Act / Assert
        assert_eq!(y_log_y(0.0, 0.5), 0.0);
        assert_eq!(y_log_y(0.0, 0.0), 0.0);
        assert_relative_eq!(y_log_y(1.0, 0.5), 2.0_f64.ln(), epsilon = 1e-15);
        assert_relative_eq!(y_log_y(0.4, 0.2), 0.4 * 2.0_f64.ln(), epsilon = 1e-15);
    }

    #[test]
    fn inveps_is_reciprocal_of_machine_epsilon() {
        assert_eq!(INVEPS * DOUBLE_EPS, 1.0);
        assert_eq!(MTHRESH, -THRESH);
    }
}
