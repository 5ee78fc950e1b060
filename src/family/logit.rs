//! family::logit — the logit link, its saturated inverse, and `dμ/dη`.
//!
//! Purpose
//! -------
//! Implement the three vector transforms of the logit link used by IRLS:
//! `g(μ) = ln(μ / (1 - μ))`, `g⁻¹(η) = e^η / (1 + e^η)` and
//! `dμ/dη = e^η / (1 + e^η)²`, with saturation on the linear-predictor
//! scale so that no exponential is ever evaluated on an unbounded argument.
//!
//! Key behaviors
//! -------------
//! - [`LogitLink`] carries a [`SaturationGuards`] and implements
//!   [`LinkFunction`].
//! - The free functions [`logit_link`], [`logit_linkinv`] and
//!   [`logit_mu_eta`] apply the default guards (`THRESH = 30`,
//!   `DOUBLE_EPS`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length always equals input length; a fresh vector is returned
//!   and the input is never touched.
//! - `logit_link` fails atomically: the first out-of-range element aborts
//!   the call with its index and value, and no partial result is returned.
//! - `linkinv` stays inside `(floor / (1 + floor), ceiling / (1 + ceiling))`
//!   for every non-NaN input, since [`SaturationGuards`] can only be built
//!   with `floor` in `(0, 1)`; `mu_eta` returns exactly `floor` whenever
//!   `|η| > threshold`.
//!
//! Conventions
//! -----------
//! - Saturation is a numerical policy, not an error; it is reported only as
//!   a `log::trace!` summary, which is not computed unless trace logging is
//!   enabled.
//!
//! Testing notes
//! -------------
//! - Unit tests cover length preservation, the link/inverse round trip,
//!   both saturation boundaries, the exact derivative floor, the domain
//!   errors of the forward link, and custom guards.

use ndarray::{Array1, ArrayView1};

use crate::{
    family::{
        errors::{FamilyError, FamilyResult},
        guards::SaturationGuards,
        traits::LinkFunction,
        validation::validate_nonempty,
    },
    numerical_stability::{ratio_over_complement, ratio_over_complement_additive, saturated_exp},
};

/// LogitLink — the canonical link of the binomial family.
///
/// Construct with [`LogitLink::default`] for the standard thresholds or
/// [`LogitLink::with_guards`] for custom ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LogitLink {
    guards: SaturationGuards,
}

impl LogitLink {
    pub fn with_guards(guards: SaturationGuards) -> Self {
        LogitLink { guards }
    }

    pub fn guards(&self) -> SaturationGuards {
        self.guards
    }

    fn saturated_count(&self, eta: ArrayView1<'_, f64>) -> usize {
        eta.iter().filter(|&&e| self.guards.is_saturated(e)).count()
    }
}

impl LinkFunction for LogitLink {
    fn name(&self) -> &'static str {
        "logit"
    }

    /// `ln(μ / (1 - μ))` element-wise.
    ///
    /// Errors
    /// ------
    /// - `FamilyError::EmptyVector` for an empty `mu`.
    /// - `FamilyError::OutOfUnitInterval { index, value }` for the first
    ///   element with `μ < 0` or `μ > 1`. Exactly `0` and `1` map to `-∞` and
    ///   `+∞`.
    fn link(&self, mu: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
        validate_nonempty("mu", mu)?;

        let mut out = Array1::<f64>::zeros(mu.len());
        for (i, (slot, &m)) in out.iter_mut().zip(mu.iter()).enumerate() {
            let odds = ratio_over_complement(m)
                .map_err(|e| FamilyError::OutOfUnitInterval { index: i, value: e.value })?;
            *slot = odds.ln();
        }
        Ok(out)
    }

    /// Saturated inverse logit.
    ///
    /// `tmp = floor` for `η < -threshold`, `1 / floor` for `η > threshold`,
    /// `e^η` otherwise; returns `tmp / (1 + tmp)`.
    fn linkinv(&self, eta: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
        validate_nonempty("eta", eta)?;

        let SaturationGuards { threshold, floor } = self.guards;
        log::trace!(
            "logit linkinv: {} of {} linear predictors saturated",
            self.saturated_count(eta),
            eta.len()
        );
        Ok(eta.mapv(|e| ratio_over_complement_additive(saturated_exp(e, threshold, floor))))
    }

    /// `e^η / (1 + e^η)²`, or exactly `floor` when `|η| > threshold`.
    fn mu_eta(&self, eta: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
        validate_nonempty("eta", eta)?;

        let guards = self.guards;
        log::trace!(
            "logit mu_eta: {} of {} linear predictors floored",
            self.saturated_count(eta),
            eta.len()
        );
        Ok(eta.mapv(|e| {
            if guards.is_saturated(e) {
                guards.floor
            } else {
                let exp_e = e.exp();
                let opexp = 1.0 + exp_e;
                exp_e / (opexp * opexp)
            }
        }))
    }
}

/// Logit link `ln(μ / (1 - μ))` with the default guards.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_glm_family::family::logit::logit_link;
/// let eta = logit_link(array![0.5, 0.75].view()).unwrap();
/// assert_eq!(eta[0], 0.0);
/// assert!((eta[1] - 3.0_f64.ln()).abs() < 1e-12);
///
/// assert!(logit_link(array![1.1].view()).is_err());
/// ```
pub fn logit_link(mu: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
    LogitLink::default().link(mu)
}

/// Saturated inverse logit with the default guards.
pub fn logit_linkinv(eta: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
    LogitLink::default().linkinv(eta)
}

/// Derivative of the inverse logit with the default guards.
pub fn logit_mu_eta(eta: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
    LogitLink::default().mu_eta(eta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        family::errors::ErrorKind,
        numerical_stability::{DOUBLE_EPS, INVEPS},
    };
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Length preservation of all three transforms.
    // - The `linkinv(link(μ)) ≈ μ` round trip on interior points.
    // - Saturation boundaries of `linkinv` and the exact floor of `mu_eta`.
    // - Domain and empty-vector errors.
    // - Behavior under custom `SaturationGuards`.
    //
    // They intentionally DO NOT cover:
    // - Host-vector type checks; see `family::host`.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-10;

    #[test]
    // Purpose
    // -------
    // Verify that every transform returns a vector of the input length.
    //
    // Given
    // -----
    // - A five-element vector inside (0, 1).
    //
    // Expect
    // ------
    // - All three outputs have length 5.
    fn transforms_preserve_length() {
        // Arrange
        let v = array![0.1, 0.2, 0.5, 0.7, 0.9];

        // Act
        let a = logit_link(v.view()).unwrap();
        let b = logit_linkinv(v.view()).unwrap();
        let c = logit_mu_eta(v.view()).unwrap();

        // Assert
        assert_eq!(a.len(), v.len());
        assert_eq!(b.len(), v.len());
        assert_eq!(c.len(), v.len());
    }

    #[test]
    // Purpose
    // -------
    // Check that the inverse link undoes the link away from saturation.
    //
    // Given
    // -----
    // - μ on a grid from 0.001 to 0.999.
    //
    // Expect
    // ------
    // - |linkinv(link(μ)) - μ| < 1e-10 element-wise.
    fn linkinv_inverts_link_on_interior_grid() {
        // Arrange
        let mu = Array1::linspace(0.001, 0.999, 57);

        // Act
        let eta = logit_link(mu.view()).unwrap();
        let back = logit_linkinv(eta.view()).unwrap();

        // Assert
        for (&m, &b) in mu.iter().zip(back.iter()) {
            assert_relative_eq!(b, m, epsilon = TOL);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the saturated values of the inverse link just beyond ±30.
    //
    // Given
    // -----
    // - η = [31, -31, 1e308, -1e308].
    //
    // Expect
    // ------
    // - INVEPS/(1+INVEPS) for large positive η and
    //   DOUBLE_EPS/(1+DOUBLE_EPS) for large negative η, all finite and
    //   strictly inside (0, 1).
    fn linkinv_saturates_beyond_threshold() {
        // Arrange
        let eta = array![31.0, -31.0, 1e308, -1e308];

        // Act
        let mu = logit_linkinv(eta.view()).unwrap();

        // Assert
        let upper = INVEPS / (1.0 + INVEPS);
        let lower = DOUBLE_EPS / (1.0 + DOUBLE_EPS);
        assert_eq!(mu[0], upper);
        assert_eq!(mu[1], lower);
        assert_eq!(mu[2], upper);
        assert_eq!(mu[3], lower);
        for &m in mu.iter() {
            assert!(m.is_finite() && m > 0.0 && m < 1.0, "out of (0, 1): {m}");
        }
    }

    #[test]
    fn linkinv_handles_infinite_predictors() {
        // Act
        let mu = logit_linkinv(array![f64::INFINITY, f64::NEG_INFINITY].view()).unwrap();

        // Assert
        assert!(mu[0] < 1.0 && mu[0] > 0.5);
        assert!(mu[1] > 0.0 && mu[1] < 0.5);
    }

    #[test]
    // Purpose
    // -------
    // The derivative is floored to machine epsilon exactly outside the
    // saturation range, and matches the closed form inside it.
    //
    // Given
    // -----
    // - η = [50, -50, 0, 2].
    //
    // Expect
    // ------
    // - DOUBLE_EPS, DOUBLE_EPS, 0.25, e²/(1+e²)².
    fn mu_eta_floors_outside_threshold() {
        // Arrange
        let eta = array![50.0, -50.0, 0.0, 2.0];

        // Act
        let d = logit_mu_eta(eta.view()).unwrap();

        // Assert
        assert_eq!(d[0], DOUBLE_EPS);
        assert_eq!(d[1], DOUBLE_EPS);
        assert_relative_eq!(d[2], 0.25, epsilon = TOL);
        let e2 = 2.0_f64.exp();
        assert_relative_eq!(d[3], e2 / ((1.0 + e2) * (1.0 + e2)), epsilon = TOL);
    }

    #[test]
    fn mu_eta_equals_variance_of_linkinv_in_interior() {
        // Arrange
        let eta = Array1::linspace(-8.0, 8.0, 33);

        // Act
        let mu = logit_linkinv(eta.view()).unwrap();
        let d = logit_mu_eta(eta.view()).unwrap();

        // Assert
        for (&m, &di) in mu.iter().zip(d.iter()) {
            assert_relative_eq!(di, m * (1.0 - m), epsilon = TOL);
        }
    }

    #[test]
    // Purpose
    // -------
    // Values outside [0, 1] abort the forward link with a domain error
    // naming the first offending element.
    //
    // Given
    // -----
    // - [-0.1], [1.1], and [0.5, 1.2, -3.0].
    //
    // Expect
    // ------
    // - `OutOfUnitInterval` with index 0, 0 and 1 respectively.
    fn link_rejects_values_outside_unit_interval() {
        // Act / Assert
        assert_eq!(
            logit_link(array![-0.1].view()),
            Err(FamilyError::OutOfUnitInterval { index: 0, value: -0.1 })
        );
        assert_eq!(
            logit_link(array![1.1].view()),
            Err(FamilyError::OutOfUnitInterval { index: 0, value: 1.1 })
        );
        let err = logit_link(array![0.5, 1.2, -3.0].view()).unwrap_err();
        assert_eq!(err, FamilyError::OutOfUnitInterval { index: 1, value: 1.2 });
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn link_passes_endpoints_through_as_infinities() {
        // Act
        let eta = logit_link(array![0.0, 1.0].view()).unwrap();

        // Assert
        assert_eq!(eta[0], f64::NEG_INFINITY);
        assert_eq!(eta[1], f64::INFINITY);
    }

    #[test]
    fn empty_input_is_an_argument_error() {
        // Arrange
        let empty: Array1<f64> = Array1::zeros(0);

        // Act / Assert
        assert_eq!(logit_link(empty.view()), Err(FamilyError::EmptyVector { arg: "mu" }));
        assert_eq!(logit_linkinv(empty.view()), Err(FamilyError::EmptyVector { arg: "eta" }));
        assert_eq!(logit_mu_eta(empty.view()), Err(FamilyError::EmptyVector { arg: "eta" }));
    }

    #[test]
    // Purpose
    // -------
    // Custom guards move the saturation point and the substituted values.
    //
    // Given
    // -----
    // - threshold = 5, floor = 1e-3, and η = [6, -6, 4].
    //
    // Expect
    // ------
    // - linkinv(6) = 1000/1001, linkinv(-6) = 0.001/1.001,
    //   mu_eta(±6) = 1e-3, η = 4 evaluated exactly.
    fn custom_guards_change_saturation_point() {
        // Arrange
        let guards = SaturationGuards::new(5.0, 1e-3).unwrap();
        let link = LogitLink::with_guards(guards);
        let eta = array![6.0, -6.0, 4.0];

        // Act
        let mu = link.linkinv(eta.view()).unwrap();
        let d = link.mu_eta(eta.view()).unwrap();

        // Assert
        let ceiling = guards.ceiling();
        assert_relative_eq!(mu[0], ceiling / (1.0 + ceiling), epsilon = 1e-15);
        assert_relative_eq!(mu[1], 1e-3 / (1.0 + 1e-3), epsilon = 1e-15);
        assert_relative_eq!(mu[2], 4.0_f64.exp() / (1.0 + 4.0_f64.exp()), epsilon = TOL);
        assert_eq!(d[0], 1e-3);
        assert_eq!(d[1], 1e-3);
        assert!(d[2] > 1e-3);
    }

    #[test]
    fn logit_link_is_usable_as_trait_object() {
        // Arrange
        let link: Box<dyn LinkFunction> = Box::new(LogitLink::default());

        // Act / Assert
        assert_eq!(link.name(), "logit");
        assert!(link.valid_eta(array![-1e6, 0.0, 1e6].view()));
        assert_eq!(link.link(array![0.5].view()).unwrap()[0], 0.0);
    }
}
