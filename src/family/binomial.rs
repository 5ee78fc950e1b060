//! family::binomial — binomial deviance residuals and the binomial family.
//!
//! Purpose
//! -------
//! Provide the per-observation binomial unit deviance used by IRLS to track
//! goodness of fit, plus a [`Binomial`] family object that bundles a link
//! with the binomial variance function, validity checks, starting values
//! and the likelihood part of the AIC.
//!
//! Key behaviors
//! -------------
//! - [`binomial_dev_resids`] computes
//!   `2 · wt · (y ln(y/μ) + (1-y) ln((1-y)/(1-μ)))` with `0 · ln 0 = 0`,
//!   broadcasting length-1 `mu` and `wt`.
//! - [`Binomial::variance`], [`Binomial::valid_mu`], [`Binomial::mustart`]
//!   and [`Binomial::aic`] supply the remaining family pieces an IRLS
//!   driver needs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length of the residuals equals `y.len()`.
//! - `mu` and `wt` (and `n` for the AIC) must have length 1 or `y.len()`;
//!   this is checked before any element is computed.
//! - No aggregation is performed by `binomial_dev_resids`; summing the
//!   residuals is the caller's business.
//!
//! Conventions
//! -----------
//! - `y` is a proportion in `[0, 1]` and `wt` the prior weight (number of
//!   trials for proportions).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the scalar cases `y ∈ {0, 1}`, broadcasting against a
//!   manual expansion, the length-mismatch error, and each family helper.

use ndarray::{Array1, ArrayView1};
use statrs::distribution::{Binomial as BinomialDistribution, Discrete};

use crate::{
    family::{
        errors::{FamilyError, FamilyResult},
        logit::LogitLink,
        traits::LinkFunction,
        validation::{
            recycled_at, validate_nonempty, validate_recycle_len, validate_unit_response,
        },
    },
    numerical_stability::y_log_y,
};

/// Tolerance on `wt · y` being a whole number of successes.
const SUCCESS_COUNT_TOL: f64 = 1e-3;

/// Binomial unit deviance per observation.
///
/// Parameters
/// ----------
/// - `y`: observed proportions, length `N`; defines the output length.
/// - `mu`: fitted means, length 1 or `N`.
/// - `wt`: prior weights, length 1 or `N`.
///
/// Returns
/// -------
/// `FamilyResult<Array1<f64>>`
///   - `Ok(r)` with `r.len() == N` and
///     `r[i] = 2 · wt_i · (y_log_y(y_i, μ_i) + y_log_y(1 - y_i, 1 - μ_i))`.
///   - `Err(FamilyError::RecycleLengthMismatch { .. })` if `mu` or `wt` has
///     a length other than 1 or `N`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_glm_family::family::binomial::binomial_dev_resids;
/// let r = binomial_dev_resids(array![1.0].view(), array![0.5].view(), array![1.0].view())
///     .unwrap();
/// assert!((r[0] - 2.0 * 2.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn binomial_dev_resids(
    y: ArrayView1<'_, f64>, mu: ArrayView1<'_, f64>, wt: ArrayView1<'_, f64>,
) -> FamilyResult<Array1<f64>> {
    let n = y.len();
    validate_recycle_len("mu", mu.len(), n)?;
    validate_recycle_len("wt", wt.len(), n)?;

    let resids = y
        .iter()
        .enumerate()
        .map(|(i, &yi)| {
            let mui = recycled_at(mu, i);
            2.0 * recycled_at(wt, i) * (y_log_y(yi, mui) + y_log_y(1.0 - yi, 1.0 - mui))
        })
        .collect::<Array1<f64>>();
    Ok(resids)
}

/// Binomial — the binomial family with a pluggable link.
///
/// Defaults to the canonical [`LogitLink`].
///
/// Notes
/// -----
/// - The link methods (`link`, `linkinv`, `mu_eta`, `valid_eta`) are
///   forwarded so an IRLS driver only needs the family object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Binomial<L: LinkFunction = LogitLink> {
    link: L,
}

impl<L: LinkFunction> Binomial<L> {
    pub fn new(link: L) -> Self {
        Binomial { link }
    }

    pub fn link_function(&self) -> &L {
        &self.link
    }

    pub fn link(&self, mu: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
        self.link.link(mu)
    }

    pub fn linkinv(&self, eta: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
        self.link.linkinv(eta)
    }

    pub fn mu_eta(&self, eta: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
        self.link.mu_eta(eta)
    }

    pub fn valid_eta(&self, eta: ArrayView1<'_, f64>) -> bool {
        self.link.valid_eta(eta)
    }

    /// Variance function `μ (1 - μ)`.
    pub fn variance(&self, mu: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>> {
        validate_nonempty("mu", mu)?;
        Ok(mu.mapv(|m| m * (1.0 - m)))
    }

    /// Whether every mean is finite and strictly inside `(0, 1)`.
    ///
    /// An empty vector is vacuously valid.
    pub fn valid_mu(&self, mu: ArrayView1<'_, f64>) -> bool {
        mu.iter().all(|&m| m.is_finite() && m > 0.0 && m < 1.0)
    }

    /// See [`binomial_dev_resids`].
    pub fn dev_resids(
        &self, y: ArrayView1<'_, f64>, mu: ArrayView1<'_, f64>, wt: ArrayView1<'_, f64>,
    ) -> FamilyResult<Array1<f64>> {
        binomial_dev_resids(y, mu, wt)
    }

    /// Starting means for IRLS: `(wt · y + 0.5) / (wt + 1)`.
    ///
    /// Parameters
    /// ----------
    /// - `y`: observed proportions, each in `[0, 1]`.
    /// - `wt`: prior weights, length 1 or `y.len()`.
    ///
    /// Errors
    /// ------
    /// - `FamilyError::RecycleLengthMismatch` for a mis-sized `wt`.
    /// - `FamilyError::ResponseOutOfRange` for the first `y_i` outside
    ///   `[0, 1]` (NaN included).
    ///
    /// Notes
    /// -----
    /// - Shrinks every start toward 0.5, so the result is strictly inside
    ///   `(0, 1)` for non-negative weights and the link can be evaluated on
    ///   it.
    /// - A non-integer number of successes `wt · y` is allowed but logged at
    ///   `warn` level.
    pub fn mustart(
        &self, y: ArrayView1<'_, f64>, wt: ArrayView1<'_, f64>,
    ) -> FamilyResult<Array1<f64>> {
        let n = y.len();
        validate_recycle_len("wt", wt.len(), n)?;
        validate_unit_response(y)?;

        let non_integer = (0..n)
            .filter(|&i| {
                let successes = recycled_at(wt, i) * y[i];
                (successes - successes.round()).abs() > SUCCESS_COUNT_TOL
            })
            .count();
        if non_integer > 0 {
            log::warn!(
                "non-integer #successes in a binomial glm ({non_integer} of {n} observations)"
            );
        }

        Ok((0..n)
            .map(|i| {
                let w = recycled_at(wt, i);
                (w * y[i] + 0.5) / (w + 1.0)
            })
            .collect())
    }

    /// Likelihood part of the binomial AIC, `-2 · Σ log-likelihood`.
    ///
    /// With `m = n` when any `n_i > 1`, otherwise `m = wt`, returns
    /// `-2 Σ_i (m_i > 0 ? wt_i / m_i : 0) · ln dbinom(round(m_i y_i); round(m_i), μ_i)`.
    /// Observations with `m_i ≤ 0` contribute nothing. The `2 · rank`
    /// penalty is left to the model layer.
    ///
    /// Errors
    /// ------
    /// - `FamilyError::RecycleLengthMismatch` when `n`, `mu` or `wt` has a
    ///   length other than 1 or `y.len()`.
    /// - `FamilyError::ResponseOutOfRange` for the first `y_i` outside
    ///   `[0, 1]` (NaN included), checked before any term is computed.
    /// - `FamilyError::OutOfUnitInterval` for a `μ_i` outside `[0, 1]` on a
    ///   contributing observation.
    pub fn aic(
        &self, y: ArrayView1<'_, f64>, n: ArrayView1<'_, f64>, mu: ArrayView1<'_, f64>,
        wt: ArrayView1<'_, f64>,
    ) -> FamilyResult<f64> {
        let len = y.len();
        validate_recycle_len("n", n.len(), len)?;
        validate_recycle_len("mu", mu.len(), len)?;
        validate_recycle_len("wt", wt.len(), len)?;
        validate_unit_response(y)?;

        let use_trials = n.iter().any(|&t| t > 1.0);
        let mut loglik = 0.0;
        for (i, &yi) in y.iter().enumerate() {
            let wi = recycled_at(wt, i);
            let mi = if use_trials { recycled_at(n, i) } else { wi };
            if mi.is_nan() || mi <= 0.0 {
                continue;
            }

            let mui = recycled_at(mu, i);
            let trials = mi.round() as u64;
            let dist = BinomialDistribution::new(mui, trials)
                .map_err(|_| FamilyError::OutOfUnitInterval { index: i, value: mui })?;
            let successes = (mi * yi).round() as u64;
            loglik += (wi / mi) * dist.ln_pmf(successes);
        }
        Ok(-2.0 * loglik)
    }
}
