//! Link-function interface used by the family objects.
//!
//! - [`LinkFunction`]: trait a link implements to plug into
//!   [`Binomial`](crate::family::binomial::Binomial).
//!
//! Convention: `link` maps the mean scale to the linear-predictor scale,
//! `linkinv` maps back, and `mu_eta` is `dμ/dη` evaluated at `η`. All three
//! take a view and return a freshly allocated vector of the same length.
use ndarray::{Array1, ArrayView1};

use crate::family::errors::FamilyResult;

/// Vector-valued link function `g` with inverse `g⁻¹` and derivative of the
/// inverse.
///
/// Required:
/// - `name() -> &'static str`: short identifier (e.g. `"logit"`).
/// - `link(mu)`: `g(μ)`. Errors for empty input or values outside the
///   link's domain.
/// - `linkinv(eta)`: `g⁻¹(η)`. Must not fail on finite input beyond the
///   nonempty check.
/// - `mu_eta(eta)`: `dμ/dη`. Same contract as `linkinv`.
///
/// Optional:
/// - `valid_eta(eta) -> bool`: whether a linear predictor is admissible.
///   Defaults to `true`.
pub trait LinkFunction {
    // Required methods
    fn name(&self) -> &'static str;
    fn link(&self, mu: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>>;
    fn linkinv(&self, eta: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>>;
    fn mu_eta(&self, eta: ArrayView1<'_, f64>) -> FamilyResult<Array1<f64>>;

    // Optional methods
    fn valid_eta(&self, _eta: ArrayView1<'_, f64>) -> bool {
        true
    }
}
