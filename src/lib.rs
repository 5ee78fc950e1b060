//! rust_glm_family — numerically guarded logit/binomial kernels for GLM fitting.
//!
//! Purpose
//! -------
//! Serve as the crate root for the element-wise transforms a generalized
//! linear model driver needs from the binomial family: the logit link, its
//! saturated inverse, the derivative of the inverse, and the binomial
//! deviance residuals, together with the family-level helpers built on
//! them.
//!
//! Key behaviors
//! -------------
//! - Re-export the two modules that make up the public surface:
//!   [`numerical_stability`] (constants and scalar kernels) and [`family`]
//!   (vector operations, family object, host entry points).
//! - Keep every transform pure: inputs are borrowed `ndarray` views and
//!   results are freshly allocated vectors.
//!
//! Invariants & assumptions
//! ------------------------
//! - The inverse link and its derivative never evaluate `exp` outside
//!   `[-THRESH, THRESH]`; the inverse link therefore stays strictly inside
//!   `(0, 1)` for any non-NaN linear predictor.
//! - There is no global mutable state; the saturation constants are
//!   compile-time constants and custom thresholds are carried by value in
//!   [`family::SaturationGuards`].
//!
//! Conventions
//! -----------
//! - Errors are returned as [`family::FamilyError`] values; the library
//!   never panics on user-facing invalid input.
//! - Logging goes through the `log` facade; the crate installs no logger.
//!
//! Downstream usage
//! ----------------
//! - An IRLS driver typically holds a [`family::Binomial`] and calls
//!   `mustart`, `link`, `linkinv`, `mu_eta`, `variance` and `dev_resids`
//!   on each iteration, aggregating deviance itself.
//! - Bindings to a host statistical environment go through
//!   [`family::host`], which applies the host type checks and coercion
//!   contract before delegating.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules.
//! - `tests/integration_irls_pipeline.rs` fits intercept-only and
//!   single-slope logistic models with a small IRLS loop built from the
//!   public surface.

pub mod family;
pub mod numerical_stability;
