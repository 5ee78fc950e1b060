//! numerical_stability — saturation constants and scalar kernels for the
//! logit/binomial family.
//!
//! Purpose
//! -------
//! Collect the small scalar building blocks that the vector operations in
//! [`crate::family`] are assembled from. Keeping them here centralizes the
//! saturation thresholds and the zero/boundary conventions so every vector
//! routine applies the same numeric policy.
//!
//! Key behaviors
//! -------------
//! - Expose the saturation constants [`THRESH`], [`MTHRESH`], [`DOUBLE_EPS`]
//!   and [`INVEPS`] as compile-time constants.
//! - Provide the odds helpers [`ratio_over_complement`] (`x / (1 - x)`, with
//!   a domain check) and [`ratio_over_complement_additive`] (`x / (1 + x)`).
//! - Provide [`saturated_exp`], which never evaluates `exp` outside
//!   `[-threshold, threshold]`, and [`y_log_y`], the `y · ln(y / μ)` term
//!   with the `0 · ln 0 = 0` convention.
//!
//! Invariants & assumptions
//! ------------------------
//! - `ratio_over_complement` rejects only `x < 0` or `x > 1`; the endpoints
//!   and NaN pass through under IEEE semantics.
//! - `saturated_exp` returns a value in `[floor, 1 / floor]` for every
//!   non-NaN input.
//!
//! Conventions
//! -----------
//! - Scalar helpers take and return plain `f64`; the only fallible helper
//!   reports the offending value through [`ScalarDomainError`], which the
//!   vector layer enriches with the element index.
//! - This module never logs and performs no I/O.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover the boundary behavior of the
//!   odds helpers, both saturation branches of `saturated_exp`, and the
//!   zero convention of `y_log_y`.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    DOUBLE_EPS, INVEPS, MTHRESH, ScalarDomainError, THRESH, ratio_over_complement,
    ratio_over_complement_additive, saturated_exp, y_log_y,
};
