//! Saturation guards for the inverse logit and its derivative.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the two numbers that control
//! saturation on the linear-predictor scale: the symmetric threshold beyond
//! which `exp` is no longer evaluated, and the floor substituted for the
//! exponential (its reciprocal serving as the ceiling).
//!
//! Key behaviors
//! -------------
//! - [`SaturationGuards::default`] reproduces the fixed constants
//!   `THRESH = 30` and `DOUBLE_EPS`.
//! - [`SaturationGuards::new`] accepts custom values and rejects
//!   configurations that would break the `(0, 1)` range guarantee of the
//!   inverse link.
//!
//! Invariants & assumptions
//! ------------------------
//! - `threshold` is finite and `> 0`.
//! - `floor` is finite and `0 < floor < 1`, so `ceiling = 1 / floor > 1`.
//! - With these invariants `floor / (1 + floor)` and
//!   `ceiling / (1 + ceiling)` both lie strictly inside `(0, 1)`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the default values, acceptance of a custom pair and
//!   each rejection branch.

use crate::{
    family::errors::{FamilyError, FamilyResult},
    numerical_stability::{DOUBLE_EPS, THRESH},
};

/// SaturationGuards — threshold and floor for guarded exponentials.
///
/// Fields
/// ------
/// - `threshold`: `f64`
///   Linear-predictor magnitude beyond which the exponential saturates.
/// - `floor`: `f64`
///   Value substituted for `exp(eta)` when `eta < -threshold`, and for the
///   derivative of the inverse link whenever `|eta| > threshold`.
///
/// Invariants
/// ----------
/// - `threshold` finite, `> 0`.
/// - `floor` finite, in `(0, 1)`.
///
/// Notes
/// -----
/// - The type is `Copy`; pass it by value.
/// - Fields are crate-private: outside the crate, [`SaturationGuards::new`]
///   and `Default` are the only constructors, so the invariants above always
///   hold for a value a caller can obtain. Read them through
///   [`SaturationGuards::threshold`] and [`SaturationGuards::floor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationGuards {
    /// Symmetric saturation bound on the linear predictor.
    pub(crate) threshold: f64,
    /// Lower saturation value; `1 / floor` is the upper one.
    pub(crate) floor: f64,
}

impl SaturationGuards {
    /// Construct validated guards.
    ///
    /// Errors
    /// ------
    /// - `FamilyError::InvalidSaturationGuards` when `threshold` is not finite
    ///   or not positive, or when `floor` is not finite or outside `(0, 1)`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_glm_family::family::guards::SaturationGuards;
    /// let guards = SaturationGuards::new(20.0, 1e-10).unwrap();
    /// assert!((guards.ceiling() - 1e10).abs() < 1e-3);
    ///
    /// assert!(SaturationGuards::new(0.0, 1e-10).is_err());
    /// ```
    pub fn new(threshold: f64, floor: f64) -> FamilyResult<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(FamilyError::InvalidSaturationGuards {
                threshold,
                floor,
                reason: "threshold must be finite and strictly positive.",
            });
        }

        if !floor.is_finite() || floor <= 0.0 || floor >= 1.0 {
            return Err(FamilyError::InvalidSaturationGuards {
                threshold,
                floor,
                reason: "floor must be finite and strictly inside (0, 1).",
            });
        }

        Ok(SaturationGuards { threshold, floor })
    }

    /// Symmetric saturation bound on the linear predictor.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Lower saturation value, strictly inside `(0, 1)`.
    #[inline]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Upper saturation value, `1 / floor`.
    #[inline]
    pub fn ceiling(&self) -> f64 {
        1.0 / self.floor
    }

    /// Whether `eta` falls outside `[-threshold, threshold]`.
    #[inline]
    pub fn is_saturated(&self, eta: f64) -> bool {
        eta > self.threshold || eta < -self.threshold
    }
}

impl Default for SaturationGuards {
    fn default() -> Self {
        SaturationGuards { threshold: THRESH, floor: DOUBLE_EPS }
    }
}
