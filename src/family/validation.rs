//! family::validation — shared input guards for family operations.
//!
//! Purpose
//! -------
//! Centralize the argument checks shared by the link and binomial routines
//! so that every operation rejects empty vectors and mis-sized recycled
//! vectors with the same error variants and messages.
//!
//! Key behaviors
//! -------------
//! - [`validate_nonempty`] enforces the "nonempty numeric vector" contract
//!   of the link functions.
//! - [`validate_recycle_len`] enforces the "length 1 or length N" contract
//!   of the binomial weight and mean vectors.
//! - [`validate_unit_response`] enforces `0 ≤ y ≤ 1` on binomial
//!   responses before starting values or likelihood terms are computed.
//! - [`recycled_at`] reads element `i` of a vector that has passed
//!   [`validate_recycle_len`], broadcasting a length-1 vector.
//!
//! Conventions
//! -----------
//! - Validation never allocates and never logs; callers decide whether a
//!   failure deserves a log record.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise every branch, including the zero-length case where
//!   `len == N == 0` is accepted.

use ndarray::ArrayView1;

use crate::family::errors::{FamilyError, FamilyResult};

/// Reject an empty vector with `FamilyError::EmptyVector { arg }`.
pub fn validate_nonempty(arg: &'static str, values: ArrayView1<'_, f64>) -> FamilyResult<()> {
    if values.is_empty() {
        return Err(FamilyError::EmptyVector { arg });
    }
    Ok(())
}

/// Check that a recyclable vector has length 1 or `expected`.
///
/// Parameters
/// ----------
/// - `arg`: argument name used in the error message.
/// - `len`: length of the recyclable vector.
/// - `expected`: number of observations `N`.
///
/// Returns
/// -------
/// `FamilyResult<()>`
///   - `Ok(())` if `len == 1` or `len == expected`.
///   - `Err(FamilyError::RecycleLengthMismatch { .. })` otherwise.
pub fn validate_recycle_len(arg: &'static str, len: usize, expected: usize) -> FamilyResult<()> {
    if len != expected && len != 1 {
        return Err(FamilyError::RecycleLengthMismatch { arg, len, expected });
    }
    Ok(())
}

/// Reject the first response outside `[0, 1]` (NaN included) with
/// `FamilyError::ResponseOutOfRange { index, value }`.
pub fn validate_unit_response(y: ArrayView1<'_, f64>) -> FamilyResult<()> {
    if let Some((index, &value)) = y.iter().enumerate().find(|&(_, v)| !(0.0..=1.0).contains(v)) {
        return Err(FamilyError::ResponseOutOfRange { index, value });
    }
    Ok(())
}

/// Element `i` of a recycled vector: `values[i]` when it has more than one
/// element, otherwise `values[0]`.
///
/// Callers must have validated the length with [`validate_recycle_len`];
/// an index past the end panics like any other out-of-bounds access.
#[inline]
pub fn recycled_at(values: ArrayView1<'_, f64>, i: usize) -> f64 {
    if values.len() > 1 { values[i] } else { values[0] }
}
