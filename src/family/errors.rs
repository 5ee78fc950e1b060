//! family::errors — error type and result alias for family operations.
//!
//! Purpose
//! -------
//! Provide the single error enum returned by the link, inverse-link,
//! derivative, deviance-residual and family-level helpers, together with a
//! coarse classification ([`ErrorKind`]) that callers use to decide whether
//! a failure was a malformed argument, a value outside the mathematical
//! domain, or an invalid configuration.
//!
//! Key behaviors
//! -------------
//! - Define [`FamilyResult`] and [`FamilyError`] as the canonical result and
//!   error types for everything under [`crate::family`].
//! - Attach human-readable `Display` messages that name the offending
//!   argument and, where relevant, the element index and value.
//! - Classify every variant via [`FamilyError::kind`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Argument errors are produced before any element is computed; domain
//!   errors are produced mid-loop and abort the whole call.
//! - Values are small and cheap to clone; no variant holds vector data.
//!
//! Conventions
//! -----------
//! - Indices are 0-based.
//! - Argument names in messages use the host-side parameter names
//!   (`"mu"`, `"eta"`, `"wt"`, ...).
//!
//! Testing notes
//! -------------
//! - Unit tests check the classification of each variant and that the
//!   `Display` output embeds its payload.

use crate::family::host::VectorKind;

/// Result alias for family operations that may produce [`FamilyError`].
pub type FamilyResult<T> = Result<T, FamilyError>;

/// Coarse classification of a [`FamilyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input vector: empty, wrong type, or wrong length.
    Argument,
    /// A value lies outside the mathematical domain of the operation.
    Domain,
    /// An invalid numeric configuration was supplied.
    Config,
}

/// Unified error type for the logit/binomial family.
#[derive(Debug, Clone, PartialEq)]
pub enum FamilyError {
    // ---- Argument errors ----
    /// Vector has no elements.
    EmptyVector { arg: &'static str },

    /// Vector is not of double storage type.
    NonNumericVector { arg: &'static str, found: VectorKind },

    /// Vector length is neither 1 nor the observation count.
    RecycleLengthMismatch { arg: &'static str, len: usize, expected: usize },

    /// A host element could not be coerced to `f64`.
    CoercionFailed { arg: &'static str, index: usize, value: String },

    // ---- Domain errors ----
    /// Mean-scale value outside the closed unit interval.
    OutOfUnitInterval { index: usize, value: f64 },

    /// Binomial response outside `[0, 1]`.
    ResponseOutOfRange { index: usize, value: f64 },

    // ---- Configuration ----
    /// Saturation threshold or floor rejected.
    InvalidSaturationGuards { threshold: f64, floor: f64, reason: &'static str },
}

impl FamilyError {
    /// Classify this error as an argument, domain or configuration failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FamilyError::EmptyVector { .. }
            | FamilyError::NonNumericVector { .. }
            | FamilyError::RecycleLengthMismatch { .. }
            | FamilyError::CoercionFailed { .. } => ErrorKind::Argument,
            FamilyError::OutOfUnitInterval { .. } | FamilyError::ResponseOutOfRange { .. } => {
                ErrorKind::Domain
            }
            FamilyError::InvalidSaturationGuards { .. } => ErrorKind::Config,
        }
    }
}

impl std::error::Error for FamilyError {}

impl std::fmt::Display for FamilyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Argument errors ----
            FamilyError::EmptyVector { arg } => {
                write!(f, "Argument {arg} must be a nonempty numeric vector")
            }
            FamilyError::NonNumericVector { arg, found } => {
                write!(f, "Argument {arg} must be a nonempty numeric vector, got {found} vector")
            }
            FamilyError::RecycleLengthMismatch { arg, len, expected } => write!(
                f,
                "argument {arg} must be a numeric vector of length 1 or length {expected}, got length {len}"
            ),
            FamilyError::CoercionFailed { arg, index, value } => write!(
                f,
                "argument {arg}: element {index} ({value:?}) cannot be coerced to a double"
            ),

            // ---- Domain errors ----
            FamilyError::OutOfUnitInterval { index, value } => {
                write!(f, "Value {value} at index {index} out of range (0, 1)")
            }
            FamilyError::ResponseOutOfRange { index, value } => {
                write!(f, "y values must be 0 <= y <= 1, got {value} at index {index}")
            }

            // ---- Configuration ----
            FamilyError::InvalidSaturationGuards { threshold, floor, reason } => write!(
                f,
                "Invalid saturation guards (threshold = {threshold}, floor = {floor}): {reason}"
            ),
        }
    }
}
