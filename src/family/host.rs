//! family::host — host-side vectors, coercion, and checked entry points.
//!
//! Purpose
//! -------
//! Model vectors as they arrive from a host statistical environment (typed
//! storage, possibly with missing values) and provide the entry points that
//! apply the host calling contract before delegating to the typed `f64`
//! routines in [`crate::family::logit`] and [`crate::family::binomial`].
//!
//! Key behaviors
//! -------------
//! - [`HostVector`] tags storage as double, integer, logical or character;
//!   `None` elements are missing values (NA).
//! - [`HostVector::as_real`] is the strict check used by the link entry
//!   points: only double storage is accepted.
//! - [`HostVector::coerce_to_real`] is the coercion contract used by the
//!   deviance entry point:
//!   - double is copied unchanged,
//!   - integer converts exactly, NA becomes NaN,
//!   - logical maps `true → 1`, `false → 0`, NA → NaN,
//!   - character is trimmed and parsed; `"NA"` and NA become NaN, anything
//!     unparseable is a [`FamilyError::CoercionFailed`].
//!
//! Conventions
//! -----------
//! - Non-trivial coercions are recorded with `log::debug!`.
//! - Argument names passed to these functions appear verbatim in error
//!   messages.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each coercion branch, the strict type check, and
//!   every `call_*` entry point on accepted and rejected inputs.

use ndarray::{Array1, ArrayView1};

use crate::family::{
    binomial::binomial_dev_resids,
    errors::{FamilyError, FamilyResult},
    logit::{logit_link, logit_linkinv, logit_mu_eta},
};

/// Storage type of a [`HostVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Double,
    Integer,
    Logical,
    Character,
}

impl std::fmt::Display for VectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VectorKind::Double => "double",
            VectorKind::Integer => "integer",
            VectorKind::Logical => "logical",
            VectorKind::Character => "character",
        };
        f.write_str(name)
    }
}

/// A typed vector as delivered by the host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum HostVector {
    Double(Array1<f64>),
    Integer(Vec<Option<i32>>),
    Logical(Vec<Option<bool>>),
    Character(Vec<Option<String>>),
}

impl HostVector {
    pub fn kind(&self) -> VectorKind {
        match self {
            HostVector::Double(_) => VectorKind::Double,
            HostVector::Integer(_) => VectorKind::Integer,
            HostVector::Logical(_) => VectorKind::Logical,
            HostVector::Character(_) => VectorKind::Character,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            HostVector::Double(v) => v.len(),
            HostVector::Integer(v) => v.len(),
            HostVector::Logical(v) => v.len(),
            HostVector::Character(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the values of a double vector.
    ///
    /// Errors
    /// ------
    /// - `FamilyError::NonNumericVector { arg, found }` for any other storage.
    pub fn as_real(&self, arg: &'static str) -> FamilyResult<ArrayView1<'_, f64>> {
        match self {
            HostVector::Double(v) => Ok(v.view()),
            other => Err(FamilyError::NonNumericVector { arg, found: other.kind() }),
        }
    }

    /// Convert to a fresh `f64` vector under the coercion contract.
    ///
    /// Errors
    /// ------
    /// - `FamilyError::CoercionFailed { arg, index, value }` for the first
    ///   character element that does not parse as a number.
    pub fn coerce_to_real(&self, arg: &'static str) -> FamilyResult<Array1<f64>> {
        if self.kind() != VectorKind::Double {
            log::debug!("coercing {arg} from {} to double ({} elements)", self.kind(), self.len());
        }

        match self {
            HostVector::Double(v) => Ok(v.clone()),
            HostVector::Integer(v) => {
                Ok(v.iter().map(|x| x.map_or(f64::NAN, f64::from)).collect())
            }
            HostVector::Logical(v) => Ok(v
                .iter()
                .map(|x| match x {
                    Some(true) => 1.0,
                    Some(false) => 0.0,
                    None => f64::NAN,
                })
                .collect()),
            HostVector::Character(v) => v
                .iter()
                .enumerate()
                .map(|(index, x)| match x.as_deref().map(str::trim) {
                    None | Some("NA") => Ok(f64::NAN),
                    Some(text) => text.parse::<f64>().map_err(|_| FamilyError::CoercionFailed {
                        arg,
                        index,
                        value: text.to_string(),
                    }),
                })
                .collect(),
        }
    }
}

impl From<Array1<f64>> for HostVector {
    fn from(values: Array1<f64>) -> Self {
        HostVector::Double(values)
    }
}

impl From<Vec<f64>> for HostVector {
    fn from(values: Vec<f64>) -> Self {
        HostVector::Double(Array1::from(values))
    }
}

impl From<Vec<i32>> for HostVector {
    fn from(values: Vec<i32>) -> Self {
        HostVector::Integer(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<bool>> for HostVector {
    fn from(values: Vec<bool>) -> Self {
        HostVector::Logical(values.into_iter().map(Some).collect())
    }
}

/// Host entry point for [`logit_link`]: `mu` must be a nonempty double
/// vector.
pub fn call_logit_link(mu: &HostVector) -> FamilyResult<Array1<f64>> {
    logit_link(mu.as_real("mu")?)
}

/// Host entry point for [`logit_linkinv`]: `eta` must be a nonempty double
/// vector.
pub fn call_logit_linkinv(eta: &HostVector) -> FamilyResult<Array1<f64>> {
    logit_linkinv(eta.as_real("eta")?)
}

/// Host entry point for [`logit_mu_eta`]: `eta` must be a nonempty double
/// vector.
pub fn call_logit_mu_eta(eta: &HostVector) -> FamilyResult<Array1<f64>> {
    logit_mu_eta(eta.as_real("eta")?)
}

/// Host entry point for [`binomial_dev_resids`]. All three arguments are
/// coerced to double before the length checks run.
pub fn call_binomial_dev_resids(
    y: &HostVector, mu: &HostVector, wt: &HostVector,
) -> FamilyResult<Array1<f64>> {
    let y = y.coerce_to_real("y")?;
    let mu = mu.coerce_to_real("mu")?;
    let wt = wt.coerce_to_real("wt")?;
    binomial_dev_resids(y.view(), mu.view(), wt.view())
}
