//! family — logit link and binomial family kernels for GLM fitting.
//!
//! Purpose
//! -------
//! Collect the vector transforms an IRLS driver needs from the binomial
//! family with its canonical logit link: the link and its saturated
//! inverse, the derivative `dμ/dη`, the per-observation deviance
//! residuals, and the family-level helpers (variance, validity checks,
//! starting values, AIC). Host-facing entry points with the host calling
//! contract live in [`host`].
//!
//! Key behaviors
//! -------------
//! - Expose the four core operations [`logit_link`], [`logit_linkinv`],
//!   [`logit_mu_eta`] and [`binomial_dev_resids`] over `ndarray` views.
//! - Express the link behind the [`LinkFunction`] trait so that
//!   [`Binomial`] can be parameterized by it.
//! - Allow the saturation policy to be configured through
//!   [`SaturationGuards`].
//! - Report every failure as a [`FamilyError`], classified by
//!   [`ErrorKind`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Every operation returns a freshly allocated vector whose length equals
//!   the primary input (`mu`/`eta` for the link functions, `y` for the
//!   residuals); inputs are borrowed and never mutated.
//! - Calls fail atomically: no partial output is ever returned.
//! - There is no shared mutable state; all items are `Send + Sync` and may
//!   be used concurrently on distinct inputs.
//!
//! Conventions
//! -----------
//! - Argument errors are raised before any element is computed; domain
//!   errors abort mid-loop.
//! - Saturation is never reported as an error.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use ndarray::array;
//!   use rust_glm_family::family::{Binomial, LogitLink, binomial_dev_resids, logit_linkinv};
//!
//!   let family = Binomial::<LogitLink>::default();
//!   let mu = logit_linkinv(array![-1.0, 0.0, 1.0].view())?;
//!   let resid = binomial_dev_resids(array![0.0, 1.0, 1.0].view(), mu.view(), array![1.0].view())?;
//!   assert!(family.valid_mu(mu.view()));
//!   assert_eq!(resid.len(), 3);
//!   # Ok::<(), rust_glm_family::family::FamilyError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own contract; the IRLS
//!   integration test under `tests/` drives the family end to end.

pub mod binomial;
pub mod errors;
pub mod guards;
pub mod host;
pub mod logit;
pub mod traits;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::binomial::{Binomial, binomial_dev_resids};
pub use self::errors::{ErrorKind, FamilyError, FamilyResult};
pub use self::guards::SaturationGuards;
pub use self::host::{HostVector, VectorKind};
pub use self::logit::{LogitLink, logit_link, logit_linkinv, logit_mu_eta};
pub use self::traits::LinkFunction;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_glm_family::family::prelude::*;
//
// to import the main family surface in a single line.

pub mod prelude {
    pub use super::binomial::{Binomial, binomial_dev_resids};
    pub use super::errors::{FamilyError, FamilyResult};
    pub use super::logit::{LogitLink, logit_link, logit_linkinv, logit_mu_eta};
    pub use super::traits::LinkFunction;
}
