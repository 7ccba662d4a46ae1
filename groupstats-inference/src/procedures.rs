//! The four two-sample procedures and shared distribution constructors.

pub mod bootstrap;
pub mod mean_interval;
pub mod mean_test;
pub mod variance_ratio;

pub use bootstrap::*;
pub use mean_interval::*;
pub use mean_test::*;
pub use variance_ratio::*;

use groupstats_core::{CoreError, Result};
use statrs::distribution::{FisherSnedecor, StudentsT};

/// Standard Student's t distribution with `dof` degrees of freedom.
pub(crate) fn students_t(dof: f64) -> Result<StudentsT> {
    StudentsT::new(0.0, 1.0, dof)
        .map_err(|e| CoreError::Distribution(format!("t distribution with {} dof: {}", dof, e)))
}

/// F distribution with `(dof1, dof2)` degrees of freedom.
pub(crate) fn fisher_snedecor(dof1: f64, dof2: f64) -> Result<FisherSnedecor> {
    FisherSnedecor::new(dof1, dof2).map_err(|e| {
        CoreError::Distribution(format!(
            "F distribution with ({}, {}) dof: {}",
            dof1, dof2, e
        ))
    })
}
