//! Two-sample hypothesis tests and interval estimators.

pub mod analyzer;
pub mod descriptive;
pub mod procedures;

pub use analyzer::*;
pub use descriptive::*;
pub use procedures::*;
