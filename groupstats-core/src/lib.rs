//! Domain types, errors and procedure traits for groupstats.

pub mod domain;
pub mod error;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use traits::*;
