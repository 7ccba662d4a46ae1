pub mod compare;
pub mod config;
pub mod hypothesis;
pub mod intervals;
