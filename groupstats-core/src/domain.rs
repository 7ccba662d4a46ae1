pub mod alpha;
pub mod config;
pub mod interval;
pub mod tail;
pub mod verdict;

pub use alpha::*;
pub use config::*;
pub use interval::*;
pub use tail::*;
pub use verdict::*;
