//! Gweid Utils - small demonstration utility library
//! Arithmetic, price formatting, a greeting constant and a JSON deep merge

pub mod demo;
pub mod math;
pub mod merge;
pub mod message;

// Re-export main functions for convenience
pub use math::{format_price, sum};
pub use merge::deep_merge;
pub use message::MSG;
