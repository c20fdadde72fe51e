//! Matching algorithms
//!
//! Market and limit execution against the opposite side's queue.

pub mod crossing;
pub mod executor;

pub use executor::{execute_limit, execute_market, Execution, FillState};
