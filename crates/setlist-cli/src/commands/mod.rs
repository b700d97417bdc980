//! Command implementations

mod distribute;
mod sets;

pub use distribute::{DistributeOptions, run_distribute};
pub use sets::run_sets;
