// Pure domain services

pub mod classifier;
pub mod stats;

pub use classifier::*;
pub use stats::*;
