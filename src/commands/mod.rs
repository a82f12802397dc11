//! Command implementations

mod audit;

pub use audit::audit;
