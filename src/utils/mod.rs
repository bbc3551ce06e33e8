//! Utility helpers: math extensions and logging.

pub mod logging;
pub mod math;

pub use logging::ScopedTimer;
