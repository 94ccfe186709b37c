//! Application initialization.
//!
//! Sets up process-wide resources owned by the binary. The library itself keeps
//! no global state.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
