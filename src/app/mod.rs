//! Outer application layer.
//!
//! Input loading, reference URL validation, rendering and statistics used by
//! the batch runner and the binary.

pub mod input;
pub mod output;
pub mod statistics;
pub mod url;

pub use input::{load_input, STDIN_PATH};
pub use output::{render_json, render_text};
pub use statistics::{print_outcome_statistics, print_summary};
pub use url::validate_and_normalize_url;
