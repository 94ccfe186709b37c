//! Rule-based HTML analysis.
//!
//! Two independent, synchronous analyzers over the same markup:
//! - `analyze_document`: metadata plus document-level issues
//! - `analyze_elements`: element issues attributed to page sections, with a
//!   score per section
//!
//! Neither keeps state between calls, so both are safe to run in parallel on
//! any number of documents.

pub mod document;
pub mod element;
pub mod sections;

pub use document::analyze_document;
pub use element::analyze_elements;
pub use sections::Landmarks;
