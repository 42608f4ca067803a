//! hilite
//!
//! Splits a body of text into plain and matched segments for a search term,
//! so a renderer can style each occurrence. Matching can be ordinal or
//! culture-aware, and case-sensitive or not.

pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;
pub mod render;
pub mod samples;

pub use error::HiliteError;
pub use highlight::{
    ComparisonMode, Culture, HighlightRequest, Highlighter, Segment, Segments, highlight,
};
