//! Expands informal English contractions ("won't", "y'all") to their formal
//! equivalents ("will not", "you all"), keeping the capitalization of the
//! original token.
//!
//! ```
//! use expand_contractions::expand_contractions;
//!
//! let out = expand_contractions("I won't be able to get y'all out of this one.");
//! assert_eq!(out, "I will not be able to get you all out of this one.");
//! ```

pub mod contractions;
pub mod engine;
pub mod text;

pub use contractions::ContractionTable;
pub use engine::{ContractionExpander, ExpandError, TokenizerConfig};

use serde_json::Value;

/// Expands every contraction in `text` using the built-in table.
pub fn expand_contractions(text: &str) -> String {
    ContractionExpander::default().expand(text)
}

/// Like [`expand_contractions`], for values whose type is only known at
/// runtime. Anything but a JSON string fails with
/// [`ExpandError::InvalidArgument`].
pub fn expand_value(value: &Value) -> Result<String, ExpandError> {
    ContractionExpander::default().expand_value(value)
}
