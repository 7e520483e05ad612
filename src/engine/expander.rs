// Expansion engine - per-token contraction lookup and reassembly

use std::borrow::Cow;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::contractions::ContractionTable;
use crate::engine::config::TokenizerConfig;
use crate::engine::error::ExpandError;
use crate::text::{capitalize, is_capitalized, tokenize, uncapitalize};

/// Expands contractions against a fixed table. Holds no state between calls,
/// so one expander can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct ContractionExpander<'t> {
    table: &'t ContractionTable,
}

impl Default for ContractionExpander<'static> {
    fn default() -> Self {
        Self::new(ContractionTable::builtin())
    }
}

impl<'t> ContractionExpander<'t> {
    pub fn new(table: &'t ContractionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t ContractionTable {
        self.table
    }

    /// Looks up a single token. A capitalized token is matched in its
    /// uncapitalized form and its expansion gets an uppercase first character;
    /// anything else must match a key exactly.
    pub fn expand_token(&self, token: &str) -> Option<String> {
        if is_capitalized(token) {
            self.table.get(&uncapitalize(token)).map(capitalize)
        } else {
            self.table.get(token).map(str::to_string)
        }
    }

    /// One output segment per input token, in order.
    pub fn expand_segments<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        tokenize(text, &TokenizerConfig::default())
            .into_iter()
            .map(|token| match self.expand_token(token) {
                Some(expansion) => {
                    trace!(token, expansion = %expansion, "expanded contraction");
                    Cow::Owned(expansion)
                }
                None => Cow::Borrowed(token),
            })
            .collect()
    }

    pub fn expand(&self, text: &str) -> String {
        let segments = self.expand_segments(text);
        let substitutions = segments
            .iter()
            .filter(|segment| matches!(segment, Cow::Owned(_)))
            .count();
        debug!(tokens = segments.len(), substitutions, "expanded text");

        segments.concat()
    }

    /// Expands a dynamically typed value. Only JSON strings are accepted.
    pub fn expand_value(&self, value: &Value) -> Result<String, ExpandError> {
        match value {
            Value::String(text) => Ok(self.expand(text)),
            other => {
                warn!(value = %other, "rejected non-string input");
                Err(ExpandError::InvalidArgument(other.to_string()))
            }
        }
    }
}
