// Configuration for the tokenizer feeding the expander

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerConfig {
    /// Emit whitespace runs as their own tokens (default true).
    /// With this on, concatenating the tokens reproduces the input exactly.
    pub keep_whitespace: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            keep_whitespace: true,
        }
    }
}

impl TokenizerConfig {
    /// Words and punctuation only, whitespace dropped
    pub fn words_only() -> Self {
        Self {
            keep_whitespace: false,
        }
    }
}
