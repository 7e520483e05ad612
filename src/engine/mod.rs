pub mod config;
pub mod error;
pub mod expander;

pub use config::TokenizerConfig;
pub use error::ExpandError;
pub use expander::ContractionExpander;
