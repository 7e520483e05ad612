use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// Input was not a string. Carries the offending value rendered as JSON.
    #[error("invalid argument. Must provide a string. Value: `{0}`.")]
    InvalidArgument(String),
}
