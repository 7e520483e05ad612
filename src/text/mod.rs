pub mod case;
pub mod token;

pub use case::{capitalize, is_capitalized, uncapitalize};
pub use token::tokenize;
