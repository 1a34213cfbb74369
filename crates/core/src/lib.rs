pub mod error;
pub mod like;
pub mod reports;
pub mod title_match;
pub mod types;
pub mod validation;
