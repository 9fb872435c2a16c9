//! Shared domain types and errors for the courtside media service.

pub mod error;
pub mod types;
