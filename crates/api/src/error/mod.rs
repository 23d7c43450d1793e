//! Error handling for DSA packet parsing and verification

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Specialized result types for different operations
pub type ParseResult<T> = Result<T>;
pub type VerifyResult = Result<bool>;
