//! Core error type.
//!
//! Sub-crates define their own error enums and wrap lower-level errors via
//! `From` impls; `CoreError` covers what `hm-core` itself can reject.

use thiserror::Error;

/// The error type for `hm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `hm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
