//! Error types for row rendering and the loaders around it

use std::path::PathBuf;

use thiserror::Error;

use crate::status::RowStatus;

#[derive(Debug, Error)]
pub enum FormRowError {
    /// Status outside of error/info/success/warning
    #[error("Invalid status given. Status must be one of '{}'", RowStatus::names().join(", "))]
    InvalidStatus { given: String },

    #[error("Failed to load config from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Failed to load translations from {path}: {reason}")]
    Catalog { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, FormRowError>;
