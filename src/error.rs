// src/error.rs
//! Host-level failures. Extraction itself never fails; see `data::Issue`.
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid options file: {0}")]
    Options(#[from] toml::de::Error),

    #[error("{0}")]
    Args(String),

    #[error("nothing to export: {0}")]
    NothingToExport(&'static str),
}

pub type Result<T> = std::result::Result<T, ExportError>;
