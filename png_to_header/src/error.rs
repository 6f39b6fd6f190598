/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

/// Errors produced while converting an image into a header.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write header {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid symbol name {0:?}: expected a C identifier")]
    InvalidSymbol(String),
}
