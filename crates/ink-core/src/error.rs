use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the core pipeline and its collaborators.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The named resource was not found in any candidate location.
    #[error("Ressource introuvable : {name} (cherché dans : {})", display_paths(.searched))]
    ResourceNotFound {
        /// Name or path as requested by the caller.
        name: String,
        /// Every location that was tried, in order.
        searched: Vec<PathBuf>,
    },

    /// File exists but could not be decoded into pixels.
    #[error("Décodage impossible de {path} : {reason}")]
    DecodeFailure {
        /// Path of the offending file.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    InvalidConfig(String),

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Text-to-speech backend unavailable or failed.
    #[error("Synthèse vocale : {0}")]
    Speech(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
