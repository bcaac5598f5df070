//! Error types for the Prism domain layer.
//!
//! Parameter writes never fail (they clamp). Errors only come from parsing
//! names and building images or galleries.

/// Errors returned by fallible `prism-core` operations.
#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    #[error("gallery must contain at least one image")]
    EmptyGallery,
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),
    #[error("unknown filter kind: {0}")]
    UnknownFilterKind(String),
    #[error("unknown color matrix preset: {0}")]
    UnknownPreset(String),
    #[error("pixel buffer of {len} entries does not match {width}x{height}")]
    ImageSize { width: u32, height: u32, len: usize },
}
