//! Error types for palette construction.

use thiserror::Error;

/// Error type for palette validation.
///
/// The engine binds output to a full 256-entry palette; anything shorter or
/// longer is a configuration error rejected before quantization begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Wrong number of palette entries (must be exactly 256).
    #[error("palette must have exactly 256 entries, got {found}")]
    WrongLength {
        /// Number of entries that were supplied.
        found: usize,
    },

    /// Wrong number of raw palette bytes (must be 768: 256 RGB triplets).
    #[error("raw palette must be 768 bytes (256 RGB triplets), got {found}")]
    WrongByteLength {
        /// Number of bytes that were supplied.
        found: usize,
    },
}
