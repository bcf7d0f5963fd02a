use thiserror::Error;

use crate::palette::PaletteError;

/// Errors a quantization run can produce.
#[derive(Debug, Error)]
pub enum DitherError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("source buffer holds {len} bytes but {expected} are required")]
    BufferTooSmall { expected: usize, len: usize },

    #[error("failed to allocate working memory")]
    OutOfMemory,

    #[error("operation cancelled")]
    Cancelled,
}
