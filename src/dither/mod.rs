//! Quantization drivers for the four dithering modes.
//!
//! All modes share the same front end: a [`QuantizerContext`] that holds
//! the palette, the color lookup cache, and an optional noise source for
//! one run. [`run`] validates the source buffer, dispatches on the mode,
//! and reports progress and cancellation at row granularity.

mod direct;
mod error_diffusion;
mod noise;
mod ordered;
mod pattern;

pub use pattern::ORDERED_PATTERN;

use crate::api::DitherError;
use crate::palette::{ColorCache, Palette256};
use noise::Noise;

/// How source colors are mapped onto palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitherMode {
    /// Nearest palette entry per pixel, no dithering.
    Direct,
    /// Nearest entry after a random perturbation of the given amplitude.
    Noise(u8),
    /// Deterministic 4x4 threshold pattern added to every channel.
    Ordered,
    /// Floyd-Steinberg error diffusion with serpentine row traversal.
    ErrorDiffusion,
}

/// Rows between progress callbacks.
pub(crate) const PROGRESS_STEP: usize = 16;

/// Per-run working state shared by all modes.
pub(crate) struct QuantizerContext<'pal> {
    palette: &'pal Palette256,
    cache: ColorCache,
    noise: Option<Noise>,
}

impl<'pal> QuantizerContext<'pal> {
    pub fn new(palette: &'pal Palette256, noise: Option<Noise>) -> Self {
        Self {
            palette,
            cache: ColorCache::new(),
            noise,
        }
    }
}

/// Quantize an RGB buffer to palette indices.
///
/// `source` holds `width * height` pixels as tightly packed RGB triplets.
/// `progress` is invoked every [`PROGRESS_STEP`] rows and once more on
/// completion; `cancel` is polled once per row and aborts the run with
/// [`DitherError::Cancelled`] when it returns true.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run(
    palette: &Palette256,
    mode: DitherMode,
    extra_noise: u8,
    noise_seed: u64,
    source: &[u8],
    width: u32,
    height: u32,
    progress: &mut dyn FnMut(u32, u32),
    cancel: &dyn Fn() -> bool,
) -> Result<Vec<u8>, DitherError> {
    let pixels = (width as usize)
        .checked_mul(height as usize)
        .ok_or(DitherError::OutOfMemory)?;
    let expected = pixels.checked_mul(3).ok_or(DitherError::OutOfMemory)?;
    if source.len() < expected {
        return Err(DitherError::BufferTooSmall {
            expected,
            len: source.len(),
        });
    }

    let amplitude = match mode {
        DitherMode::Noise(amplitude) => amplitude,
        _ => extra_noise,
    };
    let noise = (amplitude > 0).then(|| Noise::new(amplitude, noise_seed));

    tracing::debug!(
        width = width,
        height = height,
        mode = ?mode,
        noise = amplitude,
        "Quantizing image"
    );

    let mut output = Vec::new();
    output
        .try_reserve_exact(pixels)
        .map_err(|_| DitherError::OutOfMemory)?;
    output.resize(pixels, 0);

    let mut ctx = QuantizerContext::new(palette, noise);
    if pixels > 0 {
        let w = width as usize;
        let h = height as usize;
        match mode {
            DitherMode::ErrorDiffusion => {
                error_diffusion::diffuse(&mut ctx, source, w, h, &mut output, progress, cancel)?;
            }
            _ => {
                for y in 0..h {
                    if cancel() {
                        return Err(DitherError::Cancelled);
                    }
                    if y % PROGRESS_STEP == 0 {
                        progress(y as u32, height);
                    }
                    let row = &source[y * w * 3..(y + 1) * w * 3];
                    let out_row = &mut output[y * w..(y + 1) * w];
                    for x in 0..w {
                        let (r, g, b) = (row[x * 3], row[x * 3 + 1], row[x * 3 + 2]);
                        out_row[x] = match mode {
                            DitherMode::Ordered => ordered::quantize(&mut ctx, x, y, r, g, b),
                            _ => direct::quantize_pixel(&mut ctx, r, g, b),
                        };
                    }
                }
            }
        }
    }
    progress(height, height);

    tracing::debug!(cached_colors = ctx.cache.len(), "Quantization complete");
    Ok(output)
}
