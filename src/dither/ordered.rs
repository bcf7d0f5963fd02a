//! Ordered (pattern) dithering.
//!
//! Each pixel gets a deterministic offset from a 4x4 threshold pattern
//! keyed on its coordinates, applied equally to all three channels before
//! the nearest-entry lookup. No inter-pixel state is involved, so output
//! depends only on position and input color.

use crate::dither::pattern::ORDERED_PATTERN;
use crate::dither::QuantizerContext;

pub(crate) fn quantize(
    ctx: &mut QuantizerContext<'_>,
    x: usize,
    y: usize,
    r: u8,
    g: u8,
    b: u8,
) -> u8 {
    let (r, g, b) = match ctx.noise.as_mut() {
        Some(noise) => (noise.perturb(r), noise.perturb(g), noise.perturb(b)),
        None => (r, g, b),
    };
    let offset = ORDERED_PATTERN[x % 4][y % 4];
    let r = (i32::from(r) + offset).clamp(0, 255) as u8;
    let g = (i32::from(g) + offset).clamp(0, 255) as u8;
    let b = (i32::from(b) + offset).clamp(0, 255) as u8;
    ctx.cache.index_of(ctx.palette, r >> 2, g >> 2, b >> 2)
}
