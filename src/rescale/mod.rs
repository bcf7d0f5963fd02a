//! Size reduction for oversized source images.
//!
//! Two pieces: [`fit_within`] decides the target dimensions by repeatedly
//! shrinking both axes by a fixed step until the image fits its bounds,
//! and [`resample`] produces the smaller buffer by dropping rows and
//! columns at evenly spread positions. Nearest-pick decimation keeps hard
//! edges hard, which suits indexed output better than blended filtering.

use crate::api::DitherError;

/// Per-iteration shrink factor used by [`fit_within`].
const SHRINK_STEP: f64 = 1.1;

/// Shrink `(width, height)` until it fits within the given bounds.
///
/// Both axes are divided by the same factor each step and truncated to
/// integers before the next step, so repeated steps compound on the
/// truncated values and the aspect ratio drifts only by truncation.
/// Dimensions already within bounds are returned unchanged. An image only
/// fits once BOTH axes exceed their bound shrink; a single oversized axis
/// alone does not trigger scaling.
pub fn fit_within(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
    cancel: impl Fn() -> bool,
) -> Result<(u32, u32), DitherError> {
    let (mut w, mut h) = (width, height);
    while w > max_width && h > max_height {
        if cancel() {
            return Err(DitherError::Cancelled);
        }
        w = (f64::from(w) / SHRINK_STEP) as u32;
        h = (f64::from(h) / SHRINK_STEP) as u32;
        tracing::trace!(width = w, height = h, "Shrink step");
    }
    if (w, h) != (width, height) {
        tracing::debug!(
            from_width = width,
            from_height = height,
            to_width = w,
            to_height = h,
            "Shrinking oversized image"
        );
    }
    Ok((w, h))
}

/// Decimate an RGB buffer from `src_w x src_h` to `dst_w x dst_h`.
///
/// Target dimensions must not exceed the source dimensions. When they are
/// equal the buffer is copied through unchanged.
pub fn resample(
    source: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
) -> Result<Vec<u8>, DitherError> {
    let expected = (src_w as usize)
        .checked_mul(src_h as usize)
        .and_then(|p| p.checked_mul(3))
        .ok_or(DitherError::OutOfMemory)?;
    if source.len() < expected {
        return Err(DitherError::BufferTooSmall {
            expected,
            len: source.len(),
        });
    }

    let out_len = (dst_w as usize) * (dst_h as usize) * 3;
    let mut output = Vec::new();
    output
        .try_reserve_exact(out_len)
        .map_err(|_| DitherError::OutOfMemory)?;

    for src_y in picks(src_h as usize, dst_h as usize) {
        let row = &source[src_y * src_w as usize * 3..(src_y + 1) * src_w as usize * 3];
        for src_x in picks(src_w as usize, dst_w as usize) {
            output.extend_from_slice(&row[src_x * 3..src_x * 3 + 3]);
        }
    }
    Ok(output)
}

/// Evenly spread source positions to keep when reducing `src` samples to
/// `dst`. Bresenham stepping: the cursor advances by `src / dst` on
/// average without accumulating rounding drift.
fn picks(src: usize, dst: usize) -> Vec<usize> {
    let mut kept = Vec::with_capacity(dst);
    if dst == 0 || src == 0 {
        return kept;
    }
    let dx = dst as i64;
    let dy = src as i64;
    let mut err = (dy << 1) - dx;
    let mut cursor = 0usize;
    for _ in 0..dst {
        kept.push(cursor.min(src - 1));
        while err >= 0 {
            cursor += 1;
            err -= dx << 1;
        }
        err += dy << 1;
    }
    kept
}
