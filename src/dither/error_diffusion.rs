//! Floyd-Steinberg error diffusion with serpentine traversal.
//!
//! Quantization error at each pixel is split across its not-yet-visited
//! neighbours with the 7/16, 5/16, 1/16, 3/16 weights. Rows alternate
//! direction: even rows sweep left to right, odd rows right to left, so
//! the "ahead" neighbour flips sides each row. Only two rows of working
//! state are held at a time, as signed accumulators so propagated error
//! can push a channel outside the displayable range before clipping.
//!
//! Division is truncating integer division throughout, so the four shares
//! of an error need not sum back to the full error. Exact palette colors
//! produce zero error and pass through untouched.

use crate::api::DitherError;
use crate::dither::noise::Noise;
use crate::dither::{QuantizerContext, PROGRESS_STEP};

/// Double-buffered signed channel rows, one buffer per row parity.
struct ErrorRows {
    rows: [[Vec<i32>; 3]; 2],
}

impl ErrorRows {
    fn new(width: usize) -> Result<Self, DitherError> {
        let mut rows: [[Vec<i32>; 3]; 2] = Default::default();
        for parity in rows.iter_mut() {
            for channel in parity.iter_mut() {
                channel
                    .try_reserve_exact(width)
                    .map_err(|_| DitherError::OutOfMemory)?;
                channel.resize(width, 0);
            }
        }
        Ok(Self { rows })
    }

    /// Load one source row into the buffer for its parity, applying noise
    /// if configured. Accumulated error in that buffer is overwritten.
    fn load_row(
        &mut self,
        source: &[u8],
        width: usize,
        y: usize,
        mut noise: Option<&mut Noise>,
    ) {
        let row = &mut self.rows[y % 2];
        let base = y * width * 3;
        for x in 0..width {
            let mut r = source[base + x * 3];
            let mut g = source[base + x * 3 + 1];
            let mut b = source[base + x * 3 + 2];
            if let Some(noise) = noise.as_deref_mut() {
                r = noise.perturb(r);
                g = noise.perturb(g);
                b = noise.perturb(b);
            }
            row[0][x] = i32::from(r);
            row[1][x] = i32::from(g);
            row[2][x] = i32::from(b);
        }
    }

    /// Mutable access to the rows for parities `y % 2` and `(y + 1) % 2`.
    fn current_and_next(&mut self, y: usize) -> (&mut [Vec<i32>; 3], &mut [Vec<i32>; 3]) {
        let (a, b) = self.rows.split_at_mut(1);
        if y % 2 == 0 {
            (&mut a[0], &mut b[0])
        } else {
            (&mut b[0], &mut a[0])
        }
    }
}

pub(crate) fn diffuse(
    ctx: &mut QuantizerContext<'_>,
    source: &[u8],
    width: usize,
    height: usize,
    output: &mut [u8],
    progress: &mut dyn FnMut(u32, u32),
    cancel: &dyn Fn() -> bool,
) -> Result<(), DitherError> {
    let mut rows = ErrorRows::new(width)?;
    let mut noise = ctx.noise.take();
    rows.load_row(source, width, 0, noise.as_mut());

    for y in 0..height {
        if cancel() {
            tracing::trace!(row = y, "Error diffusion cancelled");
            return Err(DitherError::Cancelled);
        }
        if y % PROGRESS_STEP == 0 {
            progress(y as u32, height as u32);
        }
        let last_row = y + 1 == height;
        if !last_row {
            rows.load_row(source, width, y + 1, noise.as_mut());
        }
        let (cur, next) = rows.current_and_next(y);
        let out_row = &mut output[y * width..(y + 1) * width];

        if last_row || width < 3 {
            // No interior pixels to diffuse from; every column is an edge
            // and edges only clip and quantize.
            for x in 0..width {
                out_row[x] = quantize_at(ctx, cur, x);
            }
            continue;
        }

        // Serpentine: even rows run left to right, odd rows the reverse.
        let dir: isize = if y % 2 == 0 { 1 } else { -1 };
        let interior: Box<dyn Iterator<Item = usize>> = if dir > 0 {
            Box::new(1..width - 1)
        } else {
            Box::new((1..width - 1).rev())
        };
        for x in interior {
            out_row[x] = diffuse_pixel(ctx, cur, next, x, dir);
        }
        // Edge columns receive error but never propagate it.
        out_row[0] = quantize_at(ctx, cur, 0);
        out_row[width - 1] = quantize_at(ctx, cur, width - 1);
    }

    ctx.noise = noise;
    Ok(())
}

/// Clip, look up the nearest entry, and spread the residual error.
fn diffuse_pixel(
    ctx: &mut QuantizerContext<'_>,
    cur: &mut [Vec<i32>; 3],
    next: &mut [Vec<i32>; 3],
    x: usize,
    dir: isize,
) -> u8 {
    let index = quantize_at(ctx, cur, x);
    let entry = ctx.palette.entry(index);
    let ahead = (x as isize + dir) as usize;
    let behind = (x as isize - dir) as usize;
    for (c, level) in [entry.r, entry.g, entry.b].into_iter().enumerate() {
        let err = cur[c][x].clamp(0, 255) - i32::from(level);
        if err == 0 {
            continue;
        }
        cur[c][ahead] += err * 7 / 16;
        next[c][x] += err * 5 / 16;
        next[c][ahead] += err / 16;
        next[c][behind] += err * 3 / 16;
    }
    index
}

fn quantize_at(ctx: &mut QuantizerContext<'_>, row: &[Vec<i32>; 3], x: usize) -> u8 {
    let r = row[0][x].clamp(0, 255) as u8;
    let g = row[1][x].clamp(0, 255) as u8;
    let b = row[2][x].clamp(0, 255) as u8;
    ctx.cache.index_of(ctx.palette, r >> 2, g >> 2, b >> 2)
}
