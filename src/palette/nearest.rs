//! Brute-force nearest-color search in the reduced color space.

use super::palette::{Palette256, PALETTE_SIZE};

/// Find the palette index whose reduced channels are closest to
/// `(r6, g6, b6)` by squared Euclidean distance.
///
/// All 256 entries are probed; the comparison is strict, so ties resolve to
/// the lowest palette index. This function is the authority the color cache
/// memoizes — any faster path must return the identical index for every
/// input.
pub(crate) fn nearest(palette: &Palette256, r6: u8, g6: u8, b6: u8) -> u8 {
    let mut best = 0usize;
    let mut best_dist = i32::MAX;

    for i in 0..PALETTE_SIZE {
        let (er, eg, eb) = palette.reduced(i);
        let dr = i32::from(er) - i32::from(r6);
        let dg = i32::from(eg) - i32::from(g6);
        let db = i32::from(eb) - i32::from(b6);
        let dist = dr * dr + dg * dg + db * db;
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }

    best as u8
}
