//! Ordered dither pattern definition.

/// 4×4 signed offset matrix for ordered dithering.
///
/// Indexed by `[x % 4][y % 4]`; the selected offset is added to all three
/// channels before the palette lookup. Because only the position modulo 4
/// matters, the matrix tiles the whole image and the pattern is independent
/// of image size.
///
/// The 16 values are the consecutive integers -7..=8, arranged so that
/// neighboring cells alternate sign:
///
/// ```text
///    -7   1  -5   3
///     5  -3   7  -1
///    -4   4  -6   2
///     8   0   6  -2
/// ```
///
/// An offset of at most ±8 moves a channel by at most two steps in the
/// 6-bit reduced space, enough to break banding without visibly shifting
/// hue.
pub const ORDERED_PATTERN: [[i32; 4]; 4] = [
    [-7, 1, -5, 3],
    [5, -3, 7, -1],
    [-4, 4, -6, 2],
    [8, 0, 6, -2],
];
