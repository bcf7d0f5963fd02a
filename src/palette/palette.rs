//! Fixed 256-entry palette with precomputed reduced-channel tables.

use rgb::RGB8;

use super::error::PaletteError;

/// Number of entries every palette must have.
pub const PALETTE_SIZE: usize = 256;

/// A fixed 256-entry RGB palette prepared for fast nearest-color search.
///
/// Construction precomputes each channel reduced to 6 bits (value / 4).
/// Distance comparisons run in that reduced space, which matches what a
/// 6-bit-per-channel DAC actually displays and keeps squared distances
/// well inside `i32`.
///
/// The palette is immutable for the duration of a quantization run. The
/// engine never recomputes the reduced tables after construction.
///
/// # Example
///
/// ```
/// use vga_dither::{Palette256, RGB8};
///
/// let greys: Vec<RGB8> = (0u8..=255).map(|v| RGB8::new(v, v, v)).collect();
/// let palette = Palette256::new(&greys).unwrap();
/// assert_eq!(palette.entry(200).r, 200);
/// ```
#[derive(Debug, Clone)]
pub struct Palette256 {
    entries: [RGB8; PALETTE_SIZE],
    r6: [u8; PALETTE_SIZE],
    g6: [u8; PALETTE_SIZE],
    b6: [u8; PALETTE_SIZE],
}

impl Palette256 {
    /// Build a palette from exactly 256 entries.
    ///
    /// Returns [`PaletteError::WrongLength`] for any other count.
    pub fn new(entries: &[RGB8]) -> Result<Self, PaletteError> {
        let entries: [RGB8; PALETTE_SIZE] = entries
            .try_into()
            .map_err(|_| PaletteError::WrongLength {
                found: entries.len(),
            })?;

        let mut r6 = [0u8; PALETTE_SIZE];
        let mut g6 = [0u8; PALETTE_SIZE];
        let mut b6 = [0u8; PALETTE_SIZE];
        for (i, entry) in entries.iter().enumerate() {
            r6[i] = entry.r >> 2;
            g6[i] = entry.g >> 2;
            b6[i] = entry.b >> 2;
        }

        Ok(Self { entries, r6, g6, b6 })
    }

    /// Build a palette from 768 raw bytes: 256 packed RGB triplets in entry
    /// order, the layout palettized file formats typically hand over.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PaletteError> {
        if bytes.len() != PALETTE_SIZE * 3 {
            return Err(PaletteError::WrongByteLength { found: bytes.len() });
        }
        let mut entries = [RGB8::default(); PALETTE_SIZE];
        for (entry, triplet) in entries.iter_mut().zip(bytes.chunks_exact(3)) {
            *entry = RGB8::new(triplet[0], triplet[1], triplet[2]);
        }
        Self::new(&entries)
    }

    /// The full-precision entry for a palette index.
    #[inline]
    pub fn entry(&self, index: u8) -> RGB8 {
        self.entries[usize::from(index)]
    }

    /// All 256 entries in order.
    #[inline]
    pub fn entries(&self) -> &[RGB8; PALETTE_SIZE] {
        &self.entries
    }

    /// The 6-bit reduced channels of one entry.
    #[inline]
    pub(crate) fn reduced(&self, index: usize) -> (u8, u8, u8) {
        (self.r6[index], self.g6[index], self.b6[index])
    }
}
