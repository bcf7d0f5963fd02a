use rgb::RGB8;

use crate::palette::Palette256;

/// An 8-bit indexed image together with the palette its indices refer to.
///
/// Produced by [`Ditherer::dither`](crate::Ditherer::dither); indices are
/// stored row-major with no padding.
#[derive(Debug, Clone)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: u32,
    height: u32,
    palette: Palette256,
}

impl IndexedImage {
    pub(crate) fn new(indices: Vec<u8>, width: u32, height: u32, palette: Palette256) -> Self {
        debug_assert_eq!(indices.len(), width as usize * height as usize);
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette indices, row-major, one byte per pixel.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Consume the image and return just the index buffer.
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &Palette256 {
        &self.palette
    }

    /// Expand the indices back to packed RGB triplets.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &index in &self.indices {
            let RGB8 { r, g, b } = self.palette.entry(index);
            rgb.extend_from_slice(&[r, g, b]);
        }
        rgb
    }
}
