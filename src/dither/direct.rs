//! Direct pixel quantization.
//!
//! Every pixel maps independently to the nearest palette entry, with an
//! optional noise perturbation applied first. This is the fastest mode and
//! the building block the noise modes share.

use crate::dither::QuantizerContext;

pub(crate) fn quantize_pixel(ctx: &mut QuantizerContext<'_>, r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = match ctx.noise.as_mut() {
        Some(noise) => (noise.perturb(r), noise.perturb(g), noise.perturb(b)),
        None => (r, g, b),
    };
    ctx.cache.index_of(ctx.palette, r >> 2, g >> 2, b >> 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette256;
    use rgb::RGB8;

    fn grey_palette() -> Palette256 {
        let entries: Vec<RGB8> = (0..=255u8)
            .map(|i| RGB8::new(i, i, i))
            .collect();
        Palette256::new(&entries).unwrap()
    }

    #[test]
    fn test_exact_grey_maps_to_its_entry() {
        let palette = grey_palette();
        let mut ctx = QuantizerContext::new(&palette, None);
        assert_eq!(quantize_pixel(&mut ctx, 200, 200, 200), 200);
    }

    #[test]
    fn test_reduced_precision_groups_neighbours() {
        let palette = grey_palette();
        let mut ctx = QuantizerContext::new(&palette, None);
        // 100 and 103 share a 6-bit value, so they must map identically,
        // and ties snap to the lowest of the four equidistant entries.
        let a = quantize_pixel(&mut ctx, 100, 100, 100);
        let b = quantize_pixel(&mut ctx, 103, 103, 103);
        assert_eq!(a, b);
        assert_eq!(a, 100);
        assert_eq!(quantize_pixel(&mut ctx, 50, 50, 50), 48);
    }
}
