//! End-to-end behavioral tests across the public quantization pipeline.

use crate::palette;
use crate::{DitherMode, Ditherer, Palette256, RGB8};

fn grey_palette() -> Palette256 {
    let entries: Vec<RGB8> = (0..=255u8).map(|v| RGB8::new(v, v, v)).collect();
    Palette256::new(&entries).unwrap()
}

/// Black everywhere except a pure red entry at 3 and a pure blue at 9.
fn red_blue_palette() -> Palette256 {
    let mut entries = vec![RGB8::new(0, 0, 0); 256];
    entries[3] = RGB8::new(255, 0, 0);
    entries[9] = RGB8::new(0, 0, 255);
    Palette256::new(&entries).unwrap()
}

#[test]
fn test_direct_mode_maps_exact_colors_exactly() {
    let ditherer = Ditherer::new(red_blue_palette());
    let mut source = Vec::new();
    for y in 0..4 {
        for x in 0..4 {
            if (x + y) % 2 == 0 {
                source.extend_from_slice(&[255, 0, 0]);
            } else {
                source.extend_from_slice(&[0, 0, 255]);
            }
        }
    }
    let image = ditherer.dither(&source, 4, 4).unwrap();
    for y in 0..4usize {
        for x in 0..4usize {
            let expected = if (x + y) % 2 == 0 { 3 } else { 9 };
            assert_eq!(
                image.indices()[y * 4 + x],
                expected,
                "Checkerboard pixel ({}, {}) lost its exact match",
                x,
                y
            );
        }
    }
}

#[test]
fn test_cached_lookup_matches_exhaustive_search() {
    let palette = grey_palette();
    let ditherer = Ditherer::new(palette.clone());
    let source: Vec<u8> = (0..16 * 16)
        .flat_map(|i| {
            let v = (i * 7 % 256) as u8;
            [v, v.wrapping_add(3), v / 2]
        })
        .collect();
    let image = ditherer.dither(&source, 16, 16).unwrap();
    for (pixel, &index) in source.chunks_exact(3).zip(image.indices()) {
        let expected = palette::nearest(
            &palette,
            pixel[0] >> 2,
            pixel[1] >> 2,
            pixel[2] >> 2,
        );
        assert_eq!(index, expected);
    }
}

#[test]
fn test_ordered_pattern_tiles_with_period_four() {
    let ditherer = Ditherer::new(grey_palette()).mode(DitherMode::Ordered);
    let source = vec![128u8; 8 * 8 * 3];
    let image = ditherer.dither(&source, 8, 8).unwrap();
    let indices = image.indices();
    for y in 0..4usize {
        for x in 0..4usize {
            let base = indices[y * 8 + x];
            assert_eq!(base, indices[y * 8 + x + 4]);
            assert_eq!(base, indices[(y + 4) * 8 + x]);
            assert_eq!(base, indices[(y + 4) * 8 + x + 4]);
        }
    }
}

#[test]
fn test_error_diffusion_preserves_mean_brightness() {
    // Only black and white are available, so a mid grey must come out as a
    // roughly even mix rather than collapsing to one level.
    let mut entries = vec![RGB8::new(0, 0, 0); 256];
    entries[1] = RGB8::new(255, 255, 255);
    let palette = Palette256::new(&entries).unwrap();

    let source = vec![128u8; 16 * 16 * 3];
    let direct = Ditherer::new(palette.clone())
        .dither(&source, 16, 16)
        .unwrap();
    let diffused = Ditherer::new(palette)
        .mode(DitherMode::ErrorDiffusion)
        .dither(&source, 16, 16)
        .unwrap();

    let mean = |rgb: &[u8]| {
        let sum: u64 = rgb.iter().map(|&v| u64::from(v)).sum();
        sum / rgb.len() as u64
    };
    let direct_mean = mean(&direct.to_rgb());
    let diffused_mean = mean(&diffused.to_rgb());

    // Direct mode snaps every pixel to white.
    assert_eq!(direct_mean, 255);
    assert!(
        (diffused_mean as i64 - 128).unsigned_abs() < 64,
        "Diffused mean {} drifted too far from the source level 128",
        diffused_mean
    );
}

#[test]
fn test_noise_runs_reproduce_with_equal_seeds() {
    let source: Vec<u8> = (0..8 * 8 * 3).map(|i| (i % 251) as u8).collect();
    let make = |seed| {
        Ditherer::new(grey_palette())
            .mode(DitherMode::Noise(16))
            .noise_seed(seed)
            .dither(&source, 8, 8)
            .unwrap()
    };
    let a = make(7);
    let b = make(7);
    let c = make(8);
    assert_eq!(a.indices(), b.indices());
    assert_ne!(a.indices(), c.indices());
}

#[test]
fn test_rescale_pipeline_bounds_output_and_keeps_aspect() {
    let ditherer = Ditherer::new(grey_palette()).max_size(400, 300);
    // 88 survives the 6-bit reduction exactly: entries 88..=91 tie and the
    // lowest index wins.
    let source = vec![88u8; 1024 * 768 * 3];
    let image = ditherer.dither(&source, 1024, 768).unwrap();
    assert!(image.width() <= 400 && image.height() <= 300);
    let aspect = f64::from(image.width()) / f64::from(image.height());
    assert!(
        (aspect - 1024.0 / 768.0).abs() < 0.05,
        "Aspect drifted to {}",
        aspect
    );
    assert!(image.indices().iter().all(|&i| i == 88));
}

#[test]
fn test_to_rgb_inverts_exact_quantization() {
    let ditherer = Ditherer::new(grey_palette());
    let source = vec![40u8, 40, 40, 200, 200, 200];
    let image = ditherer.dither(&source, 2, 1).unwrap();
    assert_eq!(image.to_rgb(), source);
}
