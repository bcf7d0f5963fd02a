//! Fixed-palette quantization and dithering for 256-color framebuffers.
//!
//! Maps packed 24-bit RGB images onto a caller-supplied 256-entry palette,
//! producing one byte of palette index per pixel. Nearest-color matching
//! runs in 6-bit-per-channel space, the precision a VGA DAC actually
//! displays, backed by a per-run lookup cache so repeated colors cost one
//! search.
//!
//! # Quick start
//!
//! ```
//! use vga_dither::{DitherMode, Ditherer, Palette256, RGB8};
//!
//! let greys: Vec<RGB8> = (0u8..=255).map(|v| RGB8::new(v, v, v)).collect();
//! let palette = Palette256::new(&greys)?;
//!
//! let source = vec![128u8; 32 * 32 * 3];
//! let image = Ditherer::new(palette)
//!     .mode(DitherMode::ErrorDiffusion)
//!     .dither(&source, 32, 32)?;
//!
//! assert_eq!(image.indices().len(), 32 * 32);
//! # Ok::<(), vga_dither::DitherError>(())
//! ```
//!
//! # Modes
//!
//! - [`DitherMode::Direct`]: nearest entry per pixel, fastest, visible
//!   banding on gradients.
//! - [`DitherMode::Noise`]: nearest entry after a random perturbation,
//!   trading banding for grain.
//! - [`DitherMode::Ordered`]: a 4x4 threshold pattern, deterministic and
//!   position-dependent.
//! - [`DitherMode::ErrorDiffusion`]: Floyd-Steinberg with serpentine rows,
//!   best tonal accuracy.
//!
//! # Determinism
//!
//! Direct, ordered, and error-diffusion output depends only on the input
//! and configuration. The noise modes draw from a seeded generator, so a
//! fixed seed (see [`Ditherer::noise_seed`]) reproduces runs exactly.

pub mod api;
pub mod dither;
pub mod output;
pub mod palette;
pub mod rescale;

#[cfg(test)]
mod domain_tests;

pub use api::{Ditherer, DitherError};
pub use dither::{DitherMode, ORDERED_PATTERN};
pub use output::IndexedImage;
pub use palette::{Palette256, PaletteError, PALETTE_SIZE};
pub use rgb::RGB8;
