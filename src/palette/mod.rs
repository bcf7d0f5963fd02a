//! Palette table, nearest-color search, and the lookup cache.
//!
//! [`Palette256`] holds the caller-supplied 256 entries plus their
//! precomputed 6-bit reduced channels. `nearest` is the brute-force
//! reference search over all entries; `ColorCache` memoizes its results in
//! a 64×64 grid keyed by reduced (red, green) so repeated colors resolve in
//! a handful of comparisons.

#[allow(clippy::module_inception)]
mod palette;

mod cache;
mod error;
mod nearest;

pub use error::PaletteError;
pub use palette::{Palette256, PALETTE_SIZE};

pub(crate) use cache::ColorCache;
pub(crate) use nearest::nearest;
