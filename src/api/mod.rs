//! Public entry points: the [`Ditherer`] builder and the crate error type.

mod builder;
mod error;

pub use builder::Ditherer;
pub use error::DitherError;
