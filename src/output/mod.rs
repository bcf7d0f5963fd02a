//! Result types returned to callers.

mod indexed_image;

pub use indexed_image::IndexedImage;
