//! Decoded tile image types

mod image;

pub use image::TileImage;
