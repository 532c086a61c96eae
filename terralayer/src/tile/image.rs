//! Decoded raster tile.

use image::DynamicImage;

/// A decoded raster tile image.
///
/// Wraps the decoded pixels so callers receive an owned, ready-to-use
/// raster rather than encoded provider bytes. Ownership passes to the
/// caller when a fetch resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct TileImage {
    image: DynamicImage,
}

impl TileImage {
    /// Decodes encoded image bytes (JPEG, PNG, ...) into a tile image.
    ///
    /// # Errors
    ///
    /// Returns the underlying decode error if the payload is not a
    /// recognizable image format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self { image })
    }

    /// Pixel width of the tile.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Pixel height of the tile.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrows the decoded pixels.
    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    /// Consumes the tile and returns the decoded pixels.
    pub fn into_inner(self) -> DynamicImage {
        self.image
    }
}

impl From<DynamicImage> for TileImage {
    fn from(image: DynamicImage) -> Self {
        Self { image }
    }
}
