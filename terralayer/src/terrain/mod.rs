//! Elevation geometry loading
//!
//! Terrain renderers displace each tile's mesh by a grid of elevation
//! samples. [`HeightSource`] is the capability seam: concrete sources
//! load the grid for a tile however they like (a heightmap service, a
//! local dataset), and [`FlatHeightSource`] serves zero elevation for
//! imagery-only rendering.

use crate::coord::TileCoord;
use std::fmt;
use std::future::Future;

/// Square grid of elevation samples covering one tile.
///
/// Samples are in meters above the reference ellipsoid, row-major from
/// the tile's northwest corner.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    size: u32,
    samples: Vec<f32>,
}

impl HeightField {
    /// Creates a height field from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns `TerrainError::InvalidDimensions` unless exactly
    /// `size * size` samples are supplied.
    pub fn new(size: u32, samples: Vec<f32>) -> Result<Self, TerrainError> {
        let expected = size as usize * size as usize;
        if samples.len() != expected {
            return Err(TerrainError::InvalidDimensions {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { size, samples })
    }

    /// Creates an all-zero height field of the given grid size.
    pub fn flat(size: u32) -> Self {
        Self {
            size,
            samples: vec![0.0; size as usize * size as usize],
        }
    }

    /// Grid size along one axis.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample at a grid position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn sample(&self, row: u32, col: u32) -> f32 {
        assert!(row < self.size && col < self.size, "sample outside grid");
        self.samples[row as usize * self.size as usize + col as usize]
    }

    /// Returns true if every sample is zero elevation.
    pub fn is_flat(&self) -> bool {
        self.samples.iter().all(|s| *s == 0.0)
    }
}

/// Errors from elevation loading.
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// Sample count does not match the declared grid size
    InvalidDimensions { expected: usize, actual: usize },
    /// The underlying elevation source failed
    Source(String),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidDimensions { expected, actual } => {
                write!(
                    f,
                    "Height field needs {} samples, got {}",
                    expected, actual
                )
            }
            TerrainError::Source(msg) => write!(f, "Elevation source error: {}", msg),
        }
    }
}

impl std::error::Error for TerrainError {}

/// Capability to load elevation geometry for a tile.
///
/// Implementors resolve a tile address to the height field a renderer
/// displaces that tile's mesh by.
pub trait HeightSource: Send + Sync {
    /// Loads the elevation grid for one tile.
    fn load_height_geometry(
        &self,
        tile: &TileCoord,
    ) -> impl Future<Output = Result<HeightField, TerrainError>> + Send;

    /// Returns the source's name for logging and identification.
    fn name(&self) -> &str;
}

/// Elevation source that yields zero elevation everywhere.
///
/// Tiles displaced by it render as a flat mesh, which is the correct
/// behavior when no elevation dataset is wired up.
#[derive(Debug, Clone, Copy)]
pub struct FlatHeightSource {
    grid_size: u32,
}

impl FlatHeightSource {
    /// Default elevation grid size per tile.
    pub const DEFAULT_GRID_SIZE: u32 = 33;

    /// Creates a flat source with the default grid size.
    pub fn new() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
        }
    }

    /// Creates a flat source with a custom grid size.
    pub fn with_grid_size(grid_size: u32) -> Self {
        Self { grid_size }
    }
}

impl Default for FlatHeightSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HeightSource for FlatHeightSource {
    async fn load_height_geometry(&self, _tile: &TileCoord) -> Result<HeightField, TerrainError> {
        Ok(HeightField::flat(self.grid_size))
    }

    fn name(&self) -> &str {
        "flat"
    }
}
