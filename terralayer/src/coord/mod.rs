//! Coordinate conversion module
//!
//! Provides quadkey encoding for quad-tree tile addresses and conversions
//! between geographic coordinates (latitude/longitude) and Web Mercator
//! tile coordinates used by imagery providers.

mod types;

pub use types::{CoordError, TileCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM};

use std::f64::consts::PI;

/// Encodes a tile coordinate as a Bing Maps quadkey.
///
/// The quadkey has one base-4 digit per zoom level, most significant
/// first. Digit `i` combines bit `zoom - 1 - i` of the column (worth 1)
/// and of the row (worth 2). A zoom 0 tile encodes as the empty string.
///
/// # Example
///
/// ```
/// use terralayer::coord::{tile_to_quadkey, TileCoord};
///
/// let tile = TileCoord { row: 5, col: 3, zoom: 3 };
/// assert_eq!(tile_to_quadkey(&tile), "213");
/// ```
pub fn tile_to_quadkey(tile: &TileCoord) -> String {
    let mut quadkey = String::with_capacity(tile.zoom as usize);
    for bit in (0..tile.zoom).rev() {
        let mask = 1u32 << bit;
        let mut digit = 0u8;
        if tile.col & mask != 0 {
            digit += 1;
        }
        if tile.row & mask != 0 {
            digit += 2;
        }
        quadkey.push(char::from(b'0' + digit));
    }
    quadkey
}

/// Decodes a quadkey back into a tile coordinate.
///
/// The zoom level is the quadkey's length; the empty string decodes to
/// the single zoom 0 tile.
///
/// # Errors
///
/// Returns `CoordError::InvalidQuadkey` if the string contains characters
/// outside `0-3` or is longer than [`MAX_ZOOM`].
pub fn quadkey_to_tile(quadkey: &str) -> Result<TileCoord, CoordError> {
    if quadkey.len() > MAX_ZOOM as usize {
        return Err(CoordError::InvalidQuadkey(quadkey.to_string()));
    }

    let mut row = 0u32;
    let mut col = 0u32;
    for ch in quadkey.chars() {
        row <<= 1;
        col <<= 1;
        match ch {
            '0' => {}
            '1' => col |= 1,
            '2' => row |= 1,
            '3' => {
                col |= 1;
                row |= 1;
            }
            _ => return Err(CoordError::InvalidQuadkey(quadkey.to_string())),
        }
    }

    Ok(TileCoord {
        row,
        col,
        zoom: quadkey.len() as u8,
    })
}

impl TileCoord {
    /// Converts geographic coordinates to the containing tile.
    ///
    /// # Arguments
    ///
    /// * `lat` - Latitude in degrees (-85.05112878 to 85.05112878)
    /// * `lon` - Longitude in degrees (-180.0 to 180.0)
    /// * `zoom` - Zoom level (0 to 23)
    ///
    /// # Errors
    ///
    /// Returns an error if any input is outside its valid range.
    pub fn from_lat_lon(lat: f64, lon: f64, zoom: u8) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }

        let n = 2.0_f64.powi(zoom as i32);

        // Longitude maps linearly onto columns
        let col = ((lon + 180.0) / 360.0 * n) as u32;

        // Latitude maps onto rows through the Web Mercator projection
        let lat_rad = lat * PI / 180.0;
        let row = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n) as u32;

        // Clamp the east/south edges into the grid
        let max_index = (n as u32).saturating_sub(1);
        Ok(Self {
            row: row.min(max_index),
            col: col.min(max_index),
            zoom,
        })
    }

    /// Returns the latitude/longitude of this tile's northwest corner.
    pub fn to_lat_lon(&self) -> (f64, f64) {
        let n = 2.0_f64.powi(self.zoom as i32);

        let lon = self.col as f64 / n * 360.0 - 180.0;

        let y = self.row as f64 / n;
        let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
        let lat = lat_rad * 180.0 / PI;

        (lat, lon)
    }

    /// Encodes this tile as a quadkey. See [`tile_to_quadkey`].
    pub fn quadkey(&self) -> String {
        tile_to_quadkey(self)
    }
}
