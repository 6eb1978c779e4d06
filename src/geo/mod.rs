//! Geographic positions and their conversion into Earth-centered Cartesian
//! coordinates usable by [`crate::relativity::synchronize_clocks`].

pub mod error;
pub mod transform;
pub mod utils;

use std::fmt;

pub use error::{GeoError, Result};
pub use transform::{
    GroundVelocity, PositionFix, TransformedPosition, ecef_to_geographic, geographic_to_ecef, transform_position,
};
pub use utils::{format_coordinates, haversine_distance, initial_bearing, is_valid_coordinate};

/// WGS84 position. Degrees for angles, meters for lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeographicCoordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    /// Horizontal accuracy radius.
    pub accuracy: Option<f64>,
}

impl GeographicCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude, altitude: None, accuracy: None }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(f, "{:.6}°{ns} {:.6}°{ew}", self.latitude.abs(), self.longitude.abs())?;
        match self.altitude {
            Some(alt) if alt != 0.0 => write!(f, " {alt:.2}m"),
            _ => Ok(()),
        }
    }
}
