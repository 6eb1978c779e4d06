//! Geolocation errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}
