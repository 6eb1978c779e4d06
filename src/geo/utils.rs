use super::GeographicCoordinates;
use super::error::{GeoError, Result};

/// Mean Earth radius used by the spherical formulas (m).
pub const EARTH_MEAN_RADIUS: f64 = 6_371_000.0;

/// Latitude within ±90°, longitude within ±180°, altitude (if any) not NaN.
pub fn is_valid_coordinate(coords: &GeographicCoordinates) -> bool {
    (-90.0..=90.0).contains(&coords.latitude)
        && (-180.0..=180.0).contains(&coords.longitude)
        && coords.altitude.is_none_or(|alt| !alt.is_nan())
}

fn ensure_valid(coords: &GeographicCoordinates) -> Result<()> {
    if is_valid_coordinate(coords) {
        Ok(())
    } else {
        Err(GeoError::InvalidCoordinates { latitude: coords.latitude, longitude: coords.longitude })
    }
}

/// Great-circle distance (m) by the haversine formula.
pub fn haversine_distance(a: &GeographicCoordinates, b: &GeographicCoordinates) -> Result<f64> {
    ensure_valid(a)?;
    ensure_valid(b)?;

    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_MEAN_RADIUS * c)
}

/// Initial bearing from `start` towards `end`, degrees clockwise from true
/// north in [0, 360).
pub fn initial_bearing(start: &GeographicCoordinates, end: &GeographicCoordinates) -> Result<f64> {
    ensure_valid(start)?;
    ensure_valid(end)?;

    let phi1 = start.latitude.to_radians();
    let phi2 = end.latitude.to_radians();
    let d_lambda = (end.longitude - start.longitude).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    Ok((y.atan2(x).to_degrees() + 360.0) % 360.0)
}

/// Human readable form, e.g. `48.858400°N 2.294500°E 35.00m`.
pub fn format_coordinates(coords: &GeographicCoordinates) -> Result<String> {
    ensure_valid(coords)?;
    Ok(coords.to_string())
}
