//! WGS84 geodetic <-> ECEF conversion.

use tracing::debug;

use super::GeographicCoordinates;
use super::error::{GeoError, Result};
use super::utils::is_valid_coordinate;
use crate::relativity::Coordinates;

/// Semi-major axis (m).
pub const WGS84_A: f64 = 6_378_137.0;
/// Semi-minor axis (m).
pub const WGS84_B: f64 = 6_356_752.314245;
/// First eccentricity squared.
pub const WGS84_E2: f64 = 0.006_694_379_990_141_316;

/// A raw fix as reported by a positioning source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub accuracy: Option<f64>,
    /// Ground speed (m/s).
    pub speed: Option<f64>,
    /// Degrees clockwise from true north.
    pub heading: Option<f64>,
    /// Unix time in milliseconds.
    pub timestamp_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundVelocity {
    pub speed: f64,
    pub heading: f64,
}

/// A fix in both geographic and Earth-centered form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformedPosition {
    pub geographic: GeographicCoordinates,
    pub ecef: Coordinates,
    pub timestamp_ms: u64,
    pub velocity: Option<GroundVelocity>,
}

/// Validate a fix and attach its ECEF position. Missing altitude is taken as
/// 0 m; velocity is kept only when both speed and heading are reported.
pub fn transform_position(fix: &PositionFix) -> Result<TransformedPosition> {
    let geographic = GeographicCoordinates {
        latitude: fix.latitude,
        longitude: fix.longitude,
        altitude: Some(fix.altitude.unwrap_or(0.0)),
        accuracy: fix.accuracy,
    };
    if !is_valid_coordinate(&geographic) {
        debug!(latitude = fix.latitude, longitude = fix.longitude, "rejecting position fix");
        return Err(GeoError::InvalidCoordinates { latitude: fix.latitude, longitude: fix.longitude });
    }

    let velocity = match (fix.speed, fix.heading) {
        (Some(speed), Some(heading)) => Some(GroundVelocity { speed, heading }),
        _ => None,
    };

    Ok(TransformedPosition {
        ecef: geographic_to_ecef(&geographic),
        geographic,
        timestamp_ms: fix.timestamp_ms,
        velocity,
    })
}

/// Closed-form geodetic to ECEF.
pub fn geographic_to_ecef(coords: &GeographicCoordinates) -> Coordinates {
    let altitude = coords.altitude.unwrap_or(0.0);
    let (sin_lat, cos_lat) = coords.latitude.to_radians().sin_cos();
    let (sin_lon, cos_lon) = coords.longitude.to_radians().sin_cos();

    // Prime vertical radius of curvature
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();

    Coordinates {
        x: (n + altitude) * cos_lat * cos_lon,
        y: (n + altitude) * cos_lat * sin_lon,
        z: (n * (1.0 - WGS84_E2) + altitude) * sin_lat,
    }
}

/// ECEF to geodetic using Bowring's single-step approximation. Accurate to
/// well under a millimeter for positions near the Earth's surface; unstable
/// at the poles, where cos(latitude) vanishes.
pub fn ecef_to_geographic(coords: &Coordinates) -> GeographicCoordinates {
    let Coordinates { x, y, z } = *coords;
    let p = x.hypot(y);
    let theta = (z * WGS84_A).atan2(p * WGS84_B);
    let (sin_theta, cos_theta) = theta.sin_cos();

    let lat = (z + WGS84_E2 * WGS84_B * sin_theta.powi(3)).atan2(p - WGS84_E2 * WGS84_A * cos_theta.powi(3));
    let lon = y.atan2(x);

    let sin_lat = lat.sin();
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    let altitude = p / lat.cos() - n;

    GeographicCoordinates {
        latitude: lat.to_degrees(),
        longitude: lon.to_degrees(),
        altitude: Some(altitude),
        accuracy: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_prime_meridian() {
        let ecef = geographic_to_ecef(&GeographicCoordinates::new(0.0, 0.0));
        assert!((ecef.x - WGS84_A).abs() < 1e-6);
        assert!(ecef.y.abs() < 1e-6);
        assert!(ecef.z.abs() < 1e-6);
    }

    #[test]
    fn north_pole_sits_on_minor_axis() {
        let ecef = geographic_to_ecef(&GeographicCoordinates::new(90.0, 0.0));
        assert!((ecef.z - WGS84_B).abs() < 1e-3, "{ecef}");
        assert!(ecef.x.abs() < 1e-3);
    }

    #[test]
    fn altitude_extends_radius() {
        let ecef = geographic_to_ecef(&GeographicCoordinates::new(0.0, 90.0).with_altitude(1000.0));
        assert!((ecef.y - (WGS84_A + 1000.0)).abs() < 1e-6);
    }

    #[test]
    fn round_trip_mid_latitude() {
        let original = GeographicCoordinates::new(48.8584, 2.2945).with_altitude(35.0);
        let back = ecef_to_geographic(&geographic_to_ecef(&original));
        assert!((back.latitude - original.latitude).abs() < 1e-8);
        assert!((back.longitude - original.longitude).abs() < 1e-8);
        assert!((back.altitude.unwrap() - 35.0).abs() < 1e-3);
    }

    #[test]
    fn fix_keeps_velocity_only_when_complete() {
        let fix = PositionFix {
            latitude: 10.0,
            longitude: 20.0,
            speed: Some(3.0),
            heading: Some(0.0),
            timestamp_ms: 42,
            ..Default::default()
        };
        let pos = transform_position(&fix).unwrap();
        assert_eq!(pos.velocity, Some(GroundVelocity { speed: 3.0, heading: 0.0 }));
        assert_eq!(pos.geographic.altitude, Some(0.0));
        assert_eq!(pos.timestamp_ms, 42);
        assert_eq!(pos.ecef, geographic_to_ecef(&GeographicCoordinates::new(10.0, 20.0)));

        let pos = transform_position(&PositionFix { heading: None, ..fix }).unwrap();
        assert_eq!(pos.velocity, None);
    }

    #[test]
    fn invalid_fix_is_rejected() {
        let fix = PositionFix { latitude: -91.0, ..Default::default() };
        assert_eq!(
            transform_position(&fix).unwrap_err(),
            GeoError::InvalidCoordinates { latitude: -91.0, longitude: 0.0 }
        );
    }
}
