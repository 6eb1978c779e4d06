//! Concrete end-to-end scenarios through the public API.

use lorentz_clock::geo::{self, GeographicCoordinates, PositionFix};
use lorentz_clock::relativity::{
    Coordinates, MAX_SAFE_VELOCITY, ProperTime, RelativityError, SPEED_OF_LIGHT, SpacetimeEvent, lorentz_factor,
    simultaneous_events, synchronize_clocks, time_dilation, velocity_from_lorentz_factor,
};

fn approx(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

/// v/c = sqrt(3)/2, so γ = 2.
fn gamma_two_velocity() -> f64 {
    SPEED_OF_LIGHT * 3.0_f64.sqrt() / 2.0
}

#[test]
fn rest_frame_gamma_is_one() {
    assert_eq!(lorentz_factor(0.0).unwrap().value(), 1.0);
}

#[test]
fn gamma_two() {
    let v = gamma_two_velocity();
    assert!(approx(v, 259_627_884.49, 1e-9));
    assert!(approx(lorentz_factor(v).unwrap().value(), 2.0, 1e-9));
    assert!(approx(time_dilation(ProperTime(1.0), v).unwrap().seconds(), 2.0, 1e-9));
}

#[test]
fn light_speed_is_out_of_domain() {
    assert!(matches!(lorentz_factor(SPEED_OF_LIGHT), Err(RelativityError::OutOfDomain { .. })));
    assert!(matches!(lorentz_factor(MAX_SAFE_VELOCITY), Err(RelativityError::OutOfDomain { .. })));
}

#[test]
fn gamma_below_one_is_out_of_domain() {
    assert!(matches!(velocity_from_lorentz_factor(0.5), Err(RelativityError::OutOfDomain { .. })));
}

#[test]
fn zero_separation_has_no_offset() {
    for v in [0.0, 1.0, -1.0e6, 0.5 * SPEED_OF_LIGHT, MAX_SAFE_VELOCITY - 1.0] {
        assert_eq!(synchronize_clocks(&Coordinates::ORIGIN, &Coordinates::ORIGIN, v).unwrap(), 0.0);
    }
}

#[test]
fn simultaneity_surface_at_gamma_two() {
    let v = gamma_two_velocity();
    let event = SpacetimeEvent::new(Coordinates::new(12.0, -4.0, 9.5), ProperTime(3.0));
    let events: Vec<_> = simultaneous_events(&event, v).unwrap().collect();

    assert_eq!(events.len(), 21);
    for (i, e) in events.iter().enumerate() {
        let x = -1000.0 + 100.0 * i as f64;
        assert!(approx(e.coordinates.x, x / 2.0, 1e-9), "sample {i}: {}", e.coordinates);
        assert_eq!(e.coordinates.y, -4.0);
        assert_eq!(e.coordinates.z, 9.5);
        let expected = 6.0 + v * x / (SPEED_OF_LIGHT * SPEED_OF_LIGHT);
        assert!(approx(e.time.seconds(), expected, 1e-9), "sample {i}: {}", e.time);
    }
}

#[test]
fn simultaneity_is_recomputed_per_call() {
    let event = SpacetimeEvent::new(Coordinates::ORIGIN, ProperTime(1.0));
    let first: Vec<_> = simultaneous_events(&event, 1.0e7).unwrap().collect();
    let second: Vec<_> = simultaneous_events(&event, 1.0e7).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn synchronize_two_surface_positions() {
    let paris = GeographicCoordinates::new(48.8566, 2.3522);
    let london = GeographicCoordinates::new(51.5074, -0.1278);
    let a = geo::geographic_to_ecef(&paris);
    let b = geo::geographic_to_ecef(&london);

    let v = 30_000.0;
    let offset = synchronize_clocks(&a, &b, v).unwrap();
    let chord = a.distance_to(&b);
    assert!(chord > 340_000.0 && chord < 345_000.0, "{chord}");
    assert!(approx(offset, v * chord / (SPEED_OF_LIGHT * SPEED_OF_LIGHT), 1e-6));
}

#[test]
fn position_fix_feeds_synchronization() {
    let fix = PositionFix { latitude: 0.0, longitude: 0.0, altitude: Some(100.0), ..Default::default() };
    let pos = geo::transform_position(&fix).unwrap();
    assert!(approx(pos.ecef.x, 6_378_237.0, 1e-12));

    let offset = synchronize_clocks(&Coordinates::ORIGIN, &pos.ecef, 0.0).unwrap();
    assert_eq!(offset, 0.0);
}
