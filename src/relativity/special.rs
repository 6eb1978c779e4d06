use tracing::{debug, trace};

use super::error::{Quantity, RelativityError, Result};
use super::units::LorentzFactor;

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Upper bound on accepted velocities. Near c the denominator of γ loses all
/// precision, so the engine stops at a fraction 1e-7 short of it.
pub const MAX_SAFE_VELOCITY: f64 = SPEED_OF_LIGHT * 0.999_999_9;

/// Lower bound on accepted velocities.
pub const MIN_SAFE_VELOCITY: f64 = -MAX_SAFE_VELOCITY;

/// Largest Lorentz factor the engine will hand out.
pub const MAX_LORENTZ_FACTOR: f64 = f64::MAX;

/// Lorentz factor γ = 1 / sqrt(1 - v^2/c^2)
pub fn lorentz_factor(velocity: f64) -> Result<LorentzFactor> {
    if velocity <= MIN_SAFE_VELOCITY || velocity >= MAX_SAFE_VELOCITY {
        debug!(velocity, "velocity outside safe domain");
        return Err(RelativityError::velocity_out_of_domain(velocity));
    }

    let beta = velocity / SPEED_OF_LIGHT;
    let gamma = 1.0 / (1.0 - beta * beta).sqrt();

    // NaN input slips past the range check and lands here.
    if !gamma.is_finite() || gamma > MAX_LORENTZ_FACTOR {
        debug!(velocity, gamma, "Lorentz factor not representable");
        return Err(RelativityError::overflow(Quantity::LorentzFactor, gamma));
    }

    trace!(velocity, gamma, "lorentz factor");
    Ok(LorentzFactor::new_unchecked(gamma))
}

/// True when `velocity` is finite and strictly inside the safe bounds.
pub fn is_valid_velocity(velocity: f64) -> bool {
    velocity.is_finite() && velocity > MIN_SAFE_VELOCITY && velocity < MAX_SAFE_VELOCITY
}

/// Speed for a given Lorentz factor: v = c * sqrt(1 - 1/γ^2)
///
/// The result is a speed, so it is never negative.
pub fn velocity_from_lorentz_factor(gamma: f64) -> Result<f64> {
    if !gamma.is_finite() || gamma < 1.0 || gamma > MAX_LORENTZ_FACTOR {
        debug!(gamma, "Lorentz factor outside domain");
        return Err(RelativityError::gamma_out_of_domain(gamma));
    }

    let velocity = SPEED_OF_LIGHT * (1.0 - 1.0 / (gamma * gamma)).sqrt();

    if !is_valid_velocity(velocity) {
        debug!(gamma, velocity, "recovered velocity outside safe domain");
        return Err(RelativityError::overflow(Quantity::Velocity, velocity));
    }

    Ok(velocity)
}

/// Length contraction: L = L0 / γ
pub fn length_contraction(proper_length: f64, velocity: f64) -> Result<f64> {
    let gamma = lorentz_factor(velocity)?;
    Ok(proper_length * gamma.contraction())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
    }

    // v/c = sqrt(3)/2 gives γ = 2
    fn gamma_two_velocity() -> f64 {
        SPEED_OF_LIGHT * 3.0_f64.sqrt() / 2.0
    }

    #[test]
    fn at_rest_is_exactly_one() {
        assert_eq!(lorentz_factor(0.0).unwrap().value(), 1.0);
        assert_eq!(lorentz_factor(-0.0).unwrap().value(), 1.0);
    }

    #[test]
    fn known_value() {
        let gamma = lorentz_factor(gamma_two_velocity()).unwrap();
        assert!(close(gamma.value(), 2.0, 1e-12), "{gamma}");

        let gamma = lorentz_factor(-gamma_two_velocity()).unwrap();
        assert!(close(gamma.value(), 2.0, 1e-12), "{gamma}");
    }

    #[test]
    fn bounds_are_rejected() {
        for v in [
            MAX_SAFE_VELOCITY,
            MIN_SAFE_VELOCITY,
            SPEED_OF_LIGHT,
            -SPEED_OF_LIGHT,
            2.0 * SPEED_OF_LIGHT,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ] {
            let err = lorentz_factor(v).unwrap_err();
            assert!(err.is_out_of_domain(), "{v}: {err}");
        }
    }

    #[test]
    fn nan_is_overflow() {
        let err = lorentz_factor(f64::NAN).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn just_inside_bound_is_finite() {
        let v = MAX_SAFE_VELOCITY - 1.0;
        let gamma = lorentz_factor(v).unwrap();
        assert!(gamma.value().is_finite());
        assert!(gamma.value() > 2000.0);
    }

    #[test]
    fn validity_matches_domain() {
        assert!(is_valid_velocity(0.0));
        assert!(is_valid_velocity(MAX_SAFE_VELOCITY - 1.0));
        assert!(is_valid_velocity(MIN_SAFE_VELOCITY + 1.0));
        assert!(!is_valid_velocity(MAX_SAFE_VELOCITY));
        assert!(!is_valid_velocity(MIN_SAFE_VELOCITY));
        assert!(!is_valid_velocity(f64::NAN));
        assert!(!is_valid_velocity(f64::INFINITY));
    }

    #[test]
    fn inverse_of_two() {
        let v = velocity_from_lorentz_factor(2.0).unwrap();
        assert!(close(v, gamma_two_velocity(), 1e-12));
        assert_eq!(velocity_from_lorentz_factor(1.0).unwrap(), 0.0);
    }

    #[test]
    fn inverse_rejects_bad_gamma() {
        for gamma in [0.5, 0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = velocity_from_lorentz_factor(gamma).unwrap_err();
            assert!(err.is_out_of_domain(), "{gamma}: {err}");
        }
    }

    #[test]
    fn inverse_overflows_past_safe_speed() {
        let err = velocity_from_lorentz_factor(MAX_LORENTZ_FACTOR).unwrap_err();
        assert!(err.is_overflow());
        let err = velocity_from_lorentz_factor(1.0e6).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn contraction_halves_at_gamma_two() {
        let l = length_contraction(100.0, gamma_two_velocity()).unwrap();
        assert!(close(l, 50.0, 1e-12));
        assert!(length_contraction(100.0, SPEED_OF_LIGHT).is_err());
    }
}
