//! Time dilation between inertial frames.

use super::error::Result;
use super::special::lorentz_factor;
use super::units::{DilatedTime, LorentzFactor, ProperTime};

/// Dilated time t' = t * γ
pub fn time_dilation(proper: ProperTime, velocity: f64) -> Result<DilatedTime> {
    let gamma = lorentz_factor(velocity)?;
    Ok(dilate(proper, gamma))
}

/// Dilation with a factor the caller already holds.
pub(crate) fn dilate(proper: ProperTime, gamma: LorentzFactor) -> DilatedTime {
    DilatedTime(proper.0 * gamma.value())
}

/// Proper time t = t' / γ
pub fn proper_time(dilated: DilatedTime, velocity: f64) -> Result<ProperTime> {
    let gamma = lorentz_factor(velocity)?;
    Ok(ProperTime(dilated.0 / gamma.value()))
}

/// |t1 - t2 * γ|: the first interval against the second one dilated by the
/// relative velocity. Never negative.
pub fn time_difference(first: ProperTime, second: ProperTime, relative_velocity: f64) -> Result<f64> {
    let gamma = lorentz_factor(relative_velocity)?;
    Ok((first.0 - second.0 * gamma.value()).abs())
}
