//! Value types for relativistic kinematics.
//!
//! Times are tagged by the frame they are measured in so that a proper
//! interval cannot be passed where a dilated one is expected. All values are
//! SI: seconds, meters, meters/second.

use std::fmt;

/// Interval measured by a clock in its own rest frame (s).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ProperTime(pub f64);

/// Interval as measured by an observer in relative motion (s).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct DilatedTime(pub f64);

impl ProperTime {
    pub fn new(seconds: f64) -> Self {
        Self(seconds)
    }

    pub fn seconds(self) -> f64 {
        self.0
    }
}

impl DilatedTime {
    pub fn new(seconds: f64) -> Self {
        Self(seconds)
    }

    pub fn seconds(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ProperTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s (proper)", self.0)
    }
}

impl fmt::Display for DilatedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s (dilated)", self.0)
    }
}

/// Lorentz factor γ.
///
/// Only obtainable through [`crate::relativity::special::lorentz_factor`],
/// so a held value is always finite and at least 1.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LorentzFactor(f64);

impl LorentzFactor {
    /// γ at rest.
    pub const UNITY: LorentzFactor = LorentzFactor(1.0);

    pub(crate) fn new_unchecked(gamma: f64) -> Self {
        debug_assert!(gamma.is_finite() && gamma >= 1.0);
        Self(gamma)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Length contraction factor 1/γ.
    pub fn contraction(self) -> f64 {
        1.0 / self.0
    }
}

impl fmt::Display for LorentzFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "γ={}", self.0)
    }
}

/// Spatial position (m) in a chosen frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinates {
    pub const ORIGIN: Coordinates = Coordinates { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A position paired with a time.
///
/// The time parameter records which frame the time belongs to: input events
/// carry [`ProperTime`], events judged simultaneous in a moving frame carry
/// [`DilatedTime`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacetimeEvent<T = ProperTime> {
    pub coordinates: Coordinates,
    pub time: T,
}

impl<T> SpacetimeEvent<T> {
    pub fn new(coordinates: Coordinates, time: T) -> Self {
        Self { coordinates, time }
    }
}
