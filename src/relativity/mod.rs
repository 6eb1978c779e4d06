//! Special-relativistic kinematics.

pub mod dilation;
pub mod error;
pub mod special;
pub mod synchronization;
pub mod units;

pub use dilation::{proper_time, time_difference, time_dilation};
pub use error::{Quantity, RelativityError, Result};
pub use special::{
    MAX_LORENTZ_FACTOR, MAX_SAFE_VELOCITY, MIN_SAFE_VELOCITY, SPEED_OF_LIGHT, is_valid_velocity,
    length_contraction, lorentz_factor, velocity_from_lorentz_factor,
};
pub use synchronization::{SampleGrid, SimultaneousEvents, simultaneous_events, simultaneous_events_with, synchronize_clocks};
pub use units::{Coordinates, DilatedTime, LorentzFactor, ProperTime, SpacetimeEvent};
