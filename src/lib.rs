//! Special-relativistic clock arithmetic.
//!
//! [`relativity`] holds the kinematics engine: Lorentz factor, time
//! dilation, relativity of simultaneity and two-point clock synchronization.
//! Every operation is a pure function of its inputs that rejects velocities
//! outside the safe domain instead of clamping them.
//!
//! [`geo`] converts device positions into Earth-centered coordinates that can
//! be fed to [`relativity::synchronize_clocks`].

pub mod geo;
pub mod relativity;
