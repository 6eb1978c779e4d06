//! Relativity of simultaneity and clock synchronization.
//!
//! [`simultaneous_events`] samples the simultaneity surface of an event along
//! the x axis. The Lorentz factor is derived once per call and shared by the
//! dilated event time, the length contraction and every sample.

use std::iter::FusedIterator;

use tracing::debug;

use super::dilation::dilate;
use super::error::{RelativityError, Result};
use super::special::{SPEED_OF_LIGHT, lorentz_factor};
use super::units::{Coordinates, DilatedTime, ProperTime, SpacetimeEvent};

const C_SQUARED: f64 = SPEED_OF_LIGHT * SPEED_OF_LIGHT;

/// Upper limit on samples in one grid.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Evenly spaced x offsets (m) at which simultaneous events are sampled.
///
/// Offset `i` is `start + i * step`, for every `i` that stays within `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleGrid {
    start: f64,
    end: f64,
    step: f64,
    len: usize,
}

impl SampleGrid {
    pub const DEFAULT_START: f64 = -1000.0;
    pub const DEFAULT_END: f64 = 1000.0;
    pub const DEFAULT_STEP: f64 = 100.0;

    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(RelativityError::InvalidSampling(format!(
                "bounds must be finite (start={start}, end={end}, step={step})"
            )));
        }
        if step <= 0.0 {
            return Err(RelativityError::InvalidSampling(format!("step must be positive, got {step}")));
        }
        if start > end {
            return Err(RelativityError::InvalidSampling(format!("start {start} is past end {end}")));
        }

        // Tolerate representation error so that e.g. 0.3 / 0.1 still counts 4 samples.
        let intervals = ((end - start) / step + 1e-9).floor();
        if intervals >= MAX_SAMPLES as f64 {
            return Err(RelativityError::InvalidSampling(format!(
                "grid has more than {MAX_SAMPLES} samples"
            )));
        }

        Ok(Self { start, end, step, len: intervals as usize + 1 })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of sample `index`.
    pub fn offset(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }
}

impl Default for SampleGrid {
    /// -1000 m to 1000 m in 100 m steps: 21 samples.
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
            step: Self::DEFAULT_STEP,
            len: 21,
        }
    }
}

/// Lazy sequence of events judged simultaneous, in the moving frame, with a
/// reference event. Ordered by ascending x offset.
#[derive(Clone, Debug)]
pub struct SimultaneousEvents {
    grid: SampleGrid,
    index: usize,
    velocity: f64,
    contraction: f64,
    dilated_time: f64,
    y: f64,
    z: f64,
}

impl SimultaneousEvents {
    /// Length contraction factor 1/γ applied to every x coordinate.
    pub fn contraction(&self) -> f64 {
        self.contraction
    }

    /// The reference event's time in the moving frame.
    pub fn dilated_time(&self) -> DilatedTime {
        DilatedTime(self.dilated_time)
    }
}

impl Iterator for SimultaneousEvents {
    type Item = SpacetimeEvent<DilatedTime>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.grid.len {
            return None;
        }
        let x = self.grid.offset(self.index);
        self.index += 1;

        let coordinates = Coordinates::new(x * self.contraction, self.y, self.z);
        let simultaneity_shift = self.velocity * x / C_SQUARED;
        Some(SpacetimeEvent::new(coordinates, DilatedTime(self.dilated_time + simultaneity_shift)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len - self.index.min(self.grid.len);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SimultaneousEvents {}

impl FusedIterator for SimultaneousEvents {}

/// Events simultaneous with `event` in a frame moving at `velocity`, sampled
/// on the default grid.
pub fn simultaneous_events(event: &SpacetimeEvent<ProperTime>, velocity: f64) -> Result<SimultaneousEvents> {
    simultaneous_events_with(event, velocity, SampleGrid::default())
}

/// [`simultaneous_events`] over a caller supplied grid.
pub fn simultaneous_events_with(
    event: &SpacetimeEvent<ProperTime>,
    velocity: f64,
    grid: SampleGrid,
) -> Result<SimultaneousEvents> {
    let gamma = lorentz_factor(velocity)?;
    let dilated = dilate(event.time, gamma);

    debug!(velocity, gamma = gamma.value(), samples = grid.len(), "sampling simultaneity surface");

    Ok(SimultaneousEvents {
        grid,
        index: 0,
        velocity,
        contraction: gamma.contraction(),
        dilated_time: dilated.0,
        y: event.coordinates.y,
        z: event.coordinates.z,
    })
}

/// Synchronization offset (s) between clocks at two locations, expressed in
/// the moving observer's frame: γ * v * |b - a| / c^2
pub fn synchronize_clocks(a: &Coordinates, b: &Coordinates, velocity: f64) -> Result<f64> {
    let gamma = lorentz_factor(velocity)?;
    let separation = a.distance_to(b);
    let offset = velocity * separation / C_SQUARED;
    Ok(offset * gamma.value())
}
