use std::path::Path;

use anyhow::{Result, ensure};
use plotters::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use lorentz_clock::relativity::{
    self, DilatedTime, ProperTime, SPEED_OF_LIGHT, SpacetimeEvent, length_contraction, lorentz_factor,
};

#[derive(Debug, Clone, Serialize)]
pub struct DataPoint {
    pub velocity_fraction: f64,
    pub gamma: f64,
    pub proper_time: f64,
    pub dilated_time: f64,
    pub proper_length: f64,
    pub contracted_length: f64,
}

/// One row of a simultaneity surface export.
#[derive(Debug, Serialize)]
struct EventRow {
    x: f64,
    y: f64,
    z: f64,
    time: f64,
}

/// Relativistic quantities at `velocity_fraction` of c.
pub fn snapshot(velocity_fraction: f64, proper_time: f64, proper_length: f64) -> relativity::Result<DataPoint> {
    let v = velocity_fraction * SPEED_OF_LIGHT;
    let gamma = lorentz_factor(v)?;
    let dilated_time = relativity::time_dilation(ProperTime(proper_time), v)?;
    let contracted_length = length_contraction(proper_length, v)?;

    Ok(DataPoint {
        velocity_fraction,
        gamma: gamma.value(),
        proper_time,
        dilated_time: dilated_time.seconds(),
        proper_length,
        contracted_length,
    })
}

/// Sample `steps` evenly spaced fractions of c in [0, 1). Fractions outside
/// the safe domain are skipped.
pub fn sweep(steps: u32, proper_time: f64, proper_length: f64) -> Vec<DataPoint> {
    (0..steps)
        .filter_map(|i| {
            let v_frac = f64::from(i) / f64::from(steps);
            match snapshot(v_frac, proper_time, proper_length) {
                Ok(dp) => Some(dp),
                Err(err) => {
                    debug!(v_frac, %err, "skipping sample");
                    None
                }
            }
        })
        .collect()
}

pub fn export_csv(path: &Path, log: &[DataPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for dp in log {
        writer.serialize(dp)?;
    }
    writer.flush()?;
    info!(rows = log.len(), path = %path.display(), "metrics exported");
    Ok(())
}

pub fn export_events_csv(path: &Path, events: &[SpacetimeEvent<DilatedTime>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for event in events {
        writer.serialize(EventRow {
            x: event.coordinates.x,
            y: event.coordinates.y,
            z: event.coordinates.z,
            time: event.time.seconds(),
        })?;
    }
    writer.flush()?;
    info!(rows = events.len(), path = %path.display(), "events exported");
    Ok(())
}

pub fn plot_results(path: &Path, log: &[DataPoint]) -> Result<()> {
    ensure!(!log.is_empty(), "nothing to plot");

    let y_max = log
        .iter()
        .flat_map(|d| [d.dilated_time, d.contracted_length, d.gamma])
        .fold(1.0, f64::max)
        .ceil();

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Relativity Effects", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..1f64, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Velocity (fraction of c)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.velocity_fraction, d.dilated_time)),
            &BLUE,
        ))?
        .label("Time Dilation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.velocity_fraction, d.contracted_length)),
            &RED,
        ))?
        .label("Length Contraction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RED));

    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.velocity_fraction, d.gamma)),
            &GREEN,
        ))?
        .label("Lorentz Factor γ")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &GREEN));

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()?;

    info!(path = %path.display(), "plot saved");
    Ok(())
}
