mod metrics;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lorentz_clock::geo::{self, GeographicCoordinates};
use lorentz_clock::relativity::{
    self, Coordinates, DilatedTime, ProperTime, SPEED_OF_LIGHT, SampleGrid, SpacetimeEvent,
};

/// Lorentz Clock - special-relativistic clock arithmetic
#[derive(Parser)]
#[command(name = "lorentz-clock", about = "Time dilation, simultaneity and clock synchronization")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run interactive TUI simulation
    Tui,
    /// Sweep velocities and export to CSV and PNG
    Metrics {
        #[arg(long, default_value_t = 100)]
        steps: u32,
        /// Proper time in seconds
        #[arg(long, default_value_t = 10.0)]
        proper_time: f64,
        /// Proper length in meters
        #[arg(long, default_value_t = 100.0)]
        proper_length: f64,
        #[arg(long, default_value = "metrics.csv")]
        csv: PathBuf,
        #[arg(long, default_value = "plot.png")]
        plot: PathBuf,
    },
    /// Lorentz factor for a velocity
    Gamma(VelocityArg),
    /// Speed for a Lorentz factor
    Inverse {
        #[arg(long, allow_negative_numbers = true)]
        gamma: f64,
    },
    /// Dilate a proper time interval
    Dilate {
        #[arg(long, allow_negative_numbers = true)]
        proper_time: f64,
        #[command(flatten)]
        velocity: VelocityArg,
    },
    /// Recover proper time from a dilated interval
    Proper {
        #[arg(long, allow_negative_numbers = true)]
        dilated_time: f64,
        #[command(flatten)]
        velocity: VelocityArg,
    },
    /// |t1 - t2 * γ| for two proper intervals
    Difference {
        #[arg(long, allow_negative_numbers = true)]
        first: f64,
        #[arg(long, allow_negative_numbers = true)]
        second: f64,
        #[command(flatten)]
        velocity: VelocityArg,
    },
    /// Events simultaneous with an event in a moving frame
    Simultaneity {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        z: f64,
        /// Event proper time in seconds
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        time: f64,
        #[command(flatten)]
        velocity: VelocityArg,
        #[arg(long, default_value_t = SampleGrid::DEFAULT_START, allow_negative_numbers = true)]
        start: f64,
        #[arg(long, default_value_t = SampleGrid::DEFAULT_END, allow_negative_numbers = true)]
        end: f64,
        #[arg(long, default_value_t = SampleGrid::DEFAULT_STEP)]
        step: f64,
        /// Write the events to CSV instead of stdout
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Clock synchronization offset between two points
    Sync {
        /// x,y,z in meters
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Coordinates,
        /// x,y,z in meters
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Coordinates,
        #[command(flatten)]
        velocity: VelocityArg,
    },
    /// Earth-centered coordinates of a geographic position
    Geo {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, allow_negative_numbers = true)]
        alt: Option<f64>,
    },
    /// Geographic position of an Earth-centered point
    Ecef {
        /// x,y,z in meters
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Coordinates,
    },
    /// Great-circle distance and bearing between two positions
    Distance {
        /// lat,lon in degrees
        #[arg(long, value_parser = parse_lat_lon, allow_hyphen_values = true)]
        from: GeographicCoordinates,
        /// lat,lon in degrees
        #[arg(long, value_parser = parse_lat_lon, allow_hyphen_values = true)]
        to: GeographicCoordinates,
    },
}

#[derive(Args, Clone, Copy)]
#[group(required = true, multiple = false)]
struct VelocityArg {
    /// Velocity in m/s
    #[arg(long, allow_negative_numbers = true)]
    velocity: Option<f64>,
    /// Velocity as a fraction of c
    #[arg(long, allow_negative_numbers = true)]
    fraction: Option<f64>,
}

impl VelocityArg {
    fn meters_per_second(self) -> f64 {
        match (self.velocity, self.fraction) {
            (Some(v), _) => v,
            (None, Some(f)) => f * SPEED_OF_LIGHT,
            (None, None) => 0.0,
        }
    }
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma separated numbers, got {}", parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.parse().map_err(|e| format!("{part:?}: {e}"))?;
    }
    Ok(out)
}

fn parse_point(s: &str) -> Result<Coordinates, String> {
    let [x, y, z] = parse_floats::<3>(s)?;
    Ok(Coordinates::new(x, y, z))
}

fn parse_lat_lon(s: &str) -> Result<GeographicCoordinates, String> {
    let [lat, lon] = parse_floats::<2>(s)?;
    Ok(GeographicCoordinates::new(lat, lon))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tui) | None => tui::start()?,
        Some(Commands::Metrics { steps, proper_time, proper_length, csv, plot }) => {
            run_metrics(steps, proper_time, proper_length, &csv, &plot)?
        }
        Some(Commands::Gamma(velocity)) => {
            let gamma = relativity::lorentz_factor(velocity.meters_per_second())?;
            println!("{}", gamma.value());
        }
        Some(Commands::Inverse { gamma }) => {
            println!("{}", relativity::velocity_from_lorentz_factor(gamma)?);
        }
        Some(Commands::Dilate { proper_time, velocity }) => {
            let dilated = relativity::time_dilation(ProperTime(proper_time), velocity.meters_per_second())?;
            println!("{}", dilated.seconds());
        }
        Some(Commands::Proper { dilated_time, velocity }) => {
            let proper = relativity::proper_time(DilatedTime(dilated_time), velocity.meters_per_second())?;
            println!("{}", proper.seconds());
        }
        Some(Commands::Difference { first, second, velocity }) => {
            let diff = relativity::time_difference(ProperTime(first), ProperTime(second), velocity.meters_per_second())?;
            println!("{diff}");
        }
        Some(Commands::Simultaneity { x, y, z, time, velocity, start, end, step, csv }) => {
            let grid = SampleGrid::new(start, end, step)?;
            let event = SpacetimeEvent::new(Coordinates::new(x, y, z), ProperTime(time));
            let events: Vec<_> =
                relativity::simultaneous_events_with(&event, velocity.meters_per_second(), grid)?.collect();
            match csv {
                Some(path) => {
                    metrics::export_events_csv(&path, &events)?;
                    println!("✅ {} events written to {}", events.len(), path.display());
                }
                None => {
                    for e in &events {
                        println!("{} t={}", e.coordinates, e.time.seconds());
                    }
                }
            }
        }
        Some(Commands::Sync { from, to, velocity }) => {
            println!("{}", relativity::synchronize_clocks(&from, &to, velocity.meters_per_second())?);
        }
        Some(Commands::Geo { lat, lon, alt }) => {
            let coords = GeographicCoordinates { altitude: alt, ..GeographicCoordinates::new(lat, lon) };
            let label = geo::format_coordinates(&coords)?;
            let ecef = geo::geographic_to_ecef(&coords);
            println!("{label} -> ECEF {ecef}");
        }
        Some(Commands::Ecef { point }) => {
            println!("{}", geo::ecef_to_geographic(&point));
        }
        Some(Commands::Distance { from, to }) => {
            let meters = geo::haversine_distance(&from, &to)?;
            let bearing = geo::initial_bearing(&from, &to)?;
            println!("{meters:.3} m, bearing {bearing:.2}°");
        }
    }

    Ok(())
}

fn run_metrics(steps: u32, proper_time: f64, proper_length: f64, csv: &std::path::Path, plot: &std::path::Path) -> Result<()> {
    let log = metrics::sweep(steps, proper_time, proper_length);

    metrics::export_csv(csv, &log).with_context(|| format!("writing {}", csv.display()))?;
    println!("✅ Metrics written to {}", csv.display());

    metrics::plot_results(plot, &log).with_context(|| format!("plotting {}", plot.display()))?;
    println!("✅ Plot saved to {}", plot.display());
    Ok(())
}
