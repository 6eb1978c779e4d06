use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use std::io;
use std::path::Path;
use tracing::warn;

use lorentz_clock::relativity::{Coordinates, synchronize_clocks};

use crate::metrics::{self, DataPoint};

const PROPER_TIME: f64 = 10.0; // seconds
const PROPER_LENGTH: f64 = 100.0; // meters
const BASELINE: Coordinates = Coordinates { x: 1000.0, y: 0.0, z: 0.0 };

/// Velocity in thousandths of c. 1000 is light speed, which the engine rejects.
const MAX_PER_MILLE: u32 = 1000;

pub fn start() -> anyhow::Result<()> {
    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // State
    let mut per_mille: u32 = 0;
    let mut log: Vec<DataPoint> = Vec::new();

    loop {
        let lines = describe(per_mille);

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(2)
                .constraints([Constraint::Length(3); 5])
                .split(f.area());

            for (i, text) in lines.iter().enumerate() {
                let block = Paragraph::new(text.as_str()).block(Block::default().borders(Borders::ALL));
                f.render_widget(block, chunks[i]);
            }
        })?;

        // Input handling
        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                let previous = per_mille;
                match key.code {
                    KeyCode::Right => per_mille = (per_mille + 10).min(MAX_PER_MILLE),
                    KeyCode::Left => per_mille = per_mille.saturating_sub(10),
                    KeyCode::Up => per_mille = (per_mille + 1).min(MAX_PER_MILLE),
                    KeyCode::Down => per_mille = per_mille.saturating_sub(1),
                    KeyCode::Char('q') => {
                        crossterm::terminal::disable_raw_mode()?;
                        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
                        terminal.show_cursor()?;

                        if !log.is_empty() {
                            metrics::export_csv(Path::new("realtime.csv"), &log)?;
                            metrics::plot_results(Path::new("plot.png"), &log)?;
                            println!("✅ Data exported to realtime.csv, plot saved to plot.png");
                        }

                        break;
                    }
                    _ => {}
                }

                if per_mille != previous {
                    match metrics::snapshot(fraction(per_mille), PROPER_TIME, PROPER_LENGTH) {
                        Ok(dp) => log.push(dp),
                        Err(err) => warn!(%err, "not recording sample"),
                    }
                }
            }
        }
    }

    Ok(())
}

fn fraction(per_mille: u32) -> f64 {
    f64::from(per_mille) / 1000.0
}

fn describe(per_mille: u32) -> [String; 5] {
    let velocity_text = format!("Velocity: {:.3}c  (←/→ ±0.01c, ↑/↓ ±0.001c, q quits)", fraction(per_mille));

    let v = fraction(per_mille) * lorentz_clock::relativity::SPEED_OF_LIGHT;
    match (metrics::snapshot(fraction(per_mille), PROPER_TIME, PROPER_LENGTH), synchronize_clocks(&Coordinates::ORIGIN, &BASELINE, v)) {
        (Ok(dp), Ok(offset)) => [
            velocity_text,
            format!("Lorentz factor (γ): {:.4}", dp.gamma),
            format!("Proper time: {:.1} s | Dilated time: {:.4} s", dp.proper_time, dp.dilated_time),
            format!("Proper length: {:.1} m | Contracted length: {:.4} m", dp.proper_length, dp.contracted_length),
            format!("Clock offset over 1 km: {:.3e} s", offset),
        ],
        (Err(err), _) | (_, Err(err)) => [
            velocity_text,
            format!("Lorentz factor (γ): rejected ({err})"),
            "Proper time: - | Dilated time: -".to_string(),
            "Proper length: - | Contracted length: -".to_string(),
            "Clock offset over 1 km: -".to_string(),
        ],
    }
}
