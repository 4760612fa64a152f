//! Terminal viewer for the compiled curve
//!
//! Thin by design: samples the generated callables over one angular period,
//! projects the samples into the unit square, and draws the closed outline
//! on a canvas. The terminal session follows the usual raw-mode setup and
//! teardown; `q`, `Esc`, or `Ctrl+C` quits.

use crate::config::GraphConfig;
use crate::function;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Canvas, Line};
use ratatui::widgets::{Block, Borders};
use ratatui::{Frame, Terminal};
use std::f64::consts::PI;
use std::io;
use std::time::Duration;

/// Sample the curve over `t ∈ [0, 2π]` at the configured step, projected
/// into the unit square by the window dimensions and scale.
pub fn sample_outline(graph: &GraphConfig) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    if graph.step <= 0.0 {
        // A non-positive step would never cover the domain.
        return points;
    }
    let mut t = 0.0;
    while t <= 2.0 * PI {
        points.push((
            function::fx(t) / (graph.scale * graph.width),
            function::fy(t) / (graph.scale * graph.height),
        ));
        t += graph.step;
    }
    points
}

/// Run the viewer until the user quits.
pub fn run(graph: &GraphConfig) -> io::Result<()> {
    let points = sample_outline(graph);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &points);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    points: &[(f64, f64)],
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, points))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key) {
                    return Ok(());
                }
            }
        }
    }
}

fn handle_key_event(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

/// Draw the closed outline: segments between consecutive samples plus the
/// closing segment back to the first.
fn draw(frame: &mut Frame, points: &[(f64, f64)]) {
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("curveml"))
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for pair in points.windows(2) {
                ctx.draw(&Line {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color: Color::White,
                });
            }
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                ctx.draw(&Line {
                    x1: last.0,
                    y1: last.1,
                    x2: first.0,
                    y2: first.1,
                    color: Color::White,
                });
            }
        });
    frame.render_widget(canvas, frame.area());
}
