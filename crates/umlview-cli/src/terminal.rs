//! Interactive terminal front end
//!
//! Hosts a [`Viewer`] in the alternate screen. The pixel viewport from the
//! window config is mapped onto character cells; mouse presses, drags and
//! scrolls are converted back to pixel coordinates at the center of the cell
//! under the pointer.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::PrintStyledContent,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use tracing::{debug, info};
use umlview::core::box_drawing::GlyphSet;
use umlview::core::{AsciiCanvas, MonospaceMetrics, WindowConfig};
use umlview::diagram::Viewer;

use crate::colorizer::styled_rows;

/// Raw-mode terminal session, restored on drop
struct Session {
    stdout: Stdout,
}

impl Session {
    fn start(title: &str) -> Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            SetTitle(title)
        )?;
        Ok(Self { stdout })
    }

    fn draw(&mut self, canvas: &AsciiCanvas) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row, runs) in styled_rows(canvas, cols as usize)
            .into_iter()
            .take(rows as usize)
            .enumerate()
        {
            queue!(self.stdout, MoveTo(0, row as u16))?;
            for run in runs {
                queue!(self.stdout, PrintStyledContent(run))?;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// What the event loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Pixel coordinate at the center of a terminal cell
pub fn cell_to_pixel(column: u16, row: u16, metrics: MonospaceMetrics) -> (i32, i32) {
    (
        column as i32 * metrics.cell_width + metrics.cell_width / 2,
        row as i32 * metrics.cell_height + metrics.cell_height / 2,
    )
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Feed one terminal event to the viewer
pub fn handle_event(viewer: &mut Viewer<'_>, event: Event, metrics: MonospaceMetrics) -> Control {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release && is_quit(&key) => Control::Quit,
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) => {
            let (x, y) = cell_to_pixel(column, row, metrics);
            match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    viewer.pointer_down(x, y);
                }
                MouseEventKind::Drag(MouseButton::Left) => viewer.pointer_drag(x, y),
                MouseEventKind::ScrollUp => viewer.wheel(-1.0),
                MouseEventKind::ScrollDown => viewer.wheel(1.0),
                _ => {}
            }
            Control::Continue
        }
        _ => Control::Continue,
    }
}

/// Run the interactive loop until the user quits
/// Canvas covering the window's pixel viewport
fn viewer_canvas(window: &WindowConfig, metrics: MonospaceMetrics, glyphs: GlyphSet) -> AsciiCanvas {
    AsciiCanvas::from_pixels(window.width, window.height, metrics).with_glyphs(glyphs)
}

pub fn run(viewer: &mut Viewer<'_>, metrics: MonospaceMetrics, glyphs: GlyphSet) -> Result<()> {
    let window = viewer.config().window.clone();
    let tick: Duration = viewer.config().tick;
    let mut canvas = viewer_canvas(&window, metrics, glyphs);

    info!(
        title = %window.title,
        cols = canvas.width,
        rows = canvas.height,
        "Starting terminal viewer"
    );
    let mut session = Session::start(&window.title)?;
    let mut next_tick = Instant::now();

    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if handle_event(viewer, event::read()?, metrics) == Control::Quit {
                debug!("Quit requested");
                break;
            }
            while event::poll(Duration::ZERO)? {
                if handle_event(viewer, event::read()?, metrics) == Control::Quit {
                    return Ok(());
                }
            }
        }

        if Instant::now() >= next_tick {
            viewer.tick();
            canvas.clear();
            viewer.render(&mut canvas, metrics);
            session.draw(&canvas)?;
            next_tick += tick;
            // Skip missed ticks instead of replaying them
            if next_tick < Instant::now() {
                next_tick = Instant::now() + tick;
            }
        }
    }

    Ok(())
}
