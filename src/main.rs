//! Application entry point.
//!
//! With arguments, snipdex runs as a plain CLI and exits. Without, it
//! launches the full-screen TUI: raw mode plus alternate screen, an event
//! loop whose poll timeout tightens while a search debounce is pending,
//! and guaranteed terminal restoration on the way out.

use color_eyre::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use snipdex::app::App;
use snipdex::{cli, handlers};
use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

/// Idle poll interval when no debounce deadline is pending.
const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return cli::execute_cli(&args);
    }

    color_eyre::install()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|frame| app.render(frame))?;
        app.needs_redraw = false;

        // Wake up in time to apply a pending debounced query, otherwise
        // idle at the regular tick.
        let timeout = app
            .next_poll_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()).min(TICK))
            .unwrap_or(TICK);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                should_quit = handlers::keys::handle_key_events(key, &mut app);
            }
        }

        app.tick(Instant::now());
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
