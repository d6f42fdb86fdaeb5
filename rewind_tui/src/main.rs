//! Terminal UI for rewindable tic-tac-toe.
//!
//! Synchronous event loop: one key press, one session update, one
//! redraw. The session itself lives in `rewind_tictactoe`.

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "rewind_tui", about = "Play tic-tac-toe with a rewindable move history")]
struct Args {
    /// Show the move list newest-first.
    #[arg(long)]
    descending: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr so tracing output never lands in the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting rewind tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(args.descending);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}
