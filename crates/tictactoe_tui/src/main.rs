//! Tic-tac-toe in the terminal.
//!
//! Plays against an exhaustive minimax opponent (or a second person), and
//! can score any board from the command line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod app;
mod cli;
mod config;
mod input;
mod logging;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use crossterm::event::{self, Event};
use ratatui::layout::Rect;
use terminal::TerminalContext;
use tracing::{debug, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .context("loading configuration")?
        .with_overrides(cli.two_player, cli.log_file);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Analyze { board, json } => {
            logging::init_stderr(config.log_filter());
            analyze::run(&board, json)
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip(config), fields(opponent = %config.opponent()))]
fn run_tui(config: &AppConfig) -> Result<()> {
    logging::init_file(config.log_file(), config.log_filter())?;
    info!("Starting tic-tac-toe TUI");

    let mut context = TerminalContext::new()?;
    let mut app = App::new(*config.opponent());

    while !app.should_quit() {
        let mut board_area = Rect::default();
        context
            .terminal_mut()
            .draw(|frame| board_area = ui::draw(frame, &app))
            .context("drawing frame")?;
        app.set_board_area(board_area);

        match event::read().context("reading terminal event")? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            other => debug!(?other, "Unhandled event"),
        }
    }

    info!("TUI exited");
    Ok(())
}
