//! Terminal front-end for two-player tic-tac-toe.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod announcement;
mod app;
mod cli;
mod config;
mod feedback;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{App, AppEvent, Effect};
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use feedback::{Feedback, Muted, TerminalBell};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe");

    let mut config = TuiConfig::load_or_default(&cli.config).context("Failed to load configuration")?;
    if cli.mute {
        config = config.with_sound(false);
    }

    let mut feedback: Box<dyn Feedback> = if *config.sound() {
        Box::new(TerminalBell::new(io::stdout()))
    } else {
        Box::new(Muted)
    };

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config), feedback.as_mut()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting tic-tac-toe");
    res
}

/// Draws, reads keys and carries out the app's effects until it quits.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    feedback: &mut dyn Feedback,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        for effect in app.handle_key(key) {
            match effect {
                Effect::Click => feedback.click(),
                Effect::Victory => feedback.victory(),
                Effect::ScheduleDismiss { generation, after } => {
                    debug!(generation, ?after, "Scheduling popup dismissal");
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        // The receiver is gone once the app has quit
                        let _ = tx.send(AppEvent::DismissAnnouncement { generation });
                    });
                }
                Effect::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
            }
        }
    }
}
