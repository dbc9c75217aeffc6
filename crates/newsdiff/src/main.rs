//! Terminal client for tracked news-article revisions

mod api;
mod app;
mod config;
mod i18n;
mod theme;
mod views;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::app::{App, Fetched};
use crate::config::Settings;
use crate::i18n::Language;
use crate::theme::ThemeMode;

#[derive(Parser)]
#[command(
    name = "newsdiff",
    version,
    about = "Track how news articles change over time"
)]
struct Args {
    /// Base URL of the article-tracker API
    #[arg(long, default_value = "http://127.0.0.1:8000/api/v1")]
    api_url: String,
    /// UI language (overrides the saved preference)
    #[arg(long, value_enum)]
    language: Option<Language>,
    /// Color theme (overrides the saved preference)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newsdiff=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = Settings::load_or_default();
    if let Some(language) = args.language {
        settings.language = language;
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(ApiClient::new(args.api_url), tx, settings);
    app.fetch_sources();
    app.fetch_articles();

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, &mut rx).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Fetched>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| views::render(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                _ => {}
            }
        }
        while let Ok(msg) = rx.try_recv() {
            app.on_fetched(msg);
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
