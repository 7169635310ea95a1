use std::io;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use typeahead::app::App;
use typeahead::cli::Cli;
use typeahead::config::load_config;
use typeahead::suggest::{SuggestClient, spawn_worker};

/// How long to wait for terminal events between worker polls
const EVENT_POLL_MS: u64 = 50;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only active in debug builds
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    // Resolve the endpoint: CLI flag > config file > defaults
    let config = load_config(cli.config.as_deref())?;
    let base_url = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());

    // Validate the endpoint before touching the terminal
    let client = SuggestClient::new(&base_url, Duration::from_millis(config.server.timeout_ms))?;

    // Wire the suggestion worker
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(client, request_rx, response_tx);

    let mut app = App::new(&config);
    app.set_suggest_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // Run the application
    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    // Print the accepted query once the terminal is back to normal
    if let Some(accepted) = app.accepted.take() {
        println!("{accepted}");
    }

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Fold in any suggestion responses that arrived since the last frame
        app.poll_suggest_events();

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events, waking periodically to poll the worker
        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
