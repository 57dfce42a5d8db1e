//! Duty roster picker entry point.

use std::error::Error;

use roster_cli::config::{OutputFormat, Settings};
use roster_cli::messages;
use roster_cli::presenters::{JsonLinesPresenter, TerminalPresenter};
use roster_cli::session;
use roster_cli::state::AppState;
use roster_draw::application::presenter::pump;
use roster_draw::application::sequencer::RevealSequencer;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout belongs to the presenter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(?settings, "starting duty roster picker");

    let (sequencer, events) = RevealSequencer::with_system(settings.draw, settings.rng());

    let presenter = match settings.output {
        OutputFormat::Text => {
            let mut presenter = TerminalPresenter::new(std::io::stdout(), settings.draw);
            print!("{}\n{}\n", messages::welcome(&settings.draw), messages::IDLE_PROMPT);
            tokio::spawn(async move { pump(events, &mut presenter).await })
        }
        OutputFormat::Json => {
            let mut presenter = JsonLinesPresenter::new(std::io::stdout());
            tokio::spawn(async move { pump(events, &mut presenter).await })
        }
    };

    let state = AppState::new(sequencer, settings);
    let input = BufReader::new(tokio::io::stdin());
    match settings.output {
        OutputFormat::Text => session::run(&state, input, &mut std::io::stdout()).await?,
        OutputFormat::Json => session::run(&state, input, &mut std::io::stderr()).await?,
    }

    // The presenter drains until the last sender is gone, which lets a draw
    // that is still revealing finish on screen before exit.
    drop(state);
    let delivered = presenter.await?;
    tracing::info!(delivered, "session ended");

    Ok(())
}
