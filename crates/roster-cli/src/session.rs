//! The input loop.
//!
//! Reads one command per line and calls into the sequencer. Draw progress
//! is rendered by the presenter task, not here; this loop only writes
//! notices that answer a key press.

use std::io::Write;

use roster_draw::application::sequencer::{ResetOutcome, StartOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::error::AppError;
use crate::input::{Command, is_confirmed, parse_command};
use crate::messages;
use crate::state::AppState;

/// Runs the input loop until `q` or end of input.
///
/// # Errors
///
/// Returns `AppError::Io` if reading input or writing a notice fails.
pub async fn run<R, W>(state: &AppState, input: R, out: &mut W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let config = state.settings.draw;

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Draw => {
                if let StartOutcome::Ignored(current) = state.sequencer.start() {
                    debug!(state = %current, "draw key ignored");
                }
            }
            Command::Reset => {
                if !state.sequencer.snapshot().has_result() {
                    writeln!(out, "{}", messages::NOTHING_TO_RESET)?;
                    continue;
                }
                write!(
                    out,
                    "❓ {}: {} {} ",
                    messages::CONFIRM_TITLE,
                    messages::CONFIRM_RESET,
                    messages::CONFIRM_HINT
                )?;
                out.flush()?;

                let Some(answer) = lines.next_line().await? else {
                    break;
                };
                if !is_confirmed(&answer) {
                    writeln!(out, "{}", messages::RESET_CANCELLED)?;
                    continue;
                }
                if let ResetOutcome::Rejected(current) = state.sequencer.reset() {
                    debug!(state = %current, "reset rejected");
                }
            }
            Command::Pick(number) if (config.pool_min..=config.pool_max).contains(&number) => {
                if !state.sequencer.snapshot().state.is_busy() {
                    writeln!(
                        out,
                        "ℹ️  {} {}",
                        messages::pick_title(number),
                        messages::PICK_NOTICE
                    )?;
                }
            }
            Command::Pick(number) => {
                writeln!(out, "{}", messages::unknown_input(&number.to_string()))?;
            }
            Command::Help => {
                write!(out, "{}", messages::help(&config))?;
            }
            Command::Quit => {
                info!("quit requested");
                break;
            }
            Command::Unknown(text) => {
                writeln!(out, "{}", messages::unknown_input(&text))?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
