//! Key bindings.
//!
//! Input is line oriented: each line is one key press. An empty line (Enter
//! on its own, or space then Enter) draws.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a draw.
    Draw,
    /// Ask to clear the last draw.
    Reset,
    /// The user tried to choose a number directly.
    Pick(u32),
    /// Show the usage help.
    Help,
    /// Leave the session.
    Quit,
    /// Anything else.
    Unknown(String),
}

/// Parses one input line.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" | "d" | "draw" | "뽑기" => Command::Draw,
        "r" | "reset" | "다시" => Command::Reset,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => other
            .parse::<u32>()
            .map_or_else(|_| Command::Unknown(trimmed.to_owned()), Command::Pick),
    }
}

/// Whether a confirmation answer means yes. Anything else, including an
/// empty line, declines.
#[must_use]
pub fn is_confirmed(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "네" | "예" | "ㅇ"
    )
}
