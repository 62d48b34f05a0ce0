//! Slash command parsing for the chat loop.
//!
//! Commands are literal and case-insensitive. Anything that is not a
//! recognized command -- including unrecognized `/...` lines -- is sent to
//! the server as a chat message.

use std::io::Write;

use console::style;

/// Commands recognized in the chat loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave the client.
    Quit,
    /// End the current conversation.
    End,
    /// Show available commands.
    Help,
}

/// Parse user input as a command.
///
/// Returns `None` when the line should be sent as a chat message instead.
pub fn parse(input: &str) -> Option<Command> {
    match input.trim().to_lowercase().as_str() {
        "/quit" | "/exit" => Some(Command::Quit),
        "/end" => Some(Command::End),
        "/help" => Some(Command::Help),
        _ => None,
    }
}

/// Write the help text listing all available commands.
pub fn print_help<W: Write>(out: &mut W) {
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style("Available commands:").bold());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}  {}",
        style("/quit, /exit").cyan(),
        "Leave the client"
    );
    let _ = writeln!(
        out,
        "  {}          {}",
        style("/end").cyan(),
        "End the current conversation"
    );
    let _ = writeln!(
        out,
        "  {}         {}",
        style("/help").cyan(),
        "Show this help message"
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}",
        style("Any other text is sent as a message").dim()
    );
    let _ = writeln!(out);
    let _ = out.flush();
}
