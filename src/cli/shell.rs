//! Interactive shell
//!
//! Reads lines from stdin, splits them with shell-style quoting, and feeds
//! the tokens through the same clap command tree as one-shot invocation.
//! State lives in the session for the lifetime of the shell.

use std::io::{self, BufRead, Write};

use chrono::Local;
use clap::Parser;
use tracing::debug;

use super::{dispatch, Command, CommandOutcome};
use crate::session::Session;

/// A single shell line parsed as a command
#[derive(Debug, Parser)]
#[command(name = "pocketflow", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// Run the interactive shell until `quit` or end of input
pub fn run_shell(session: &mut Session) -> io::Result<()> {
    println!("pocketflow - personal expense tracker. Type 'help' for commands, 'quit' to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "pocketflow> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input
            break;
        }

        if handle_line(session, &line) == CommandOutcome::Exit {
            break;
        }
    }

    Ok(())
}

/// Handle one line of input; parse errors never abort the shell
fn handle_line(session: &mut Session, line: &str) -> CommandOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return CommandOutcome::Continue;
    }

    let tokens = match shell_words::split(trimmed) {
        Ok(tokens) => tokens,
        Err(err) => {
            println!("Error: {}", err);
            return CommandOutcome::Continue;
        }
    };

    match ShellLine::try_parse_from(tokens.iter().map(String::as_str)) {
        Ok(parsed) => {
            debug!(input = trimmed, "shell command");
            let now = Local::now().naive_local();
            match dispatch(session, parsed.command, now) {
                Ok(outcome) => outcome,
                Err(err) => {
                    println!("Error: {}", err);
                    CommandOutcome::Continue
                }
            }
        }
        Err(err) => {
            // clap renders its own help/usage output
            let _ = err.print();
            CommandOutcome::Continue
        }
    }
}
