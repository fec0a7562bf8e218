//! Line-oriented session over a registration flow.
//!
//! Each input line is one event, processed to completion before the next
//! line is read.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use eventreg_forms::{Field, FormError, RegistrationFlow, SubmissionSink, SubmitOutcome};

use crate::output::{render_view, OutputFormat};

const HELP: &str = "\
commands:
  set <field> <value>   change a field (name, email, age, attendingWithGuest, guestName)
  submit                validate and show the confirmation
  close                 dismiss the confirmation
  show                  print the current view
  html                  print the current view as HTML
  help                  print this message
  quit                  end the session";

/// A session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change a field. The value is the rest of the line and may be empty.
    Set(Field, String),
    Submit,
    Close,
    Show,
    Html,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = FormError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, rest) = line
            .trim_start()
            .split_once(' ')
            .unwrap_or((line.trim(), ""));

        match verb {
            "set" => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Self::Set(name.parse()?, value.to_string()))
            }
            "submit" => Ok(Self::Submit),
            "close" => Ok(Self::Close),
            "show" => Ok(Self::Show),
            "html" => Ok(Self::Html),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(FormError::UnknownCommand(other.to_string())),
        }
    }
}

/// Reads commands from `input` and applies them to `flow` until `quit` or
/// end of input.
///
/// Bad commands are reported on `output` and the session continues.
///
/// # Errors
///
/// Returns I/O errors from `input` or `output`, and JSON encoding errors.
pub fn run_session<S, R, W>(
    flow: &mut RegistrationFlow<S>,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    S: SubmissionSink,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "rejected session input");
                writeln!(output, "error: {e}")?;
                continue;
            }
        };
        debug!(?command, "session command");

        match command {
            Command::Set(field, value) => {
                if let Err(e) = flow.update(field, value) {
                    writeln!(output, "error: {e}")?;
                }
            }
            Command::Submit => match flow.submit() {
                SubmitOutcome::Ignored => {
                    writeln!(output, "confirmation is open; use `close` first")?;
                }
                SubmitOutcome::Confirmed | SubmitOutcome::Rejected => {
                    writeln!(output, "{}", render_view(flow, format)?)?;
                }
            },
            Command::Close => {
                if flow.dismiss() {
                    writeln!(output, "{}", render_view(flow, format)?)?;
                }
            }
            Command::Show => writeln!(output, "{}", render_view(flow, format)?)?,
            Command::Html => writeln!(output, "{}", render_view(flow, OutputFormat::Html)?)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }

    output.flush()?;
    Ok(())
}
