//! eventreg CLI
//!
//! Command-line front end for the event registration form.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use eventreg_forms::{Field, RegistrationFlow, SubmitOutcome};
use eventreg_cli::{render_view, run_session, OutputFormat};

/// Event registration form with validation and confirmation.
#[derive(Parser)]
#[command(name = "eventreg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for views.
    #[arg(short, long, env = "EVENTREG_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output. The environment variable accepts any value
    /// other than an empty string, `0`, `false`, `no`, `off` or `n`.
    #[arg(short, long, env = "EVENTREG_VERBOSE", value_parser = FalseyValueParser::new())]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the form from flags and submit it once.
    Submit {
        /// Attendee name.
        #[arg(long, default_value = "")]
        name: String,

        /// Attendee email.
        #[arg(long, default_value = "")]
        email: String,

        /// Attendee age.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        age: String,

        /// Attend with a guest.
        #[arg(long)]
        with_guest: bool,

        /// Guest name (used with --with-guest).
        #[arg(long, default_value = "")]
        guest_name: String,
    },

    /// Read commands from stdin, one per line.
    Session,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so views on stdout stay parseable.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut flow = RegistrationFlow::new();

    match cli.command {
        Commands::Submit {
            name,
            email,
            age,
            with_guest,
            guest_name,
        } => {
            flow.update(Field::Name, name)?;
            flow.update(Field::Email, email)?;
            flow.update(Field::Age, age)?;
            flow.update(
                Field::AttendingWithGuest,
                if with_guest { "yes" } else { "no" },
            )?;
            flow.update(Field::GuestName, guest_name)?;

            let outcome = flow.submit();
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", render_view(&flow, cli.format)?)?;

            if outcome == SubmitOutcome::Rejected {
                info!(errors = flow.errors().len(), "registration rejected");
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Session => {
            info!("Session started. Type `help` for commands.");
            let stdin = io::stdin().lock();
            run_session(&mut flow, stdin, io::stdout().lock(), cli.format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
