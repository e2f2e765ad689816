use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use colored::*;
use microconsole::{Console, Error};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one line and print it trimmed
    Input {
        /// Text shown before reading
        prompt: String,
    },
    /// Ask a yes/no question and print true or false
    Confirm {
        /// Question to ask
        prompt: String,
        /// Treat an empty answer as yes
        #[arg(long)]
        default_yes: bool,
        /// Ask again this many times after an invalid answer
        #[arg(long, default_value = "0")]
        retries: u32,
    },
    /// Read a password without echo and print its length
    Password {
        /// Text shown before reading
        prompt: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        print_version();
        return Ok(());
    }

    init_logging(&cli.log_level)?;

    let mut console = Console::new();
    match cli.command {
        Some(Commands::Input { prompt }) => {
            let line = console.get_input(&prompt)?;
            println!("{}", line);
        }
        Some(Commands::Confirm { prompt, default_yes, retries }) => {
            let answer = confirm_with_retries(&mut console, &prompt, default_yes, retries)?;
            println!("{}", answer);
        }
        Some(Commands::Password { prompt }) => {
            if !atty::is(atty::Stream::Stdin) {
                warn!("stdin is not a terminal, the password cannot be hidden");
            }
            let password = console.get_password(&prompt)?;
            println!("{} characters", password.chars().count());
        }
        None => {
            println!("{}", <Cli as CommandFactory>::command().render_help());
        }
    }

    Ok(())
}

/// Re-ask after an invalid answer; read and write failures end the loop.
fn confirm_with_retries(
    console: &mut Console,
    prompt: &str,
    default_yes: bool,
    retries: u32,
) -> Result<bool> {
    let mut attempts_left = retries;
    loop {
        match console.get_confirm(prompt, default_yes) {
            Err(Error::InvalidConfirmation) if attempts_left > 0 => {
                attempts_left -= 1;
                debug!(attempts_left, "invalid confirmation, asking again");
                eprintln!("{}", "Please answer yes or no.".yellow());
            }
            result => return result.context("confirmation failed"),
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level '{}'", level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}

fn print_version() {
    println!("{}: {}", "microconsole".green(), env!("CARGO_PKG_VERSION").cyan().bold());
}
