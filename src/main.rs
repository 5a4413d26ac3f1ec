use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use emojicrypt::{codec, password};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;
mod input;

#[derive(Debug, Parser)]
#[command(name = "emojicrypt")]
#[command(
    version,
    about = "Encrypt short messages with a password and share them as emoji."
)]
struct Cli {
    /// Log what happens to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypts text (argument or stdin) into emoji
    Encrypt {
        text: Option<String>,

        /// Print the emoji in space-separated groups of this size
        #[arg(short, long, env = "EMOJICRYPT_GROUP_SIZE", value_parser = clap::value_parser!(u16).range(1..))]
        group_size: Option<u16>,
    },

    /// Decrypts emoji (argument or stdin) back into text
    Decrypt { symbols: Option<String> },

    /// Checks a password against the rules
    #[command(arg_required_else_help = true)]
    Validate {
        password: String,

        /// Print the verdict as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Estimates how many emoji a message of LENGTH bytes becomes
    #[command(arg_required_else_help = true)]
    Estimate { length: usize },

    /// Generates a random valid password
    GeneratePassword,

    /// Lists the emoji alphabet by group
    Alphabet,
}

fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        filter = filter.add_directive(Level::DEBUG.into());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Encrypt { text, group_size } => {
            let stdin_free = text.is_some();
            let text = input::read_text(text)?;
            if text.trim().is_empty() {
                bail!("Please enter text to encrypt");
            }

            let password = input::read_password(true, stdin_free)?;
            let verdict = emojicrypt::validate_password(&password);
            if !verdict.valid {
                bail!("{verdict}");
            }

            let symbols = emojicrypt::encrypt(&text, &password)?;
            match group_size {
                Some(size) => println!("{}", codec::chunk(&symbols, size.into()).join(" ")),
                None => println!("{symbols}"),
            }
        }
        Commands::Decrypt { symbols } => {
            let stdin_free = symbols.is_some();
            let raw = input::read_text(symbols)?;
            // pasted output may still be grouped or wrapped
            let symbols: String = raw.split_whitespace().collect();
            if symbols.is_empty() {
                bail!("Please enter encrypted emojis to decrypt");
            }

            let password = input::read_password(false, stdin_free)?;
            let plaintext = emojicrypt::decrypt(&symbols, &password).map_err(|e| {
                if e.is_decryption_failure() {
                    anyhow!("decryption failed: {e}")
                } else {
                    anyhow!(e)
                }
            })?;
            println!("{plaintext}");
        }
        Commands::Validate { password, json } => {
            let verdict = emojicrypt::validate_password(&password);
            if json {
                println!("{}", serde_json::to_string(&verdict)?);
            } else {
                println!("{verdict}");
            }
            if !verdict.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Estimate { length } => {
            println!("{}", emojicrypt::estimate_symbol_count(length));
        }
        Commands::GeneratePassword => {
            println!("{}", password::generate()?);
        }
        Commands::Alphabet => {
            for (name, symbols) in codec::categories() {
                println!("{name:<8} {}", symbols.concat());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
