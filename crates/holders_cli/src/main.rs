//! `holders` command-line entry point.
//!
//! # Responsibility
//! - Parse flags (with `HOLDERS_*` environment fallbacks) into a command.
//! - Bootstrap logging and storage, then hand off to `commands`.
//! - Map failures to a non-zero exit status with the message on stderr.

use clap::{Args, Parser, Subcommand};
use holders_core::default_log_level;
use std::path::PathBuf;
use std::process;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "holders", about = "Holder record management", long_about = None)]
struct Cli {
    /// SQLite database file; created and migrated on first use
    #[arg(long, global = true, env = "HOLDERS_DB_PATH", default_value = "holders.sqlite3")]
    db_path: PathBuf,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "HOLDERS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long, global = true, env = "HOLDERS_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the core library is linked
    Ping,
    /// Print the core library version
    Version,
    /// Create a holder
    Create(CreateArgs),
    /// Show one holder
    Get {
        id: i64,
        /// Treat soft-deleted holders as missing
        #[arg(long)]
        active: bool,
    },
    /// List holders
    List {
        /// Omit soft-deleted holders
        #[arg(long)]
        active: bool,
    },
    /// Replace the contact and address fields of a holder
    Update {
        id: i64,
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Soft-delete a holder
    Delete { id: i64 },
}

#[derive(Debug, Args)]
struct CreateArgs {
    /// CPF or CNPJ tax identifier
    #[arg(long, default_value = "")]
    cpf_cnpj: String,

    /// Holder display name
    #[arg(long, default_value = "")]
    name: String,

    #[command(flatten)]
    contact: ContactArgs,
}

#[derive(Debug, Args)]
struct ContactArgs {
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    address_number: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    complement: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        holders_core::init_logging(level, log_dir)?;
    }

    match cli.command {
        Command::Ping => {
            println!("holders_core ping={}", holders_core::ping());
            Ok(())
        }
        Command::Version => {
            println!("holders_core version={}", holders_core::core_version());
            Ok(())
        }
        Command::Create(args) => commands::create(&cli.db_path, args),
        Command::Get { id, active } => commands::get(&cli.db_path, id, active),
        Command::List { active } => commands::list(&cli.db_path, active),
        Command::Update { id, contact } => commands::update(&cli.db_path, id, contact),
        Command::Delete { id } => commands::delete(&cli.db_path, id),
    }
}
