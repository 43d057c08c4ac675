use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use stockledger_cli::{commands, demo};
use stockledger_core::Outcome;
use stockledger_infra::StoreConfig;
use stockledger_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockledger_observability::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "stockledger", version, about = "Track item quantities in a JSON ledger file")]
struct Cli {
    /// Ledger file (defaults to $STOCKLEDGER_FILE, then inventory.json)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log output format: json or text (defaults to $STOCKLEDGER_LOG_FORMAT, then json)
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add stock to an item (negative quantities reduce it)
    Add {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Remove stock; the item is dropped once it reaches zero
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Print the quantity held for an item
    Get { item: String },
    /// List items strictly below a threshold
    Low {
        #[arg(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD, allow_hyphen_values = true)]
        threshold: i64,
    },
    /// Print every item and quantity
    Report,
    /// Run the scripted walkthrough against the ledger file
    Demo,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.log_format {
        Some(format) => {
            stockledger_observability::tracing::init(format);
        }
        None => stockledger_observability::init(),
    }

    let mut config = StoreConfig::from_env();
    if let Some(path) = cli.file {
        config = config.with_path(path);
    }
    let store = config.open();
    tracing::debug!("using ledger file {}", store.path().display());

    let mut out = io::stdout().lock();
    let outcome = match cli.command {
        Commands::Add { item, qty } => commands::add(&store, &item, &qty, &mut out)?,
        Commands::Remove { item, qty } => commands::remove(&store, &item, &qty, &mut out)?,
        Commands::Get { item } => commands::get(&store, &item, &mut out)?,
        Commands::Low { threshold } => commands::low(&store, threshold, &mut out)?,
        Commands::Report => commands::report(&store, &mut out)?,
        Commands::Demo => {
            demo::run(&store, &mut out)?;
            Outcome::Ok(())
        }
    };

    Ok(match outcome {
        Outcome::Error(_) => ExitCode::FAILURE,
        Outcome::Ok(()) | Outcome::Warning(_) => ExitCode::SUCCESS,
    })
}
