use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use financeflow::cli::{
    handle_breakdown, handle_config_command, handle_dashboard, handle_export_command,
    handle_summary, handle_today, handle_transaction_command, ConfigCommands, ExportFormat,
    TransactionCommands,
};
use financeflow::config::{FlowPaths, Settings};
use financeflow::display::format_premium_offer;
use financeflow::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "financeflow",
    version,
    about = "Personal finance dashboard for the terminal",
    long_about = "FinanceFlow shows your balance, income and expenses, how much you \
                  spent today against a daily goal, and where you are losing money \
                  by category."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, global = true, env = "FINANCEFLOW_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init {
        /// Seed the sample transactions
        #[arg(long)]
        sample: bool,
    },

    /// Show the full dashboard
    #[command(alias = "dash")]
    Dashboard {
        /// Reference day for daily spending (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Daily goal for this run, overriding the configured one
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Show income, expenses and balance
    Summary,

    /// Show expenses ranked by category
    Breakdown {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show spending for one day against the daily goal
    Today {
        /// Day to check (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Daily goal for this run, overriding the configured one
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Export transactions and metrics
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file, defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Reference day for daily metrics (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the Premium plan offer
    Premium,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("financeflow={}", settings.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FlowPaths::with_base_dir(dir),
        None => FlowPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("FinanceFlow - personal finance dashboard");
            println!();
            println!("Run 'financeflow --help' for usage information.");
            println!("Run 'financeflow init --sample' to start with sample data.");
            return Ok(());
        }
    };

    match command {
        Commands::Init { sample } => {
            let seeded = initialize_storage(&paths, sample)?;
            settings.save(&paths)?;
            println!("Initialized FinanceFlow at: {}", paths.base_dir().display());
            if seeded {
                println!("Sample transactions have been added.");
            }
            println!("Run 'financeflow dashboard' to see your finances.");
        }
        Commands::Config(cmd) => handle_config_command(&paths, settings, cmd)?,
        Commands::Premium => print!("{}", format_premium_offer(&settings.currency_symbol)),
        Commands::Dashboard { date, goal } => {
            handle_dashboard(&open_storage(paths)?, &settings, date, goal)?
        }
        Commands::Summary => handle_summary(&open_storage(paths)?, &settings)?,
        Commands::Breakdown { top, output } => {
            handle_breakdown(&open_storage(paths)?, &settings, top, output)?
        }
        Commands::Today { date, goal } => {
            handle_today(&open_storage(paths)?, &settings, date, goal)?
        }
        Commands::Transaction(cmd) => {
            handle_transaction_command(&open_storage(paths)?, &settings, cmd)?
        }
        Commands::Export {
            format,
            output,
            date,
        } => handle_export_command(&open_storage(paths)?, &settings, format, output, date)?,
    }

    Ok(())
}

fn open_storage(paths: FlowPaths) -> Result<Storage> {
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;
    Ok(storage)
}
