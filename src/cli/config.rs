//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{FlowPaths, Settings};
use crate::error::FlowResult;

use super::parse_amount;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,
    /// Persist a new daily spending goal
    SetGoal {
        /// Goal amount (e.g., "100.00")
        amount: String,
    },
    /// Persist the currency symbol used for display
    SetCurrency {
        symbol: String,
    },
}

/// Handle config commands
pub fn handle_config_command(
    paths: &FlowPaths,
    settings: Settings,
    cmd: ConfigCommands,
) -> FlowResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("FinanceFlow Configuration");
            println!("=========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!();
            println!("Settings:");
            println!("  Daily goal:      {}", settings.format_money(settings.daily_goal));
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Log level:       {}", settings.log_level);
        }
        ConfigCommands::SetGoal { amount } => {
            let goal = parse_amount(&amount)?;
            let settings = settings.with_daily_goal(goal);
            settings.save(paths)?;
            println!("Daily goal set to {}", settings.format_money(goal));
        }
        ConfigCommands::SetCurrency { symbol } => {
            let settings = Settings {
                currency_symbol: symbol.trim().to_string(),
                ..settings
            };
            settings.save(paths)?;
            println!("Currency symbol set to {}", settings.currency_symbol);
        }
    }

    Ok(())
}
