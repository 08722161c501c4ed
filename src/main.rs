use anyhow::Result;
use clap::{Parser, Subcommand};

use hisabi::cli::{handle_health_command, handle_payoff_command, HealthArgs, PayoffArgs};
use hisabi::config::{paths::HisabiPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "hisabi",
    version,
    about = "Bilingual personal-finance calculators for the terminal",
    long_about = "Hisabi provides the numeric core of a personal-finance \
                  toolkit: a debt payoff calculator with full amortization \
                  schedules, and a financial health scorer with prioritized \
                  recommendations in English or Arabic."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate how long a debt takes to pay off and what it costs
    #[command(alias = "debt")]
    Payoff(PayoffArgs),

    /// Score financial health from income, expenses, savings, and debt
    #[command(alias = "score")]
    Health(HealthArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = HisabiPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Payoff(args)) => {
            handle_payoff_command(&settings, args)?;
        }
        Some(Commands::Health(args)) => {
            handle_health_command(&settings, args)?;
        }
        Some(Commands::Config) => {
            println!("Hisabi Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default locale:  {}", settings.default_locale);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Hisabi - Bilingual personal-finance calculators");
            println!();
            println!("Run 'hisabi --help' for usage information.");
            println!("Run 'hisabi payoff 10000 12 1000' to try the payoff calculator.");
        }
    }

    Ok(())
}
