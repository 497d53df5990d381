use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_cli::cli::{
    handle_budget_command, handle_notify_command, handle_opportunity_command,
    handle_project_command, handle_tax_command,
};
use folio_cli::config::{paths::FolioPaths, settings::Settings};
use folio_cli::storage::Storage;

/// Environment variable holding a tracing filter, e.g. `folio_cli=debug`
const LOG_ENV: &str = "FOLIO_LOG";

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Personal finance dashboard for the terminal",
    long_about = "Folio tracks recurring expenses, estimates take-home pay under \
                  the Australian tax schedule and projects what a surplus or a \
                  habit would grow to if invested."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense list management
    #[command(subcommand)]
    Budget(folio_cli::cli::BudgetCommands),

    /// Estimate take-home pay
    Tax(folio_cli::cli::TaxArgs),

    /// Project investing part of a monthly surplus
    Project(folio_cli::cli::ProjectArgs),

    /// Show what a recurring expense would grow to if invested instead
    #[command(alias = "opp")]
    Opportunity(folio_cli::cli::OpportunityArgs),

    /// Notification centre
    #[command(subcommand)]
    Notify(folio_cli::cli::NotifyCommands),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FolioPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            let storage = Storage::new(paths, &settings)?;
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Tax(args)) => handle_tax_command(&settings, args)?,
        Some(Commands::Project(args)) => handle_project_command(&settings, args)?,
        Some(Commands::Opportunity(args)) => handle_opportunity_command(&settings, args)?,
        Some(Commands::Notify(cmd)) => {
            let storage = Storage::new(paths, &settings)?;
            handle_notify_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Folio at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'folio budget template template.csv' for a sample import file.");
        }
        Some(Commands::Config) => {
            println!("Folio Configuration");
            println!("===================");
            println!("Base directory:     {}", paths.base_dir().display());
            println!("Data directory:     {}", paths.data_dir().display());
            println!("Initialized:        {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Tax schedule:       {}", settings.tax_schedule.name);
            println!(
                "  Notification retention: {} days",
                settings.notification_retention_days
            );
            let delays: Vec<String> = settings
                .retry
                .schedule()
                .iter()
                .map(|d| format!("{}ms", d.as_millis()))
                .collect();
            println!("  API retries:        {} ({})", settings.retry.max_retries, delays.join(", "));
            println!("  Log level:          {}", settings.log_level);
        }
        None => {
            println!("Folio - personal finance dashboard");
            println!();
            println!("Run 'folio --help' for usage information.");
        }
    }

    Ok(())
}
