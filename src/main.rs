use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mealprep - Weekly meal prep calendars
#[derive(Parser)]
#[command(name = "mealprep")]
#[command(about = "Render meal prep plans captured from the CMS", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = cli::Format::Text)]
    format: cli::Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every plan as a Sunday-to-Saturday calendar
    Calendar {
        /// `mealPrepPlans` response body, `-` for stdin
        #[arg(default_value = "-")]
        file: String,

        /// Day to highlight (defaults to today in the configured timezone)
        #[arg(long)]
        today: Option<String>,
    },
    /// Show the meal slots of one day with all food options
    Day {
        /// Calendar day, YYYY-MM-DD
        date: String,

        /// `mealSlots` response body, `-` for stdin
        #[arg(default_value = "-")]
        file: String,
    },
    /// Print the week containing a date
    Week {
        /// Any day of the week, YYYY-MM-DD
        date: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealprep::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealprep::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    let result = match &cli.command {
        Commands::Calendar { file, today } => {
            cli::calendar(&config, file, cli.format, today.as_deref())
        }
        Commands::Day { date, file } => cli::day(date, file, cli.format),
        Commands::Week { date } => cli::week(date, cli.format),
    };

    if let Err(err) = &result {
        tracing::error!(err = %err, "Command failed");
    }

    result
}
