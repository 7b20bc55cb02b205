use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "haven", version, about = "Haven personal-safety CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an SOS alert
    Sos {
        #[command(subcommand)]
        action: commands::sos::SosAction,
    },
    /// List emergency helplines
    Helplines {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Show safety tips
    Tips {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the number of nearby reports
    Reports {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the area risk score
    Score {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Submit an incident report
    Report(commands::report::ReportArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HAVEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Sos { action } => commands::sos::run(action),
        Commands::Helplines { json } => commands::info::helplines(json),
        Commands::Tips { json } => commands::info::tips(json),
        Commands::Reports { json } => commands::info::reports(json),
        Commands::Score { json } => commands::info::score(json),
        Commands::Report(args) => commands::report::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
