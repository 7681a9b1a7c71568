use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod view;

#[derive(Parser)]
#[command(name = "weekgen-cli", version, about = "Generate a realistic work week for a profession")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a week and print it
    Generate {
        #[command(flatten)]
        args: commands::generate::GenerateArgs,
        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a week and export it to a calendar file
    Export {
        #[command(flatten)]
        args: commands::generate::GenerateArgs,
        /// Destination file (JSON array of calendar records)
        #[arg(long, short)]
        out: std::path::PathBuf,
    },
    /// List professions and their tables
    Professions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate { args, json } => commands::generate::run(args, json),
        Commands::Export { args, out } => commands::generate::export(args, out),
        Commands::Professions { json } => commands::professions::run(json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
