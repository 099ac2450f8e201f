mod commands;
mod output;

use clap::{Parser, Subcommand};
use fnol_core::result::ProcessingStatus;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "fnol",
    version,
    about = "First notice of loss intake: extract claim fields and route the claim"
)]
struct Cli {
    /// Increase log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process an intake document (PDF, TXT or form JSON) and recommend a route
    Process {
        /// Path to the intake document
        input_file: PathBuf,

        /// Custom routing config (default: built-in)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show which routing rules were evaluated
        #[arg(long)]
        explain: bool,
    },
    /// Inspect and validate routing configs
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// Print the routing rules and the thresholds they use
    Show {
        /// Custom routing config (default: built-in)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,
    },
    /// Validate a custom routing config file
    Validate {
        /// Path to JSON routing config
        file: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Process {
            input_file,
            rules,
            output,
            explain,
        } => commands::process::run(input_file, rules, &output, explain)
            .map(|status| status != ProcessingStatus::Failed),
        Commands::Rules { action } => {
            let done = match action {
                RulesAction::Show { rules } => commands::rules::show(rules.as_deref()),
                RulesAction::Validate { file } => commands::rules::validate(&file),
            };
            done.map(|()| true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
