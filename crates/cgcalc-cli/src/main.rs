//! cgcalc CLI: compute, validate and inspect CG sheets from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "cgcalc", version, about = "Credit-weighted CG calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a CG from the command line or a course sheet
    Calc {
        /// Comma-separated courses as credits:grade (e.g. "3:BC,4:CD")
        #[arg(long, conflicts_with = "sheet", required_unless_present = "sheet")]
        courses: Option<String>,

        /// Path to a .toml course sheet or directory of sheets
        #[arg(long)]
        sheet: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Also write an HTML report to this path
        #[arg(long)]
        html: Option<PathBuf>,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Enter courses one command at a time
    Interactive {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate course sheet TOML files
    Validate {
        /// Path to a course sheet file or directory
        #[arg(long)]
        sheet: PathBuf,
    },

    /// Print the grade scale
    Scale,

    /// Create starter config and example course sheet
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cgcalc=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calc {
            courses,
            sheet,
            format,
            html,
            no_color,
            config,
        } => commands::calc::execute(courses, sheet, format, html, no_color, config),
        Commands::Interactive { config } => commands::interactive::execute(config),
        Commands::Validate { sheet } => commands::validate::execute(sheet),
        Commands::Scale => commands::scale::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
