use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use modtrader_core::models::settings::DisplaySettings;
use tracing_subscriber::EnvFilter;

mod batch;
mod render;
mod shell;

#[derive(Parser)]
#[command(name = "modtrader")]
#[command(about = "Weighted average price calculator", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// Batch options when no subcommand is given
    #[command(flatten)]
    batch: BatchArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Read `<price> <quantity>` lines from stdin and print the totals (default)
    Batch(BatchArgs),

    /// Interactive session: add, undo, delete, reset, list, export
    Shell {
        /// Decimal places shown for prices, quantities and costs
        #[arg(long, default_value_t = 6)]
        precision: usize,
    },
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Write the CSV export here once input ends
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print entries and totals as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let input = stdin.lock();
    let mut out = io::stdout().lock();

    match cli.cmd.unwrap_or(Commands::Batch(cli.batch)) {
        Commands::Batch(args) => batch::run(input, &mut out, interactive, &args),
        Commands::Shell { precision } => {
            let settings = DisplaySettings::with_precision(precision);
            shell::Shell::new(input, &mut out, interactive, settings).run()
        }
    }
}
