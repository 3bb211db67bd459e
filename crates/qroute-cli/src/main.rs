//! qroute Command-Line Interface
//!
//! Maps flat qasmf circuits onto a square grid of nearest-neighbor coupled
//! qubits.
//!
//! ```text
//! qroute transform -i circuit.qasmf -s boustrophedon -o routed.qasmf
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{strategies, transform, version};

/// qroute - place and route qasmf circuits on a square qubit grid
#[derive(Parser)]
#[command(name = "qroute")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a circuit onto grid coordinates, inserting SWAPs
    Transform {
        /// Input file (qasmf)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Initial placement strategy (row-major, boustrophedon, graph-based)
        #[arg(short, long, env = "QROUTE_STRATEGY", default_value = "row-major")]
        strategy: String,

        /// Write a JSON transformation report to this file
        #[arg(long)]
        report: Option<String>,
    },

    /// List placement strategies
    Strategies,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Transform {
            input,
            output,
            strategy,
            report,
        } => transform::execute(&input, output.as_deref(), &strategy, report.as_deref()),

        Commands::Strategies => {
            strategies::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
