use anyhow::Result;
use cadenza::cli;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries results, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Convert(args) => args.run(),
        Command::Check(args) => args.run(),
    }
}

#[derive(Parser)]
#[command(name = "cadenza", about = "Axis travel to motor step conversion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one segment of axis travel into fractional motor steps.
    Convert(cli::convert::ConvertArgs),
    /// Validate a machine configuration and print its motor map.
    Check(cli::check::CheckArgs),
}
