mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{edit::EditArgs, normalize::NormalizeArgs, show::ShowArgs, types::TypesArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemaedit", about = "Inspect, normalize, and edit record schemas")]
struct Cli {
    /// Log editor activity to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the editor tree of a schema
    Show(ShowArgs),
    /// Print the canonical form of a schema
    Normalize(NormalizeArgs),
    /// Apply edit operations to a schema and print the result
    Edit(EditArgs),
    /// List the selectable type tags
    Types(TypesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .init();

    match cli.command {
        Commands::Show(args) => args.run(),
        Commands::Normalize(args) => args.run(),
        Commands::Edit(args) => args.run(),
        Commands::Types(args) => args.run(),
    }
}
