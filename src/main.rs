use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vkassets::commands;
use vkassets::commands::list::ListFormat;
use vkassets::core::manifest::{Variant, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[clap(name = "vkassets")]
#[clap(about = "Download the textures and models used by the Vulkan tutorial")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Asset host to download from
    #[clap(long, value_enum, default_value = "mirror", global = true)]
    variant: Variant,
    /// Directory the assets are written to (must already exist)
    #[clap(short, long, default_value = DEFAULT_OUTPUT_DIR, global = true)]
    output: PathBuf,
    /// Do not print download progress
    #[clap(short, long, global = true)]
    quiet: bool,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the assets and unpack archives (default)
    Fetch,
    /// Show the assets a variant would download
    List {
        /// Output format
        #[clap(short, long, value_enum, default_value = "text")]
        format: ListFormat,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Fetch) {
        Commands::Fetch => commands::fetch::fetch_assets(cli.variant, &cli.output, cli.quiet)
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::List { format } => commands::list::list_assets(cli.variant, &cli.output, format)
            .map_err(|e| anyhow::anyhow!(e)),
    }
}
