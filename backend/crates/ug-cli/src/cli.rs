use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ug")]
#[command(about = "Google identity unlink guard CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the host and port in the ug config)
    #[arg(long, global = true)]
    pub(crate) url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
