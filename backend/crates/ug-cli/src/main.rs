//! ug - Google identity unlink guard CLI
//!
//! Exercises a running ug-server from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Unlink the Google identity of the user owning a token
//! ug unlink --token <access-token> --pretty
//!
//! # Probe a server on a non-default address
//! ug health --url http://127.0.0.1:9000
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use ug_cli::{Client, default_server_url};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Server URL: explicit flag > config
    let server_url = match cli.url {
        Some(url) => url,
        None => match default_server_url() {
            Ok(url) => url,
            Err(e) => {
                eprintln!("Error resolving server URL: {}", e);
                eprintln!();
                eprintln!("Specify a server URL explicitly:");
                eprintln!("  ug --url http://127.0.0.1:8000 <command>");
                return ExitCode::FAILURE;
            }
        },
    };

    let client = Client::new(&server_url);

    let result = match cli.command {
        Commands::Unlink { token } => client.unlink_google(&token).await,
        Commands::Health => client.health().await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
