//! cfcli — command-line client for Cloudflare DNS.
//!
//! Wiring happens here and nowhere else: the credential chain is resolved
//! once, one [`HttpCloudflareClient`] is built from it, and command handlers
//! receive it by reference.

mod commands;
mod config;
mod output;

use std::process::ExitCode;

use cfcli_client::{HttpCloudflareClient, CLOUDFLARE_API_BASE};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::CredentialChain;

#[derive(Parser)]
#[command(name = "cfcli", version, about = "A CLI for interacting with the Cloudflare API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage DNS records
    Dns(commands::dns::DnsArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so tables and messages stay clean on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Dns(args) => {
            let api_key = match CredentialChain::default_sources() {
                Ok(chain) => chain.resolve().unwrap_or_default(),
                Err(err) => {
                    eprint!("{}", output::error_message(&err));
                    return ExitCode::FAILURE;
                }
            };
            // An empty key is still sent; the API answers 403 and the client
            // surfaces the credential hint.
            let client = HttpCloudflareClient::new(api_key, CLOUDFLARE_API_BASE);
            commands::dns::run(&client, args).await
        }
        Command::Config(args) => commands::config::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", output::error_message(&err));
            ExitCode::FAILURE
        }
    }
}
