//! `cfcli config` — get, set and list local configuration.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::config::LocalConfig;
use crate::output::{self, Table};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print one config value
    Get {
        /// Config key to read
        key: String,
    },
    /// Set config values as `<key> <value>` pairs
    Set {
        /// Alternating keys and values
        #[arg(required = true, num_args = 2..)]
        pairs: Vec<String>,
    },
    /// List all config values
    List,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Get { key } => get(&key),
        ConfigCommand::Set { pairs } => set(&pairs),
        ConfigCommand::List => list(),
    }
}

fn get(key: &str) -> Result<()> {
    let config = LocalConfig::load()?;
    match config.get(key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!("key not found"),
    }
}

fn set(pairs: &[String]) -> Result<()> {
    if pairs.len() % 2 != 0 {
        bail!("invalid number of args");
    }

    let mut config = LocalConfig::load()?;
    for pair in pairs.chunks(2) {
        config.set(&pair[0], &pair[1])?;
    }
    config.save()?;

    print!("{}", output::success_message("Config updated"));
    Ok(())
}

fn list() -> Result<()> {
    let config = LocalConfig::load()?;
    let mut table = Table::new(&["Key", "Value"]);
    for (key, value) in config.entries() {
        table.add_row(vec![key.to_string(), value]);
    }
    print!("{}", table.render());
    Ok(())
}
