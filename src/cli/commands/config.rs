//! `clinic-desk config` command - inspect configuration

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration values
    Show,

    /// Show the path of the user configuration file
    Path,
}

pub fn run(cmd: ConfigCommands, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            print!("{}", config.to_yaml());
        }
        ConfigCommands::Path => match Config::global_config_path() {
            Some(path) => {
                let marker = if path.exists() {
                    style("(exists)").green()
                } else {
                    style("(not created)").dim()
                };
                println!("{} {}", path.display(), marker);
            }
            None => {
                return Err(miette::miette!(
                    "Could not determine a configuration directory for this user"
                ));
            }
        },
    }
    Ok(())
}
