//! `fincalc config`: inspect and edit the persisted settings file.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::context::Context;
use crate::error::CliError;
use crate::output::{print_info, print_key_values, print_success, print_warning, KeyValue};
use crate::settings::{validate_config_value, ConfigKey, SettingsStore};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print every setting with its effective value
    Show,

    /// Print one setting
    Get {
        /// Setting name (e.g. precision, tolerance)
        key: String,
    },

    /// Change one setting
    Set {
        /// Setting name
        key: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Describe the known settings and their defaults
    List,

    /// Restore one setting, or all of them, to the default
    Reset {
        /// Restore every setting
        #[arg(long, conflicts_with = "key")]
        all: bool,

        /// Setting to restore
        key: Option<String>,
    },

    /// Print where the settings file lives
    Path,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    let path = &ctx.settings_path;

    match args.command {
        ConfigCommand::Show => {
            let store = SettingsStore::load(path)?;
            let rows = settings_rows(|key| store.value(key).to_string());
            print_key_values("Current Configuration", &rows, ctx)
        }
        ConfigCommand::Get { key } => {
            let key = resolve(&key)?;
            let value = SettingsStore::load(path)?.value(key).to_string();
            if ctx.format == OutputFormat::Minimal {
                println!("{value}");
                return Ok(());
            }
            print_key_values("Configuration", &[KeyValue::new(key.as_str(), value)], ctx)
        }
        ConfigCommand::Set { key, value } => {
            let key = resolve(&key)?;
            validate_config_value(key, &value)?;
            edit(ctx, |store| store.set(key, value.clone()))?;
            if !ctx.quiet {
                print_success(&format!("Set {} = {value}", key.as_str()));
            }
            Ok(())
        }
        ConfigCommand::List => {
            let rows = settings_rows(|key| {
                format!("{} (default: {})", key.description(), key.default_value())
            });
            print_key_values("Available Configuration Keys", &rows, ctx)
        }
        ConfigCommand::Reset { all: true, .. } => {
            edit(ctx, SettingsStore::clear)?;
            print_success("Reset all configuration to defaults");
            Ok(())
        }
        ConfigCommand::Reset { key: Some(key), .. } => {
            let key = resolve(&key)?;
            edit(ctx, |store| store.remove(key))?;
            print_success(&format!(
                "Reset {} to default ({})",
                key.as_str(),
                key.default_value()
            ));
            Ok(())
        }
        ConfigCommand::Reset { .. } => {
            print_warning("Use --all to reset all settings, or specify a key to reset");
            Ok(())
        }
        ConfigCommand::Path => {
            if ctx.format == OutputFormat::Minimal {
                println!("{}", path.display());
                return Ok(());
            }
            print_info(&format!("Config file: {}", path.display()));
            let status = if path.exists() {
                "exists"
            } else {
                "not created yet (using defaults)"
            };
            print_info(&format!("Status: {status}"));
            Ok(())
        }
    }
}

fn resolve(key: &str) -> Result<ConfigKey> {
    ConfigKey::parse(key).ok_or_else(|| CliError::UnknownKey(key.to_string()).into())
}

fn settings_rows(describe: impl Fn(ConfigKey) -> String) -> Vec<KeyValue> {
    ConfigKey::all()
        .iter()
        .map(|&key| KeyValue::new(key.as_str(), describe(key)))
        .collect()
}

/// Loads the store, applies `change` and writes it back.
fn edit(ctx: &Context, change: impl FnOnce(&mut SettingsStore)) -> Result<()> {
    let mut store = SettingsStore::load(&ctx.settings_path)?;
    change(&mut store);
    store.save(&ctx.settings_path)?;
    Ok(())
}
