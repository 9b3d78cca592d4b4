//! Config command - manage configuration.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use pinpoint_core::PinpointConfig;

use super::default_config_path;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "resolution.keyword_window")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(),
        ConfigCommand::Init(init_args) => init_config(init_args),
        ConfigCommand::Get { key } => get_config(&key),
        ConfigCommand::Set { key, value } => set_config(&key, &value),
        ConfigCommand::Path => show_path(),
    }
}

fn load_or_default() -> anyhow::Result<PinpointConfig> {
    let config_path = default_config_path();
    if config_path.exists() {
        Ok(PinpointConfig::from_file(&config_path)?)
    } else {
        Ok(PinpointConfig::default())
    }
}

fn show_config() -> anyhow::Result<()> {
    let config_path = default_config_path();
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    eprintln!("{} {}", style("source:").dim(), source);

    println!("{}", serde_json::to_string_pretty(&load_or_default()?)?);

    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(default_config_path);

    if output_path.exists() && !args.force {
        anyhow::bail!("{} exists (pass --force to replace it)", output_path.display());
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    PinpointConfig::default().save(&output_path)?;

    println!("{} Wrote defaults to {}", style("✓").green(), output_path.display());

    Ok(())
}

fn get_config(key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(load_or_default()?)?;

    let mut current = &json;
    for part in key.split('.') {
        current = current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    }

    println!("{}", serde_json::to_string_pretty(current)?);

    Ok(())
}

fn set_config(key: &str, value: &str) -> anyhow::Result<()> {
    let config_path = default_config_path();
    let (config, parsed_value) = apply_setting(&load_or_default()?, key, value)?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(&config_path)?;

    println!("{} {} = {}", style("✓").green(), key, parsed_value);

    Ok(())
}

/// Replace an existing dotted key, returning the updated config and the
/// value as stored. Bare words are taken as strings.
fn apply_setting(
    config: &PinpointConfig,
    key: &str,
    value: &str,
) -> anyhow::Result<(PinpointConfig, serde_json::Value)> {
    let parsed_value: serde_json::Value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

    let mut json = serde_json::to_value(config)?;

    let parts: Vec<&str> = key.split('.').collect();
    let (last, path) = parts
        .split_last()
        .ok_or_else(|| anyhow::anyhow!("Empty configuration key"))?;

    let mut current = &mut json;
    for part in path {
        current = current
            .get_mut(*part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    }

    let slot = current
        .as_object_mut()
        .and_then(|obj| obj.get_mut(*last))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    *slot = parsed_value.clone();

    let config = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;

    Ok((config, parsed_value))
}

fn show_path() -> anyhow::Result<()> {
    let config_path = default_config_path();

    if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{} (not created)", config_path.display());
        eprintln!(
            "{} pinpoint config init",
            style("create it with:").dim()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setting_updates_typed_values() {
        let defaults = PinpointConfig::default();

        let (config, _) = apply_setting(&defaults, "resolution.keyword_window", "120").unwrap();
        assert_eq!(config.resolution.keyword_window, 120);

        let (config, stored) = apply_setting(&defaults, "completion.model", "gpt-4o").unwrap();
        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(stored, serde_json::json!("gpt-4o"));

        let (config, _) = apply_setting(&defaults, "completion.timeout_secs", "30").unwrap();
        assert_eq!(config.completion.timeout_secs, Some(30));
    }

    #[test]
    fn test_apply_setting_rejects_unknown_keys_and_bad_types() {
        let defaults = PinpointConfig::default();

        let err = apply_setting(&defaults, "resolution.no_such_key", "1").unwrap_err();
        assert!(err.to_string().contains("Configuration key not found"));

        let err = apply_setting(&defaults, "nope.keyword_window", "1").unwrap_err();
        assert!(err.to_string().contains("Configuration key not found"));

        let err = apply_setting(&defaults, "server.port", "not-a-port").unwrap_err();
        assert!(err.to_string().contains("Invalid value for server.port"));
    }
}
