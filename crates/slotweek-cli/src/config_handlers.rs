//! Handlers for the `config` subcommands.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::{SlotweekConfig, PROJECT_NAME};
use crate::error::{Error, Result};

/// Dispatches one `config` subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => cmd_config_show(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

/// Prints the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = SlotweekConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Prints the effective configuration.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<()> {
    let config = SlotweekConfig::load(config_path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Prints one configuration value.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = SlotweekConfig::load(config_path)?;
    println!("{}", lookup(&config, key)?);
    Ok(())
}

/// Writes the default configuration and returns where it went.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => SlotweekConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let toml_str = SlotweekConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    tracing::info!(path = %path.display(), "Config file written");
    Ok(path)
}

/// Looks up a dotted key in `config` and formats it for stdout.
pub fn lookup(config: &SlotweekConfig, key: &str) -> Result<String> {
    let root = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    let value = key
        .split('.')
        .try_fold(&root, |current, part| current.as_table()?.get(part))
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))?;

    Ok(match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(_) | toml::Value::Array(_) => {
            toml::to_string_pretty(value).map_err(|e| Error::config(e.to_string()))?
        }
        other => other.to_string(),
    })
}
