use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

use super::settings::NUMBER_PLACEHOLDER;
use super::{Config, ConfigError, LinkConfig, get_config_dir};

#[inline]
pub fn run_interactive_config() -> Result<()> {
    eprintln!("{}", style("RFC Scout Configuration Setup").bold().cyan());
    eprintln!();

    let config_dir = get_config_dir()?;
    let mut config = load_existing_config(&config_dir)?;

    eprintln!("{}", style("Record Store").bold().yellow());
    eprintln!("Point rfc-scout at the SQLite file holding the RFC index.");
    eprintln!();

    let default_path = config
        .store
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let store_path: String = Input::new()
        .with_prompt("Record store path (blank uses the default next to the config file)")
        .default(default_path)
        .allow_empty(true)
        .interact_text()?;

    config.store.path = {
        let trimmed = store_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    };

    eprintln!();
    eprintln!("{}", style("Document Links").bold().yellow());
    eprintln!("Template used to build the link for each result; {NUMBER_PLACEHOLDER} is replaced with the RFC number.");
    eprintln!();

    let url_template: String = Input::new()
        .with_prompt("Document URL template")
        .default(config.links.url_template.clone())
        .validate_with(|input: &String| -> Result<(), ConfigError> {
            let candidate = LinkConfig {
                url_template: input.clone(),
            };
            candidate.validate()?;
            Ok(())
        })
        .interact_text()?;

    config.links.set_url_template(url_template)?;

    eprintln!();
    let resolved = config.store_path();
    if resolved.is_file() {
        eprintln!("{}", style("✓ Record store found").green());
    } else {
        eprintln!(
            "{}",
            style(format!("⚠ Warning: no record store at {}", resolved.display())).yellow()
        );
        eprintln!("You can continue, but searches will fail until the store exists.");
    }

    eprintln!();
    if Confirm::new()
        .with_prompt("Save configuration?")
        .default(true)
        .interact()?
    {
        config.save().context("Failed to save configuration")?;
        eprintln!("{}", style("✓ Configuration saved successfully!").green());
        eprintln!(
            "Configuration saved to: {}",
            style(config.config_file_path().display()).cyan()
        );
    } else {
        eprintln!("Configuration not saved.");
    }

    Ok(())
}

#[inline]
pub fn show_config() -> Result<()> {
    let config = Config::load(get_config_dir()?).context("Failed to load configuration")?;

    eprintln!("{}", style("Current Configuration").bold().cyan());
    eprintln!();

    eprintln!("{}", style("Record Store:").bold().yellow());
    eprintln!("  Path: {}", style(config.store_path().display()).cyan());

    eprintln!();
    eprintln!("{}", style("Document Links:").bold().yellow());
    eprintln!(
        "  URL template: {}",
        style(&config.links.url_template).cyan()
    );

    eprintln!();
    eprintln!(
        "Config file: {}",
        style(config.config_file_path().display()).dim()
    );

    Ok(())
}

fn load_existing_config(config_dir: &std::path::Path) -> Result<Config> {
    Config::load(config_dir).map_or_else(
        |_| {
            eprintln!(
                "{}",
                style("Existing configuration could not be read. Using defaults.").yellow()
            );
            Ok(Config {
                base_dir: config_dir.to_path_buf(),
                ..Config::default()
            })
        },
        |config| {
            if config.config_file_path().exists() {
                eprintln!("{}", style("Found existing configuration.").green());
            } else {
                eprintln!(
                    "{}",
                    style("No existing configuration found. Using defaults.").yellow()
                );
            }
            Ok(config)
        },
    )
}
