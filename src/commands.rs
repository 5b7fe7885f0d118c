use anyhow::Context;
use console::style;
use dialoguer::Input;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::{Config, get_config_dir};
use crate::render;
use crate::store;
use crate::{Result, ScoutError};

/// Rejects empty and whitespace-only search terms before the store is
/// touched.
#[inline]
pub fn validate_term(term: &str) -> Result<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(ScoutError::EmptyTerm);
    }
    Ok(trimmed)
}

/// Run one keyword search: prompt when no term was given, query the store,
/// hand the result sequence to the requested presentation.
#[inline]
pub async fn run_search(term: Option<String>, html_out: Option<PathBuf>, json: bool) -> Result<()> {
    let term = match term {
        Some(term) => term,
        None => prompt_for_term()?,
    };
    let term = validate_term(&term)?.to_string();

    let config = Config::load(get_config_dir()?)?;
    let store_path = config.store_path();

    info!(
        "Searching record store {} for {:?}",
        store_path.display(),
        term
    );

    let records = match store::search(&store_path, &term).await {
        Ok(records) => records,
        Err(e) => {
            error!("Search failed: {e}");
            eprintln!("{}", style(format!("Search failed: {e}")).red());
            return Err(e);
        }
    };

    if let Some(path) = html_out {
        let html = render::html_document(&records, &term, &config.links);
        fs::write(&path, html)
            .with_context(|| format!("Failed to write results page: {}", path.display()))?;
        println!("Results page written to {}", path.display());
    } else if json {
        let rendered =
            serde_json::to_string_pretty(&records).context("Failed to serialize results")?;
        println!("{rendered}");
    } else {
        render::print_terminal(&records, &term, &config.links);
    }

    Ok(())
}

/// Show record store diagnostics: resolved path, reachability, record count.
/// An unreachable store is reported as such, not shown as zero records.
#[inline]
pub async fn show_status() -> Result<()> {
    let config = Config::load(get_config_dir()?)?;
    let store_path = config.store_path();

    println!("{}", style("RFC Scout Status").bold());
    println!("  Store path: {}", store_path.display());

    match store::count(&store_path).await {
        Ok(count) => {
            println!("  Store: {}", style("reachable").green());
            println!("  Records: {count}");
        }
        Err(ScoutError::StoreUnavailable { source, .. }) => {
            println!("  Store: {} ({source})", style("unavailable").red());
            println!("  Run 'rfc-scout config' to point at an existing store.");
        }
        Err(e) => {
            error!("Status query failed: {e}");
            println!("  Store: {} ({e})", style("error").red());
        }
    }

    Ok(())
}

fn prompt_for_term() -> Result<String> {
    let term: String = Input::new()
        .with_prompt("RFC title keyword")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read search term")?;
    Ok(term)
}
