/*
 * check.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Check command implementation
 */

//! Check command implementation.
//!
//! This module implements the `excursion check` command, which scans the
//! content tree without writing anything and reports what generation would
//! produce. When generated output already exists, its record count is
//! compared against the fresh scan to catch stale data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use excursion_core::{Locale, LocaleData, SiteContext, collect_entries};

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    /// Site directory (defaults to the current directory)
    pub dir: Option<String>,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let start_path = match &args.dir {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from("."),
    };
    if !start_path.exists() {
        anyhow::bail!("Site path does not exist: {}", start_path.display());
    }

    let ctx = SiteContext::discover(&start_path)
        .with_context(|| format!("Failed to discover site from {}", start_path.display()))?;

    let entries = collect_entries(&ctx).context("Content scan failed")?;

    for category in &ctx.config.categories {
        let count = entries
            .iter()
            .filter(|entry| entry.category == category.id)
            .count();
        info!("Category {}: {} digests", category.id, count);
    }

    // Flag documents that fell back to their directory name as a title
    for entry in &entries {
        if directory_name(&entry.source_path) == Some(entry.title.as_str()) {
            warn!(
                "{}: no title in frontmatter, using directory name",
                entry.source_path
            );
        }
    }

    let output_root = ctx.output_root();
    let has_output = Locale::ALL
        .iter()
        .any(|locale| output_root.join(locale.as_str()).join("digests.json").is_file());
    if !has_output {
        info!(
            "No generated output under {}, nothing to compare",
            output_root.display()
        );
        return Ok(());
    }

    for locale in Locale::ALL {
        let data = LocaleData::load(&output_root, locale, "digests")
            .with_context(|| format!("Failed to load generated data for {}", locale))?;
        match recorded_item_count(&data) {
            Some(recorded) if recorded == entries.len() => {
                info!("Output for {} is current ({} digests)", locale, recorded);
            }
            Some(recorded) => {
                anyhow::bail!(
                    "Stale output for {}: {} digests recorded, {} found in content tree",
                    locale,
                    recorded,
                    entries.len()
                );
            }
            None => {
                anyhow::bail!("Output for {} has no digest sections", locale);
            }
        }
    }

    Ok(())
}

/// The item directory name of a source path (`<category>/<name>/<name>.md`).
fn directory_name(source_path: &str) -> Option<&str> {
    source_path.rsplit('/').nth(1)
}

/// Total digest records across the sections of a generated document.
fn recorded_item_count(data: &LocaleData) -> Option<usize> {
    let sections = data.lookup("digests.sections")?.as_array()?;
    let mut total = 0;
    for section in sections {
        total += section
            .get("items")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
    }
    Some(total)
}
