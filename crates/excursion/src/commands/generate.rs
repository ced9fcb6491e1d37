/*
 * generate.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Generate command implementation
 */

//! Generate command implementation.
//!
//! This module implements the `excursion generate` command, which scans the
//! content tree and writes the per-locale `digests.json` data documents.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use excursion_core::{SiteContext, generate};

/// Arguments for the generate command
#[derive(Debug)]
pub struct GenerateArgs {
    /// Site directory (defaults to the current directory)
    pub dir: Option<String>,
    /// Output directory override (site-root relative)
    pub output_dir: Option<String>,
    /// Suppress console output
    pub quiet: bool,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let start_path = match &args.dir {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from("."),
    };
    if !start_path.exists() {
        anyhow::bail!("Site path does not exist: {}", start_path.display());
    }

    // Discover site context
    let mut ctx = SiteContext::discover(&start_path)
        .with_context(|| format!("Failed to discover site from {}", start_path.display()))?;
    if let Some(output_dir) = &args.output_dir {
        ctx.config.output_dir = PathBuf::from(output_dir);
    }

    if !args.quiet {
        match &ctx.config_file {
            Some(config_file) => info!("Using site configuration: {}", config_file.display()),
            None => info!("No _digests.yml found, using built-in configuration"),
        }
    }

    let report = generate(&ctx).context("Digest generation failed")?;

    if !args.quiet {
        for (category, count) in &report.category_counts {
            info!("Category {}: {} digests", category, count);
        }
        info!(
            "Generated {} digests into {} files",
            report.entry_count,
            report.written.len()
        );
    }

    Ok(())
}
