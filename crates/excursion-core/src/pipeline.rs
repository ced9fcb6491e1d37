/*
 * pipeline.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * The digests generation pipeline.
 */

//! End-to-end generation: scan, arrange, project, write.
//!
//! One invocation reads the content tree, computes everything in memory,
//! and overwrites the per-locale output documents. Per-item and
//! per-category problems are absorbed along the way; structural failures
//! abort the run.

use std::path::PathBuf;

use crate::aggregate::{arrange, localize};
use crate::config::SiteContext;
use crate::document::{Section, base_document, write_documents};
use crate::error::Result;
use crate::locale::Locale;
use crate::scan::collect_entries;

/// Totals from one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Total digest entries across all categories
    pub entry_count: usize,

    /// Per-category entry counts, in configuration order
    pub category_counts: Vec<(String, usize)>,

    /// Output files written, one per locale
    pub written: Vec<PathBuf>,
}

/// Run the full generation pipeline for a site.
///
/// Scans every configured category, orders and numbers the entries, and
/// overwrites the per-locale data documents under the output root. Always
/// produces complete documents for every locale, even when categories or
/// documents were skipped during the scan.
pub fn generate(ctx: &SiteContext) -> Result<GenerateReport> {
    let entries = collect_entries(ctx)?;

    let category_counts: Vec<(String, usize)> = ctx
        .config
        .categories
        .iter()
        .map(|category| {
            let count = entries
                .iter()
                .filter(|entry| entry.category == category.id)
                .count();
            (category.id.clone(), count)
        })
        .collect();

    let arranged = arrange(entries);
    let entry_count = arranged.len();

    let mut documents = Vec::with_capacity(Locale::ALL.len());
    for locale in Locale::ALL {
        let records = localize(&arranged, &ctx.config.categories, locale);
        let mut document = base_document(locale);
        document.sections = vec![Section::all_digests(locale, records)];
        documents.push((locale, document));
    }

    let written = write_documents(&ctx.output_root(), &documents)?;

    tracing::info!(
        entries = entry_count,
        files = written.len(),
        "Digest generation complete"
    );

    Ok(GenerateReport {
        entry_count,
        category_counts,
        written,
    })
}
