/*
 * scan.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Content tree scanning.
 */

//! Digest document discovery.
//!
//! Each category subtree holds one directory per digest, and the directory
//! name names the expected document: `<name>/<name>.md`. Anything else in
//! the tree is ignored.

use std::path::Path;

use crate::config::{Category, SiteContext};
use crate::digest::DigestEntry;
use crate::error::Result;

/// Scan one category subtree into digest entries.
///
/// A missing category directory yields no entries; an item directory
/// without its document is skipped. An existing document that cannot be
/// read is an error.
pub fn scan_category(content_root: &Path, category: &Category) -> Result<Vec<DigestEntry>> {
    let category_dir = content_root.join(&category.path);
    if !category_dir.is_dir() {
        tracing::warn!(
            category = %category.id,
            dir = %category_dir.display(),
            "Category directory not found, skipping"
        );
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for dir_entry in std::fs::read_dir(&category_dir)? {
        let dir_entry = dir_entry?;
        if dir_entry.file_type()?.is_dir() {
            if let Ok(name) = dir_entry.file_name().into_string() {
                names.push(name);
            }
        }
    }
    // Sort for deterministic ordering
    names.sort();

    let mut entries = Vec::new();
    for name in names {
        let document_path = category_dir.join(&name).join(format!("{}.md", name));
        if !document_path.is_file() {
            tracing::debug!(
                category = %category.id,
                item = %name,
                "No digest document in item directory, skipping"
            );
            continue;
        }

        let text = std::fs::read_to_string(&document_path)?;
        let fields = excursion_frontmatter::parse(&text);
        let source_path = format!("{}/{}/{}.md", category.path, name, name);
        entries.push(DigestEntry::from_fields(
            &fields,
            &category.id,
            &name,
            source_path,
        ));
    }

    Ok(entries)
}

/// Collect entries from every configured category, in configuration order.
pub fn collect_entries(ctx: &SiteContext) -> Result<Vec<DigestEntry>> {
    let content_root = ctx.content_root();
    let mut entries = Vec::new();
    for category in &ctx.config.categories {
        let mut scanned = scan_category(&content_root, category)?;
        tracing::debug!(category = %category.id, count = scanned.len(), "Scanned category");
        entries.append(&mut scanned);
    }
    Ok(entries)
}
