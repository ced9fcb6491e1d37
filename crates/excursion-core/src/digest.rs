/*
 * digest.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Digest entries and their per-locale records.
 */

//! Canonical digest entries and display records.
//!
//! A [`DigestEntry`] is the locale-independent result of parsing one digest
//! document. A [`DigestRecord`] is its projection for one display locale,
//! serialized into the generated data documents.

use serde::{Deserialize, Serialize};

use excursion_frontmatter::FieldMap;

/// Fallback date for documents that carry none.
pub const EPOCH_DATE: &str = "1970-01-01";

/// Canonical digest data for one source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    /// Owning category identifier
    pub category: String,

    /// Original document title
    pub title: String,

    /// Paper publication date (raw frontmatter string)
    pub date: String,

    /// Digest publication time (raw frontmatter string; drives ordering)
    pub digest_pub_time: String,

    /// Editor notes; the first becomes the record description
    pub editor_note: Vec<String>,

    /// Paper authors
    pub authors: Vec<String>,

    /// Topic tags
    pub tags: Vec<String>,

    /// Publication venue
    pub venue: String,

    /// Link to the paper PDF
    pub pdf_url: String,

    /// Document path relative to the content root, forward slashes
    pub source_path: String,
}

impl DigestEntry {
    /// Build an entry from parsed frontmatter fields.
    ///
    /// Missing fields, empty scalars, and fields of the wrong shape all fall
    /// back the same way: `title` to the document directory name, the two
    /// time fields to the epoch date, lists to empty, and the remaining
    /// scalars to the empty string.
    pub fn from_fields(
        fields: &FieldMap,
        category: &str,
        directory_name: &str,
        source_path: String,
    ) -> Self {
        Self {
            category: category.to_string(),
            title: scalar_or(fields, "title", directory_name),
            date: scalar_or(fields, "date", EPOCH_DATE),
            digest_pub_time: scalar_or(fields, "digest_pub_time", EPOCH_DATE),
            editor_note: list_or_empty(fields, "editor_note"),
            authors: list_or_empty(fields, "authors"),
            tags: list_or_empty(fields, "tags"),
            venue: scalar_or(fields, "venue", ""),
            pdf_url: scalar_or(fields, "pdf_url", ""),
            source_path,
        }
    }
}

/// The scalar value of a field, or a fallback when the field is missing,
/// empty, or not a scalar.
fn scalar_or(fields: &FieldMap, key: &str, fallback: &str) -> String {
    match fields.scalar(key) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// The items of a list field, or empty when the field is missing or not a
/// list.
fn list_or_empty(fields: &FieldMap, key: &str) -> Vec<String> {
    match fields.list(key) {
        Some(items) => items.to_vec(),
        None => Vec::new(),
    }
}

/// One digest record in a generated data document
///
/// Field names and their order match the JSON consumed by the website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestRecord {
    /// Owning category identifier
    pub category: String,

    /// Localized category display name
    pub category_name: String,

    /// Countdown number within the category
    pub number: u32,

    /// Composite display title: `<category name> <number> - <original title>`
    pub title: String,

    /// First editor note, or empty
    pub description: String,

    /// Paper publication date
    pub date: String,

    /// Digest publication time
    pub digest_pub_time: String,

    /// Paper authors
    pub authors: Vec<String>,

    /// Topic tags
    pub tags: Vec<String>,

    /// Publication venue
    pub venue: String,

    /// Link to the paper PDF
    pub pdf_url: String,

    /// Document path relative to the content root
    pub source_path: String,
}
