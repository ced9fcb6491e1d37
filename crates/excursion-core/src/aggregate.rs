/*
 * aggregate.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Entry ordering, numbering, and per-locale projection.
 */

//! Digest arrangement.
//!
//! Entries from all categories are ordered together by digest publication
//! time, most recent first, then numbered per category in countdown style:
//! a category with N entries gives N to its most recent entry and 1 to its
//! oldest. Projection to a locale substitutes display strings only; it
//! never changes membership or order.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::Category;
use crate::digest::{DigestEntry, DigestRecord};
use crate::locale::Locale;

/// A digest entry with its countdown number assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedEntry {
    pub entry: DigestEntry,
    pub number: u32,
}

/// Accepted digest publication time formats, most specific first.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a digest publication time into a sort key.
///
/// Date-only values sort at midnight; unparseable values sort as the epoch,
/// equal to the missing-field fallback date.
fn sort_key(time: &str) -> NaiveDateTime {
    for format in &DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(time, format) {
            return parsed;
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(time, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return midnight;
        }
    }
    NaiveDateTime::default()
}

/// Order entries most recent first and assign countdown numbers.
///
/// The sort is stable: entries with equal publication times keep their scan
/// order. Numbering is independent per category.
pub fn arrange(mut entries: Vec<DigestEntry>) -> Vec<NumberedEntry> {
    entries.sort_by_key(|entry| Reverse(sort_key(&entry.digest_pub_time)));

    // Walking oldest-first, each category counts up from 1, so its most
    // recent entry ends at the category total
    let mut counters: HashMap<String, u32> = HashMap::new();
    let mut arranged: Vec<NumberedEntry> = entries
        .into_iter()
        .rev()
        .map(|entry| {
            let counter = counters.entry(entry.category.clone()).or_insert(0);
            *counter += 1;
            let number = *counter;
            NumberedEntry { entry, number }
        })
        .collect();
    arranged.reverse();
    arranged
}

/// Project arranged entries into display records for one locale.
///
/// Membership and order are identical for every locale; only the category
/// display name and the composite title vary.
pub fn localize(
    arranged: &[NumberedEntry],
    categories: &[Category],
    locale: Locale,
) -> Vec<DigestRecord> {
    arranged
        .iter()
        .map(|numbered| {
            let entry = &numbered.entry;
            let category_name = match categories.iter().find(|c| c.id == entry.category) {
                Some(category) => category.title.get(locale),
                None => entry.category.as_str(),
            };

            DigestRecord {
                category: entry.category.clone(),
                category_name: category_name.to_string(),
                number: numbered.number,
                title: format!("{} {} - {}", category_name, numbered.number, entry.title),
                description: entry.editor_note.first().cloned().unwrap_or_default(),
                date: entry.date.clone(),
                digest_pub_time: entry.digest_pub_time.clone(),
                authors: entry.authors.clone(),
                tags: entry.tags.clone(),
                venue: entry.venue.clone(),
                pdf_url: entry.pdf_url.clone(),
                source_path: entry.source_path.clone(),
            }
        })
        .collect()
}
