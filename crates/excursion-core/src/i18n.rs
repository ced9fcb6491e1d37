/*
 * i18n.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Locale data catalog.
 */

//! Locale data loading and lookup.
//!
//! Loads generated per-locale data documents and answers dot-path lookups
//! the way the website runtime does. Three namespaces are loaded per page:
//! `common`, `page` (the current page's document), and `digests`. A lookup
//! that does not resolve to a string echoes its path back as the display
//! text, which is how untranslated keys surface in the interface.

use std::path::Path;

use serde_json::Value;

use crate::error::{ExcursionError, Result};
use crate::locale::Locale;

/// Per-locale data catalog with namespace lookup
#[derive(Debug, Clone)]
pub struct LocaleData {
    locale: Locale,
    common: Value,
    page: Value,
    digests: Value,
}

impl LocaleData {
    /// Load the catalog for a locale from a data directory.
    ///
    /// Reads `common.json`, `<page>.json`, and `digests.json` from
    /// `data_root/<locale>/`. A missing file leaves its namespace empty; a
    /// file that exists but cannot be read or parsed is an error.
    pub fn load(data_root: &Path, locale: Locale, page: &str) -> Result<Self> {
        let locale_dir = data_root.join(locale.as_str());
        Ok(Self {
            locale,
            common: load_namespace(&locale_dir.join("common.json"))?,
            page: load_namespace(&locale_dir.join(format!("{}.json", page)))?,
            digests: load_namespace(&locale_dir.join("digests.json"))?,
        })
    }

    /// The locale this catalog was loaded for
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a dot-separated path.
    ///
    /// The first segment selects the namespace (`common`, `page`,
    /// `digests`); the rest walk objects by key and arrays by numeric
    /// index.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut value = match segments.next()? {
            "common" => &self.common,
            "page" => &self.page,
            "digests" => &self.digests,
            _ => return None,
        };
        for segment in segments {
            value = child(value, segment)?;
        }
        Some(value)
    }

    /// The display string at a path.
    ///
    /// A path that does not resolve, or that resolves to a non-string
    /// value, echoes the path itself back.
    pub fn text(&self, path: &str) -> String {
        match self.lookup(path).and_then(Value::as_str) {
            Some(value) => value.to_string(),
            None => path.to_string(),
        }
    }

    /// Look up a display string in the shared `common` namespace.
    pub fn common(&self, path: &str) -> String {
        self.text(&format!("common.{}", path))
    }

    /// Look up a display string in the current page's namespace.
    pub fn page(&self, path: &str) -> String {
        self.text(&format!("page.{}", path))
    }

    /// Look up a display string in the `digests` namespace.
    pub fn digests(&self, path: &str) -> String {
        self.text(&format!("digests.{}", path))
    }
}

/// One step of a path walk: object key or array index.
fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Read one namespace document; a missing file is an empty namespace.
fn load_namespace(path: &Path) -> Result<Value> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Locale data file not found, using empty namespace");
            return Ok(Value::Object(serde_json::Map::new()));
        }
        Err(e) => return Err(ExcursionError::Io(e)),
    };
    serde_json::from_str(&text)
        .map_err(|e| ExcursionError::data(format!("Failed to parse {}: {}", path.display(), e)))
}
