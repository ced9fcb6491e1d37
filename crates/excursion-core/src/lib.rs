//! Digest aggregation core for Excursion Studio
//!
//! This crate contains the generation pipeline that turns a tree of digest
//! documents into the per-locale `digests.json` data documents served by
//! the website.
//!
//! # Architecture
//!
//! The pipeline is organized around these key types:
//!
//! - [`SiteContext`] - Site root, configuration, and resolved paths
//! - [`DigestEntry`] - Canonical, locale-independent data for one document
//! - [`DigestsDocument`] - The per-locale page data document
//! - [`LocaleData`] - Generated-data catalog with dot-path lookup
//!
//! # Example
//!
//! ```ignore
//! use excursion_core::{SiteContext, generate};
//!
//! // Discover the site from the current directory
//! let ctx = SiteContext::discover(".")?;
//!
//! // Scan, arrange, and write the per-locale documents
//! let report = generate(&ctx)?;
//! println!("{} digests written", report.entry_count);
//! ```

pub mod aggregate;
pub mod config;
pub mod digest;
pub mod document;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod pipeline;
pub mod scan;

// Re-export commonly used types
pub use aggregate::{NumberedEntry, arrange, localize};
pub use config::{Category, SiteConfig, SiteContext};
pub use digest::{DigestEntry, DigestRecord, EPOCH_DATE};
pub use document::{
    DigestsDocument, Hero, Section, Teaser, UiLabels, base_document, write_documents,
};
pub use error::{ExcursionError, Result};
pub use i18n::LocaleData;
pub use locale::{Locale, LocalizedText};
pub use pipeline::{GenerateReport, generate};
pub use scan::{collect_entries, scan_category};
