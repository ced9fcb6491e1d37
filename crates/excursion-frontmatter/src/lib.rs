//! # excursion-frontmatter
//!
//! Line-oriented frontmatter scanning for digest documents.
//!
//! This crate is deliberately not a YAML parser. Digest documents carry a
//! small frontmatter dialect (scalars, inline lists, bracketed lists, and
//! dash lists) and the site has always read them with a fixed set of line
//! rules rather than a grammar. The scanner preserves those rules exactly:
//! lines are classified one at a time, in a fixed precedence order, and fed
//! through an explicit state machine that tracks at most one open list.
//!
//! ## Design
//!
//! Scanning is best-effort and infallible: malformed input produces missing
//! or partial fields, never errors. Fields keep their first-assignment
//! order, and reassigning a field replaces its value in place.
//!
//! ## Example
//!
//! ```rust
//! use excursion_frontmatter::parse;
//!
//! let document = r#"---
//! title: "Attention Is All You Need"
//! tags: ["nlp", "transformers"]
//! ---
//!
//! Body text.
//! "#;
//!
//! let fields = parse(document);
//! assert_eq!(fields.scalar("title"), Some("Attention Is All You Need"));
//! assert_eq!(
//!     fields.list("tags"),
//!     Some(&["nlp".to_string(), "transformers".to_string()][..])
//! );
//! ```

mod parser;
mod value;

pub use parser::{extract_block, parse};
pub use value::{FieldMap, FieldValue};
