/*
 * document.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Generated page data documents.
 */

//! The per-locale `digests.json` page data document.
//!
//! Shapes and strings match the JSON the website consumes: the base
//! document carries the static page copy for a locale and the generator
//! attaches the digest sections to it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::digest::DigestRecord;
use crate::error::Result;
use crate::locale::Locale;

/// A per-locale page data document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestsDocument {
    /// Browser title of the digests page
    pub page_title: String,

    /// Hero block copy
    pub hero: Hero,

    /// "Coming soon" teaser block
    pub teaser: Teaser,

    /// Interface labels
    pub ui: UiLabels,

    /// Digest sections, attached by the generator
    pub sections: Vec<Section>,
}

/// Page hero copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub description: String,
}

/// "Coming soon" teaser copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teaser {
    pub title: String,
    pub description: String,
    pub expected_launch: String,
    pub features: Vec<String>,
    pub updated_label: String,
    pub enabled: bool,
}

/// Interface labels used by the digests page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiLabels {
    pub show_more: String,
    pub show_less: String,
    pub read_more: String,
    pub published_on: String,
}

/// One section of digest records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section kind discriminator; the generator only emits `"digests"`
    #[serde(rename = "type")]
    pub section_type: String,

    /// Stable section identifier
    pub id: String,

    /// Localized section title
    pub title: String,

    /// Digest records, in arranged order
    pub items: Vec<DigestRecord>,
}

impl Section {
    /// The single all-digests section emitted by the generator.
    pub fn all_digests(locale: Locale, items: Vec<DigestRecord>) -> Self {
        let title = match locale {
            Locale::Zh => "全部文摘",
            Locale::En => "All Digests",
        };
        Self {
            section_type: "digests".to_string(),
            id: "all-digests".to_string(),
            title: title.to_string(),
            items,
        }
    }
}

/// The static page copy for a locale, with no sections attached.
pub fn base_document(locale: Locale) -> DigestsDocument {
    match locale {
        Locale::Zh => DigestsDocument {
            page_title: "文摘 - 远行工作室 测试版".to_string(),
            hero: Hero {
                title: "远行工作室 - 文摘系列".to_string(),
                description: "敬请期待远行工作室即将推出的<strong>《论文导读》</strong>和<strong>《论文速递》</strong>系列栏目！".to_string(),
            },
            teaser: Teaser {
                title: "精彩预告".to_string(),
                description: "我们正在准备更多精彩内容，包括更多论文导读和速递，敬请期待！".to_string(),
                expected_launch: "2026 年 3 月".to_string(),
                features: vec![
                    "更多高质量论文解读".to_string(),
                    "前沿研究快速上手".to_string(),
                    "专家深度点评".to_string(),
                ],
                updated_label: "更新于".to_string(),
                enabled: true,
            },
            ui: UiLabels {
                show_more: "展开更多".to_string(),
                show_less: "收起".to_string(),
                read_more: "阅读全文".to_string(),
                published_on: "发布于".to_string(),
            },
            sections: Vec::new(),
        },
        Locale::En => DigestsDocument {
            page_title: "Digests - Excursion Studio BETA".to_string(),
            hero: Hero {
                title: "Excursion Studio - Digests".to_string(),
                description: "Stay tuned for Excursion Studio's upcoming <strong>Paper Guide</strong> and <strong>Paper Express</strong> series columns!".to_string(),
            },
            teaser: Teaser {
                title: "Coming Soon".to_string(),
                description: "We are preparing more exciting content, including more paper guides and express, stay tuned!".to_string(),
                expected_launch: "March 2026".to_string(),
                features: vec![
                    "More high-quality paper interpretations".to_string(),
                    "Quick access to cutting-edge research".to_string(),
                    "Expert in-depth commentary".to_string(),
                ],
                updated_label: "Updated on".to_string(),
                enabled: true,
            },
            ui: UiLabels {
                show_more: "Show More".to_string(),
                show_less: "Show Less".to_string(),
                read_more: "Read More".to_string(),
                published_on: "Published on".to_string(),
            },
            sections: Vec::new(),
        },
    }
}

/// Write one data document per locale under `<output root>/<locale>/digests.json`.
///
/// Locale directories are created as needed and existing documents are
/// overwritten. Returns the written paths in input order.
pub fn write_documents(
    output_root: &Path,
    documents: &[(Locale, DigestsDocument)],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(documents.len());
    for (locale, document) in documents {
        let locale_dir = output_root.join(locale.as_str());
        std::fs::create_dir_all(&locale_dir)?;

        let path = locale_dir.join("digests.json");
        let json = serde_json::to_string_pretty(document)?;
        std::fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "Wrote digests data");
        written.push(path);
    }
    Ok(written)
}
