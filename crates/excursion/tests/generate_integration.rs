/*
 * generate_integration.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Integration tests for the digests generation pipeline.
 */

//! Integration tests for the generation pipeline.
//!
//! These tests exercise the full pipeline from a content tree on disk to the
//! generated per-locale data documents, verifying that scanning,
//! arrangement, localization, and output writing work together correctly.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

use excursion_core::{GenerateReport, Locale, LocaleData, SiteContext, generate};

/// Write one digest document under the default content layout.
fn write_digest(site_root: &Path, category_path: &str, name: &str, frontmatter: &str) {
    let dir = site_root.join("es-digests").join(category_path).join(name);
    fs::create_dir_all(&dir).expect("Failed to create item directory");
    fs::write(
        dir.join(format!("{}.md", name)),
        format!("---\n{}\n---\n\nBody.\n", frontmatter),
    )
    .expect("Failed to write digest document");
}

/// Helper to run generation over a prepared site directory.
fn run_generate(build: impl FnOnce(&Path)) -> GeneratedSite {
    let temp = TempDir::new().expect("Failed to create temp directory");
    build(temp.path());

    let ctx = SiteContext::discover(temp.path()).expect("Failed to discover site");
    let report = generate(&ctx).expect("Generation failed");

    GeneratedSite { temp, report }
}

struct GeneratedSite {
    temp: TempDir,
    report: GenerateReport,
}

impl GeneratedSite {
    fn document(&self, locale: Locale) -> Value {
        let path = self
            .temp
            .path()
            .join("data")
            .join(locale.as_str())
            .join("digests.json");
        let text = fs::read_to_string(&path).expect("Failed to read generated document");
        serde_json::from_str(&text).expect("Generated document is not valid JSON")
    }

    fn items(&self, locale: Locale) -> Vec<Value> {
        self.document(locale)["sections"][0]["items"]
            .as_array()
            .expect("Document has no items array")
            .clone()
    }
}

// ============================================================================
// Arrangement and Numbering
// ============================================================================

#[test]
fn test_categories_get_independent_countdowns() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "march-guide",
            "title: Guide March\ndigest_pub_time: 2024-03-01",
        );
        write_digest(
            root,
            "paper-guide/papers",
            "february-guide",
            "title: Guide February\ndigest_pub_time: 2024-02-01",
        );
        write_digest(
            root,
            "paper-express/papers",
            "february-express",
            "title: Express February\ndigest_pub_time: 2024-02-15",
        );
    });

    assert_eq!(site.report.entry_count, 3);
    assert_eq!(
        site.report.category_counts,
        vec![
            ("paper-guide".to_string(), 2),
            ("paper-express".to_string(), 1),
        ]
    );

    let items = site.items(Locale::En);
    let titles: Vec<&str> = items.iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec![
            "Paper Guide 2 - Guide March",
            "Paper Express 1 - Express February",
            "Paper Guide 1 - Guide February",
        ]
    );
    assert_eq!(items[0]["number"].as_u64(), Some(2));
    assert_eq!(items[1]["number"].as_u64(), Some(1));
    assert_eq!(items[2]["number"].as_u64(), Some(1));
}

#[test]
fn test_equal_times_keep_scan_order() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "beta",
            "title: Beta\ndigest_pub_time: 2024-01-01 08:00:00",
        );
        write_digest(
            root,
            "paper-guide/papers",
            "alpha",
            "title: Alpha\ndigest_pub_time: 2024-01-01 08:00:00",
        );
    });

    // Items are scanned in name order, and the stable sort keeps that order
    let items = site.items(Locale::En);
    assert_eq!(items[0]["title"].as_str(), Some("Paper Guide 2 - Alpha"));
    assert_eq!(items[1]["title"].as_str(), Some("Paper Guide 1 - Beta"));
}

#[test]
fn test_time_formats_sort_together() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "newest",
            "title: Newest\ndigest_pub_time: 2024-03-15T10:30:00",
        );
        write_digest(
            root,
            "paper-guide/papers",
            "middle",
            "title: Middle\ndigest_pub_time: 2024-03-15 09:00",
        );
        write_digest(
            root,
            "paper-guide/papers",
            "oldest",
            "title: Oldest\ndigest_pub_time: 2024-03-14",
        );
    });

    let items = site.items(Locale::En);
    let numbers: Vec<u64> = items.iter().map(|i| i["number"].as_u64().unwrap()).collect();
    assert_eq!(numbers, vec![3, 2, 1]);
    assert_eq!(items[0]["title"].as_str(), Some("Paper Guide 3 - Newest"));
    assert_eq!(items[2]["title"].as_str(), Some("Paper Guide 1 - Oldest"));
}

// ============================================================================
// Record Shape
// ============================================================================

#[test]
fn test_record_fields_match_website_shape() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "attention",
            // A scalar line follows the dash items so the notes commit; a
            // list opener there would discard them
            concat!(
                "title: \"Attention Is All You Need\"\n",
                "date: 2017-06-12\n",
                "digest_pub_time: 2024-03-15 10:30:00\n",
                "authors: [\n",
                "  \"Ashish Vaswani\",\n",
                "  \"Noam Shazeer\"\n",
                "]\n",
                "tags: [\"attention\", \"transformers\"]\n",
                "editor_note:\n",
                "  - \"A landmark architecture paper.\"\n",
                "  - \"Second note.\"\n",
                "venue: NeurIPS 2017\n",
                "pdf_url: \"https://arxiv.org/abs/1706.03762\"",
            ),
        );
    });

    let zh_items = site.items(Locale::Zh);
    let item = &zh_items[0];
    assert_eq!(item["category"].as_str(), Some("paper-guide"));
    assert_eq!(item["categoryName"].as_str(), Some("论文导读"));
    assert_eq!(item["number"].as_u64(), Some(1));
    assert_eq!(
        item["title"].as_str(),
        Some("论文导读 1 - Attention Is All You Need")
    );
    assert_eq!(
        item["description"].as_str(),
        Some("A landmark architecture paper.")
    );
    assert_eq!(item["date"].as_str(), Some("2017-06-12"));
    assert_eq!(item["digestPubTime"].as_str(), Some("2024-03-15 10:30:00"));
    assert_eq!(
        item["authors"].as_array().unwrap().len(),
        2,
        "authors: {:?}",
        item["authors"]
    );
    assert_eq!(item["tags"][1].as_str(), Some("transformers"));
    assert_eq!(item["venue"].as_str(), Some("NeurIPS 2017"));
    assert_eq!(
        item["pdfUrl"].as_str(),
        Some("https://arxiv.org/abs/1706.03762")
    );
    assert_eq!(
        item["sourcePath"].as_str(),
        Some("paper-guide/papers/attention/attention.md")
    );

    let en_items = site.items(Locale::En);
    assert_eq!(
        en_items[0]["title"].as_str(),
        Some("Paper Guide 1 - Attention Is All You Need")
    );
}

#[test]
fn test_notes_followed_by_list_opener_yield_empty_description() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "mislaid",
            "title: Mislaid\neditor_note:\n  - \"dropped note\"\nauthors: [\"kept\"]",
        );
    });

    // The authors opener discards the accumulated notes, so the record
    // falls back to an empty description
    let items = site.items(Locale::En);
    assert_eq!(items[0]["description"].as_str(), Some(""));
    assert_eq!(items[0]["authors"][0].as_str(), Some("kept"));
}

#[test]
fn test_document_without_frontmatter_fields_gets_fallbacks() {
    let site = run_generate(|root| {
        write_digest(root, "paper-express/papers", "mystery-paper", "");
    });

    let items = site.items(Locale::En);
    let item = &items[0];
    assert_eq!(item["title"].as_str(), Some("Paper Express 1 - mystery-paper"));
    assert_eq!(item["date"].as_str(), Some("1970-01-01"));
    assert_eq!(item["digestPubTime"].as_str(), Some("1970-01-01"));
    assert_eq!(item["description"].as_str(), Some(""));
    assert_eq!(item["authors"].as_array().unwrap().len(), 0);
    assert_eq!(item["tags"].as_array().unwrap().len(), 0);
    assert_eq!(item["venue"].as_str(), Some(""));
    assert_eq!(item["pdfUrl"].as_str(), Some(""));
}

#[test]
fn test_page_copy_and_section_shape() {
    let site = run_generate(|_| {});

    let zh = site.document(Locale::Zh);
    assert_eq!(zh["pageTitle"].as_str(), Some("文摘 - 远行工作室 测试版"));
    assert_eq!(zh["hero"]["title"].as_str(), Some("远行工作室 - 文摘系列"));
    assert_eq!(zh["teaser"]["expectedLaunch"].as_str(), Some("2026 年 3 月"));
    assert_eq!(zh["teaser"]["enabled"].as_bool(), Some(true));
    assert_eq!(zh["ui"]["showMore"].as_str(), Some("展开更多"));
    assert_eq!(zh["sections"][0]["type"].as_str(), Some("digests"));
    assert_eq!(zh["sections"][0]["id"].as_str(), Some("all-digests"));
    assert_eq!(zh["sections"][0]["title"].as_str(), Some("全部文摘"));

    let en = site.document(Locale::En);
    assert_eq!(en["pageTitle"].as_str(), Some("Digests - Excursion Studio BETA"));
    assert_eq!(en["teaser"]["expectedLaunch"].as_str(), Some("March 2026"));
    assert_eq!(en["ui"]["publishedOn"].as_str(), Some("Published on"));
    assert_eq!(en["sections"][0]["title"].as_str(), Some("All Digests"));
}

// ============================================================================
// Locale Parity
// ============================================================================

#[test]
fn test_locales_share_membership_and_order() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "one",
            "title: One\ndigest_pub_time: 2024-02-01",
        );
        write_digest(
            root,
            "paper-express/papers",
            "two",
            "title: Two\ndigest_pub_time: 2024-03-01",
        );
    });

    let zh_items = site.items(Locale::Zh);
    let en_items = site.items(Locale::En);

    assert_eq!(zh_items.len(), en_items.len());
    for (zh_item, en_item) in zh_items.iter().zip(&en_items) {
        assert_eq!(zh_item["sourcePath"], en_item["sourcePath"]);
        assert_eq!(zh_item["number"], en_item["number"]);
        assert_eq!(zh_item["date"], en_item["date"]);
        // Only the display strings differ
        assert_ne!(zh_item["categoryName"], en_item["categoryName"]);
    }
}

// ============================================================================
// Skips and Absences
// ============================================================================

#[test]
fn test_missing_category_directory_is_skipped() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "only",
            "title: Only\ndigest_pub_time: 2024-01-01",
        );
        // paper-express/papers never gets created
    });

    assert_eq!(site.report.entry_count, 1);
    assert_eq!(
        site.report.category_counts,
        vec![
            ("paper-guide".to_string(), 1),
            ("paper-express".to_string(), 0),
        ]
    );
    assert_eq!(site.items(Locale::En).len(), 1);
}

#[test]
fn test_item_directory_without_document_is_skipped() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "kept",
            "title: Kept\ndigest_pub_time: 2024-01-01",
        );
        let stray = root.join("es-digests/paper-guide/papers/stray");
        fs::create_dir_all(&stray).expect("Failed to create stray directory");
        fs::write(stray.join("notes.txt"), "not a digest").expect("Failed to write stray file");
    });

    let items = site.items(Locale::En);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"].as_str(), Some("Paper Guide 1 - Kept"));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_regeneration_is_byte_identical() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "a",
            "title: A\ndigest_pub_time: 2024-01-01",
        );
        write_digest(
            root,
            "paper-guide/papers",
            "b",
            "title: B\ndigest_pub_time: 2024-01-01",
        );
        write_digest(
            root,
            "paper-express/papers",
            "c",
            "title: C\ndigest_pub_time: 2024-02-01",
        );
    });

    let zh_path = site.temp.path().join("data/zh/digests.json");
    let en_path = site.temp.path().join("data/en/digests.json");
    let first_zh = fs::read(&zh_path).expect("Failed to read zh output");
    let first_en = fs::read(&en_path).expect("Failed to read en output");

    let ctx = SiteContext::discover(site.temp.path()).expect("Failed to discover site");
    generate(&ctx).expect("Second generation failed");

    assert_eq!(fs::read(&zh_path).unwrap(), first_zh);
    assert_eq!(fs::read(&en_path).unwrap(), first_en);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_config_discovered_from_nested_path() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        temp.path().join("_digests.yml"),
        concat!(
            "content-dir: essays\n",
            "output-dir: out\n",
            "categories:\n",
            "  - id: notes\n",
            "    path: notes\n",
            "    title:\n",
            "      zh: 笔记\n",
            "      en: Notes\n",
        ),
    )
    .expect("Failed to write config");

    let item_dir = temp.path().join("essays/notes/first-note");
    fs::create_dir_all(&item_dir).expect("Failed to create item directory");
    fs::write(
        item_dir.join("first-note.md"),
        "---\ntitle: First Note\ndigest_pub_time: 2024-05-01\n---\n",
    )
    .expect("Failed to write digest document");

    // Discovery starts from a nested directory and walks up to the config
    let ctx = SiteContext::discover(temp.path().join("essays/notes")).expect("Failed to discover");
    let report = generate(&ctx).expect("Generation failed");

    assert_eq!(report.entry_count, 1);
    assert_eq!(report.category_counts, vec![("notes".to_string(), 1)]);

    let text = fs::read_to_string(temp.path().join("out/en/digests.json"))
        .expect("Failed to read output");
    let value: Value = serde_json::from_str(&text).expect("Invalid JSON");
    let item = &value["sections"][0]["items"][0];
    assert_eq!(item["categoryName"].as_str(), Some("Notes"));
    assert_eq!(item["title"].as_str(), Some("Notes 1 - First Note"));
    assert_eq!(item["sourcePath"].as_str(), Some("notes/first-note/first-note.md"));

    let zh_text = fs::read_to_string(temp.path().join("out/zh/digests.json"))
        .expect("Failed to read output");
    assert!(zh_text.contains("笔记 1 - First Note"));
}

// ============================================================================
// I18n over Generated Output
// ============================================================================

#[test]
fn test_i18n_lookup_over_generated_output() {
    let site = run_generate(|root| {
        write_digest(
            root,
            "paper-guide/papers",
            "attention",
            "title: Attention\ndigest_pub_time: 2024-03-15",
        );
    });
    let data_root = site.temp.path().join("data");

    let en = LocaleData::load(&data_root, Locale::En, "digests").expect("Failed to load en data");
    assert_eq!(en.text("digests.ui.showMore"), "Show More");
    assert_eq!(en.digests("ui.readMore"), "Read More");
    assert_eq!(en.text("digests.sections.0.title"), "All Digests");
    assert_eq!(
        en.text("digests.sections.0.items.0.title"),
        "Paper Guide 1 - Attention"
    );
    // The digests page loads digests.json as its page data too
    assert_eq!(en.page("pageTitle"), "Digests - Excursion Studio BETA");

    let zh = LocaleData::load(&data_root, Locale::Zh, "digests").expect("Failed to load zh data");
    assert_eq!(zh.text("digests.ui.showMore"), "展开更多");
    assert_eq!(zh.text("digests.teaser.title"), "精彩预告");
}

#[test]
fn test_i18n_missing_lookups_echo_the_path() {
    let site = run_generate(|_| {});
    let data_root = site.temp.path().join("data");

    let en = LocaleData::load(&data_root, Locale::En, "digests").expect("Failed to load en data");
    // No common.json was generated, so its namespace is empty
    assert_eq!(en.common("nav.home"), "common.nav.home");
    assert_eq!(en.text("digests.ui.noSuchLabel"), "digests.ui.noSuchLabel");
    // Objects are not display strings
    assert_eq!(en.text("digests.teaser"), "digests.teaser");
}
