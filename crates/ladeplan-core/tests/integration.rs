//! Integration tests for the parse_document() -> summarize() pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use ladeplan_core::aggregate::Selection;
use ladeplan_core::error::LadeplanError;
use ladeplan_core::extraction::plain::PlainTextExtractor;
use ladeplan_core::extraction::{PageContent, TextExtractor};
use ladeplan_core::parsing::row::RowPolicy;
use ladeplan_core::parsing::ParseOptions;
use ladeplan_core::vocabulary::builtin::default_vocabulary;
use ladeplan_core::{parse_document, summarize};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl TextExtractor for MockExtractor {
    fn extract_pages(&self, _bytes: &[u8]) -> Result<Vec<PageContent>, LadeplanError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent::new(number, lines.join("\n"))
}

fn loading_plan() -> MockExtractor {
    MockExtractor {
        pages: vec![
            page(1, &["Verladeplan", "Projekt: Wohnanlage Nord", "Seite 1 von 4"]),
            page(
                2,
                &[
                    "Verladeplan                                   Datum: 03.02.2025",
                    "Pritsche: PB 2 Haus A2 Vordach Unternehmer Muster Bau GmbH",
                    "Reihe  Pos1  Pos2  Pos3  Pos4   G1  G2  G3  G4   H   B   L",
                    "1 L 20 21 . . 410.0 380.5 0.0 0.0 170 2152 5852",
                    "2 R 22* Einlage 80 . 23 250.0 35.0 0.0 275.25 170 2152 5852",
                    "7 24 Bund 1 . . 120.0 0.0 0.0 0.0 170 2152 5852",
                    "Ladehöhe: 2.45 m   Gesammtgewicht ca.: 1.47 Tonnen",
                    "Bemerkungen: keine",
                ],
            ),
            page(
                3,
                &[
                    "Pritsche: PB1 Haus A1 Unternehmer Muster Bau GmbH",
                    "1 L 10 11 12 13 100.0 100.0 100.0 100.0 170 2152 5852",
                    "2 L 14 Bund 3 . . 50.0 0.0 0.0 0.0 170 2152 5852",
                ],
            ),
            page(
                4,
                &[
                    "Pritsche: PW 1 Haus B Unternehmer Muster Bau GmbH",
                    "1 L 5 Einlage 30 . . 80.0 12.0 0.0 0.0 170 2152 5852",
                ],
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Test 1: records, observed sets and skipped pages
// ---------------------------------------------------------------------------
#[test]
fn parse_collects_records_per_carrier() {
    let vocabulary = default_vocabulary().unwrap();
    let plan = parse_document(&[], &loading_plan(), &vocabulary, &ParseOptions::default()).unwrap();

    assert_eq!(plan.skipped_pages, vec![1]);
    assert_eq!(plan.carrier_ids, vec!["PB1", "PB2", "PW1"]);
    assert_eq!(plan.carrier_types, vec!["PB", "PW"]);
    assert_eq!(plan.insert_types, vec!["Einlage 30", "Einlage 80"]);

    // page 2: 20, 21, 22*, Einlage 80, 23, 24, Bund 1
    let page2: Vec<&str> = plan
        .records
        .iter()
        .filter(|r| r.page_number == 2)
        .map(|r| r.component_label.as_str())
        .collect();
    assert_eq!(page2, vec!["20", "21", "22*", "Einlage 80", "23", "24", "Bund 1"]);

    let item_23 = plan
        .records
        .iter()
        .find(|r| r.component_label == "23")
        .unwrap();
    assert_eq!(item_23.weight_kg, dec!(275.25));
    assert_eq!(item_23.carrier_id, "PB2");
    assert!(plan.records.iter().all(|r| r.component_label != "."));
}

// ---------------------------------------------------------------------------
// Test 2: default selection (all carrier types, all inserts excluded)
// ---------------------------------------------------------------------------
#[test]
fn summarize_with_default_selection() {
    let vocabulary = default_vocabulary().unwrap();
    let plan = parse_document(&[], &loading_plan(), &vocabulary, &ParseOptions::default()).unwrap();
    let report = summarize(&plan, &Selection::defaults_for(&plan)).unwrap();

    let rows: Vec<(&str, &str)> = report
        .components
        .iter()
        .map(|c| (c.carrier_id.as_str(), c.label.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("PB1", "10"),
            ("PB1", "11"),
            ("PB1", "12"),
            ("PB1", "13"),
            ("PB1", "14"),
            ("PB2", "20"),
            ("PB2", "21"),
            ("PB2", "22*"),
            ("PB2", "23"),
            ("PB2", "24"),
            ("PW1", "5"),
        ]
    );
    assert!(report.components[7].is_tube);

    let summaries = report.carrier_summaries();
    assert_eq!(summaries.len(), 3);

    assert_eq!(summaries[0].carrier_id, "PB1");
    assert_eq!(summaries[0].element_count, 5);
    assert_eq!(summaries[0].total_weight_kg, dec!(450.0));
    assert_eq!(summaries[0].bundle_info, "Bund 3");

    assert_eq!(summaries[1].carrier_id, "PB2");
    assert_eq!(summaries[1].element_count, 5);
    assert_eq!(summaries[1].total_weight_kg, dec!(1435.75));
    assert_eq!(summaries[1].bundle_info, "Bund 1");

    assert_eq!(summaries[2].carrier_id, "PW1");
    assert_eq!(summaries[2].element_count, 1);
    assert_eq!(summaries[2].total_weight_kg, dec!(80.0));

    let total = report.grand_total().unwrap();
    assert_eq!(total.element_count, 11);
    assert_eq!(total.total_weight_kg, dec!(1965.75));
}

// ---------------------------------------------------------------------------
// Test 3: keeping inserts and restricting carrier types
// ---------------------------------------------------------------------------
#[test]
fn summarize_keeps_selected_inserts() {
    let vocabulary = default_vocabulary().unwrap();
    let plan = parse_document(&[], &loading_plan(), &vocabulary, &ParseOptions::default()).unwrap();
    let selection = Selection::new(["PW"], Vec::<String>::new());
    let report = summarize(&plan, &selection).unwrap();

    let labels: Vec<&str> = report.components.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["5", "Einlage 30"]);
    let total = report.grand_total().unwrap();
    assert_eq!(total.element_count, 2);
    assert_eq!(total.total_weight_kg, dec!(92.0));
}

// ---------------------------------------------------------------------------
// Test 4: empty carrier-type selection is a validation error
// ---------------------------------------------------------------------------
#[test]
fn empty_selection_is_rejected() {
    let vocabulary = default_vocabulary().unwrap();
    let plan = parse_document(&[], &loading_plan(), &vocabulary, &ParseOptions::default()).unwrap();
    let selection = Selection::new(Vec::<String>::new(), plan.insert_types.clone());
    assert!(matches!(
        summarize(&plan, &selection),
        Err(LadeplanError::EmptySelection)
    ));
}

// ---------------------------------------------------------------------------
// Test 5: strict row policy drops rows without side marker
// ---------------------------------------------------------------------------
#[test]
fn strict_rows_require_side_marker() {
    let vocabulary = default_vocabulary().unwrap();
    let options = ParseOptions {
        row_policy: RowPolicy::Strict,
    };
    let plan = parse_document(&[], &loading_plan(), &vocabulary, &options).unwrap();
    assert!(plan.records.iter().all(|r| r.component_label != "24"));
    assert!(plan.records.iter().all(|r| r.component_label != "Bund 1"));
    assert!(plan.records.iter().any(|r| r.component_label == "20"));
}

// ---------------------------------------------------------------------------
// Test 6: re-running the pipeline gives identical output
// ---------------------------------------------------------------------------
#[test]
fn pipeline_is_idempotent() {
    let vocabulary = default_vocabulary().unwrap();
    let extractor = loading_plan();
    let options = ParseOptions::default();

    let first = parse_document(&[], &extractor, &vocabulary, &options).unwrap();
    let second = parse_document(&[], &extractor, &vocabulary, &options).unwrap();
    assert_eq!(first, second);

    let selection = Selection::defaults_for(&first);
    let a = serde_json::to_string(&summarize(&first, &selection).unwrap()).unwrap();
    let b = serde_json::to_string(&summarize(&second, &selection).unwrap()).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Test 7: document without any carrier marker
// ---------------------------------------------------------------------------
#[test]
fn document_without_carriers_yields_no_records() {
    let vocabulary = default_vocabulary().unwrap();
    let extractor = MockExtractor {
        pages: vec![page(1, &["1 L 10 11 12 13 1 2 3 4 170 2152 5852"])],
    };
    let plan = parse_document(&[], &extractor, &vocabulary, &ParseOptions::default()).unwrap();
    assert!(plan.records.is_empty());
    assert_eq!(plan.skipped_pages, vec![1]);
    assert!(plan.carrier_types.is_empty());
}

// ---------------------------------------------------------------------------
// Test 8: plain-text backend splits pages on form feed
// ---------------------------------------------------------------------------
#[test]
fn plain_text_document() {
    let vocabulary = default_vocabulary().unwrap();
    let text = "Pritsche: PB 1 Unternehmer X\n1 L 10 . . . 5.0 0 0 0 170 2152 5852\n\x0c\
                Pritsche: PB 2 Unternehmer X\n1 L 11 . . . 2,5 0 0 0 170 2152 5852\n";
    let plan = parse_document(
        text.as_bytes(),
        &PlainTextExtractor::new(),
        &vocabulary,
        &ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(plan.records.len(), 2);
    assert_eq!(plan.records[1].page_number, 2);
    assert_eq!(plan.records[1].weight_kg, dec!(2.5));
}

// ---------------------------------------------------------------------------
// Test 9: oversized weight columns cap the totals instead of aborting
// ---------------------------------------------------------------------------
#[test]
fn oversized_weights_do_not_abort_summary() {
    let vocabulary = default_vocabulary().unwrap();
    let extractor = MockExtractor {
        pages: vec![page(
            1,
            &[
                "Pritsche: PB 1 Unternehmer X",
                "1 L 10 11 12 13 5e28 5e28 0 0 170 2152 5852",
            ],
        )],
    };
    let plan = parse_document(&[], &extractor, &vocabulary, &ParseOptions::default()).unwrap();
    assert_eq!(
        plan.records[0].weight_kg,
        Decimal::from_scientific("5e28").unwrap()
    );

    let report = summarize(&plan, &Selection::defaults_for(&plan)).unwrap();
    let total = report.grand_total().unwrap();
    assert_eq!(total.element_count, 4);
    assert_eq!(total.total_weight_kg, Decimal::MAX);
}
