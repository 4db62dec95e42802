pub mod carrier;
pub mod row;
pub mod slots;
pub mod values;

use crate::error::LadeplanError;
use crate::extraction::PageContent;
use crate::model::{ComponentSlot, ExtractionRecord, WeightQuadruple, SLOT_COUNT};
use crate::vocabulary::schema::Vocabulary;
use carrier::CarrierExtractor;
use row::{classify_row, split_fields, RowPolicy};
use serde::{Deserialize, Serialize};
use slots::parse_slots;
use std::collections::BTreeSet;

/// Options for the line parser.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    pub row_policy: RowPolicy,
}

/// One data row after slot parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow<'a> {
    pub index: u8,
    pub side: Option<&'a str>,
    pub slots: [ComponentSlot; SLOT_COUNT],
    pub weights: WeightQuadruple,
    pub discarded: Vec<&'a str>,
}

impl ParsedRow<'_> {
    /// Non-empty slots paired with the weight of their position.
    pub fn occupied(&self) -> impl Iterator<Item = (&ComponentSlot, rust_decimal::Decimal)> + '_ {
        self.slots
            .iter()
            .zip(self.weights)
            .filter(|(slot, _)| !slot.is_empty())
    }
}

/// A token skipped in the component region of a data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardedToken {
    pub page_number: usize,
    /// 0-based line index within the page.
    pub line_index: usize,
    pub token: String,
}

/// Everything extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPlan {
    pub records: Vec<ExtractionRecord>,
    pub carrier_ids: Vec<String>,
    pub carrier_types: Vec<String>,
    pub insert_types: Vec<String>,
    /// Pages without a carrier marker (cover sheets, appendices).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_pages: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discarded_tokens: Vec<DiscardedToken>,
}

/// Parse one line. Returns None when the line is not a data row.
pub fn parse_line<'a>(
    line: &'a str,
    vocabulary: &Vocabulary,
    options: &ParseOptions,
) -> Option<ParsedRow<'a>> {
    let row = classify_row(line, vocabulary, options.row_policy)?;
    let (component_tokens, weights) = split_fields(&row.tokens);
    let parsed = parse_slots(component_tokens, vocabulary);

    Some(ParsedRow {
        index: row.index,
        side: row.side,
        slots: parsed.slots,
        weights,
        discarded: parsed.discarded,
    })
}

/// Parse extracted pages into extraction records.
///
/// Pages are processed in order. Pages without a carrier marker contribute no
/// records and are listed in `skipped_pages`.
pub fn parse_pages(
    pages: &[PageContent],
    vocabulary: &Vocabulary,
    options: &ParseOptions,
) -> Result<ParsedPlan, LadeplanError> {
    let carriers = CarrierExtractor::new(vocabulary)?;

    let mut plan = ParsedPlan::default();
    let mut carrier_ids = BTreeSet::new();
    let mut carrier_types = BTreeSet::new();
    let mut insert_types = BTreeSet::new();

    for page in pages {
        let Some(carrier) = carriers.extract(&page.text) else {
            tracing::debug!(page = page.page_number, "no carrier marker, skipping page");
            plan.skipped_pages.push(page.page_number);
            continue;
        };

        let before = plan.records.len();
        for (line_index, line) in page.lines().enumerate() {
            let Some(row) = parse_line(line, vocabulary, options) else {
                continue;
            };

            plan.discarded_tokens
                .extend(row.discarded.iter().map(|token| DiscardedToken {
                    page_number: page.page_number,
                    line_index,
                    token: token.to_string(),
                }));

            for (slot, weight) in row.occupied() {
                if let Some(record) =
                    ExtractionRecord::from_slot(slot, weight, &carrier, page.page_number)
                {
                    if let Some(ref insert_type) = record.insert_type {
                        insert_types.insert(insert_type.clone());
                    }
                    plan.records.push(record);
                }
            }
        }

        if plan.records.len() > before {
            carrier_ids.insert(carrier.carrier_id.clone());
            carrier_types.insert(carrier.carrier_type.clone());
        }
        tracing::debug!(
            page = page.page_number,
            carrier = %carrier,
            records = plan.records.len() - before,
            "parsed page"
        );
    }

    plan.carrier_ids = carrier_ids.into_iter().collect();
    plan.carrier_types = carrier_types.into_iter().collect();
    plan.insert_types = insert_types.into_iter().collect();

    tracing::info!(
        pages = pages.len(),
        skipped = plan.skipped_pages.len(),
        records = plan.records.len(),
        carriers = plan.carrier_ids.len(),
        "parsed loading plan"
    );

    Ok(plan)
}
