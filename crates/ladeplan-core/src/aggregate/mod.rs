pub mod outcome;

use crate::error::LadeplanError;
use crate::model::{carrier_number, ExtractionRecord};
use crate::parsing::values::component_sort_value;
use crate::parsing::ParsedPlan;
use outcome::{AggregationReport, CarrierSummary, ComponentRow, GRAND_TOTAL};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Which carrier types to report and which insert types to leave out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub carrier_types: BTreeSet<String>,
    #[serde(default)]
    pub excluded_insert_types: BTreeSet<String>,
}

impl Selection {
    pub fn new<C, I>(carrier_types: C, excluded_insert_types: I) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Selection {
            carrier_types: carrier_types.into_iter().map(Into::into).collect(),
            excluded_insert_types: excluded_insert_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Every observed carrier type, every observed insert type excluded.
    pub fn defaults_for(plan: &ParsedPlan) -> Self {
        Selection::new(plan.carrier_types.iter().cloned(), plan.insert_types.iter().cloned())
    }

    fn includes(&self, record: &ExtractionRecord) -> bool {
        if !self.carrier_types.contains(&record.carrier_type) {
            return false;
        }
        match (record.is_insert, &record.insert_type) {
            (true, Some(insert_type)) => !self.excluded_insert_types.contains(insert_type),
            _ => true,
        }
    }
}

/// Filter, sort and total the extraction records.
///
/// Fails with `EmptySelection` when no carrier type is selected.
pub fn aggregate(
    records: &[ExtractionRecord],
    selection: &Selection,
) -> Result<AggregationReport, LadeplanError> {
    if selection.carrier_types.is_empty() {
        return Err(LadeplanError::EmptySelection);
    }

    let mut selected: Vec<&ExtractionRecord> =
        records.iter().filter(|r| selection.includes(r)).collect();
    selected.sort_by(|a, b| compare_records(a, b));

    let components: Vec<ComponentRow> = selected
        .iter()
        .filter(|r| !r.is_bundle)
        .map(|r| ComponentRow {
            label: r.component_label.clone(),
            carrier_id: r.carrier_id.clone(),
            weight_kg: r.weight_kg,
            is_tube: r.is_tube,
        })
        .collect();

    let mut summaries = summarize_components(&components);
    let bundles = bundles_per_carrier(&selected);
    for summary in &mut summaries {
        if let Some(labels) = bundles.get(summary.carrier_id.as_str()) {
            summary.bundle_info = labels.join(", ");
        }
    }

    let grand_total = CarrierSummary {
        carrier_id: GRAND_TOTAL.to_string(),
        element_count: summaries.iter().map(|s| s.element_count).sum(),
        total_weight_kg: summaries
            .iter()
            .fold(Decimal::ZERO, |total, s| add_weight(total, s.total_weight_kg)),
        bundle_info: String::new(),
    };
    summaries.push(grand_total);

    tracing::debug!(
        selected = selected.len(),
        components = components.len(),
        carriers = summaries.len() - 1,
        "aggregated records"
    );

    Ok(AggregationReport {
        components,
        summaries,
    })
}

/// Sort order: carrier type, carrier number, component number (non-numeric
/// labels last), then label.
fn compare_records(a: &ExtractionRecord, b: &ExtractionRecord) -> Ordering {
    a.carrier_type
        .cmp(&b.carrier_type)
        .then_with(|| carrier_number(&a.carrier_id).cmp(&carrier_number(&b.carrier_id)))
        .then_with(|| {
            match (
                component_sort_value(&a.component_label),
                component_sort_value(&b.component_label),
            ) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        })
        .then_with(|| a.component_label.cmp(&b.component_label))
}

/// Count and weight per carrier, in first-seen order of the sorted rows.
fn summarize_components(components: &[ComponentRow]) -> Vec<CarrierSummary> {
    let mut summaries: Vec<CarrierSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in components {
        let i = *index.entry(row.carrier_id.as_str()).or_insert_with(|| {
            summaries.push(CarrierSummary {
                carrier_id: row.carrier_id.clone(),
                element_count: 0,
                total_weight_kg: Decimal::ZERO,
                bundle_info: String::new(),
            });
            summaries.len() - 1
        });
        summaries[i].element_count += 1;
        summaries[i].total_weight_kg = add_weight(summaries[i].total_weight_kg, row.weight_kg);
    }

    summaries
}

/// Weights are non-negative, so an overflowing sum saturates at `Decimal::MAX`.
fn add_weight(total: Decimal, weight: Decimal) -> Decimal {
    total.checked_add(weight).unwrap_or_else(|| {
        tracing::warn!(%total, %weight, "weight sum overflowed, capping at maximum");
        Decimal::MAX
    })
}

/// Distinct bundle labels per carrier, in first-seen order.
fn bundles_per_carrier<'a>(records: &[&'a ExtractionRecord]) -> HashMap<&'a str, Vec<&'a str>> {
    let mut bundles: HashMap<&str, Vec<&str>> = HashMap::new();
    for record in records.iter().filter(|r| r.is_bundle) {
        let labels = bundles.entry(record.carrier_id.as_str()).or_default();
        if !labels.contains(&record.component_label.as_str()) {
            labels.push(record.component_label.as_str());
        }
    }
    bundles
}
