use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Carrier id of the synthetic summary row.
pub const GRAND_TOTAL: &str = "Grand Total";

/// One row of the component table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRow {
    pub label: String,
    pub carrier_id: String,
    pub weight_kg: Decimal,
    pub is_tube: bool,
}

/// Per-carrier totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierSummary {
    pub carrier_id: String,
    pub element_count: usize,
    pub total_weight_kg: Decimal,
    /// Comma-joined bundle labels on this carrier, empty if none.
    pub bundle_info: String,
}

impl CarrierSummary {
    pub fn is_grand_total(&self) -> bool {
        self.carrier_id == GRAND_TOTAL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationReport {
    pub components: Vec<ComponentRow>,
    /// One row per carrier followed by the grand-total row.
    pub summaries: Vec<CarrierSummary>,
}

impl AggregationReport {
    pub fn grand_total(&self) -> Option<&CarrierSummary> {
        self.summaries.last().filter(|s| s.is_grand_total())
    }

    /// Summary rows without the grand total.
    pub fn carrier_summaries(&self) -> &[CarrierSummary] {
        match self.grand_total() {
            Some(_) => &self.summaries[..self.summaries.len() - 1],
            None => &self.summaries,
        }
    }
}
