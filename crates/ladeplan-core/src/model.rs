use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of component positions in one data row.
pub const SLOT_COUNT: usize = 4;

/// One component position of a data row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentSlot {
    #[default]
    Empty,
    /// A numbered component. `id` keeps a trailing `*` for tube variants.
    Plain { id: String, is_tube: bool },
    Insert { keyword: String, size: String },
    Bundle { keyword: String, label: String },
}

impl ComponentSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, ComponentSlot::Empty)
    }

    /// Display label of the slot, `None` for empty positions.
    pub fn label(&self) -> Option<String> {
        match self {
            ComponentSlot::Empty => None,
            ComponentSlot::Plain { id, .. } => Some(id.clone()),
            ComponentSlot::Insert { keyword, size } => Some(format!("{keyword} {size}")),
            ComponentSlot::Bundle { keyword, label } => Some(format!("{keyword} {label}")),
        }
    }
}

impl fmt::Display for ComponentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "."),
        }
    }
}

/// Weights in kg, one per slot position.
pub type WeightQuadruple = [Decimal; SLOT_COUNT];

/// Normalized carrier id (e.g. "PB6") and its letter prefix (e.g. "PB").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarrierIdentity {
    pub carrier_id: String,
    pub carrier_type: String,
}

impl CarrierIdentity {
    /// Build an identity from an already normalized id.
    ///
    /// The type is the leading run of letters. Ids without leading letters
    /// use the whole id as their type so the type is never empty.
    pub fn from_id(carrier_id: impl Into<String>) -> Self {
        let carrier_id = carrier_id.into();
        let prefix: String = carrier_id
            .chars()
            .take_while(|c| c.is_alphabetic())
            .collect();
        let carrier_type = if prefix.is_empty() {
            carrier_id.clone()
        } else {
            prefix
        };
        CarrierIdentity {
            carrier_id,
            carrier_type,
        }
    }
}

impl fmt::Display for CarrierIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.carrier_id)
    }
}

/// Trailing digits of a carrier id, 0 when there are none. Suffixes too long
/// for `u64` saturate so they still sort after every shorter number.
pub(crate) fn carrier_number(carrier_id: &str) -> u64 {
    let digits_start = carrier_id
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);
    match digits_start {
        Some(i) => carrier_id[i..].parse().unwrap_or(u64::MAX),
        None => 0,
    }
}

/// One component placed on a carrier, as read from a data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub component_label: String,
    pub carrier_id: String,
    pub carrier_type: String,
    pub weight_kg: Decimal,
    pub page_number: usize,
    pub is_insert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_type: Option<String>,
    pub is_bundle: bool,
    pub is_tube: bool,
}

impl ExtractionRecord {
    /// Build a record from a non-empty slot. Returns `None` for `Empty`.
    pub fn from_slot(
        slot: &ComponentSlot,
        weight_kg: Decimal,
        carrier: &CarrierIdentity,
        page_number: usize,
    ) -> Option<ExtractionRecord> {
        let label = slot.label()?;
        let is_insert = matches!(slot, ComponentSlot::Insert { .. });
        Some(ExtractionRecord {
            insert_type: is_insert.then(|| label.clone()),
            component_label: label,
            carrier_id: carrier.carrier_id.clone(),
            carrier_type: carrier.carrier_type.clone(),
            weight_kg,
            page_number,
            is_insert,
            is_bundle: matches!(slot, ComponentSlot::Bundle { .. }),
            is_tube: matches!(slot, ComponentSlot::Plain { is_tube: true, .. }),
        })
    }
}
