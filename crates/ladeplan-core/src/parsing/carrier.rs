use crate::error::LadeplanError;
use crate::model::CarrierIdentity;
use crate::vocabulary::schema::Vocabulary;
use regex::Regex;
use std::sync::LazyLock;

/// Letters (including Ä/Ö/Ü) followed by digits, e.g. "PB 6" or "PW12".
static CARRIER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-ZÄÖÜ]+\s*[0-9]+").expect("valid carrier id pattern"));

/// Finds the carrier of a page from the text between the carrier markers.
#[derive(Debug, Clone)]
pub struct CarrierExtractor {
    marker: Regex,
}

impl CarrierExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, LadeplanError> {
        let pattern = format!(
            r"{}\s*(.+?)\s+{}",
            regex::escape(&vocabulary.carrier_marker),
            regex::escape(&vocabulary.carrier_end_marker)
        );
        let marker = Regex::new(&pattern).map_err(|e| {
            LadeplanError::ConfigInvalid(format!("invalid carrier markers: {e}"))
        })?;
        Ok(CarrierExtractor { marker })
    }

    /// Carrier identity of a page, or None when the page has no carrier marker.
    pub fn extract(&self, page_text: &str) -> Option<CarrierIdentity> {
        let captured = self.marker.captures(page_text)?.get(1)?.as_str().trim();

        let carrier_id = match CARRIER_ID.find(captured) {
            Some(m) => m.as_str().split_whitespace().collect::<String>(),
            None => captured.split_whitespace().next()?.to_string(),
        };

        Some(CarrierIdentity::from_id(carrier_id))
    }
}
