use crate::error::LadeplanError;
use crate::vocabulary::schema::Vocabulary;
use crate::vocabulary::validate_vocabulary;

const VERLADEPLAN_JSON: &str = include_str!("../../../../vocabulary/verladeplan.json");

/// Built-in vocabulary for the standard loading-plan layout.
pub fn default_vocabulary() -> Result<Vocabulary, LadeplanError> {
    let vocabulary: Vocabulary = serde_json::from_str(VERLADEPLAN_JSON)?;
    validate_vocabulary(&vocabulary)?;
    Ok(vocabulary)
}
