pub mod builtin;
pub mod schema;

use crate::error::LadeplanError;
use schema::Vocabulary;
use std::collections::HashSet;
use std::path::Path;

/// Load a vocabulary from a JSON file.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, LadeplanError> {
    let content = std::fs::read_to_string(path).map_err(|e| LadeplanError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_vocabulary(&content, path)
}

/// Parse a vocabulary from a JSON string read from `source`.
pub fn parse_vocabulary(json: &str, source: &Path) -> Result<Vocabulary, LadeplanError> {
    let vocabulary: Vocabulary =
        serde_json::from_str(json).map_err(|e| LadeplanError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_vocabulary(&vocabulary)?;
    Ok(vocabulary)
}

/// Parse a vocabulary from a JSON string (no file path context).
pub fn parse_vocabulary_str(json: &str) -> Result<Vocabulary, LadeplanError> {
    let vocabulary: Vocabulary = serde_json::from_str(json).map_err(LadeplanError::Json)?;
    validate_vocabulary(&vocabulary)?;
    Ok(vocabulary)
}

/// Validate that a vocabulary is well-formed.
pub fn validate_vocabulary(vocabulary: &Vocabulary) -> Result<(), LadeplanError> {
    if vocabulary.insert_keywords.is_empty() {
        return Err(LadeplanError::ConfigInvalid(
            "insert_keywords must not be empty".into(),
        ));
    }
    if vocabulary.bundle_keywords.is_empty() {
        return Err(LadeplanError::ConfigInvalid(
            "bundle_keywords must not be empty".into(),
        ));
    }
    if vocabulary.empty_sentinel.trim().is_empty() {
        return Err(LadeplanError::ConfigInvalid(
            "empty_sentinel must not be blank".into(),
        ));
    }
    if vocabulary.carrier_marker.trim().is_empty()
        || vocabulary.carrier_end_marker.trim().is_empty()
    {
        return Err(LadeplanError::ConfigInvalid(
            "carrier_marker and carrier_end_marker must not be blank".into(),
        ));
    }
    if !(1..=9).contains(&vocabulary.max_row_index) {
        return Err(LadeplanError::ConfigInvalid(format!(
            "max_row_index {} is outside 1..=9",
            vocabulary.max_row_index
        )));
    }

    let sets: [(&str, &[String]); 4] = [
        ("footer_keywords", vocabulary.footer_keywords.as_slice()),
        ("insert_keywords", vocabulary.insert_keywords.as_slice()),
        ("bundle_keywords", vocabulary.bundle_keywords.as_slice()),
        ("side_markers", vocabulary.side_markers.as_slice()),
    ];
    for (set_name, keywords) in sets {
        for keyword in keywords {
            if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
                return Err(LadeplanError::ConfigInvalid(format!(
                    "{set_name} entry '{keyword}' must be a single non-empty token"
                )));
            }
        }
    }

    // A token may only play one role in the slot parser.
    let mut seen: HashSet<&str> = HashSet::new();
    for (set_name, keywords) in &sets[..3] {
        for keyword in keywords.iter() {
            if !seen.insert(keyword.as_str()) {
                return Err(LadeplanError::ConfigInvalid(format!(
                    "keyword '{keyword}' in {set_name} is already used by another keyword set"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "Test",
        "version": "1.0",
        "insert_keywords": ["Einlage"],
        "bundle_keywords": ["Bund"],
        "carrier_marker": "Pritsche:",
        "carrier_end_marker": "Unternehmer"
    }"#;

    #[test]
    fn test_parse_minimal_vocabulary_uses_defaults() {
        let v = parse_vocabulary_str(MINIMAL).unwrap();
        assert_eq!(v.name, "Test");
        assert_eq!(v.side_markers, vec!["L", "R"]);
        assert_eq!(v.empty_sentinel, ".");
        assert_eq!(v.max_row_index, 7);
        assert!(v.footer_keywords.is_empty());
    }

    #[test]
    fn test_empty_insert_keywords_rejected() {
        let json = MINIMAL.replace(r#"["Einlage"]"#, "[]");
        assert!(matches!(
            parse_vocabulary_str(&json),
            Err(LadeplanError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_keyword_with_whitespace_rejected() {
        let json = MINIMAL.replace(r#"["Bund"]"#, r#"["Bund 1"]"#);
        assert!(parse_vocabulary_str(&json).is_err());
    }

    #[test]
    fn test_keyword_in_two_sets_rejected() {
        let json = MINIMAL.replace(r#"["Bund"]"#, r#"["Einlage"]"#);
        assert!(parse_vocabulary_str(&json).is_err());
    }

    #[test]
    fn test_row_index_out_of_range_rejected() {
        let json = MINIMAL.replace(
            r#""carrier_end_marker": "Unternehmer""#,
            r#""carrier_end_marker": "Unternehmer", "max_row_index": 0"#,
        );
        assert!(parse_vocabulary_str(&json).is_err());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_vocabulary(Path::new("/nonexistent/vocab.json")).unwrap_err();
        assert!(matches!(err, LadeplanError::ConfigLoad { .. }));
    }
}
