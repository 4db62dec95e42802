use ladeplan_core::error::LadeplanError;
use ladeplan_core::vocabulary::builtin::default_vocabulary;
use ladeplan_core::vocabulary::schema::Vocabulary;
use std::path::Path;

pub fn show() -> Result<(), LadeplanError> {
    let v = default_vocabulary()?;
    print_vocabulary(&v);
    Ok(())
}

pub fn schema() -> Result<(), LadeplanError> {
    print!(
        r#"JSON Vocabulary Schema
======================

A vocabulary names every keyword the line parser recognises. Use a custom
vocabulary with `ladeplan parse --vocabulary FILE` when a loading plan uses
different labels (e.g. an English template).

Top-level fields:
  name               (string, required)  Human-readable name
  description        (string, optional)  Which document layout this is for
  version            (string, required)  Version identifier (e.g., "1.0")
  footer_keywords    (array, optional)   Tokens that end the component region
                                         of a row, e.g. "Ladehöhe:"
  insert_keywords    (array, required)   First token of a two-token insert
                                         label, e.g. "Einlage" in "Einlage 80"
  bundle_keywords    (array, required)   First token of a two-token bundle
                                         label, e.g. "Bund" in "Bund 1"
  side_markers       (array, optional)   Row side markers. Default: ["L", "R"]
  empty_sentinel     (string, optional)  Token for an empty position.
                                         Default: "."
  carrier_marker     (string, required)  Text before the carrier id,
                                         e.g. "Pritsche:"
  carrier_end_marker (string, required)  Text after the carrier description,
                                         e.g. "Unternehmer"
  max_row_index      (number, optional)  Highest row number of the template
                                         (1-9). Default: 7

Every keyword must be a single token (no spaces), and a keyword may appear in
only one of footer_keywords, insert_keywords and bundle_keywords.

Example:
{{
  "name": "English loading plan",
  "version": "1.0",
  "footer_keywords": ["Remarks:", "Total-weight:"],
  "insert_keywords": ["Insert"],
  "bundle_keywords": ["Bundle"],
  "carrier_marker": "Pallet:",
  "carrier_end_marker": "Contractor",
  "max_row_index": 7
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), LadeplanError> {
    let v = ladeplan_core::vocabulary::load_vocabulary(file)?;

    println!("Vocabulary '{}' (v{}) is valid.", v.name, v.version);
    println!("  Insert keywords: {}", v.insert_keywords.join(", "));
    println!("  Bundle keywords: {}", v.bundle_keywords.join(", "));
    println!("  Footer keywords: {}", v.footer_keywords.len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    if v.footer_keywords.is_empty() {
        warnings.push("no footer keywords: footer lines starting with a row digit will be parsed as data".to_string());
    }
    if v.side_markers.is_empty() {
        warnings.push("no side markers: --strict-rows will reject every row".to_string());
    }
    for keyword in v.insert_keywords.iter().chain(&v.bundle_keywords) {
        if keyword.chars().all(|c| c.is_ascii_digit()) {
            warnings.push(format!(
                "keyword '{keyword}' is numeric and shadows component numbers"
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn print_vocabulary(v: &Vocabulary) {
    println!("{} (version {})\n", v.name, v.version);
    if let Some(ref desc) = v.description {
        println!("{}\n", desc);
    }
    println!("  Row markers:      1-{} followed by {}", v.max_row_index, v.side_markers.join("/"));
    println!("  Empty position:   {}", v.empty_sentinel);
    println!("  Insert keywords:  {}", v.insert_keywords.join(", "));
    println!("  Bundle keywords:  {}", v.bundle_keywords.join(", "));
    println!(
        "  Carrier marker:   {} <id> ... {}",
        v.carrier_marker, v.carrier_end_marker
    );
    println!("  Footer keywords:");
    for keyword in &v.footer_keywords {
        println!("    {}", keyword);
    }
    println!();
}
