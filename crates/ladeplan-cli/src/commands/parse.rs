use std::path::PathBuf;

use crate::output;
use crate::InputArgs;

pub fn run(
    input: &InputArgs,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ladeplan_core::error::LadeplanError> {
    let parsed = super::load_plan(input)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} record(s) on {} carrier(s), written to {}",
                parsed.records.len(),
                parsed.carrier_ids.len(),
                path.display()
            );
            if !parsed.skipped_pages.is_empty() {
                eprintln!(
                    "  {} page(s) without carrier marker skipped",
                    parsed.skipped_pages.len()
                );
            }
            if !parsed.discarded_tokens.is_empty() {
                eprintln!(
                    "  {} unrecognized token(s) discarded",
                    parsed.discarded_tokens.len()
                );
            }
        }
        None => match output_format {
            "json" => output::json::print(&parsed)?,
            _ => output::table::print_parsed(&parsed),
        },
    }

    Ok(())
}
