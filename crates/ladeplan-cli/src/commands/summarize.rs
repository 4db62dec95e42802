use ladeplan_core::aggregate::Selection;
use ladeplan_core::error::LadeplanError;

use crate::output;
use crate::InputArgs;

pub fn run(
    input: &InputArgs,
    carrier_types: Vec<String>,
    exclude_inserts: Vec<String>,
    keep_inserts: bool,
    output_format: &str,
) -> Result<(), LadeplanError> {
    let parsed = super::load_plan(input)?;

    // Same defaults as the interactive tool: every carrier type selected,
    // every observed insert type excluded.
    let mut selection = Selection::defaults_for(&parsed);
    if !carrier_types.is_empty() {
        selection.carrier_types = carrier_types.into_iter().collect();
    }
    if keep_inserts {
        selection.excluded_insert_types.clear();
    } else if !exclude_inserts.is_empty() {
        selection.excluded_insert_types = exclude_inserts.into_iter().collect();
    }

    let report = ladeplan_core::summarize(&parsed, &selection)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report, &selection),
    }

    Ok(())
}
