use ladeplan_core::aggregate::outcome::AggregationReport;
use ladeplan_core::aggregate::Selection;
use ladeplan_core::parsing::ParsedPlan;

pub fn print_parsed(parsed: &ParsedPlan) {
    println!(
        "=== Extraction records ({} on {} carrier(s)) ===\n",
        parsed.records.len(),
        parsed.carrier_ids.len()
    );

    let label_width = parsed
        .records
        .iter()
        .map(|r| r.component_label.chars().count())
        .max()
        .unwrap_or(10)
        .max("Component".len());
    let carrier_width = parsed
        .carrier_ids
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(7)
        .max("Carrier".len());

    println!(
        "  {:<lw$}  {:<cw$}  {:>12}  {:>4}  Flags",
        "Component",
        "Carrier",
        "Weight [kg]",
        "Page",
        lw = label_width,
        cw = carrier_width
    );
    println!("  {}", "-".repeat(label_width + carrier_width + 32));

    for r in &parsed.records {
        let mut flags = Vec::new();
        if r.is_tube {
            flags.push("tube");
        }
        if r.is_insert {
            flags.push("insert");
        }
        if r.is_bundle {
            flags.push("bundle");
        }
        println!(
            "  {:<lw$}  {:<cw$}  {:>12}  {:>4}  {}",
            r.component_label,
            r.carrier_id,
            r.weight_kg.to_string(),
            r.page_number,
            flags.join(","),
            lw = label_width,
            cw = carrier_width
        );
    }
    println!();

    println!("  Carrier types: {}", join_or_none(&parsed.carrier_types));
    println!("  Insert types:  {}", join_or_none(&parsed.insert_types));

    if !parsed.skipped_pages.is_empty() {
        let pages: Vec<String> = parsed.skipped_pages.iter().map(|p| p.to_string()).collect();
        println!("  Pages without carrier: {}", pages.join(", "));
    }
    if !parsed.discarded_tokens.is_empty() {
        println!("\n  Discarded tokens:");
        for d in &parsed.discarded_tokens {
            println!(
                "    page {} line {}: {}",
                d.page_number,
                d.line_index + 1,
                d.token
            );
        }
    }
}

pub fn print_report(report: &AggregationReport, selection: &Selection) {
    let types: Vec<String> = selection.carrier_types.iter().cloned().collect();
    let excluded: Vec<String> = selection.excluded_insert_types.iter().cloned().collect();
    println!("Carrier types: {}", join_or_none(&types));
    println!("Excluded inserts: {}\n", join_or_none(&excluded));

    println!("=== Components (sorted by carrier and component) ===\n");

    let label_width = report
        .components
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(10)
        .max("Component".len());

    println!(
        "  {:<lw$}  {:<12}  {:>12}",
        "Component",
        "Carrier",
        "Weight [kg]",
        lw = label_width
    );
    println!("  {}", "-".repeat(label_width + 28));
    for c in &report.components {
        // tube/pipe variants
        let tube_marker = if c.is_tube { "  (tube)" } else { "" };
        println!(
            "  {:<lw$}  {:<12}  {:>12}{}",
            c.label,
            c.carrier_id,
            c.weight_kg.to_string(),
            tube_marker,
            lw = label_width
        );
    }
    println!();

    println!("=== Summary per carrier ===\n");
    println!(
        "  {:<12}  {:>8}  {:>14}  Info",
        "Carrier", "Elements", "Weight [kg]"
    );
    println!("  {}", "-".repeat(48));
    for s in &report.summaries {
        if s.is_grand_total() {
            println!("  {}", "-".repeat(48));
        }
        println!(
            "  {:<12}  {:>8}  {:>14}  {}",
            s.carrier_id,
            s.element_count,
            s.total_weight_kg.round_dp(1).to_string(),
            s.bundle_info
        );
    }
    println!();
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
