pub mod aggregate;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod vocabulary;

use aggregate::outcome::AggregationReport;
use aggregate::Selection;
use error::LadeplanError;
use extraction::TextExtractor;
use parsing::{ParseOptions, ParsedPlan};
use vocabulary::schema::Vocabulary;

/// Main API entry point: extract a document's pages and parse them into
/// carrier-tagged extraction records.
pub fn parse_document(
    bytes: &[u8],
    extractor: &dyn TextExtractor,
    vocabulary: &Vocabulary,
    options: &ParseOptions,
) -> Result<ParsedPlan, LadeplanError> {
    let pages = extractor.extract_pages(bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "extracted document text"
    );
    parsing::parse_pages(&pages, vocabulary, options)
}

/// Filter, sort and total a parsed plan for the given selection.
pub fn summarize(plan: &ParsedPlan, selection: &Selection) -> Result<AggregationReport, LadeplanError> {
    aggregate::aggregate(&plan.records, selection)
}
