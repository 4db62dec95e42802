pub mod parse;
pub mod summarize;
pub mod vocabulary;

use ladeplan_core::error::LadeplanError;
use ladeplan_core::extraction::pdftotext::PdftotextExtractor;
use ladeplan_core::extraction::plain::PlainTextExtractor;
use ladeplan_core::extraction::TextExtractor;
use ladeplan_core::parsing::row::RowPolicy;
use ladeplan_core::parsing::{ParseOptions, ParsedPlan};
use ladeplan_core::vocabulary::builtin::default_vocabulary;
use ladeplan_core::vocabulary::load_vocabulary;

use crate::InputArgs;

/// Read and parse the input file named on the command line.
pub fn load_plan(input: &InputArgs) -> Result<ParsedPlan, LadeplanError> {
    let vocabulary = match &input.vocabulary {
        Some(path) => load_vocabulary(path)?,
        None => default_vocabulary()?,
    };
    let options = ParseOptions {
        row_policy: if input.strict_rows {
            RowPolicy::Strict
        } else {
            RowPolicy::Lenient
        },
    };

    // Determine input type by extension
    let is_pdf = input
        .input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    let extractor: Box<dyn TextExtractor> = if is_pdf {
        if !PdftotextExtractor::is_available() {
            return Err(LadeplanError::PdftotextNotFound);
        }
        Box::new(PdftotextExtractor::new())
    } else {
        Box::new(PlainTextExtractor::new())
    };

    let bytes = std::fs::read(&input.input_file)?;
    ladeplan_core::parse_document(&bytes, extractor.as_ref(), &vocabulary, &options)
}
