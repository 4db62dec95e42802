use crate::model::{WeightQuadruple, SLOT_COUNT};
use crate::parsing::values::weight_or_zero;
use crate::vocabulary::schema::Vocabulary;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Length of the trailing numeric block: 4 weights, then height, width, length.
pub const NUMERIC_BLOCK_LEN: usize = 7;

/// How strictly the leading row marker of a data row is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Row index required, side marker optional.
    #[default]
    Lenient,
    /// Row index and side marker both required.
    Strict,
}

/// A line recognised as a data row, with its leading markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow<'a> {
    pub index: u8,
    pub side: Option<&'a str>,
    pub tokens: Vec<&'a str>,
}

/// Split a line into whitespace-delimited tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Classify a line. Returns None for headers, footers and narrative text.
pub fn classify_row<'a>(
    line: &'a str,
    vocabulary: &Vocabulary,
    policy: RowPolicy,
) -> Option<DataRow<'a>> {
    let tokens = tokenize(line);
    let index = parse_row_index(tokens.first()?, vocabulary.max_row_index)?;

    let side = tokens
        .get(1)
        .copied()
        .filter(|t| vocabulary.is_side_marker(t));

    if policy == RowPolicy::Strict && side.is_none() {
        return None;
    }

    let skip = if side.is_some() { 2 } else { 1 };
    Some(DataRow {
        index,
        side,
        tokens: tokens[skip..].to_vec(),
    })
}

fn parse_row_index(token: &str, max_row_index: u8) -> Option<u8> {
    let mut chars = token.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() {
        return None;
    }
    let index = u8::try_from(digit).ok()?;
    (1..=max_row_index).contains(&index).then_some(index)
}

/// Separate a data row's tokens into the component region and the weights.
///
/// Rows shorter than the numeric block keep all tokens as components and get
/// zero weights.
pub fn split_fields<'r, 'a>(tokens: &'r [&'a str]) -> (&'r [&'a str], WeightQuadruple) {
    if tokens.len() < NUMERIC_BLOCK_LEN {
        return (tokens, [Decimal::ZERO; SLOT_COUNT]);
    }

    let block_start = tokens.len() - NUMERIC_BLOCK_LEN;
    let block = &tokens[block_start..];
    let mut weights = [Decimal::ZERO; SLOT_COUNT];
    for (weight, raw) in weights.iter_mut().zip(block) {
        *weight = weight_or_zero(raw);
    }

    (&tokens[..block_start], weights)
}
