use crate::model::{ComponentSlot, SLOT_COUNT};
use crate::vocabulary::schema::{KeywordMatch, Vocabulary};

/// Slots of one data row plus the tokens that were skipped as unrecognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotParse<'a> {
    pub slots: [ComponentSlot; SLOT_COUNT],
    pub discarded: Vec<&'a str>,
}

/// Classify the component region of a data row into exactly four slots.
///
/// Single left-to-right pass. A footer keyword ends the scan; unrecognized
/// tokens are skipped without taking a slot.
pub fn parse_slots<'a>(tokens: &[&'a str], vocabulary: &Vocabulary) -> SlotParse<'a> {
    let mut slots: [ComponentSlot; SLOT_COUNT] = Default::default();
    let mut discarded = Vec::new();
    let mut filled = 0;
    let mut i = 0;

    while i < tokens.len() && filled < SLOT_COUNT {
        let token = tokens[i];
        let next = tokens.get(i + 1).copied();

        if vocabulary.is_footer(token) {
            break;
        }

        let (slot, consumed) = if vocabulary.is_empty_sentinel(token) {
            (Some(ComponentSlot::Empty), 1)
        } else if let Some(m) = vocabulary.match_insert(token) {
            compound(m, next, |keyword, size| ComponentSlot::Insert { keyword, size })
        } else if let Some(m) = vocabulary.match_bundle(token) {
            compound(m, next, |keyword, label| ComponentSlot::Bundle { keyword, label })
        } else if is_component_id(token) {
            let slot = ComponentSlot::Plain {
                id: token.to_string(),
                is_tube: token.ends_with('*'),
            };
            (Some(slot), 1)
        } else {
            (None, 1)
        };

        match slot {
            Some(slot) => {
                slots[filled] = slot;
                filled += 1;
            }
            None => {
                tracing::trace!(token, "discarding unrecognized component token");
                discarded.push(token);
            }
        }
        i += consumed;
    }

    SlotParse { slots, discarded }
}

/// Resolve an insert/bundle keyword. A standalone keyword takes the next
/// token as its value; without one the keyword is discarded.
fn compound(
    m: KeywordMatch<'_>,
    next: Option<&str>,
    build: impl FnOnce(String, String) -> ComponentSlot,
) -> (Option<ComponentSlot>, usize) {
    match (m, next) {
        (KeywordMatch::Merged { keyword, rest }, _) => {
            (Some(build(keyword.to_string(), rest.to_string())), 1)
        }
        (KeywordMatch::Standalone(keyword), Some(value)) => {
            (Some(build(keyword.to_string(), value.to_string())), 2)
        }
        (KeywordMatch::Standalone(_), None) => (None, 1),
    }
}

/// Digits, optionally followed by a single `*` (tube variant).
fn is_component_id(token: &str) -> bool {
    let digits = token.strip_suffix('*').unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
