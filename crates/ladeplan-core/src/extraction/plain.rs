use crate::error::LadeplanError;
use crate::extraction::{split_pages, PageContent, TextExtractor};

/// Backend for text that was already extracted, e.g. saved `pdftotext` output.
///
/// Pages are separated by form feed characters.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        PlainTextExtractor
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, LadeplanError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_pages() {
        let pages = PlainTextExtractor::new()
            .extract_pages("Pritsche: PB 1 Unternehmer\x0cPritsche: PB 2 Unternehmer".as_bytes())
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[1].text.contains("PB 2"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let pages = PlainTextExtractor::new()
            .extract_pages(&[b'P', 0xff, b'B'])
            .unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text.starts_with('P'));
    }
}
