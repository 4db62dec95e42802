pub mod pdftotext;
pub mod plain;

use crate::error::LadeplanError;
use serde::{Deserialize, Serialize};

/// Text of a single document page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// 1-based page number.
    pub page_number: usize,
    pub text: String,
}

impl PageContent {
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        PageContent {
            page_number,
            text: text.into(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Trait for document-to-text backends.
pub trait TextExtractor: Send + Sync {
    /// Extract text from document bytes, returning one PageContent per page.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, LadeplanError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split text into pages on form feed (`\x0c`), numbering pages from 1.
///
/// The blank remainder after a final form feed is not a page.
pub fn split_pages(text: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent::new(i + 1, page_text))
        .collect();

    if pages.len() > 1 && pages.last().is_some_and(|p| p.text.trim().is_empty()) {
        pages.pop();
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("Seite eins\nZeile\x0cSeite zwei\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].text, "Seite zwei");
        assert_eq!(pages[0].lines().count(), 2);
    }

    #[test]
    fn test_split_pages_keeps_blank_middle_page() {
        let pages = split_pages("a\x0c\x0cb");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].page_number, 3);
    }

    #[test]
    fn test_split_pages_single_page() {
        let pages = split_pages("nur eine Seite");
        assert_eq!(pages.len(), 1);
    }
}
