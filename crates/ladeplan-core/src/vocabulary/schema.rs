use serde::{Deserialize, Serialize};

/// Closed keyword sets that drive row classification and slot parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Tokens that end the component region of a row (footer lines).
    #[serde(default)]
    pub footer_keywords: Vec<String>,
    /// First token of a two-token insert label, e.g. "Einlage".
    pub insert_keywords: Vec<String>,
    /// First token of a two-token bundle label, e.g. "Bund".
    pub bundle_keywords: Vec<String>,
    #[serde(default = "default_side_markers")]
    pub side_markers: Vec<String>,
    /// Token marking a deliberately empty position.
    #[serde(default = "default_empty_sentinel")]
    pub empty_sentinel: String,
    pub carrier_marker: String,
    pub carrier_end_marker: String,
    /// Highest row index of the document template (rows are 1-based).
    #[serde(default = "default_max_row_index")]
    pub max_row_index: u8,
}

fn default_side_markers() -> Vec<String> {
    vec!["L".into(), "R".into()]
}

fn default_empty_sentinel() -> String {
    ".".into()
}

fn default_max_row_index() -> u8 {
    7
}

/// Result of matching a token against a compound-label keyword set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordMatch<'a> {
    /// The token is the keyword itself; its value is the next token.
    Standalone(&'a str),
    /// Keyword and value were extracted as one token, e.g. "Einlage80".
    Merged { keyword: &'a str, rest: &'a str },
}

impl Vocabulary {
    pub fn is_footer(&self, token: &str) -> bool {
        self.footer_keywords.iter().any(|k| k == token)
    }

    pub fn is_side_marker(&self, token: &str) -> bool {
        self.side_markers.iter().any(|k| k == token)
    }

    pub fn is_empty_sentinel(&self, token: &str) -> bool {
        token == self.empty_sentinel
    }

    pub fn match_insert<'a>(&'a self, token: &'a str) -> Option<KeywordMatch<'a>> {
        match_keyword(&self.insert_keywords, token)
    }

    pub fn match_bundle<'a>(&'a self, token: &'a str) -> Option<KeywordMatch<'a>> {
        match_keyword(&self.bundle_keywords, token)
    }
}

/// Exact matches win; otherwise the longest keyword that prefixes the token.
fn match_keyword<'a>(keywords: &'a [String], token: &'a str) -> Option<KeywordMatch<'a>> {
    if let Some(k) = keywords.iter().find(|k| k.as_str() == token) {
        return Some(KeywordMatch::Standalone(k.as_str()));
    }
    keywords
        .iter()
        .filter(|k| !k.is_empty() && token.len() > k.len() && token.starts_with(k.as_str()))
        .max_by_key(|k| k.len())
        .map(|k| KeywordMatch::Merged {
            keyword: k.as_str(),
            rest: &token[k.len()..],
        })
}
