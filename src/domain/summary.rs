use serde::Serialize;

pub const MAX_BULLETS: usize = 12;
pub const MAX_QUOTES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub bullets: Vec<String>,
    pub quotes: Vec<String>,
}

impl SummaryResult {
    /// Builds a summary, truncating bullets and quotes to their bounds.
    pub fn new(abstract_text: String, mut bullets: Vec<String>, mut quotes: Vec<String>) -> Self {
        bullets.truncate(MAX_BULLETS);
        quotes.truncate(MAX_QUOTES);
        Self {
            abstract_text,
            bullets,
            quotes,
        }
    }
}
