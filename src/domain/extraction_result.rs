use super::lane::Lane;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    /// Only set for the video lane, where it equals `text`.
    pub transcript: Option<String>,
}

impl ExtractionResult {
    pub fn from_lane(lane: Lane, text: String) -> Self {
        let transcript = lane.produces_transcript().then(|| text.clone());
        Self { text, transcript }
    }

    pub fn meaningful_chars(&self) -> usize {
        self.text.trim().chars().count()
    }
}
