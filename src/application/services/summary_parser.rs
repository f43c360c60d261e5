use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{MAX_BULLETS, MAX_QUOTES, SummaryResult};

static ABSTRACT_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Abstract[*:\s]*([\s\S]*?)(?:\n\n|$)").unwrap());

static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-•]\s*").unwrap());

const QUOTE_MARKS: [char; 3] = ['"', '“', '”'];

/// Best-effort parse of a free-text model answer into summary fields.
///
/// Never fails: missing sections degrade to the whole answer (abstract) or to empty lists.
pub fn parse_summary(content: &str) -> SummaryResult {
    let content = content.replace("\r\n", "\n");

    let abstract_text = ABSTRACT_SECTION
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(&content)
        .trim()
        .to_string();

    let bullets: Vec<String> = content
        .lines()
        .filter(|line| BULLET_LINE.is_match(line))
        .map(|line| BULLET_LINE.replace(line, "").trim().to_string())
        .take(MAX_BULLETS)
        .collect();

    let quotes: Vec<String> = content
        .lines()
        .filter(|line| line.contains(QUOTE_MARKS))
        .map(|line| line.trim().to_string())
        .take(MAX_QUOTES)
        .collect();

    SummaryResult::new(abstract_text, bullets, quotes)
}
