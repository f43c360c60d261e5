use std::path::PathBuf;

use summarizer_agent::domain::{
    ExtractionResult, Lane, MAX_BULLETS, MAX_QUOTES, ProcessingOutcome, SummaryResult,
    UploadedFile,
};

fn summary() -> SummaryResult {
    SummaryResult::new(
        "An abstract.".to_string(),
        vec!["one".to_string(), "two".to_string()],
        vec!["\"quoted\"".to_string()],
    )
}

#[test]
fn given_pdf_success_when_serializing_then_has_status_fields_and_no_transcript() {
    let extraction = ExtractionResult::from_lane(Lane::Pdf, "text".to_string());
    let outcome = ProcessingOutcome::succeeded(summary(), extraction);

    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["status"], "succeeded");
    assert_eq!(json["abstract"], "An abstract.");
    assert_eq!(json["bullets"].as_array().unwrap().len(), 2);
    assert_eq!(json["quotes"].as_array().unwrap().len(), 1);
    assert!(json.get("transcript").is_none());
}

#[test]
fn given_video_success_when_serializing_then_includes_transcript() {
    let extraction = ExtractionResult::from_lane(Lane::Video, "spoken words".to_string());
    let outcome = ProcessingOutcome::succeeded(summary(), extraction);

    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["transcript"], "spoken words");
}

#[test]
fn given_failure_when_serializing_then_has_status_and_error_only() {
    let outcome = ProcessingOutcome::failed("boom");

    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json, serde_json::json!({"status": "failed", "error": "boom"}));
    assert!(!outcome.is_success());
}

#[test]
fn given_oversized_lists_when_building_summary_then_truncates_to_bounds() {
    let bullets = (0..20).map(|i| format!("b{i}")).collect();
    let quotes = (0..5).map(|i| format!("\"q{i}\"")).collect();

    let summary = SummaryResult::new(String::new(), bullets, quotes);

    assert_eq!(summary.bullets.len(), MAX_BULLETS);
    assert_eq!(summary.quotes.len(), MAX_QUOTES);
    assert_eq!(summary.bullets[0], "b0");
}

#[test]
fn given_padded_text_when_counting_meaningful_chars_then_ignores_whitespace() {
    let extraction = ExtractionResult::from_lane(Lane::Image, "  \n abc \t".to_string());
    assert_eq!(extraction.meaningful_chars(), 3);
    assert_eq!(extraction.transcript, None);
}

#[test]
fn given_upload_without_extension_when_labelling_then_uses_content_type() {
    let file = UploadedFile::new("blob", Some("text/csv".to_string()), PathBuf::from("x"), 1);
    assert_eq!(file.type_label(), "text/csv");

    let file = UploadedFile::new("notes.TXT", None, PathBuf::from("x"), 1);
    assert_eq!(file.type_label(), ".txt");

    let file = UploadedFile::new("blob", None, PathBuf::from("x"), 1);
    assert_eq!(file.type_label(), "unknown");
}
