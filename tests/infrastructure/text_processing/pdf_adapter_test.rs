use std::sync::Arc;
use std::time::Duration;

use summarizer_agent::application::ports::{FileLoader, FileLoaderError};
use summarizer_agent::application::services::{
    MIN_CONTENT_CHARS, ProcessingService, SummarizationService,
};
use summarizer_agent::domain::{Lane, UploadedFile};
use summarizer_agent::infrastructure::text_processing::{CompositeFileLoader, PdfAdapter};

use crate::helpers::{CountingLlmClient, SUMMARY_RESPONSE, one_page_pdf, write_upload};

const PAGE_TEXT: &str = "Distributed consensus keeps every replica in agreement";

#[tokio::test]
async fn given_valid_pdf_when_extracting_then_returns_trimmed_page_text() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_upload(dir.path(), "notes.pdf", None, &one_page_pdf(PAGE_TEXT));

    let text = PdfAdapter::new(Duration::from_secs(30))
        .extract_text(&file)
        .await
        .unwrap();

    assert_eq!(text, text.trim());
    assert!(text.contains(PAGE_TEXT), "unexpected text: {text:?}");
}

#[tokio::test]
async fn given_valid_pdf_when_processing_then_text_reaches_summarizer() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_upload(
        dir.path(),
        "notes.pdf",
        Some("application/pdf"),
        &one_page_pdf(PAGE_TEXT),
    );
    let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new(Duration::from_secs(30)));
    let loader = Arc::new(CompositeFileLoader::new(vec![(Lane::Pdf, pdf)]));
    let llm = Arc::new(CountingLlmClient::answering(SUMMARY_RESPONSE));
    let service = ProcessingService::new(loader, SummarizationService::new(llm.clone()));

    let (_, extraction) = service.run(&file).await.unwrap();

    assert!(extraction.meaningful_chars() >= MIN_CONTENT_CHARS);
    assert!(extraction.transcript.is_none());
    assert_eq!(llm.calls(), 1);
    let prompt = llm.last_prompt.lock().await.clone().unwrap();
    assert!(prompt.contains(PAGE_TEXT));
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_returns_extraction_failed() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_upload(dir.path(), "broken.pdf", None, b"this is not a pdf");

    let err = PdfAdapter::new(Duration::from_secs(30))
        .extract_text(&file)
        .await
        .unwrap_err();

    assert!(matches!(err, FileLoaderError::ExtractionFailed(_)));
}

#[tokio::test]
async fn given_missing_file_when_extracting_then_reports_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let file = UploadedFile::new("gone.pdf", None, dir.path().join("gone"), 0);

    let err = PdfAdapter::new(Duration::from_secs(30))
        .extract_text(&file)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("failed to read upload"));
}
