use std::io;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;
use tracing::Instrument;

use crate::application::services::ProcessingError;
use crate::domain::{CallbackTarget, PipelineStage, ProcessingOutcome, ResponseMode};
use crate::infrastructure::observability::RequestId;
use crate::infrastructure::storage::{SpooledUpload, UploadSpoolError};
use crate::presentation::state::AppState;

pub const CALLBACK_URL_FIELD: &str = "callbackUrl";

#[derive(Serialize)]
pub struct AcceptedResponse {
    pub status: &'static str,
}

/// The parts of a `/process` form the pipeline cares about.
struct ProcessForm {
    upload: Option<SpooledUpload>,
    callback_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum FormError {
    #[error("Failed to read multipart: {0}")]
    Multipart(#[from] MultipartError),
    #[error("Failed to store upload: {0}")]
    Spool(#[from] UploadSpoolError),
}

impl FormError {
    fn status(&self) -> StatusCode {
        match self {
            FormError::Multipart(e) => e.status(),
            // Body-limit errors surface here, wrapped by the chunk stream.
            FormError::Spool(UploadSpoolError::Read(e)) => e
                .get_ref()
                .and_then(|inner| inner.downcast_ref::<MultipartError>())
                .map(MultipartError::status)
                .unwrap_or(StatusCode::BAD_REQUEST),
            FormError::Spool(UploadSpoolError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn process_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // A body that is not multipart at all carries no file.
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Process request is not multipart");
            return failure_response(StatusCode::BAD_REQUEST, ProcessingError::NoFile.to_string());
        }
    };

    let form = match read_form(&state, &mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected /process form");
            return failure_response(e.status(), e.to_string());
        }
    };

    let Some(upload) = form.upload else {
        tracing::warn!("Process request with no file");
        return failure_response(StatusCode::BAD_REQUEST, ProcessingError::NoFile.to_string());
    };

    let target = match form
        .callback_url
        .as_deref()
        .map(CallbackTarget::parse)
        .transpose()
    {
        Ok(target) => target,
        Err(e) => {
            upload.cleanup();
            return failure_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let mode = ResponseMode::from_target(target);
    tracing::info!(
        stage = %PipelineStage::Received,
        mode = mode.as_str(),
        filename = %upload.file().original_name,
        size_bytes = upload.file().size_bytes,
        "Upload received"
    );

    match mode {
        ResponseMode::Synchronous => {
            // Spawned so a client disconnect does not cancel extraction midway.
            let pipeline = tokio::spawn(
                run_to_terminal(state, upload).instrument(tracing::Span::current()),
            );
            match pipeline.await {
                Ok(outcome) => outcome_response(outcome),
                Err(e) => {
                    tracing::error!(error = %e, "Processing task failed");
                    failure_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Processing task failed".to_string(),
                    )
                }
            }
        }
        ResponseMode::Callback(target) => {
            let span = tracing::info_span!(
                "detached_pipeline",
                request_id = %request_id.as_str(),
                callback = %target
            );
            tokio::spawn(run_detached(state, upload, target).instrument(span));

            (
                StatusCode::OK,
                Json(AcceptedResponse { status: "received" }),
            )
                .into_response()
        }
    }
}

/// Finishes an asynchronous request after the acknowledgment has been sent.
async fn run_detached(state: AppState, upload: SpooledUpload, target: CallbackTarget) {
    let dispatcher = state.callback_dispatcher.clone();
    let outcome = run_to_terminal(state, upload).await;
    dispatcher.deliver(&target, &outcome).await;
}

/// Runs the pipeline to its terminal state, then deletes the spooled file.
async fn run_to_terminal(state: AppState, upload: SpooledUpload) -> ProcessingOutcome {
    let outcome = state.processing_service.process(upload.file()).await;
    upload.cleanup();
    outcome
}

async fn read_form(state: &AppState, multipart: &mut Multipart) -> Result<ProcessForm, FormError> {
    let mut upload: Option<SpooledUpload> = None;
    let mut callback_url: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);

        if let Some(filename) = field.file_name().map(str::to_owned) {
            if upload.is_some() {
                tracing::debug!(filename = %filename, "Ignoring additional file field");
                continue;
            }

            let content_type = field.content_type().map(str::to_owned);
            let chunks = field.map_err(io::Error::other).boxed();
            let spooled = state
                .upload_spool
                .spool(&filename, content_type, chunks)
                .await?;
            upload = Some(spooled);
        } else if name.as_deref() == Some(CALLBACK_URL_FIELD) {
            let value = field.text().await?;
            let value = value.trim();
            callback_url = (!value.is_empty()).then(|| value.to_string());
        }
    }

    Ok(ProcessForm {
        upload,
        callback_url,
    })
}

fn outcome_response(outcome: ProcessingOutcome) -> Response {
    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(outcome)).into_response()
}

fn failure_response(status: StatusCode, error: String) -> Response {
    (status, Json(ProcessingOutcome::failed(error))).into_response()
}
