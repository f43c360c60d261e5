use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use summarizer_agent::application::ports::FileLoader;
use summarizer_agent::application::services::{
    CallbackDispatcher, ProcessingService, SummarizationService,
};
use summarizer_agent::domain::Lane;
use summarizer_agent::infrastructure::audio::{FfmpegTranscoder, OpenAiWhisperEngine};
use summarizer_agent::infrastructure::callback::HttpCallbackNotifier;
use summarizer_agent::infrastructure::llm::OpenAiClient;
use summarizer_agent::infrastructure::observability::{TracingConfig, init_tracing};
use summarizer_agent::infrastructure::storage::UploadSpool;
use summarizer_agent::infrastructure::text_processing::{
    CompositeFileLoader, OcrAdapter, PdfAdapter, VideoAdapter,
};
use summarizer_agent::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::new(
            environment.as_str(),
            settings.logging.enable_json,
            &settings.logging.level,
        ),
        settings.server.port,
    );

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No LLM API key configured; summarization and transcription will fail");
    }

    let state = build_state(&settings)?;
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host/server.port")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, "Summarizer agent listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_state(settings: &Settings) -> anyhow::Result<AppState> {
    let llm_client = Arc::new(OpenAiClient::new(
        settings.llm.api_key.clone(),
        &settings.llm.base_url,
        settings.llm.chat_model.clone(),
        settings.llm.temperature,
        settings.llm.timeout(),
    )?);

    let whisper = Arc::new(OpenAiWhisperEngine::new(
        settings.llm.api_key.clone(),
        &settings.llm.base_url,
        settings.transcription.model.clone(),
        settings.llm.timeout(),
    )?);

    let extraction = &settings.extraction;
    let transcoder = Arc::new(FfmpegTranscoder::new(
        &extraction.ffmpeg_path,
        extraction.command_timeout(),
    ));

    let video: Arc<dyn FileLoader> = Arc::new(VideoAdapter::new(transcoder, whisper));
    let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new(extraction.pdf_timeout()));
    let image: Arc<dyn FileLoader> = Arc::new(OcrAdapter::new(
        &extraction.tesseract_path,
        extraction.ocr_language.clone(),
        extraction.command_timeout(),
    ));
    let adapters = vec![(Lane::Video, video), (Lane::Pdf, pdf), (Lane::Image, image)];
    let file_loader = Arc::new(CompositeFileLoader::new(adapters));

    let processing_service = Arc::new(ProcessingService::new(
        file_loader,
        SummarizationService::new(llm_client),
    ));

    let notifier = Arc::new(HttpCallbackNotifier::new(settings.callback.timeout())?);
    let callback_dispatcher = Arc::new(CallbackDispatcher::new(notifier));

    let upload_spool = Arc::new(
        UploadSpool::new(&settings.uploads.dir)
            .with_context(|| format!("Failed to create upload dir {}", settings.uploads.dir))?,
    );

    Ok(AppState {
        processing_service,
        callback_dispatcher,
        upload_spool,
        max_upload_bytes: settings.uploads.max_upload_bytes,
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
