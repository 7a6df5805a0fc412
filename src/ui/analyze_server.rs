use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use bytes::Buf;
use futures::TryStreamExt;
use serde_json::json;
use tokio::sync::oneshot;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::multipart::{FormData, Part};
use warp::{Filter, Rejection, Reply};

use crate::config::constants::{
    sleep_duration_millis, MAX_UPLOAD_BYTES, SERVER_PORT_RANGE_END, SERVER_PORT_RANGE_START,
    SERVER_SHUTDOWN_GRACE_PERIOD_MS,
};
use crate::errors::{RoiTrackerError, RoiTrackerResult};
use crate::prompts::roi_analysis_prompt::{ANALYZE_USER_PREFIX, ROI_ANALYSIS_SYSTEM_PROMPT};
use crate::services::document_extractor::DocumentExtractor;
use crate::services::report_parser::ReportParser;
use crate::traits::completion_provider::CompletionProvider;

/// HTTP front end: serves the upload page at `/` and the stateless analysis
/// endpoint at `POST /api/analyze`. One outbound completion call per upload,
/// no retry, no caching, no shared mutable state between requests.
pub struct AnalyzeServer {
    provider: Arc<dyn CompletionProvider>,
    host: String,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl AnalyzeServer {
    pub fn new(provider: Arc<dyn CompletionProvider>, host: String) -> Self {
        Self {
            provider,
            host,
            port: None,
            shutdown_tx: None,
        }
    }

    pub async fn start(&mut self, requested_port: Option<u16>) -> RoiTrackerResult<u16> {
        let port = match requested_port {
            Some(port) => port,
            None => self.find_available_port().await?,
        };
        self.port = Some(port);

        let routes = build_routes(Arc::clone(&self.provider));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let addr: SocketAddr = format!("{}:{}", self.host, port).parse().map_err(|_| {
            RoiTrackerError::validation_error("server address", &format!("{}:{}", self.host, port), "must be a valid socket address")
        })?;

        let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
            shutdown_rx.await.ok();
        });

        tokio::spawn(server);

        log::info!("🌐 Analysis server started on port {}", port);
        Ok(port)
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub async fn shutdown(&mut self) -> RoiTrackerResult<()> {
        log::info!("🛑 Shutting down analysis server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|_| RoiTrackerError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Analysis server shutdown complete");

        Ok(())
    }

    async fn find_available_port(&self) -> RoiTrackerResult<u16> {
        for port in SERVER_PORT_RANGE_START..SERVER_PORT_RANGE_END {
            if let Ok(listener) = tokio::net::TcpListener::bind(format!("{}:{}", self.host, port)).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(RoiTrackerError::system_error("bind", "No available ports found"))
    }
}

/// Route set, exposed separately so tests can drive it with `warp::test`.
pub fn build_routes(
    provider: Arc<dyn CompletionProvider>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let provider_filter = warp::any().map(move || Arc::clone(&provider));

    let upload_page = warp::path::end()
        .and(warp::get())
        .map(serve_upload_page);

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::multipart::form().max_length(MAX_UPLOAD_BYTES))
        .and(provider_filter)
        .and_then(analyze_handler);

    upload_page.or(analyze).recover(handle_rejection)
}

fn serve_upload_page() -> impl Reply {
    warp::reply::html(include_str!("static/index.html"))
}

enum AnalyzeFailure {
    MissingFile,
    Internal(String),
}

async fn analyze_handler(
    form: FormData,
    provider: Arc<dyn CompletionProvider>,
) -> Result<impl Reply, Infallible> {
    let request_id = Uuid::new_v4();

    match process_upload(form, provider, request_id).await {
        Ok(body) => Ok(warp::reply::with_status(warp::reply::json(&body), StatusCode::OK)),
        Err(AnalyzeFailure::MissingFile) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({"error": "No file provided"})),
            StatusCode::BAD_REQUEST,
        )),
        Err(AnalyzeFailure::Internal(detail)) => {
            // Full detail stays server-side; the client only sees the generic message.
            log::error!("❌ [{}] Error analyzing document: {}", request_id, detail);
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({"error": "Failed to analyze document"})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn process_upload(
    form: FormData,
    provider: Arc<dyn CompletionProvider>,
    request_id: Uuid,
) -> Result<serde_json::Value, AnalyzeFailure> {
    let file_bytes = read_file_field(form).await?;
    let text = DocumentExtractor::extract_text(&file_bytes);

    log::info!("📥 [{}] Analyzing uploaded document ({} bytes)", request_id, file_bytes.len());

    let reply = provider
        .chat(
            ROI_ANALYSIS_SYSTEM_PROMPT.to_string(),
            vec![format!("{}{}", ANALYZE_USER_PREFIX, text)],
        )
        .await
        .map_err(|e| AnalyzeFailure::Internal(e.to_string()))?;

    Ok(ReportParser::parse_reply(&reply))
}

async fn read_file_field(mut form: FormData) -> Result<Vec<u8>, AnalyzeFailure> {
    while let Some(part) = form
        .try_next()
        .await
        .map_err(|e| AnalyzeFailure::Internal(format!("multipart read: {}", e)))?
    {
        if part.name() == "file" {
            return collect_part_bytes(part)
                .await
                .map_err(|e| AnalyzeFailure::Internal(format!("multipart read: {}", e)));
        }
    }

    Err(AnalyzeFailure::MissingFile)
}

async fn collect_part_bytes(part: Part) -> Result<Vec<u8>, warp::Error> {
    part.stream()
        .try_fold(Vec::new(), |mut acc, mut buf| async move {
            while buf.has_remaining() {
                let chunk = buf.chunk();
                acc.extend_from_slice(chunk);
                let len = chunk.len();
                buf.advance(len);
            }
            Ok(acc)
        })
        .await
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if err.is_not_found() {
        return Ok(warp::reply::with_status(
            warp::reply::json(&json!({"error": "Not found"})),
            StatusCode::NOT_FOUND,
        ));
    }

    // A file over the upload cap was provided but cannot be processed, so it
    // belongs to the generic failure bucket, not the missing-file one.
    if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        return Ok(warp::reply::with_status(
            warp::reply::json(&json!({"error": "Failed to analyze document"})),
            StatusCode::INTERNAL_SERVER_ERROR,
        ));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(warp::reply::with_status(
            warp::reply::json(&json!({"error": "Method not allowed"})),
            StatusCode::METHOD_NOT_ALLOWED,
        ));
    }

    // Remaining rejections are missing or malformed multipart bodies on the
    // analyze route.
    Ok(warp::reply::with_status(
        warp::reply::json(&json!({"error": "No file provided"})),
        StatusCode::BAD_REQUEST,
    ))
}
