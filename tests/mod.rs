use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use roitracker::enums::ai_provider_error::AiProviderError;
use roitracker::enums::upload_state::UploadState;
use roitracker::logger::progress_logger::ProgressPlan;
use roitracker::prompts::roi_analysis_prompt::{ANALYZE_USER_PREFIX, ROI_ANALYSIS_SYSTEM_PROMPT};
use roitracker::services::report_parser::ReportParser;
use roitracker::services::upload_client::UploadClient;
use roitracker::traits::completion_provider::CompletionProvider;
use roitracker::ui::analyze_server::{build_routes, AnalyzeServer};

/// Provider whose reply is fixed up front, so tests control exactly what the
/// endpoint sees coming back from the model. Every call is recorded so tests
/// can assert on the prompts the endpoint actually sent.
struct ScriptedProvider {
    reply: Result<String, String>,
    seen: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedProvider {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        self.seen.lock().unwrap().push((system_prompt, user_prompts));
        self.reply.clone().map_err(AiProviderError::ApiError)
    }
}

const BOUNDARY: &str = "----roitracker-test-boundary";

fn multipart_body(field_name: &str, file_name: &str, content: &str) -> Vec<u8> {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file}\"\r\nContent-Type: text/plain\r\n\r\n{content}\r\n--{b}--\r\n",
        b = BOUNDARY,
        field = field_name,
        file = file_name,
        content = content,
    )
    .into_bytes()
}

fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

async fn post_analyze(provider: ScriptedProvider, body: Vec<u8>) -> warp::http::Response<bytes::Bytes> {
    let routes = build_routes(Arc::new(provider));
    warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .header("content-type", multipart_content_type())
        .body(body)
        .reply(&routes)
        .await
}

fn body_json(response: &warp::http::Response<bytes::Bytes>) -> Value {
    serde_json::from_slice(response.body()).expect("response body is JSON")
}

fn valid_model_report() -> Value {
    json!({
        "summary": "Onboarding time dropped by a fifth.",
        "leadingIndicators": [
            {"name": "Team Uptake", "description": "New process usage", "score": 8, "status": "Good"}
        ],
        "laggingIndicators": [
            {"name": "Time Savings", "description": "Shorter onboarding", "impact": "High", "timeline": "3-6 months"}
        ],
        "recommendations": [
            {"title": "Track cohort metrics", "description": "Measure each onboarding cohort", "priority": "High", "timeline": "Immediate"}
        ]
    })
}

#[tokio::test]
async fn missing_file_field_returns_400() {
    let body = multipart_body("document", "doc.txt", "some text");
    let response = post_analyze(ScriptedProvider::replying("{}"), body).await;

    assert_eq!(response.status(), 400);
    assert_eq!(body_json(&response), json!({"error": "No file provided"}));
}

#[tokio::test]
async fn invalid_model_reply_returns_the_exact_fallback_report() {
    let body = multipart_body("file", "doc.txt", "quarterly project report");
    let response = post_analyze(ScriptedProvider::replying("not json"), body).await;

    assert_eq!(response.status(), 200);

    let expected = json!({
        "summary": "Project analysis completed. The document has been processed to identify key ROI indicators.",
        "leadingIndicators": [
            {"name": "User Adoption", "description": "Rate of user engagement with the new system/process", "score": 7, "status": "Good"},
            {"name": "Process Efficiency", "description": "Improvements in workflow and operational efficiency", "score": 6, "status": "Needs Attention"},
            {"name": "Stakeholder Engagement", "description": "Level of buy-in and active participation from stakeholders", "score": 8, "status": "Good"}
        ],
        "laggingIndicators": [
            {"name": "Cost Savings", "description": "Expected reduction in operational costs", "impact": "High", "timeline": "3-6 months"},
            {"name": "Productivity Gains", "description": "Improvement in team productivity metrics", "impact": "Medium", "timeline": "6-12 months"},
            {"name": "Revenue Impact", "description": "Direct or indirect revenue generation", "impact": "Medium", "timeline": "12+ months"}
        ],
        "recommendations": [
            {"title": "Implement User Training Program", "description": "Create comprehensive training sessions to improve user adoption rates", "priority": "High", "timeline": "Immediate"},
            {"title": "Establish Regular Check-ins", "description": "Schedule weekly progress reviews to monitor leading indicators", "priority": "Medium", "timeline": "Ongoing"},
            {"title": "Define Success Metrics", "description": "Set clear, measurable KPIs for both leading and lagging indicators", "priority": "High", "timeline": "Within 2 weeks"}
        ]
    });

    assert_eq!(body_json(&response), expected);
    assert_eq!(body_json(&response), ReportParser::fallback_value());
}

#[tokio::test]
async fn valid_model_reply_is_returned_verbatim() {
    let reply = r#"{"summary":"tiny","leadingIndicators":[],"inventedField":{"nested":true}}"#;
    let body = multipart_body("file", "doc.txt", "text");
    let response = post_analyze(ScriptedProvider::replying(reply), body).await;

    assert_eq!(response.status(), 200);
    assert_eq!(body_json(&response), serde_json::from_str::<Value>(reply).unwrap());
}

#[tokio::test]
async fn provider_failure_returns_500_with_generic_message() {
    let body = multipart_body("file", "doc.txt", "text");
    let response = post_analyze(ScriptedProvider::failing("connection refused"), body).await;

    assert_eq!(response.status(), 500);
    let json = body_json(&response);
    assert_eq!(json, json!({"error": "Failed to analyze document"}));
    // upstream detail never leaks to the client
    assert!(!json.to_string().contains("connection refused"));
}

#[tokio::test]
async fn provider_is_called_exactly_once_even_on_failure() {
    let provider = Arc::new(ScriptedProvider::failing("boom"));
    let routes = build_routes(Arc::clone(&provider) as Arc<dyn CompletionProvider>);

    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .header("content-type", multipart_content_type())
        .body(multipart_body("file", "doc.txt", "text"))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 500);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn endpoint_sends_the_fixed_prompts_with_the_decoded_text() {
    let provider = Arc::new(ScriptedProvider::replying("{}"));
    let routes = build_routes(Arc::clone(&provider) as Arc<dyn CompletionProvider>);

    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .header("content-type", multipart_content_type())
        .body(multipart_body("file", "doc.txt", "Quarterly ROI summary."))
        .reply(&routes)
        .await;
    assert_eq!(response.status(), 200);

    let seen = provider.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (system, users) = &seen[0];
    assert_eq!(system, ROI_ANALYSIS_SYSTEM_PROMPT);
    assert_eq!(
        users,
        &vec![format!("{}Quarterly ROI summary.", ANALYZE_USER_PREFIX)]
    );
}

#[tokio::test]
async fn oversized_upload_reports_analysis_failure_not_missing_file() {
    // One byte over the 10 MB multipart cap; a file *was* provided, so this
    // belongs to the generic failure bucket.
    let content = "x".repeat(10 * 1024 * 1024 + 1);
    let body = multipart_body("file", "big.txt", &content);
    let response = post_analyze(ScriptedProvider::replying("{}"), body).await;

    assert_eq!(response.status(), 500);
    assert_eq!(body_json(&response), json!({"error": "Failed to analyze document"}));
}

#[tokio::test]
async fn wrong_method_on_analyze_returns_405() {
    let routes = build_routes(Arc::new(ScriptedProvider::replying("{}")));
    let response = warp::test::request()
        .method("GET")
        .path("/api/analyze")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 405);
    assert_eq!(body_json(&response), json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn binary_upload_is_decoded_lossily_not_rejected() {
    // Declared as a PDF but containing invalid UTF-8; the endpoint decodes
    // verbatim rather than doing format-specific extraction.
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"report.pdf\"\r\nContent-Type: application/pdf\r\n\r\n",
            b = BOUNDARY
        )
        .as_bytes(),
    );
    body.extend_from_slice(&[0xff, 0xfe, b'h', b'i']);
    body.extend_from_slice(format!("\r\n--{b}--\r\n", b = BOUNDARY).as_bytes());

    let response = post_analyze(ScriptedProvider::replying(&valid_model_report().to_string()), body).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn upload_page_is_served_at_root() {
    let routes = build_routes(Arc::new(ScriptedProvider::replying("{}")));
    let response = warp::test::request().method("GET").path("/").reply(&routes).await;

    assert_eq!(response.status(), 200);
    let html = String::from_utf8_lossy(response.body());
    assert!(html.contains("ROI Tracker"));
    assert!(html.contains("/api/analyze"));
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let routes = build_routes(Arc::new(ScriptedProvider::replying("{}")));
    let response = warp::test::request().method("GET").path("/nope").reply(&routes).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn small_text_document_end_to_end() {
    let provider = ScriptedProvider::replying(&valid_model_report().to_string());
    let mut server = AnalyzeServer::new(Arc::new(provider), "127.0.0.1".to_string());
    let port = server.start(None).await.expect("server starts");

    let dir = tempfile::tempdir().expect("temp dir");
    let file_path = dir.path().join("project.txt");
    std::fs::write(&file_path, "Project X reduced onboarding time by 20%.").expect("write doc");

    let client = UploadClient::new(format!("http://127.0.0.1:{}", port));
    let state = client.analyze_file(&file_path).await;

    match state {
        UploadState::Success(report) => {
            assert!(!report.leading_indicators.is_empty());
            assert!(!report.lagging_indicators.is_empty());
            assert!(!report.recommendations.is_empty());
        }
        other => panic!("expected success, got {:?}", other),
    }

    server.shutdown().await.expect("server stops");
}

#[tokio::test]
async fn failed_upload_surfaces_the_error_banner_state() {
    // Nothing is listening on this port.
    let client = UploadClient::new("http://127.0.0.1:1".to_string());
    let dir = tempfile::tempdir().expect("temp dir");
    let file_path = dir.path().join("doc.txt");
    std::fs::write(&file_path, "text").expect("write doc");

    match client.analyze_file(&file_path).await {
        UploadState::Failed(message) => assert!(!message.is_empty()),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn progress_sequence_is_non_decreasing_and_bounded() {
    for size in [0u64, 1024, 512 * 1024, 64 * 1024 * 1024] {
        let plan = ProgressPlan::for_file_size(size);
        let percents: Vec<u8> = plan.stages().iter().map(|s| s.percent).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]), "size {}: {:?}", size, percents);
        assert!(percents.iter().all(|p| *p < 100), "playback never reaches 100 on its own");
    }
}
