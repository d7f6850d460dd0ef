use crate::models::QuizQuestion;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The two backend operations, behind a trait so the worker can be driven
/// by a scripted stand-in under test. Errors are the human-readable
/// messages shown to the user.
#[async_trait]
pub trait GenerationBackend {
    async fn generate_manual(&self, files: &[PathBuf], prompt: &str) -> Result<String, String>;
    async fn generate_quiz(&self, manual: &str) -> Result<Vec<QuizQuestion>, String>;
}

#[derive(Debug, Deserialize)]
struct ManualResponse {
    manual: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client for the generation service.
#[derive(Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL from MANUALQUIZ_API_URL, defaulting to localhost.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MANUALQUIZ_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    async fn failure_message(response: reqwest::Response) -> String {
        let fallback = status_text(response.status());
        let body = response.text().await.unwrap_or_default();
        error_detail(&body, &fallback)
    }
}

#[async_trait]
impl GenerationBackend for HttpBackend {
    async fn generate_manual(&self, files: &[PathBuf], prompt: &str) -> Result<String, String> {
        let mut form = reqwest::multipart::Form::new().text("prompt", prompt.to_string());
        for path in files {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "document".to_string());
            form = form.part(
                "files",
                reqwest::multipart::Part::bytes(bytes).file_name(name),
            );
        }

        let response = self
            .http
            .post(format!("{}/api/manual", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(Self::failure_message(response).await);
        }

        let data: ManualResponse = response
            .json()
            .await
            .map_err(|e| format!("invalid manual response: {}", e))?;
        Ok(data.manual)
    }

    async fn generate_quiz(&self, manual: &str) -> Result<Vec<QuizQuestion>, String> {
        let response = self
            .http
            .post(format!("{}/api/quiz", self.base_url))
            .json(&json!({ "manual": manual }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(Self::failure_message(response).await);
        }

        response
            .json::<Vec<QuizQuestion>>()
            .await
            .map_err(|e| format!("invalid quiz response: {}", e))
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

/// Extract a server-supplied `detail` field from an error body, falling
/// back to the transport status text. A malformed or non-JSON body is the
/// same as no detail.
fn error_detail(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(detail),
        }) if !detail.is_empty() => detail,
        _ => fallback.to_string(),
    }
}
