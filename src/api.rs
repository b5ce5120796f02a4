//! Gateway client for the NLP inference backend.
//!
//! Mirrors the backend JSON contract: `POST /sentiment`, `POST /fill-mask`,
//! `GET /scrape-and-analyze`, plus the `GET /models` and `GET /health`
//! catalog endpoints. Field names follow the wire format exactly.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::http_client;

/// Deprecated static-page contract (`GET /examples`, `POST /analyze`).
pub mod legacy;

/// Base URL used when neither config nor environment provide one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// Model variant selector understood by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// English SST-2 DistilBERT classifier.
    Distilbert,
    /// Vietnamese social-media ViSoBERT classifier.
    #[default]
    Visobert,
    /// Five-class multilingual classifier.
    Multilingual,
}

impl ModelType {
    /// All selectable variants, in menu order.
    pub const ALL: [ModelType; 3] = [
        ModelType::Distilbert,
        ModelType::Visobert,
        ModelType::Multilingual,
    ];

    /// Wire value sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Distilbert => "distilbert",
            ModelType::Visobert => "visobert",
            ModelType::Multilingual => "multilingual",
        }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            ModelType::Distilbert => "DistilBERT",
            ModelType::Visobert => "ViSoBERT",
            ModelType::Multilingual => "Multilingual (5-class)",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body for `POST /sentiment`.
#[derive(Clone, Debug, Serialize)]
pub struct SentimentRequest {
    pub model_type: ModelType,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

/// One label/confidence pair from the classifier.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Response from `POST /sentiment`.
#[derive(Clone, Debug, Deserialize)]
pub struct SentimentResponse {
    pub model_type: String,
    pub model_name: String,
    pub label: String,
    pub score: f32,
    #[serde(default)]
    pub all_scores: Option<Vec<LabelScore>>,
}

/// Body for `POST /fill-mask`.
#[derive(Clone, Debug, Serialize)]
pub struct FillMaskRequest {
    pub text: String,
    pub top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

/// One ranked fill-mask suggestion.
#[derive(Clone, Debug, Deserialize)]
pub struct FillMaskCandidate {
    pub token_str: String,
    pub score: f32,
    #[serde(default)]
    pub sequence: Option<String>,
}

/// Response from `POST /fill-mask`. Candidates arrive ordered by
/// descending score; the client does not re-sort.
#[derive(Clone, Debug, Deserialize)]
pub struct FillMaskResponse {
    pub model_type: String,
    pub model_name: String,
    pub top_k: u32,
    pub candidates: Vec<FillMaskCandidate>,
}

/// One scraped-and-classified row from the backend scrape path.
#[derive(Clone, Debug, Deserialize)]
pub struct ScrapeAnalyzeItem {
    pub text: String,
    pub label: String,
    pub score: f32,
}

/// Response from `GET /scrape-and-analyze`.
#[derive(Clone, Debug, Deserialize)]
pub struct ScrapeAnalyzeResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub summary: BTreeMap<String, u64>,
    pub items: Vec<ScrapeAnalyzeItem>,
}

/// Default model ids advertised by `GET /models`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub distilbert: CatalogEntry,
    #[serde(default)]
    pub visobert: VisobertCatalogEntry,
    #[serde(default)]
    pub multilingual: CatalogEntry,
}

/// Catalog row for a single-pipeline model.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub default: Option<String>,
}

/// Catalog row for the ViSoBERT variant, which carries two pipelines.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VisobertCatalogEntry {
    #[serde(default)]
    pub sentiment_default: Option<String>,
    #[serde(default)]
    pub fill_mask_default: Option<String>,
}

/// Errors from the inference gateway, normalized for display.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success HTTP status; the message is the server-provided body.
    #[error("{0}")]
    Backend(String),
    /// Network or transport failure before a status was received.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// Response body was not the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Run the sentiment classifier on a block of text.
pub fn sentiment(base: &str, request: &SentimentRequest) -> Result<SentimentResponse, ApiError> {
    post_json(&endpoint(base, "/sentiment"), request)
}

/// Ask the fill-mask pipeline for ranked token suggestions.
pub fn fill_mask(base: &str, request: &FillMaskRequest) -> Result<FillMaskResponse, ApiError> {
    post_json(&endpoint(base, "/fill-mask"), request)
}

/// Scrape a page server-side and classify extracted comments.
pub fn scrape_and_analyze(
    base: &str,
    url: &str,
    model_type: ModelType,
    limit: u32,
) -> Result<ScrapeAnalyzeResponse, ApiError> {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", url)
        .append_pair("model_type", model_type.as_str())
        .append_pair("limit", &limit.to_string())
        .finish();
    get_json(&format!("{}?{query}", endpoint(base, "/scrape-and-analyze")))
}

/// Fetch the model catalog advertised by the backend.
pub fn models(base: &str) -> Result<ModelCatalog, ApiError> {
    get_json(&endpoint(base, "/models"))
}

/// Probe backend liveness.
pub fn health(base: &str) -> Result<(), ApiError> {
    #[derive(Deserialize)]
    struct HealthResponse {
        #[serde(default)]
        status: String,
    }
    let response: HealthResponse = get_json(&endpoint(base, "/health"))?;
    if response.status == "ok" {
        Ok(())
    } else {
        Err(ApiError::Backend(format!(
            "Unexpected health status: {}",
            response.status
        )))
    }
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

fn post_json<B: Serialize, R: DeserializeOwned>(url: &str, body: &B) -> Result<R, ApiError> {
    let request = http_client::agent()
        .post(url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");
    let response = match request.send_json(body) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            return Err(status_error(code, response));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(ApiError::Transport(err.to_string()));
        }
    };
    parse_body(response)
}

fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, ApiError> {
    let response = match http_client::agent()
        .get(url)
        .set("Accept", "application/json")
        .call()
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            return Err(status_error(code, response));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(ApiError::Transport(err.to_string()));
        }
    };
    parse_body(response)
}

fn parse_body<R: DeserializeOwned>(response: ureq::Response) -> Result<R, ApiError> {
    let body = http_client::read_response_string(response, MAX_RESPONSE_BYTES)
        .map_err(|err| ApiError::Json(err.to_string()))?;
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| ApiError::Json(format!("{err}: {trimmed}")))
}

fn status_error(code: u16, response: ureq::Response) -> ApiError {
    let body = http_client::read_response_string(response, MAX_RESPONSE_BYTES)
        .unwrap_or_default();
    let trimmed = body.trim();
    if trimmed.is_empty() {
        ApiError::Backend(format!("HTTP {code}"))
    } else {
        ApiError::Backend(trimmed.to_string())
    }
}
