//! Client for the deprecated static-page backend contract.
//!
//! The older deployment exposes `GET /examples` and `POST /analyze` with a
//! presentation-flavored response (emoji, color class, pre-rounded percent).
//! Kept for the `sentidash-lite` front end; new code should use the main
//! gateway in [`crate::api`].

use serde::{Deserialize, Serialize};

use super::{ApiError, parse_body, status_error};
use crate::http_client;

/// Example prompts offered by the backend for one-click input.
#[derive(Clone, Debug, Deserialize)]
pub struct ExamplesResponse {
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Single-result payload from `POST /analyze`.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub sentiment_emoji: String,
    #[serde(default)]
    pub color_class: String,
    #[serde(default)]
    pub confidence_percent: f32,
    #[serde(default)]
    pub error: Option<String>,
}

/// Fetch the example prompts list.
pub fn examples(base: &str) -> Result<Vec<String>, ApiError> {
    let url = format!("{}/examples", base.trim_end_matches('/'));
    let response = match http_client::agent()
        .get(&url)
        .set("Accept", "application/json")
        .call()
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => return Err(status_error(code, response)),
        Err(ureq::Error::Transport(err)) => return Err(ApiError::Transport(err.to_string())),
    };
    let parsed: ExamplesResponse = parse_body(response)?;
    Ok(parsed.examples)
}

/// Analyze one block of text against the legacy endpoint.
///
/// A response with `success: false` is folded into [`ApiError::Backend`]
/// using the server-provided error text when present.
pub fn analyze(base: &str, text: &str) -> Result<AnalyzeResponse, ApiError> {
    let url = format!("{}/analyze", base.trim_end_matches('/'));
    let request = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");
    let response = match request.send_json(AnalyzeRequest { text }) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => return Err(status_error(code, response)),
        Err(ureq::Error::Transport(err)) => return Err(ApiError::Transport(err.to_string())),
    };
    let parsed: AnalyzeResponse = parse_body(response)?;
    if !parsed.success {
        let message = parsed
            .error
            .clone()
            .unwrap_or_else(|| "Có lỗi xảy ra khi phân tích".to_string());
        return Err(ApiError::Backend(message));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::tests::serve_once;

    fn json_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        )
    }

    #[test]
    fn examples_returns_prompt_list() {
        let base = serve_once(json_response(
            r#"{"examples":["Tôi rất thích sản phẩm này!","Dịch vụ quá tệ."]}"#,
        ));
        let prompts = examples(&base).unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], "Tôi rất thích sản phẩm này!");
    }

    #[test]
    fn analyze_success_carries_presentation_fields() {
        let base = serve_once(json_response(
            r#"{"success":true,"text":"Tuyệt vời","sentiment":"Tích cực","sentiment_emoji":"😊","color_class":"positive","confidence_percent":97.3}"#,
        ));
        let result = analyze(&base, "Tuyệt vời").unwrap();
        assert_eq!(result.sentiment_emoji, "😊");
        assert_eq!(result.color_class, "positive");
        assert!((result.confidence_percent - 97.3).abs() < f32::EPSILON);
    }

    #[test]
    fn analyze_failure_uses_server_error_text() {
        let base = serve_once(json_response(
            r#"{"success":false,"error":"Vui lòng nhập văn bản cần phân tích"}"#,
        ));
        let err = analyze(&base, "").unwrap_err();
        assert_eq!(err.to_string(), "Vui lòng nhập văn bản cần phân tích");
    }
}
