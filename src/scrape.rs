//! Client-only scrape-and-extract heuristic.
//!
//! Fetches a page's rendered text through a public read-only proxy (which
//! sidesteps cross-origin restrictions the embedded webview would hit),
//! rejects login-walled pages, then greedily collects comment-like text
//! blocks by trying a prioritized list of CSS selectors. No classification
//! happens on this path; rows carry a placeholder label/score.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::http_client;

/// Read-only text-extraction proxy; no authentication required.
pub const READER_PROXY_BASE: &str = "https://r.jina.ai";

/// Kept texts must have strictly more words than this.
pub const MIN_WORD_COUNT: usize = 3;

/// Hard ceiling on collected rows regardless of the configured limit.
pub const MAX_ITEMS: u32 = 200;

/// Default row limit offered in the UI.
pub const DEFAULT_LIMIT: u32 = 30;

/// Placeholder label for rows that were never classified.
pub const PLACEHOLDER_LABEL: &str = "N/A";

/// Rejection message for login-walled pages.
pub const LOGIN_WALL_MESSAGE: &str =
    "Trang yêu cầu đăng nhập, không thể đọc nội dung công khai.";

/// Selector priority: specific comment containers first, generic blocks last.
pub const COMMENT_SELECTORS: [&str; 7] = [
    ".comment",
    ".comments",
    ".cmt",
    ".reply",
    r#"[data-test="comment"]"#,
    "article",
    "p",
];

const MAX_PAGE_BYTES: usize = 4 * 1024 * 1024;

static LOGIN_WALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)you must log in to continue|log into facebook|login to continue")
        .expect("login wall pattern is valid")
});

/// Errors from the client-only scrape path.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The reader proxy itself answered with a non-success status.
    #[error("Proxy HTTP {0}")]
    ProxyStatus(u16),
    /// Network failure before any status was received.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The fetched page demands authentication.
    #[error("{}", LOGIN_WALL_MESSAGE)]
    LoginWall,
    /// The proxy response body could not be read as text.
    #[error("Invalid page text: {0}")]
    Body(String),
}

/// One extracted row; label/score are placeholders on this path.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeItem {
    pub text: String,
    pub label: String,
    pub score: f32,
}

/// Clamp a user-entered row limit into the supported range.
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_ITEMS)
}

/// Prefix bare hostnames with `https://`; leave scheme'd URLs alone.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Build the proxy URL for a normalized page URL.
pub fn proxy_url(normalized: &str) -> String {
    format!("{READER_PROXY_BASE}/{normalized}")
}

/// True when the fetched text matches a known login-wall phrase.
pub fn looks_like_login_wall(text: &str) -> bool {
    LOGIN_WALL.is_match(text)
}

/// Collect candidate comment texts from markup.
///
/// Selectors are tried in priority order; within a selector, elements are
/// visited in document order. Texts are whitespace-normalized and kept only
/// when they carry strictly more than `min_words` tokens. Collection stops
/// as soon as `limit` rows are gathered. An empty result is not an error.
pub fn extract_candidate_texts(
    html: &str,
    selectors: &[&str],
    min_words: usize,
    limit: usize,
) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut texts = Vec::new();
    if limit == 0 {
        return texts;
    }
    for raw_selector in selectors {
        let Ok(selector) = Selector::parse(raw_selector) else {
            continue;
        };
        for element in document.select(&selector) {
            let joined = element.text().collect::<Vec<_>>().join(" ");
            let normalized = joined.split_whitespace().collect::<Vec<_>>().join(" ");
            if normalized.split_whitespace().count() > min_words {
                texts.push(normalized);
                if texts.len() >= limit {
                    return texts;
                }
            }
        }
    }
    texts
}

/// Fetch a page through the reader proxy and extract comment-like rows.
///
/// The login-wall check runs on the raw proxy text before any parsing.
pub fn fetch_comment_items(url_raw: &str, limit: u32) -> Result<Vec<ScrapeItem>, ScrapeError> {
    let normalized = normalize_url(url_raw);
    let proxied = proxy_url(&normalized);
    tracing::info!("Fetching page via proxy: {proxied}");
    let page_text = fetch_page_text(&proxied)?;
    if looks_like_login_wall(&page_text) {
        return Err(ScrapeError::LoginWall);
    }
    let limit = clamp_limit(limit) as usize;
    let texts = extract_candidate_texts(&page_text, &COMMENT_SELECTORS, MIN_WORD_COUNT, limit);
    tracing::info!("Extracted {} candidate texts", texts.len());
    Ok(texts.into_iter().map(placeholder_item).collect())
}

fn placeholder_item(text: String) -> ScrapeItem {
    ScrapeItem {
        text,
        label: PLACEHOLDER_LABEL.to_string(),
        score: 0.0,
    }
}

fn fetch_page_text(url: &str) -> Result<String, ScrapeError> {
    let response = match http_client::agent().get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => return Err(ScrapeError::ProxyStatus(code)),
        Err(ureq::Error::Transport(err)) => return Err(ScrapeError::Transport(err.to_string())),
    };
    http_client::read_response_string(response, MAX_PAGE_BYTES)
        .map_err(|err| ScrapeError::Body(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::tests::serve_once;

    const FIXTURE: &str = r#"
        <html><body>
            <nav><p>Home</p></nav>
            <div class="comment">Sản phẩm này dùng rất tốt nha mọi người</div>
            <div class="comment">Ok</div>
            <div class="reply">Mình thấy giao hàng hơi chậm một chút</div>
            <article>Bài viết nói về trải nghiệm mua hàng trực tuyến gần đây</article>
            <p>Đăng ký nhận tin khuyến mãi từ cửa hàng chúng tôi</p>
        </body></html>
    "#;

    #[test]
    fn login_wall_phrases_match_case_insensitively() {
        assert!(looks_like_login_wall("You must log in to continue"));
        assert!(looks_like_login_wall("LOG INTO FACEBOOK"));
        assert!(looks_like_login_wall("please login to continue reading"));
        assert!(!looks_like_login_wall("public post about logging frameworks"));
    }

    #[test]
    fn extraction_prefers_comment_selectors_and_filters_short_texts() {
        let texts = extract_candidate_texts(FIXTURE, &COMMENT_SELECTORS, MIN_WORD_COUNT, 10);
        assert_eq!(texts[0], "Sản phẩm này dùng rất tốt nha mọi người");
        assert_eq!(texts[1], "Mình thấy giao hàng hơi chậm một chút");
        assert!(texts.iter().all(|t| t.split_whitespace().count() > 3));
        assert!(!texts.contains(&"Ok".to_string()));
    }

    #[test]
    fn extraction_stops_at_the_limit() {
        let texts = extract_candidate_texts(FIXTURE, &COMMENT_SELECTORS, MIN_WORD_COUNT, 2);
        assert_eq!(texts.len(), 2);
    }

    #[test]
    fn extraction_of_empty_page_is_not_an_error() {
        let texts =
            extract_candidate_texts("<html><body></body></html>", &COMMENT_SELECTORS, 3, 30);
        assert!(texts.is_empty());
    }

    #[test]
    fn limit_clamps_into_supported_range() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(30), 30);
        assert_eq!(clamp_limit(500), 200);
    }

    #[test]
    fn normalize_url_prefixes_bare_hosts() {
        assert_eq!(normalize_url("example.com/post"), "https://example.com/post");
        assert_eq!(normalize_url(" https://a.vn "), "https://a.vn");
        assert_eq!(normalize_url("http://plain.vn"), "http://plain.vn");
    }

    #[test]
    fn proxy_url_wraps_the_normalized_target() {
        assert_eq!(
            proxy_url("https://example.com/post"),
            "https://r.jina.ai/https://example.com/post"
        );
    }

    #[test]
    fn proxy_status_error_carries_the_status_code() {
        let base = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_string());
        let err = fetch_page_text(&base).unwrap_err();
        assert_eq!(err.to_string(), "Proxy HTTP 404");
    }

    #[test]
    fn login_wall_rejection_uses_the_vietnamese_message() {
        assert_eq!(ScrapeError::LoginWall.to_string(), LOGIN_WALL_MESSAGE);
    }
}
