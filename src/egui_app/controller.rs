//! Bridges persisted config and gateway calls to the egui UI state.

use crate::api::ModelType;
use crate::config::{self, AppConfig};
use crate::egui_app::state::*;
use crate::scrape;
use crate::textops;

mod background_jobs;
mod jobs;

use jobs::{ControllerJobs, FillMaskJob, ScrapeJob, SentimentJob};

/// Maintains app state and dispatches background gateway calls.
pub struct EguiController {
    pub ui: UiState,
    config: AppConfig,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(config: AppConfig) -> Self {
        let mut ui = UiState::default();
        ui.model_type = config.model_type;
        ui.scrape.limit = scrape::clamp_limit(config.scrape_limit);
        Self {
            ui,
            config,
            jobs: ControllerJobs::new(),
        }
    }

    /// Construct from persisted configuration.
    pub fn from_saved_config() -> Result<Self, config::ConfigError> {
        Ok(Self::new(config::load_or_default()?))
    }

    /// Backend base URL currently in effect.
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    /// Fire the one-time backend health probe and catalog fetch.
    pub fn start_startup_probe(&mut self) {
        self.ui.backend.health = FeatureState::Loading;
        self.ui.backend.catalog = FeatureState::Loading;
        self.jobs.begin_startup_probe(self.config.api_base.clone());
    }

    /// Switch the visible tab. Results in other tabs are kept as-is.
    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.ui.active_tab = tab;
    }

    /// Change the active model variant and persist the choice.
    pub fn select_model(&mut self, model_type: ModelType) {
        if self.ui.model_type == model_type {
            return;
        }
        self.ui.model_type = model_type;
        self.config.model_type = model_type;
        if let Err(err) = config::save(&self.config) {
            tracing::warn!("Failed to persist model choice: {err}");
        }
    }

    pub fn can_submit_sentiment(&self) -> bool {
        !self.ui.sentiment.text.trim().is_empty() && !self.jobs.sentiment_in_progress()
    }

    /// The fill-mask pipeline requires the mask placeholder in the input.
    pub fn can_submit_fill_mask(&self) -> bool {
        self.ui.fill_mask.text.contains(MASK_TOKEN) && !self.jobs.fill_mask_in_progress()
    }

    pub fn can_submit_scrape(&self) -> bool {
        !self.ui.scrape.url.trim().is_empty() && !self.jobs.scrape_in_progress()
    }

    /// Classify the sentiment input on a background thread.
    pub fn submit_sentiment(&mut self) {
        if !self.can_submit_sentiment() {
            return;
        }
        self.ui.sentiment.result = FeatureState::Loading;
        self.set_status("Analyzing sentiment…", StatusTone::Busy);
        self.jobs.begin_sentiment(SentimentJob {
            base: self.config.api_base.clone(),
            model_type: self.ui.model_type,
            text: self.ui.sentiment.text.trim().to_string(),
        });
    }

    /// Request ranked mask suggestions on a background thread.
    pub fn submit_fill_mask(&mut self) {
        if !self.can_submit_fill_mask() {
            return;
        }
        let top_k = self
            .ui
            .fill_mask
            .top_k
            .clamp(*TOP_K_RANGE.start(), *TOP_K_RANGE.end());
        self.ui.fill_mask.top_k = top_k;
        self.ui.fill_mask.result = FeatureState::Loading;
        self.set_status("Predicting mask tokens…", StatusTone::Busy);
        self.jobs.begin_fill_mask(FillMaskJob {
            base: self.config.api_base.clone(),
            text: self.ui.fill_mask.text.clone(),
            top_k,
        });
    }

    /// Fetch and extract comment rows on a background thread.
    ///
    /// The path depends on config: client-only proxy extraction by default,
    /// or the backend scrape-and-analyze endpoint when opted in.
    pub fn submit_scrape(&mut self) {
        if !self.can_submit_scrape() {
            return;
        }
        let limit = scrape::clamp_limit(self.ui.scrape.limit);
        self.ui.scrape.limit = limit;
        self.ui.scrape.result = FeatureState::Loading;
        self.set_status("Fetching page…", StatusTone::Busy);
        let backend = if self.config.client_scrape_only {
            None
        } else {
            Some((self.config.api_base.clone(), self.ui.model_type))
        };
        self.jobs.begin_scrape(ScrapeJob {
            url: self.ui.scrape.url.trim().to_string(),
            limit,
            backend,
        });
    }

    /// Splice the mask placeholder into the input at the tracked caret.
    pub fn insert_mask_token(&mut self) {
        let (next, caret) =
            textops::insert_at(&self.ui.fill_mask.text, self.ui.fill_mask.caret, MASK_TOKEN);
        self.ui.fill_mask.text = next;
        self.ui.fill_mask.caret = caret;
        self.ui.fill_mask.pending_caret = Some(caret);
    }

    /// True while any feature has a request in flight.
    pub fn any_job_running(&self) -> bool {
        self.jobs.sentiment_in_progress()
            || self.jobs.fill_mask_in_progress()
            || self.jobs.scrape_in_progress()
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
        self.ui.status.badge_label = match tone {
            StatusTone::Idle => "Idle",
            StatusTone::Busy => "Working",
            StatusTone::Info => "Ready",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
        .into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::tests::serve_once;
    use std::time::{Duration, Instant};

    fn controller_for(base: String) -> EguiController {
        EguiController::new(AppConfig {
            api_base: base,
            ..AppConfig::default()
        })
    }

    fn poll_until_settled(controller: &mut EguiController) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while controller.any_job_running() {
            controller.poll_background_jobs();
            assert!(Instant::now() < deadline, "background job never completed");
            std::thread::sleep(Duration::from_millis(10));
        }
        controller.poll_background_jobs();
    }

    #[test]
    fn fill_mask_submit_requires_the_mask_token() {
        let mut controller = controller_for("http://127.0.0.1:1".into());
        controller.ui.fill_mask.text = "shop làm ăn như cái".into();
        assert!(!controller.can_submit_fill_mask());
        controller.submit_fill_mask();
        assert_eq!(controller.ui.fill_mask.result, FeatureState::Idle);
        controller.ui.fill_mask.text = "shop làm ăn như cái <mask>".into();
        assert!(controller.can_submit_fill_mask());
    }

    #[test]
    fn insert_mask_token_splices_at_the_tracked_caret() {
        let mut controller = controller_for("http://127.0.0.1:1".into());
        controller.ui.fill_mask.text = "shop làm ăn".into();
        controller.ui.fill_mask.caret = 4;
        controller.insert_mask_token();
        assert_eq!(controller.ui.fill_mask.text, "shop<mask> làm ăn");
        assert_eq!(controller.ui.fill_mask.pending_caret, Some(10));
    }

    #[test]
    fn sentiment_success_lands_in_the_sentiment_bucket() {
        let body = r#"{"model_type":"visobert","model_name":"m","label":"POS","score":0.9812,"all_scores":[{"label":"POS","score":0.9812}]}"#;
        let base = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let mut controller = controller_for(base);
        controller.submit_sentiment();
        assert!(controller.ui.sentiment.result.is_loading());
        poll_until_settled(&mut controller);
        match &controller.ui.sentiment.result {
            FeatureState::Success(view) => {
                assert_eq!(view.label, "POS");
                assert_eq!(view.score_text, "98.12%");
            }
            other => panic!("unexpected sentiment state: {other:?}"),
        }
        assert_eq!(controller.ui.status.tone, StatusTone::Info);
    }

    #[test]
    fn backend_error_body_is_shown_verbatim() {
        let body = "text is empty";
        let base = serve_once(format!(
            "HTTP/1.1 400 Bad Request\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let mut controller = controller_for(base);
        controller.submit_sentiment();
        poll_until_settled(&mut controller);
        assert_eq!(
            controller.ui.sentiment.result.error(),
            Some("text is empty")
        );
        assert_eq!(controller.ui.status.tone, StatusTone::Error);
    }

    #[test]
    fn backend_scrape_path_renders_classified_rows() {
        let body = r#"{"count":1,"summary":{"POS":1},"items":[{"text":"hàng đẹp lắm nha shop","label":"POS","score":0.91}]}"#;
        let base = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let mut controller = EguiController::new(AppConfig {
            api_base: base,
            client_scrape_only: false,
            ..AppConfig::default()
        });
        controller.ui.scrape.url = "example.com/post".into();
        controller.submit_scrape();
        poll_until_settled(&mut controller);
        match &controller.ui.scrape.result {
            FeatureState::Success(view) => {
                assert_eq!(view.rows.len(), 1);
                assert_eq!(view.rows[0].score_text.as_deref(), Some("91.00%"));
                assert_eq!(view.summary.as_deref(), Some("1 rows (POS: 1)"));
            }
            other => panic!("unexpected scrape state: {other:?}"),
        }
    }

    #[test]
    fn errors_stay_in_their_own_feature_bucket() {
        let body = "model busy";
        let base = serve_once(format!(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let mut controller = controller_for(base);
        controller.ui.sentiment.result =
            FeatureState::Success(crate::egui_app::view_model::SentimentView {
                label: "POS".into(),
                tone: crate::egui_app::view_model::LabelTone::Positive,
                score_text: "98.12%".into(),
                model_name: "m".into(),
                all_scores: Vec::new(),
            });
        controller.submit_fill_mask();
        poll_until_settled(&mut controller);
        assert_eq!(controller.ui.fill_mask.result.error(), Some("model busy"));
        assert!(matches!(
            controller.ui.sentiment.result,
            FeatureState::Success(_)
        ));
    }
}
