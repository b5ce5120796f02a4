//! Shared state types for the egui UI.

use crate::api::ModelType;
use crate::benchmarks::BenchmarkMetric;
use crate::egui_app::view_model::{FillMaskView, ScrapeView, SentimentView};
use crate::scrape;

/// Default sentiment input offered on first launch.
pub const DEFAULT_SENTIMENT_TEXT: &str = "Sản phẩm rất tốt và chất lượng.";

/// Default fill-mask input offered on first launch.
pub const DEFAULT_MASK_TEXT: &str = "shop làm ăn như cái <mask>";

/// Mask placeholder the fill-mask pipeline expects.
pub const MASK_TOKEN: &str = "<mask>";

/// Default number of fill-mask suggestions requested.
pub const DEFAULT_TOP_K: u32 = 10;

/// Bounds accepted for the fill-mask suggestion count.
pub const TOP_K_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Lifecycle of one feature's request/response cycle.
///
/// Each tab owns exactly one of these; submitting replaces the previous
/// value wholesale, so stale data never bleeds into a new request.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FeatureState<T> {
    fn default() -> Self {
        FeatureState::Idle
    }
}

impl<T> FeatureState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeatureState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FeatureState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Dashboard tabs, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Sentiment,
    FillMask,
    Scrape,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Sentiment, ActiveTab::FillMask, ActiveTab::Scrape];

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Sentiment => "Sentiment",
            ActiveTab::FillMask => "Fill mask",
            ActiveTab::Scrape => "Scrape",
        }
    }
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub active_tab: ActiveTab,
    pub model_type: ModelType,
    pub sentiment: SentimentTabState,
    pub fill_mask: FillMaskTabState,
    pub scrape: ScrapeTabState,
    pub chart: ChartState,
    pub backend: BackendState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            active_tab: ActiveTab::default(),
            model_type: ModelType::default(),
            sentiment: SentimentTabState::default(),
            fill_mask: FillMaskTabState::default(),
            scrape: ScrapeTabState::default(),
            chart: ChartState::default(),
            backend: BackendState::default(),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub tone: StatusTone,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Enter text and press Analyze".into(),
            badge_label: "Idle".into(),
            tone: StatusTone::Idle,
        }
    }
}

/// Tone buckets that drive badge and accent colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

/// Sentiment tab inputs and result bucket.
#[derive(Clone, Debug)]
pub struct SentimentTabState {
    pub text: String,
    pub result: FeatureState<SentimentView>,
}

impl Default for SentimentTabState {
    fn default() -> Self {
        Self {
            text: DEFAULT_SENTIMENT_TEXT.into(),
            result: FeatureState::Idle,
        }
    }
}

/// Fill-mask tab inputs and result bucket.
#[derive(Clone, Debug)]
pub struct FillMaskTabState {
    pub text: String,
    pub top_k: u32,
    /// Character position of the caret in the mask input, tracked so the
    /// insert-token button can splice at the cursor.
    pub caret: usize,
    /// One-shot caret restore applied by the renderer after a splice.
    pub pending_caret: Option<usize>,
    pub result: FeatureState<FillMaskView>,
}

impl Default for FillMaskTabState {
    fn default() -> Self {
        Self {
            text: DEFAULT_MASK_TEXT.into(),
            top_k: DEFAULT_TOP_K,
            caret: DEFAULT_MASK_TEXT.chars().count(),
            pending_caret: None,
            result: FeatureState::Idle,
        }
    }
}

/// Scrape tab inputs and result bucket.
#[derive(Clone, Debug)]
pub struct ScrapeTabState {
    pub url: String,
    pub limit: u32,
    pub result: FeatureState<ScrapeView>,
}

impl Default for ScrapeTabState {
    fn default() -> Self {
        Self {
            url: String::new(),
            limit: scrape::DEFAULT_LIMIT,
            result: FeatureState::Idle,
        }
    }
}

/// Benchmark chart toggle state.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartState {
    pub metric: BenchmarkMetric,
    pub visible: bool,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            metric: BenchmarkMetric::default(),
            visible: true,
        }
    }
}

/// Backend liveness and model catalog, refreshed once at startup.
#[derive(Clone, Debug, Default)]
pub struct BackendState {
    pub health: FeatureState<()>,
    pub catalog: FeatureState<CatalogView>,
}

/// Default model ids shown in the model picker hover text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogView {
    pub sentiment_default: Option<String>,
    pub fill_mask_default: Option<String>,
}
