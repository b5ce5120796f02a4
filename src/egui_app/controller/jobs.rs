use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::api::{
    self, ApiError, FillMaskRequest, FillMaskResponse, ModelCatalog, ModelType,
    ScrapeAnalyzeResponse, SentimentRequest, SentimentResponse,
};
use crate::scrape::{self, ScrapeError, ScrapeItem};

/// Completed background work, drained on the UI thread each frame.
pub(crate) enum JobMessage {
    SentimentDone(Result<SentimentResponse, ApiError>),
    FillMaskDone(Result<FillMaskResponse, ApiError>),
    ScrapeDone(ScrapeOutcome),
    ModelsLoaded(Result<ModelCatalog, ApiError>),
    HealthChecked(Result<(), ApiError>),
}

/// Scrape results keep their origin so the controller can render the
/// unclassified client rows differently from backend-classified ones.
pub(crate) enum ScrapeOutcome {
    Client(Result<Vec<ScrapeItem>, ScrapeError>),
    Backend(Result<ScrapeAnalyzeResponse, ApiError>),
}

pub(crate) struct SentimentJob {
    pub(crate) base: String,
    pub(crate) model_type: ModelType,
    pub(crate) text: String,
}

pub(crate) struct FillMaskJob {
    pub(crate) base: String,
    pub(crate) text: String,
    pub(crate) top_k: u32,
}

pub(crate) struct ScrapeJob {
    pub(crate) url: String,
    pub(crate) limit: u32,
    /// Backend path parameters; `None` runs the client-only heuristic.
    pub(crate) backend: Option<(String, ModelType)>,
}

/// Owns the job channel and the in-flight flags for each feature.
///
/// There is no cancellation: a new submit is simply refused while the
/// previous one is in flight, and whichever completion arrives last wins.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    sentiment_in_progress: bool,
    fill_mask_in_progress: bool,
    scrape_in_progress: bool,
    startup_probe_started: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            sentiment_in_progress: false,
            fill_mask_in_progress: false,
            scrape_in_progress: false,
            startup_probe_started: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn sentiment_in_progress(&self) -> bool {
        self.sentiment_in_progress
    }

    pub(super) fn fill_mask_in_progress(&self) -> bool {
        self.fill_mask_in_progress
    }

    pub(super) fn scrape_in_progress(&self) -> bool {
        self.scrape_in_progress
    }

    pub(super) fn begin_sentiment(&mut self, job: SentimentJob) {
        if self.sentiment_in_progress {
            return;
        }
        self.sentiment_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::sentiment(
                &job.base,
                &SentimentRequest {
                    model_type: job.model_type,
                    text: job.text,
                    model_name: None,
                },
            );
            let _ = tx.send(JobMessage::SentimentDone(result));
        });
    }

    pub(super) fn clear_sentiment(&mut self) {
        self.sentiment_in_progress = false;
    }

    pub(super) fn begin_fill_mask(&mut self, job: FillMaskJob) {
        if self.fill_mask_in_progress {
            return;
        }
        self.fill_mask_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::fill_mask(
                &job.base,
                &FillMaskRequest {
                    text: job.text,
                    top_k: job.top_k,
                    model_name: None,
                },
            );
            let _ = tx.send(JobMessage::FillMaskDone(result));
        });
    }

    pub(super) fn clear_fill_mask(&mut self) {
        self.fill_mask_in_progress = false;
    }

    pub(super) fn begin_scrape(&mut self, job: ScrapeJob) {
        if self.scrape_in_progress {
            return;
        }
        self.scrape_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let outcome = match job.backend {
                Some((base, model_type)) => ScrapeOutcome::Backend(api::scrape_and_analyze(
                    &base, &job.url, model_type, job.limit,
                )),
                None => ScrapeOutcome::Client(scrape::fetch_comment_items(&job.url, job.limit)),
            };
            let _ = tx.send(JobMessage::ScrapeDone(outcome));
        });
    }

    pub(super) fn clear_scrape(&mut self) {
        self.scrape_in_progress = false;
    }

    /// Fire the one-time health probe and catalog fetch.
    pub(super) fn begin_startup_probe(&mut self, base: String) {
        if self.startup_probe_started {
            return;
        }
        self.startup_probe_started = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(JobMessage::HealthChecked(api::health(&base)));
            let _ = tx.send(JobMessage::ModelsLoaded(api::models(&base)));
        });
    }
}
