use super::EguiController;
use super::jobs::{JobMessage, ScrapeOutcome};
use crate::egui_app::state::{CatalogView, FeatureState, StatusTone};
use crate::egui_app::view_model;

impl EguiController {
    /// Drain completed background work and fold it into UI state.
    ///
    /// Called once per frame. Each message lands only in its own feature
    /// bucket, so a failure in one tab never disturbs another.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            };

            match message {
                JobMessage::SentimentDone(result) => {
                    self.jobs.clear_sentiment();
                    match result {
                        Ok(response) => {
                            self.ui.sentiment.result =
                                FeatureState::Success(view_model::sentiment_view(&response));
                            self.set_status(
                                format!("Sentiment: {} via {}", response.label, response.model_name),
                                StatusTone::Info,
                            );
                        }
                        Err(err) => {
                            let message = err.to_string();
                            tracing::warn!("Sentiment request failed: {message}");
                            self.ui.sentiment.result = FeatureState::Error(message.clone());
                            self.set_status(message, StatusTone::Error);
                        }
                    }
                }
                JobMessage::FillMaskDone(result) => {
                    self.jobs.clear_fill_mask();
                    match result {
                        Ok(response) => {
                            let view = view_model::fill_mask_view(&response);
                            self.set_status(
                                format!("{} suggestions via {}", view.rows.len(), view.model_name),
                                StatusTone::Info,
                            );
                            self.ui.fill_mask.result = FeatureState::Success(view);
                        }
                        Err(err) => {
                            let message = err.to_string();
                            tracing::warn!("Fill-mask request failed: {message}");
                            self.ui.fill_mask.result = FeatureState::Error(message.clone());
                            self.set_status(message, StatusTone::Error);
                        }
                    }
                }
                JobMessage::ScrapeDone(outcome) => {
                    self.jobs.clear_scrape();
                    match outcome {
                        ScrapeOutcome::Client(Ok(items)) => {
                            self.set_status(
                                format!("Extracted {} comment rows", items.len()),
                                StatusTone::Info,
                            );
                            self.ui.scrape.result =
                                FeatureState::Success(view_model::scrape_view_from_items(&items));
                        }
                        ScrapeOutcome::Client(Err(err)) => {
                            let message = err.to_string();
                            tracing::warn!("Client scrape failed: {message}");
                            self.ui.scrape.result = FeatureState::Error(message.clone());
                            self.set_status(message, StatusTone::Error);
                        }
                        ScrapeOutcome::Backend(Ok(response)) => {
                            self.set_status(
                                format!("Scraped and classified {} rows", response.items.len()),
                                StatusTone::Info,
                            );
                            self.ui.scrape.result = FeatureState::Success(
                                view_model::scrape_view_from_backend(&response),
                            );
                        }
                        ScrapeOutcome::Backend(Err(err)) => {
                            let message = err.to_string();
                            tracing::warn!("Backend scrape failed: {message}");
                            self.ui.scrape.result = FeatureState::Error(message.clone());
                            self.set_status(message, StatusTone::Error);
                        }
                    }
                }
                JobMessage::HealthChecked(result) => match result {
                    Ok(()) => {
                        self.ui.backend.health = FeatureState::Success(());
                    }
                    Err(err) => {
                        tracing::warn!("Backend health probe failed: {err}");
                        self.ui.backend.health = FeatureState::Error(err.to_string());
                    }
                },
                JobMessage::ModelsLoaded(result) => match result {
                    Ok(catalog) => {
                        self.ui.backend.catalog = FeatureState::Success(CatalogView {
                            sentiment_default: catalog.visobert.sentiment_default,
                            fill_mask_default: catalog.visobert.fill_mask_default,
                        });
                    }
                    Err(err) => {
                        tracing::debug!("Model catalog fetch failed: {err}");
                        self.ui.backend.catalog = FeatureState::Error(err.to_string());
                    }
                },
            }
        }
    }
}
