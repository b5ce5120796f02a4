//! Helpers to convert gateway responses into egui-facing view structs.

use crate::api::{FillMaskResponse, ScrapeAnalyzeResponse, SentimentResponse};
use crate::scrape::ScrapeItem;

/// Sentiment coloring buckets derived from the classifier label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelTone {
    Positive,
    Negative,
    Neutral,
}

/// Render-ready sentiment result.
#[derive(Clone, Debug, PartialEq)]
pub struct SentimentView {
    pub label: String,
    pub tone: LabelTone,
    pub score_text: String,
    pub model_name: String,
    /// Full distribution, already formatted, in server order.
    pub all_scores: Vec<(String, String)>,
}

/// One render-ready fill-mask suggestion.
#[derive(Clone, Debug, PartialEq)]
pub struct FillMaskRow {
    /// 1-based rank as shown in the table.
    pub rank: usize,
    pub token: String,
    pub score_text: String,
    pub sequence: Option<String>,
}

/// Render-ready fill-mask result.
#[derive(Clone, Debug, PartialEq)]
pub struct FillMaskView {
    pub model_name: String,
    pub rows: Vec<FillMaskRow>,
}

/// One render-ready scraped row.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeRowView {
    pub rank: usize,
    pub text: String,
    pub label: String,
    pub tone: LabelTone,
    pub score_text: Option<String>,
}

/// Render-ready scrape result, from either the client or backend path.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeView {
    pub rows: Vec<ScrapeRowView>,
    pub summary: Option<String>,
}

/// Format a 0-1 confidence as a percentage with two decimals.
pub fn format_percent(score: f32) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Map a classifier label onto a coloring bucket.
///
/// Labels vary per model (POS/NEG/NEU, POSITIVE/NEGATIVE, star ratings);
/// anything not clearly positive or negative renders neutral.
pub fn label_tone(label: &str) -> LabelTone {
    let upper = label.to_uppercase();
    if upper.starts_with("POS") || upper.contains("4 STAR") || upper.contains("5 STAR") {
        LabelTone::Positive
    } else if upper.starts_with("NEG") || upper.contains("1 STAR") || upper.contains("2 STAR") {
        LabelTone::Negative
    } else {
        LabelTone::Neutral
    }
}

/// Build the sentiment view from a gateway response.
pub fn sentiment_view(response: &SentimentResponse) -> SentimentView {
    SentimentView {
        label: response.label.clone(),
        tone: label_tone(&response.label),
        score_text: format_percent(response.score),
        model_name: response.model_name.clone(),
        all_scores: response
            .all_scores
            .iter()
            .flatten()
            .map(|entry| (entry.label.clone(), format_percent(entry.score)))
            .collect(),
    }
}

/// Build the fill-mask view, preserving server candidate order.
pub fn fill_mask_view(response: &FillMaskResponse) -> FillMaskView {
    FillMaskView {
        model_name: response.model_name.clone(),
        rows: response
            .candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| FillMaskRow {
                rank: index + 1,
                token: candidate.token_str.clone(),
                score_text: format_percent(candidate.score),
                sequence: candidate.sequence.clone(),
            })
            .collect(),
    }
}

/// Build the scrape view from client-extracted rows (no classification).
pub fn scrape_view_from_items(items: &[ScrapeItem]) -> ScrapeView {
    ScrapeView {
        rows: items
            .iter()
            .enumerate()
            .map(|(index, item)| ScrapeRowView {
                rank: index + 1,
                text: item.text.clone(),
                label: item.label.clone(),
                tone: LabelTone::Neutral,
                score_text: None,
            })
            .collect(),
        summary: None,
    }
}

/// Build the scrape view from the backend scrape-and-analyze response.
pub fn scrape_view_from_backend(response: &ScrapeAnalyzeResponse) -> ScrapeView {
    let summary = if response.summary.is_empty() {
        None
    } else {
        let parts: Vec<String> = response
            .summary
            .iter()
            .map(|(label, count)| format!("{label}: {count}"))
            .collect();
        Some(format!("{} rows ({})", response.count, parts.join(", ")))
    };
    ScrapeView {
        rows: response
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| ScrapeRowView {
                rank: index + 1,
                text: item.text.clone(),
                label: item.label.clone(),
                tone: label_tone(&item.label),
                score_text: Some(format_percent(item.score)),
            })
            .collect(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FillMaskCandidate, LabelScore};

    #[test]
    fn percent_formatting_keeps_two_decimals() {
        assert_eq!(format_percent(0.9812), "98.12%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn label_tones_cover_common_model_vocabularies() {
        assert_eq!(label_tone("POS"), LabelTone::Positive);
        assert_eq!(label_tone("POSITIVE"), LabelTone::Positive);
        assert_eq!(label_tone("NEG"), LabelTone::Negative);
        assert_eq!(label_tone("1 star"), LabelTone::Negative);
        assert_eq!(label_tone("5 stars"), LabelTone::Positive);
        assert_eq!(label_tone("NEU"), LabelTone::Neutral);
        assert_eq!(label_tone("3 stars"), LabelTone::Neutral);
    }

    #[test]
    fn sentiment_view_formats_the_full_distribution() {
        let view = sentiment_view(&SentimentResponse {
            model_type: "visobert".into(),
            model_name: "5CD-AI/vietnamese-sentiment-visobert".into(),
            label: "POS".into(),
            score: 0.9812,
            all_scores: Some(vec![
                LabelScore {
                    label: "POS".into(),
                    score: 0.9812,
                },
                LabelScore {
                    label: "NEG".into(),
                    score: 0.0188,
                },
            ]),
        });
        assert_eq!(view.score_text, "98.12%");
        assert_eq!(view.tone, LabelTone::Positive);
        assert_eq!(view.all_scores[1], ("NEG".to_string(), "1.88%".to_string()));
    }

    #[test]
    fn fill_mask_rows_are_ranked_from_one() {
        let view = fill_mask_view(&FillMaskResponse {
            model_type: "visobert".into(),
            model_name: "m".into(),
            top_k: 2,
            candidates: vec![
                FillMaskCandidate {
                    token_str: "quần".into(),
                    score: 0.31,
                    sequence: None,
                },
                FillMaskCandidate {
                    token_str: "gì".into(),
                    score: 0.22,
                    sequence: Some("shop làm ăn như cái gì".into()),
                },
            ],
        });
        assert_eq!(view.rows[0].rank, 1);
        assert_eq!(view.rows[1].rank, 2);
        assert_eq!(view.rows[1].sequence.as_deref(), Some("shop làm ăn như cái gì"));
    }

    #[test]
    fn client_scrape_rows_render_without_scores() {
        let view = scrape_view_from_items(&[ScrapeItem {
            text: "hàng đẹp lắm nha".into(),
            label: "N/A".into(),
            score: 0.0,
        }]);
        assert_eq!(view.rows[0].rank, 1);
        assert_eq!(view.rows[0].label, "N/A");
        assert_eq!(view.rows[0].score_text, None);
        assert!(view.summary.is_none());
    }
}
