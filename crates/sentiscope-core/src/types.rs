use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// The catalog choice that routes to the manual paste form instead of a
/// sector analysis. Never sent to the analysis or sector-info endpoints.
pub const MANUAL_ENTRY: &str = "Manually Paste Article";

/// Multi-article analysis result for a chosen market sector.
///
/// `articles` keeps the server's order; pagination downstream is a view
/// over this vec and never reorders or re-fetches it.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorReport {
    pub overall_sentiment: String,
    #[serde(default)]
    pub articles: Vec<ArticleResult>,
}

/// One analyzed news article within a sector report.
///
/// The nested sentiment and entity mappings are kept as opaque JSON values:
/// the backend mixes numeric scores with string labels per model, and the
/// entity record shape varies per extraction source. Rendering dumps them
/// generically rather than hard-coding a shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "urlToImage", default)]
    pub image_url: Option<String>,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub average_sentiments: BTreeMap<String, Value>,
    #[serde(default)]
    pub detailed_sentiments: BTreeMap<String, Value>,
    #[serde(default)]
    pub entities: BTreeMap<String, Value>,
}

/// Analysis result for a single pasted article.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleAnalysis {
    pub overall_sentiment: String,
    pub analysis: AnalysisDetail,
}

/// The per-article analysis block, shared in shape with [`ArticleResult`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisDetail {
    #[serde(default)]
    pub average_sentiments: BTreeMap<String, Value>,
    #[serde(default)]
    pub detailed_sentiments: BTreeMap<String, Value>,
    #[serde(default)]
    pub entities: BTreeMap<String, Value>,
}

/// Descriptive metadata for one sector.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorInfo {
    pub description: String,
    #[serde(default)]
    pub tickers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_report_decodes_wire_field_names() {
        let json = r#"{
            "overall_sentiment": "Slightly Positive",
            "articles": [{
                "title": "Banks rally",
                "source": "Reuters",
                "link": "https://example.com/a",
                "urlToImage": "https://example.com/a.png",
                "publishedAt": "2024-01-05T10:00:00Z",
                "description": "Bank stocks rose.",
                "average_sentiments": {"Negative": 0.1, "Positive": 0.7, "Overall_Sentiment": "Slightly Positive"},
                "detailed_sentiments": {"FinBERT": {"Positive": 0.8}},
                "entities": {"flair": [{"text": "JPM", "label": "ORG"}]}
            }]
        }"#;
        let report: SectorReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.overall_sentiment, "Slightly Positive");
        assert_eq!(report.articles.len(), 1);
        let article = &report.articles[0];
        assert_eq!(article.image_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(article.average_sentiments["Overall_Sentiment"], "Slightly Positive");
        assert!(article.detailed_sentiments.contains_key("FinBERT"));
    }

    #[test]
    fn article_result_tolerates_missing_optional_fields() {
        let json = r#"{"title": "Bare", "source": "X", "link": "", "description": "d"}"#;
        let article: ArticleResult = serde_json::from_str(json).unwrap();
        assert!(article.image_url.is_none());
        assert!(article.average_sentiments.is_empty());
    }

    #[test]
    fn article_analysis_decodes_nested_block() {
        let json = r#"{
            "overall_sentiment": "Neutral",
            "analysis": {
                "average_sentiments": {"Neutral": 0.9},
                "detailed_sentiments": {},
                "entities": {}
            }
        }"#;
        let analysis: ArticleAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.overall_sentiment, "Neutral");
        assert_eq!(analysis.analysis.average_sentiments["Neutral"], 0.9);
    }
}
