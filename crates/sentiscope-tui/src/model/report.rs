use sentiscope_core::{ArticleAnalysis, Pagination, SectorReport};

/// What the results area currently shows.
///
/// Exactly one live report at a time: a new successful submission fully
/// replaces the previous state. Busy and Error both hide the
/// overall-sentiment indicator so stale data never shows next to them.
#[derive(Debug, Clone)]
pub enum ResultsState {
    Idle,
    /// Transient status line while a request is in flight.
    Busy(String),
    /// Single error line.
    Error(String),
    /// Paginated multi-article sector report.
    Sector {
        report: SectorReport,
        pagination: Pagination,
    },
    /// Single pasted-article analysis; no pagination.
    Article(ArticleAnalysis),
}

impl ResultsState {
    /// The overall-sentiment label, shown only for a live report.
    pub fn overall_sentiment(&self) -> Option<&str> {
        match self {
            ResultsState::Sector { report, .. } => Some(&report.overall_sentiment),
            ResultsState::Article(analysis) => Some(&analysis.overall_sentiment),
            ResultsState::Idle | ResultsState::Busy(_) | ResultsState::Error(_) => None,
        }
    }

    pub fn article_count(&self) -> usize {
        match self {
            ResultsState::Sector { report, .. } => report.articles.len(),
            ResultsState::Article(_) => 1,
            _ => 0,
        }
    }

    /// Absolute article indices of the currently visible page.
    pub fn visible_indices(&self) -> std::ops::Range<usize> {
        match self {
            ResultsState::Sector { report, pagination } => {
                pagination.page_bounds(report.articles.len())
            }
            ResultsState::Article(_) => 0..1,
            _ => 0..0,
        }
    }
}
