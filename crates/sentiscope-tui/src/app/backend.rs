use sentiscope_core::Pagination;

use super::{App, Screen};
use crate::model::catalog::CatalogState;
use crate::model::report::ResultsState;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    ///
    /// Analysis completions are accepted only when their token matches the
    /// latest issued one; responses to superseded submissions are dropped
    /// so a slow earlier request can never overwrite a later report.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::SectorsLoaded(sectors) => {
                self.catalog = CatalogState::Loaded(sectors);
                self.sector_cursor = self.sector_cursor.min(self.catalog.len().saturating_sub(1));
            }
            BackendEvent::SectorsFailed(_) => {
                self.catalog = CatalogState::Failed("Error loading sectors.".to_string());
                self.set_results(ResultsState::Error("Error loading sectors.".to_string()));
            }
            BackendEvent::SectorInfoLoaded { sector, seq, info } => {
                // Only the popup that requested this seq may consume it.
                if let Some(popup) = &mut self.popup {
                    if popup.seq == seq && popup.sector == sector {
                        popup.info = Some(info);
                    }
                }
            }
            BackendEvent::SectorInfoFailed { seq, message } => {
                if self.popup.as_ref().is_some_and(|p| p.seq == seq) {
                    self.popup = None;
                    tracing::warn!(%message, "sector info unavailable");
                }
            }
            BackendEvent::SectorReport { token, report } => {
                if !self.accept_token(token) {
                    return;
                }
                self.set_results(ResultsState::Sector {
                    report,
                    pagination: Pagination::new(),
                });
                self.screen = Screen::Results;
            }
            BackendEvent::ArticleReport { token, analysis } => {
                if !self.accept_token(token) {
                    return;
                }
                self.set_results(ResultsState::Article(analysis));
                self.screen = Screen::Results;
            }
            BackendEvent::AnalysisFailed { token, message } => {
                if !self.accept_token(token) {
                    return;
                }
                self.present_error(message);
            }
        }
    }

    fn accept_token(&self, token: u64) -> bool {
        if token == self.latest_token {
            true
        } else {
            tracing::debug!(token, latest = self.latest_token, "dropping stale response");
            false
        }
    }
}
