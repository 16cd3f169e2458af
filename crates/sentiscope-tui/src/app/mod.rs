mod backend;
mod update;

use std::collections::BTreeSet;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use sentiscope_core::{Pagination, SectorInfo, MANUAL_ENTRY};

use crate::model::catalog::CatalogState;
use crate::model::report::ResultsState;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sector catalog plus the manual-paste entry.
    Sectors,
    /// Multi-line paste buffer for a manually supplied article.
    ArticleInput,
    /// The report presenter (sector report, article report, busy, error).
    Results,
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    TextInput,
}

/// The sector-info overlay. At most one exists at a time; requesting info
/// for another sector replaces it. `info` is `None` while the fetch is in
/// flight.
#[derive(Debug, Clone)]
pub struct InfoPopup {
    pub sector: String,
    pub seq: u64,
    pub info: Option<SectorInfo>,
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub catalog: CatalogState,
    /// Cursor into `catalog.choices()`.
    pub sector_cursor: usize,
    pub results: ResultsState,
    /// Expanded detail regions, keyed by absolute article index.
    /// Disclosure state made explicit so re-renders cannot lose or
    /// duplicate it.
    pub expanded: BTreeSet<usize>,
    /// Preserve `expanded` across page navigation (--keep-details).
    pub keep_details: bool,
    /// Cursor within the visible page (0-based page position, not an
    /// absolute article index).
    pub card_cursor: usize,
    pub results_scroll: u16,
    pub popup: Option<InfoPopup>,
    /// Sequence counter for sector-info requests; responses for an older
    /// seq are dropped.
    info_seq: u64,
    /// Token of the most recently issued analysis request. Completions
    /// carrying any other token are stale and discarded.
    latest_token: u64,
    pub article_buffer: String,
    pub tick: usize,
    pub theme: Theme,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
}

impl App {
    pub fn new(theme: Theme, keep_details: bool) -> Self {
        Self {
            screen: Screen::Sectors,
            input_mode: InputMode::Normal,
            catalog: CatalogState::Loading,
            sector_cursor: 0,
            results: ResultsState::Idle,
            expanded: BTreeSet::new(),
            keep_details,
            card_cursor: 0,
            results_scroll: 0,
            popup: None,
            info_seq: 0,
            latest_token: 0,
            article_buffer: String::new(),
            tick: 0,
            theme,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            backend_cmd_tx: None,
        }
    }

    fn send(&self, cmd: BackendCommand) {
        if let Some(tx) = &self.backend_cmd_tx {
            let _ = tx.send(cmd);
        }
    }

    /// Issue the one-shot catalog fetch. Called once after the command
    /// channel is wired up.
    pub fn load_sectors(&mut self) {
        self.catalog = CatalogState::Loading;
        self.send(BackendCommand::LoadSectors);
    }

    /// The catalog choice under the cursor, if any.
    pub fn selected_choice(&self) -> Option<String> {
        self.catalog
            .choices()
            .get(self.sector_cursor)
            .map(|s| s.to_string())
    }

    /// Submit a sector analysis request. An empty or sentinel value is a
    /// client-side validation failure: no network call is made.
    pub fn submit_sector(&mut self, sector: &str) {
        if sector.trim().is_empty() || sector == MANUAL_ENTRY {
            self.present_error("Please select a sector.".to_string());
            return;
        }
        self.present_busy("Analyzing sector...".to_string());
        let token = self.next_token();
        self.send(BackendCommand::AnalyzeSector {
            sector: sector.to_string(),
            token,
        });
    }

    /// Submit the paste buffer for single-article analysis. An empty
    /// buffer is a client-side validation failure: no network call.
    pub fn submit_article(&mut self) {
        if self.article_buffer.trim().is_empty() {
            self.input_mode = InputMode::Normal;
            self.present_error("Please paste an article to analyze.".to_string());
            return;
        }
        self.input_mode = InputMode::Normal;
        self.present_busy("Analyzing article...".to_string());
        let token = self.next_token();
        self.send(BackendCommand::AnalyzeArticle {
            text: self.article_buffer.clone(),
            token,
        });
    }

    /// Request sector metadata and open (or replace) the info popup.
    /// Skipped entirely for the manual-paste sentinel.
    pub fn show_sector_info(&mut self, sector: &str) {
        if sector == MANUAL_ENTRY {
            return;
        }
        self.info_seq += 1;
        self.popup = Some(InfoPopup {
            sector: sector.to_string(),
            seq: self.info_seq,
            info: None,
        });
        self.send(BackendCommand::FetchSectorInfo {
            sector: sector.to_string(),
            seq: self.info_seq,
        });
    }

    fn next_token(&mut self) -> u64 {
        self.latest_token += 1;
        self.latest_token
    }

    /// Replace the results area with an error line and navigate to it.
    /// The overall-sentiment indicator disappears with the old report.
    pub fn present_error(&mut self, message: String) {
        self.set_results(ResultsState::Error(message));
        self.screen = Screen::Results;
    }

    fn present_busy(&mut self, message: String) {
        self.set_results(ResultsState::Busy(message));
        self.screen = Screen::Results;
    }

    /// Replace the live report and reset all per-report view state.
    pub(super) fn set_results(&mut self, results: ResultsState) {
        self.results = results;
        self.expanded.clear();
        self.card_cursor = 0;
        self.results_scroll = 0;
    }

    /// Absolute article index of the card under the cursor on the visible
    /// page, if any.
    pub fn selected_article(&self) -> Option<usize> {
        let visible = self.results.visible_indices();
        visible.clone().nth(self.card_cursor)
    }

    /// Flip the selected card's detail region between hidden and visible.
    pub fn toggle_selected_details(&mut self) {
        if let Some(idx) = self.selected_article() {
            if !self.expanded.remove(&idx) {
                self.expanded.insert(idx);
            }
        }
    }

    /// Move to the next page, clamped at the last. Collapses all detail
    /// regions unless `--keep-details` was given.
    pub fn page_next(&mut self) {
        if let ResultsState::Sector { report, pagination } = &mut self.results {
            let count = report.articles.len();
            if pagination.next(count) {
                self.after_page_change();
            }
        }
    }

    /// Move to the previous page, clamped at page 1.
    pub fn page_prev(&mut self) {
        if let ResultsState::Sector { pagination, .. } = &mut self.results {
            if pagination.prev() {
                self.after_page_change();
            }
        }
    }

    fn after_page_change(&mut self) {
        self.card_cursor = 0;
        self.results_scroll = 0;
        if !self.keep_details {
            self.expanded.clear();
        }
    }

    /// Current pagination, if a sector report is live.
    pub fn pagination(&self) -> Option<(Pagination, usize)> {
        match &self.results {
            ResultsState::Sector { report, pagination } => {
                Some((*pagination, report.articles.len()))
            }
            _ => None,
        }
    }

    // update() is in update.rs; handle_backend_event() is in backend.rs

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        // Full-width footer row below the body.
        let footer_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: 1.min(area.height),
        };
        let body_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        match self.screen {
            Screen::Sectors => crate::view::sectors::render_in(f, self, body_area, footer_area),
            Screen::ArticleInput => {
                crate::view::article_input::render_in(f, self, body_area, footer_area)
            }
            Screen::Results => crate::view::results::render_in(f, self, body_area, footer_area),
        }

        if let Some(popup) = &self.popup {
            crate::view::sector_info::render(f, popup, self.tick, &self.theme);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
