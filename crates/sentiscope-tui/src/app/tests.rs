use super::*;
use crate::action::Action;
use crate::tui_event::BackendEvent;

use sentiscope_core::{AnalysisDetail, ArticleAnalysis, ArticleResult, SectorReport};

/// Create a minimal App wired to a real command channel so tests can
/// assert which backend commands were (or were not) sent.
fn test_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(Theme::hacker(), false);
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

fn sector_report(n: usize) -> SectorReport {
    SectorReport {
        overall_sentiment: "Slightly Positive".to_string(),
        articles: (0..n)
            .map(|i| ArticleResult {
                title: format!("Article {i}"),
                source: "Newswire".to_string(),
                ..ArticleResult::default()
            })
            .collect(),
    }
}

fn deliver_report(app: &mut App, n: usize) {
    app.submit_sector("Technology");
    let token = app.latest_token;
    app.handle_backend_event(BackendEvent::SectorReport {
        token,
        report: sector_report(n),
    });
}

// ── Submission validation ───────────────────────────────────────

#[test]
fn empty_sector_submission_shows_error_without_network() {
    let (mut app, mut rx) = test_app();
    app.submit_sector("   ");
    assert!(matches!(&app.results, ResultsState::Error(m) if m == "Please select a sector."));
    assert_eq!(app.screen, Screen::Results);
    assert!(rx.try_recv().is_err());
}

#[test]
fn sentinel_sector_submission_is_rejected() {
    let (mut app, mut rx) = test_app();
    app.submit_sector(MANUAL_ENTRY);
    assert!(matches!(app.results, ResultsState::Error(_)));
    assert!(rx.try_recv().is_err());
}

#[test]
fn empty_article_submission_shows_error_without_network() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::ArticleInput;
    app.input_mode = InputMode::TextInput;
    app.article_buffer = "  \n ".to_string();
    app.update(Action::InputSubmit);
    assert!(
        matches!(&app.results, ResultsState::Error(m) if m == "Please paste an article to analyze.")
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn valid_sector_submission_goes_busy_and_hides_sentiment() {
    let (mut app, mut rx) = test_app();
    app.submit_sector("Energy");
    assert!(matches!(app.results, ResultsState::Busy(_)));
    assert_eq!(app.results.overall_sentiment(), None);
    match rx.try_recv() {
        Ok(BackendCommand::AnalyzeSector { sector, token }) => {
            assert_eq!(sector, "Energy");
            assert_eq!(token, 1);
        }
        other => panic!("expected AnalyzeSector, got {other:?}"),
    }
}

// ── Sentinel routing ────────────────────────────────────────────

#[test]
fn drill_in_on_sentinel_opens_paste_screen() {
    let (mut app, mut rx) = test_app();
    app.catalog = CatalogState::Loaded(vec!["Technology".to_string()]);
    app.sector_cursor = 1; // sentinel is always appended last
    app.update(Action::DrillIn);
    assert_eq!(app.screen, Screen::ArticleInput);
    assert_eq!(app.input_mode, InputMode::TextInput);
    assert!(rx.try_recv().is_err());
}

#[test]
fn sector_info_never_fires_for_sentinel() {
    let (mut app, mut rx) = test_app();
    app.catalog = CatalogState::Loaded(vec!["Technology".to_string()]);
    app.sector_cursor = 1;
    app.update(Action::ShowSectorInfo);
    assert!(app.popup.is_none());
    assert!(rx.try_recv().is_err());
}

// ── Pagination ──────────────────────────────────────────────────

#[test]
fn seven_articles_paginate_five_then_two() {
    let (mut app, _rx) = test_app();
    deliver_report(&mut app, 7);

    assert_eq!(app.screen, Screen::Results);
    assert_eq!(app.results.visible_indices(), 0..5);
    let (p, count) = app.pagination().unwrap();
    assert_eq!(p.total_pages(count), 2);

    app.update(Action::NextPage);
    assert_eq!(app.results.visible_indices(), 5..7);

    // clamped at the last page
    app.update(Action::NextPage);
    assert_eq!(app.results.visible_indices(), 5..7);

    app.update(Action::PrevPage);
    assert_eq!(app.results.visible_indices(), 0..5);
    app.update(Action::PrevPage);
    assert_eq!(app.results.visible_indices(), 0..5);
}

#[test]
fn card_cursor_resets_and_clamps_per_page() {
    let (mut app, _rx) = test_app();
    deliver_report(&mut app, 7);

    app.update(Action::GoBottom);
    assert_eq!(app.card_cursor, 4);
    app.update(Action::NextPage);
    assert_eq!(app.card_cursor, 0);
    // page 2 has two cards
    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    assert_eq!(app.card_cursor, 1);
}

// ── Disclosure ──────────────────────────────────────────────────

#[test]
fn toggle_details_twice_restores_collapsed() {
    let (mut app, _rx) = test_app();
    deliver_report(&mut app, 3);

    app.update(Action::MoveDown);
    app.update(Action::ToggleDetails);
    assert!(app.expanded.contains(&1));
    app.update(Action::ToggleDetails);
    assert!(app.expanded.is_empty());
}

#[test]
fn page_change_collapses_details_by_default() {
    let (mut app, _rx) = test_app();
    deliver_report(&mut app, 7);

    app.update(Action::ToggleDetails);
    assert!(app.expanded.contains(&0));
    app.update(Action::NextPage);
    assert!(app.expanded.is_empty());
}

#[test]
fn keep_details_preserves_disclosure_across_pages() {
    let (mut app, _rx) = test_app();
    app.keep_details = true;
    deliver_report(&mut app, 7);

    app.update(Action::ToggleDetails);
    app.update(Action::NextPage);
    assert!(app.expanded.contains(&0));
    app.update(Action::PrevPage);
    assert!(app.expanded.contains(&0));
}

// ── Stale responses ─────────────────────────────────────────────

#[test]
fn stale_analysis_response_is_discarded() {
    let (mut app, _rx) = test_app();
    app.submit_sector("Energy");
    let stale = app.latest_token;
    app.submit_sector("Technology");

    app.handle_backend_event(BackendEvent::SectorReport {
        token: stale,
        report: sector_report(2),
    });
    assert!(matches!(app.results, ResultsState::Busy(_)));

    app.handle_backend_event(BackendEvent::SectorReport {
        token: app.latest_token,
        report: sector_report(4),
    });
    assert_eq!(app.results.article_count(), 4);
}

#[test]
fn stale_failure_is_discarded() {
    let (mut app, _rx) = test_app();
    app.submit_sector("Energy");
    let stale = app.latest_token;
    app.submit_sector("Technology");

    app.handle_backend_event(BackendEvent::AnalysisFailed {
        token: stale,
        message: "No articles found".to_string(),
    });
    assert!(matches!(app.results, ResultsState::Busy(_)));
}

#[test]
fn analysis_failure_replaces_report_and_hides_sentiment() {
    let (mut app, _rx) = test_app();
    deliver_report(&mut app, 3);
    app.submit_sector("Energy");
    app.handle_backend_event(BackendEvent::AnalysisFailed {
        token: app.latest_token,
        message: "No articles found".to_string(),
    });
    assert!(matches!(&app.results, ResultsState::Error(m) if m == "No articles found"));
    assert_eq!(app.results.overall_sentiment(), None);
}

// ── Sector info popup ───────────────────────────────────────────

#[test]
fn info_request_replaces_live_popup_and_drops_old_response() {
    let (mut app, mut rx) = test_app();
    app.show_sector_info("Energy");
    let old_seq = app.popup.as_ref().unwrap().seq;
    app.show_sector_info("Technology");

    // the old response arrives late
    app.handle_backend_event(BackendEvent::SectorInfoLoaded {
        sector: "Energy".to_string(),
        seq: old_seq,
        info: SectorInfo {
            description: "old".to_string(),
            tickers: vec![],
        },
    });
    let popup = app.popup.as_ref().unwrap();
    assert_eq!(popup.sector, "Technology");
    assert!(popup.info.is_none());

    // both fetches were issued
    assert!(matches!(
        rx.try_recv(),
        Ok(BackendCommand::FetchSectorInfo { .. })
    ));
    assert!(matches!(
        rx.try_recv(),
        Ok(BackendCommand::FetchSectorInfo { .. })
    ));
}

#[test]
fn info_failure_dismisses_matching_popup() {
    let (mut app, _rx) = test_app();
    app.show_sector_info("Energy");
    let seq = app.popup.as_ref().unwrap().seq;
    app.handle_backend_event(BackendEvent::SectorInfoFailed {
        seq,
        message: "boom".to_string(),
    });
    assert!(app.popup.is_none());
}

#[test]
fn popup_intercepts_input_until_dismissed() {
    let (mut app, _rx) = test_app();
    app.catalog = CatalogState::Loaded(vec!["Energy".to_string()]);
    app.show_sector_info("Energy");
    app.update(Action::MoveDown);
    assert_eq!(app.sector_cursor, 0);
    app.update(Action::NavigateBack);
    assert!(app.popup.is_none());
}

// ── Catalog ─────────────────────────────────────────────────────

#[test]
fn sectors_failure_surfaces_catalog_error() {
    let (mut app, _rx) = test_app();
    app.handle_backend_event(BackendEvent::SectorsFailed("connect refused".to_string()));
    assert!(matches!(app.catalog, CatalogState::Failed(_)));
    assert!(matches!(&app.results, ResultsState::Error(m) if m == "Error loading sectors."));
    // the user stays on the catalog screen
    assert_eq!(app.screen, Screen::Sectors);
}

#[test]
fn sectors_loaded_clamps_cursor() {
    let (mut app, _rx) = test_app();
    app.sector_cursor = 10;
    app.handle_backend_event(BackendEvent::SectorsLoaded(vec!["Energy".to_string()]));
    // one sector plus the manual-paste sentinel
    assert_eq!(app.catalog.len(), 2);
    assert_eq!(app.sector_cursor, 1);
}

// ── Quit flow ───────────────────────────────────────────────────

#[test]
fn quit_requires_confirmation() {
    let (mut app, _rx) = test_app();
    assert!(!app.update(Action::Quit));
    assert!(app.confirm_quit);
    assert!(!app.update(Action::NavigateBack));
    assert!(!app.confirm_quit);
    app.update(Action::Quit);
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn article_report_presents_single_result() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::ArticleInput;
    app.input_mode = InputMode::TextInput;
    app.article_buffer = "Some pasted text".to_string();
    app.update(Action::InputSubmit);

    app.handle_backend_event(BackendEvent::ArticleReport {
        token: app.latest_token,
        analysis: ArticleAnalysis {
            overall_sentiment: "Negative".to_string(),
            analysis: AnalysisDetail::default(),
        },
    });
    assert_eq!(app.screen, Screen::Results);
    assert_eq!(app.results.overall_sentiment(), Some("Negative"));
    assert_eq!(app.input_mode, InputMode::Normal);
}
