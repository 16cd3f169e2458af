use tokio::sync::mpsc;

use sentiscope_core::ApiClient;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Backend worker: receives commands from the TUI and performs the HTTP
/// calls, reporting outcomes on the event channel.
///
/// Each request runs in its own task so a long-running analysis never
/// blocks a sector-info fetch. There is no cancellation: requests run to
/// completion and the app drops stale completions by token.
pub async fn run(
    client: ApiClient,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    tx: mpsc::UnboundedSender<BackendEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            handle_command(&client, cmd, &tx).await;
        });
    }
}

async fn handle_command(
    client: &ApiClient,
    cmd: BackendCommand,
    tx: &mpsc::UnboundedSender<BackendEvent>,
) {
    match cmd {
        BackendCommand::LoadSectors => {
            let event = match client.get_sectors().await {
                Ok(sectors) => {
                    tracing::info!(count = sectors.len(), "sector catalog loaded");
                    BackendEvent::SectorsLoaded(sectors)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sector catalog load failed");
                    BackendEvent::SectorsFailed(e.user_message())
                }
            };
            let _ = tx.send(event);
        }
        BackendCommand::FetchSectorInfo { sector, seq } => {
            let event = match client.sector_info(&sector).await {
                Ok(info) => BackendEvent::SectorInfoLoaded { sector, seq, info },
                Err(e) => {
                    tracing::warn!(%sector, error = %e, "sector info fetch failed");
                    BackendEvent::SectorInfoFailed {
                        seq,
                        message: e.user_message(),
                    }
                }
            };
            let _ = tx.send(event);
        }
        BackendCommand::AnalyzeSector { sector, token } => {
            let event = match client.analyze_sector(&sector).await {
                Ok(report) => {
                    tracing::info!(%sector, articles = report.articles.len(), "sector analysis done");
                    BackendEvent::SectorReport { token, report }
                }
                Err(e) => {
                    tracing::warn!(%sector, error = %e, "sector analysis failed");
                    BackendEvent::AnalysisFailed {
                        token,
                        message: e.user_message(),
                    }
                }
            };
            let _ = tx.send(event);
        }
        BackendCommand::AnalyzeArticle { text, token } => {
            let event = match client.analyze_article(&text).await {
                Ok(analysis) => BackendEvent::ArticleReport { token, analysis },
                Err(e) => {
                    tracing::warn!(error = %e, "article analysis failed");
                    BackendEvent::AnalysisFailed {
                        token,
                        message: e.user_message(),
                    }
                }
            };
            let _ = tx.send(event);
        }
    }
}
