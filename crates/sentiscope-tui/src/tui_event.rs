use sentiscope_core::{ArticleAnalysis, SectorInfo, SectorReport};

/// Commands sent from the TUI to the backend worker.
#[derive(Debug, Clone)]
pub enum BackendCommand {
    /// Fetch the sector catalog. Issued once at startup.
    LoadSectors,
    /// Fetch sector metadata for the info popup. `seq` identifies the
    /// request so a superseded popup's response can be dropped.
    FetchSectorInfo { sector: String, seq: u64 },
    /// Run the multi-article sector analysis.
    AnalyzeSector { sector: String, token: u64 },
    /// Run the single pasted-article analysis.
    AnalyzeArticle { text: String, token: u64 },
}

/// Events flowing from the backend worker back to the TUI.
///
/// Analysis events carry the token of the submission that caused them;
/// the app discards any event whose token is not the latest issued one.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    SectorsLoaded(Vec<String>),
    SectorsFailed(String),
    SectorInfoLoaded {
        sector: String,
        seq: u64,
        info: SectorInfo,
    },
    SectorInfoFailed {
        seq: u64,
        message: String,
    },
    SectorReport {
        token: u64,
        report: SectorReport,
    },
    ArticleReport {
        token: u64,
        analysis: ArticleAnalysis,
    },
    AnalysisFailed {
        token: u64,
        message: String,
    },
}
