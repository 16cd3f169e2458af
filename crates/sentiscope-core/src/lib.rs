pub mod client;
pub mod error;
pub mod pagination;
pub mod types;

// Re-export for convenience
pub use client::ApiClient;
pub use error::ApiError;
pub use pagination::{Pagination, PAGE_SIZE};
pub use types::{
    AnalysisDetail, ArticleAnalysis, ArticleResult, SectorInfo, SectorReport, MANUAL_ENTRY,
};
