use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a backend error from a non-2xx response body.
    ///
    /// The backend reports failures as `{"error": "..."}`; anything else
    /// (empty body, HTML error page) falls back to the bare status code.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Backend { status, message }
    }

    /// The one-line message shown in the results area.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "An error occurred during analysis.".to_string(),
            ApiError::Backend { message, .. } => message.clone(),
            ApiError::Decode(_) => "An error occurred during analysis.".to_string(),
        }
    }
}
