#[derive(Debug, thiserror::Error)]
pub enum KobisError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("KOBIS API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// The registry reported a fault inside a well-formed (often 200) body.
    #[error("KOBIS fault {code}: {message}")]
    Fault { code: String, message: String },

    #[error("Failed to parse KOBIS response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
