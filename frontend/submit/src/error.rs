use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid prediction url {url}: {reason}")]
    Url { url: String, reason: String },
}

/// Everything that can go wrong between sending the form and having a
/// prediction to render. All variants end in the same failure view.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prediction service error: {0}")]
    Application(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
