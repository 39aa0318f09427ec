use thiserror::Error;

#[derive(Error, Debug)]
pub enum VegagenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("generation error: {0}")]
    Generation(String),

    #[error("chart spec extraction failed: {reason}")]
    SpecParse { reason: String, raw: String },

    #[error("tracing initialization failed: {0}")]
    Tracing(String),
}

pub type Result<T> = std::result::Result<T, VegagenError>;
