use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Source Read Error: {0}")]
    SourceRead(#[source] std::io::Error),

    #[error("Sink Write Error: {0}")]
    SinkWrite(#[source] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Keyword: {0}")]
    InvalidKeyword(String),

    #[error("Invalid Key Length: {0}")]
    InvalidKeyLength(usize),

    #[error("Invariant Violation: {0}")]
    InvariantViolation(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type CfResult<T> = Result<T, CipherError>;
