use thiserror::Error;

/// Failures raised by the filtering stages
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize field `{field}` as text: {source}")]
    Serialize {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("number {literal} in field `{field}` does not fit in a float")]
    NonFiniteNumber { field: String, literal: String },

    #[error("element {index} of `{key}` is not a JSON object")]
    NotAnObject { key: String, index: u64 },

    #[error("input CSV has no `{0}` column")]
    MissingColumn(String),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("invalid denylist pattern: {0}")]
    Pattern(#[from] regex::Error),
}
