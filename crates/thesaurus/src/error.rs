use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThesaurusError>;

#[derive(Error, Debug)]
pub enum ThesaurusError {
    #[error("Data integrity error: {0}")]
    DataIntegrity(#[from] IntegrityViolation),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Cycle detected: walked {steps} steps up from {code} without reaching the root")]
    CycleDetected { code: String, steps: usize },

    #[error("Source error: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Reason a record collection was rejected while building the index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    #[error("record {code} references unknown parent {parent_code}")]
    DanglingParent { code: String, parent_code: String },

    #[error("code {0} appears more than once")]
    DuplicateCode(String),

    #[error("no record is named {0:?}")]
    MissingRoot(String),

    #[error("record {0} has no parent but is not the root")]
    Orphan(String),

    #[error("record named {0:?} has an empty code")]
    EmptyCode(String),
}
