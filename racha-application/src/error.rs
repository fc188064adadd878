#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("line {line}: {detail}")]
    Syntax { line: usize, detail: String },
    #[error("malformed expense data: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("no person or amount could be identified")]
    NothingExtracted,
}

#[derive(Debug, thiserror::Error)]
pub enum RosterStoreError {
    #[error("roster storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster data is malformed: {0}")]
    Malformed(String),
}
