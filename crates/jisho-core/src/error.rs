/// Record that breaks the orthography invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Record has no orthographies")]
    NoOrthographies,

    #[error("Orthography {index} has neither a script nor a kana form")]
    EmptyOrthography { index: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Lookup API returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
