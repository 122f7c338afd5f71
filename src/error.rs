use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypometerError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout '{0}' not found: not a builtin name and not a readable file")]
    LayoutNotFound(String),

    #[error("Layout Format Error: {0}")]
    LayoutFormat(String),

    #[error("Input Conflict: --text and --file are mutually exclusive")]
    InputConflict,
}

pub type TmResult<T> = Result<T, TypometerError>;
