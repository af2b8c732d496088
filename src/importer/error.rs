// ==========================================
// Termék önköltség-számítás - import errors
// ==========================================

use thiserror::Error;

/// Cost-sheet import error taxonomy.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv is supported)")]
    UnsupportedFormat(String),

    #[error("CSV parse failure: {0}")]
    Csv(#[from] csv::Error),

    #[error("file read failure: {0}")]
    Io(#[from] std::io::Error),

    // ===== Sheet structure errors =====
    #[error("missing column `{0}` (accepted headers: {1})")]
    MissingColumn(&'static str, &'static str),

    #[error("cost sheet contains no product rows")]
    EmptySheet,

    // ===== Value errors =====
    #[error("invalid number `{value}` in column `{column}` at row {row}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

/// Result alias used across the import layer.
pub type ImportResult<T> = Result<T, ImportError>;
