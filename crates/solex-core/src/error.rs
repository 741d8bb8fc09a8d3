#[derive(Debug, thiserror::Error)]
pub enum SolexError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("equipment section is ambiguous: {count} '{label}' labels in window, expected 2")]
    AmbiguousSection { label: &'static str, count: usize },

    #[error("section window offset {offset} is past the end of the text ({len} bytes)")]
    WindowOutOfRange { offset: usize, len: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
