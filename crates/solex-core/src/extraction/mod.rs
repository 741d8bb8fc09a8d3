pub mod pdftotext;

use crate::error::SolexError;

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract plain text from PDF bytes, one string per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, SolexError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
