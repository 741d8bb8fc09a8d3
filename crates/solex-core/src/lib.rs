pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use error::SolexError;
use extraction::PdfExtractor;
use model::ReportRecord;

/// Main API entry point: extract the parameter record from one PDF
/// design report.
///
/// Page texts are joined with a newline and handed to the pure text core.
/// Failure to obtain text at all (unreadable PDF, missing backend) is the
/// only way this returns an error; the record itself never fails on
/// missing fields.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ReportRecord, SolexError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let full_text = pages.join("\n");
    Ok(extract_text(&full_text))
}

/// Extract the parameter record from already-obtained report text.
pub fn extract_text(text: &str) -> ReportRecord {
    parsing::build_record(text)
}
