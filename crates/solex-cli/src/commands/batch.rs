use solex_core::error::SolexError;
use solex_core::extraction::pdftotext::PdftotextExtractor;
use solex_core::model::{labels, ReportRecord};
use std::path::PathBuf;
use uuid::Uuid;

use crate::output;

pub fn run(
    input_files: Vec<PathBuf>,
    out: Option<PathBuf>,
    out_dir: PathBuf,
) -> Result<(), SolexError> {
    // Reject the whole batch up front if any input is not a PDF.
    for path in &input_files {
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            return Err(SolexError::InvalidInput(format!(
                "{} is not a PDF file",
                path.display()
            )));
        }
    }

    let extractor = PdftotextExtractor::new();
    let mut records: Vec<ReportRecord> = Vec::new();
    let mut failed = 0usize;

    for path in &input_files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        // Each row leads with the filename; a document whose text could
        // not be obtained gets an error row instead of field values.
        let mut row = ReportRecord::new();
        row.insert(labels::FILE_NAME, file_name.as_str());

        let extracted = std::fs::read(path)
            .map_err(SolexError::from)
            .and_then(|bytes| solex_core::extract_pdf(&bytes, &extractor));

        match extracted {
            Ok(record) => {
                for (label, value) in record.iter() {
                    row.insert(label, value);
                }
            }
            Err(e) => {
                log::warn!("{file_name}: {e}");
                failed += 1;
                row.insert(labels::ERROR, e.to_string());
            }
        }

        records.push(row);
    }

    let artifact = match out {
        Some(path) => path,
        None => out_dir.join(format!("{}.csv", Uuid::new_v4())),
    };
    output::csv::write_batch(&records, &artifact)?;

    eprintln!(
        "Extracted {} of {} report(s), artifact written to {}",
        records.len() - failed,
        records.len(),
        artifact.display()
    );

    Ok(())
}
