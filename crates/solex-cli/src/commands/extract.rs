use solex_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), solex_core::error::SolexError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let record = solex_core::extract_pdf(&pdf_bytes, &extractor)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&record)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} field(s), written to {}",
                record.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&record)?,
            _ => println!("{}", output::table::format_record(&record)),
        },
    }

    Ok(())
}
