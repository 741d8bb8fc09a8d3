use solex_core::error::SolexError;
use solex_core::model::ReportRecord;

pub fn print(record: &ReportRecord) -> Result<(), SolexError> {
    let json = serde_json::to_string_pretty(record)?;
    println!("{json}");
    Ok(())
}
