use solex_core::model::ReportRecord;

/// Format a record as aligned "label  value" lines.
pub fn format_record(record: &ReportRecord) -> String {
    let width = record
        .labels()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    record
        .iter()
        .map(|(label, value)| {
            let pad = width - label.chars().count();
            format!("{label}{}  {value}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_align_on_widest() {
        let mut rec = ReportRecord::new();
        rec.insert("short", "1");
        rec.insert("a much longer label", "2");
        let out = format_record(&rec);
        let lines: Vec<&str> = out.lines().collect();
        // Both value columns start right after the widest label + 2 spaces.
        assert_eq!(lines[0].find('1'), Some(21));
        assert_eq!(lines[1], "a much longer label  2");
    }
}
