use solex_core::error::SolexError;
use solex_core::model::ReportRecord;
use std::path::Path;

/// Column order for a batch: the union of all record labels, in the order
/// each label is first seen. Percentile fields only some documents carry
/// still get a column; other rows leave it empty.
pub fn union_labels(records: &[ReportRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for label in record.labels() {
            if !columns.iter().any(|c| c == label) {
                columns.push(label.to_string());
            }
        }
    }
    columns
}

fn row_for<'a>(record: &'a ReportRecord, columns: &'a [String]) -> Vec<&'a str> {
    columns
        .iter()
        .map(|c| record.get(c).unwrap_or(""))
        .collect()
}

/// Write one CSV row per record under the unioned header.
pub fn write_batch(records: &[ReportRecord], path: &Path) -> Result<(), SolexError> {
    let columns = union_labels(records);

    let mut writer =
        csv::Writer::from_path(path).map_err(|e| SolexError::Export(e.to_string()))?;
    writer
        .write_record(&columns)
        .map_err(|e| SolexError::Export(e.to_string()))?;
    for record in records {
        writer
            .write_record(row_for(record, &columns))
            .map_err(|e| SolexError::Export(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| SolexError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> ReportRecord {
        let mut rec = ReportRecord::new();
        for (label, value) in fields {
            rec.insert(*label, *value);
        }
        rec
    }

    #[test]
    fn test_union_keeps_first_seen_order() {
        let a = record(&[("Nombre del Archivo", "a.pdf"), ("Potencia DC [kWp]", "500")]);
        let b = record(&[
            ("Nombre del Archivo", "b.pdf"),
            ("Producción específica P50 [kWh/kWp/año]", "1500"),
            ("Potencia DC [kWp]", "300"),
        ]);
        let columns = union_labels(&[a, b]);
        assert_eq!(
            columns,
            vec![
                "Nombre del Archivo",
                "Potencia DC [kWp]",
                "Producción específica P50 [kWh/kWp/año]",
            ]
        );
    }

    #[test]
    fn test_sparse_rows_fill_missing_cells_empty() {
        let full = record(&[("Nombre del Archivo", "a.pdf"), ("Potencia DC [kWp]", "500")]);
        let error_row = record(&[
            ("Nombre del Archivo", "b.pdf"),
            ("Error", "PDF extraction failed: corrupt xref table"),
        ]);
        let columns = union_labels(&[full.clone(), error_row.clone()]);

        assert_eq!(row_for(&full, &columns), vec!["a.pdf", "500", ""]);
        assert_eq!(
            row_for(&error_row, &columns),
            vec!["b.pdf", "", "PDF extraction failed: corrupt xref table"]
        );
    }
}
