use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::capture;
use crate::model::{labels, Percentile, ReportRecord};

// The percentile set is not fixed per document: reports carry whichever
// exceedance levels the yield simulation was run with (P50/P75/P90/...).
// Both label families are scanned so a percentile reported under only one
// of them is still picked up.
static SPECIFIC_PRODUCTION_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Specific production \((P\d+)\)").expect("invalid percentile label pattern")
});

static PRODUCED_ENERGY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Produced Energy \((P\d+)\)").expect("invalid percentile label pattern")
});

/// Find every percentile referenced by either yield label, deduplicated
/// and sorted ascending by numeric value.
pub(crate) fn discover(text: &str) -> Vec<Percentile> {
    let mut found = BTreeSet::new();
    for re in [&*SPECIFIC_PRODUCTION_LABEL_RE, &*PRODUCED_ENERGY_LABEL_RE] {
        for caps in re.captures_iter(text) {
            if let Some(p) = Percentile::from_token(&caps[1]) {
                found.insert(p);
            }
        }
    }
    found.into_iter().collect()
}

/// Extract the per-percentile yield fields into the record.
///
/// Each sub-field (specific production, net energy) is attempted
/// independently and inserted only when found; a percentile with neither
/// value contributes no fields at all.
pub(crate) fn extract_yield_fields(text: &str, record: &mut ReportRecord) {
    for p in discover(text) {
        let specific_re =
            capture::pattern(&format!(r"Specific production \({p}\)\s*(\d+)\s*kWh/kWp/year"));
        if let Some(value) = capture::capture(text, &specific_re, 1) {
            record.insert(labels::specific_production(p), value);
        }

        let energy_re =
            capture::pattern(&format!(r"Produced Energy \({p}\)\s*([\d\.]+)\s*MWh/year"));
        if let Some(value) = capture::capture(text, &energy_re, 1) {
            record.insert(labels::net_energy(p), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_sorts_numerically_regardless_of_text_order() {
        let text = "Produced Energy (P90) 700 MWh/year\n\
                    Specific production (P50) 1500 kWh/kWp/year";
        let ps = discover(text);
        assert_eq!(ps, vec![Percentile::new(50), Percentile::new(90)]);
    }

    #[test]
    fn test_discover_deduplicates_across_label_families() {
        let text = "Specific production (P50) 1500 kWh/kWp/year\n\
                    Produced Energy (P50) 750.0 MWh/year";
        assert_eq!(discover(text), vec![Percentile::new(50)]);
    }

    #[test]
    fn test_discover_includes_one_sided_percentiles() {
        let text = "Specific production (P75) 1400 kWh/kWp/year\n\
                    Produced Energy (P50) 750.0 MWh/year";
        assert_eq!(discover(text), vec![Percentile::new(50), Percentile::new(75)]);
    }

    #[test]
    fn test_discover_is_case_insensitive() {
        let text = "SPECIFIC PRODUCTION (P50) 1500 kWh/kWp/year";
        assert_eq!(discover(text), vec![Percentile::new(50)]);
    }

    #[test]
    fn test_one_sided_percentile_yields_only_found_field() {
        let text = "Specific production (P75) 1400 kWh/kWp/year";
        let mut rec = ReportRecord::new();
        extract_yield_fields(text, &mut rec);
        assert_eq!(
            rec.get("Producción específica P75 [kWh/kWp/año]"),
            Some("1400")
        );
        assert_eq!(rec.get("Generación neta esperada P75 [MWh/año]"), None);
    }

    #[test]
    fn test_labeled_percentile_without_values_contributes_nothing() {
        // Label token present but no value following it in the expected
        // unit, e.g. a table-of-contents mention.
        let text = "Specific production (P90) see table 4";
        let mut rec = ReportRecord::new();
        extract_yield_fields(text, &mut rec);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_fields_interleave_per_percentile_ascending() {
        let text = "Produced Energy (P90) 700.0 MWh/year\n\
                    Specific production (P90) 1350 kWh/kWp/year\n\
                    Produced Energy (P50) 750.0 MWh/year\n\
                    Specific production (P50) 1500 kWh/kWp/year";
        let mut rec = ReportRecord::new();
        extract_yield_fields(text, &mut rec);
        let order: Vec<&str> = rec.labels().collect();
        assert_eq!(
            order,
            vec![
                "Producción específica P50 [kWh/kWp/año]",
                "Generación neta esperada P50 [MWh/año]",
                "Producción específica P90 [kWh/kWp/año]",
                "Generación neta esperada P90 [MWh/año]",
            ]
        );
    }
}
