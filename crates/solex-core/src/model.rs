use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Placeholder written when a field's pattern chain matched nothing.
pub const NOT_DETECTED: &str = "No detectado";

/// Placeholder for equipment fields when the section anchor or a label
/// pair is absent from the document.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for equipment fields when section extraction failed hard
/// (contained at the section boundary, see `parsing::equipment`).
pub const SECTION_ERROR: &str = "Error";

/// Rendered in place of a missing sub-part inside a composite equipment
/// string (e.g. "Unknown Unknown (None Wp) - None unidades").
pub const MISSING_PART: &str = "None";

/// Column labels of the report family's export schema.
pub mod labels {
    use super::Percentile;

    pub const FILE_NAME: &str = "Nombre del Archivo";
    pub const ERROR: &str = "Error";
    pub const DC_POWER: &str = "Potencia DC [kWp]";
    pub const AC_POWER: &str = "Potencia AC [kWn]";
    pub const PERFORMANCE_RATIO: &str = "Performance Ratio (PR) [%]";
    pub const PV_MODULES: &str = "Módulos Fotovoltaicos";
    pub const INVERTERS: &str = "Inversores";
    pub const WEATHER_DATA: &str = "Base de datos meteorológicos";
    pub const TRANSFORMER_CAPACITY: &str = "Capacidad del Transformador [kW]";

    pub fn specific_production(p: Percentile) -> String {
        format!("Producción específica {p} [kWh/kWp/año]")
    }

    pub fn net_energy(p: Percentile) -> String {
        format!("Generación neta esperada {p} [MWh/año]")
    }
}

/// An exceedance percentile parsed from a `P<digits>` token.
///
/// Ordered by the numeric suffix, so `P50 < P90` regardless of where the
/// tokens appeared in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentile(u32);

impl Percentile {
    pub fn new(value: u32) -> Self {
        Percentile(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse a token of the shape `P<digits>` (case-insensitive).
    pub fn from_token(token: &str) -> Option<Percentile> {
        let digits = token.strip_prefix('P').or_else(|| token.strip_prefix('p'))?;
        digits.parse().ok().map(Percentile)
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// One extracted document, as an ordered label→value mapping.
///
/// The field set is document-dependent (percentile fields only exist when
/// the document reports them), so this is an insertion-ordered list of
/// pairs rather than a fixed-shape struct. Insertion order becomes column
/// order in tabular export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRecord {
    fields: Vec<(String, String)>,
}

impl ReportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, keeping first-insertion position if the label
    /// already exists.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some((_, v)) => *v = value,
            None => self.fields.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ReportRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as a map in insertion order.
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_from_token() {
        assert_eq!(Percentile::from_token("P50"), Some(Percentile::new(50)));
        assert_eq!(Percentile::from_token("p90"), Some(Percentile::new(90)));
        assert_eq!(Percentile::from_token("Q50"), None);
        assert_eq!(Percentile::from_token("P"), None);
    }

    #[test]
    fn test_percentile_ordering_is_numeric() {
        assert!(Percentile::new(50) < Percentile::new(90));
        assert!(Percentile::new(9) < Percentile::new(10));
    }

    #[test]
    fn test_percentile_display() {
        assert_eq!(Percentile::new(75).to_string(), "P75");
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut rec = ReportRecord::new();
        rec.insert("b", "2");
        rec.insert("a", "1");
        let labels: Vec<&str> = rec.labels().collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn test_record_insert_overwrites_in_place() {
        let mut rec = ReportRecord::new();
        rec.insert("a", "1");
        rec.insert("b", "2");
        rec.insert("a", "3");
        assert_eq!(rec.get("a"), Some("3"));
        let labels: Vec<&str> = rec.labels().collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_record_serializes_as_ordered_map() {
        let mut rec = ReportRecord::new();
        rec.insert("Potencia DC [kWp]", "500");
        rec.insert("Potencia AC [kWn]", "450");
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"Potencia DC [kWp]":"500","Potencia AC [kWn]":"450"}"#
        );
    }

    #[test]
    fn test_yield_labels() {
        let p = Percentile::new(50);
        assert_eq!(
            labels::specific_production(p),
            "Producción específica P50 [kWh/kWp/año]"
        );
        assert_eq!(
            labels::net_energy(p),
            "Generación neta esperada P50 [MWh/año]"
        );
    }
}
