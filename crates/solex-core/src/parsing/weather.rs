use regex::Regex;
use std::sync::LazyLock;

use crate::model::NOT_DETECTED;

// The dataset name and its provider are printed on the line(s) following
// the label. The elastic `\s*` lets the match skip blank lines between
// the label and the first value line.
static WEATHER_TWO_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Weather data\s*:?\s*\n([^\n]+)\n([^\n]+)").expect("invalid weather pattern")
});

static WEATHER_ONE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Weather data\s*:?\s*\n([^\n]+)").expect("invalid weather pattern")
});

/// Extract the weather-dataset field with graceful degradation: dataset
/// plus provider when two lines follow the label, the single line when
/// only one does, and the sentinel when the label is absent entirely.
pub(crate) fn weather_field(text: &str) -> String {
    if let Some(caps) = WEATHER_TWO_LINE_RE.captures(text) {
        let dataset = caps[1].trim();
        let provider = caps[2].trim();
        return format!("{dataset} {provider}");
    }

    if let Some(caps) = WEATHER_ONE_LINE_RE.captures(text) {
        return caps[1].trim().to_string();
    }

    NOT_DETECTED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_lines_compose_dataset_and_provider() {
        let text = "Weather data\nMeteonorm 8.1\nStation Madrid-Barajas";
        assert_eq!(weather_field(text), "Meteonorm 8.1 Station Madrid-Barajas");
    }

    #[test]
    fn test_single_line_fallback() {
        let text = "Weather data\nMeteonorm 8.1";
        assert_eq!(weather_field(text), "Meteonorm 8.1");
    }

    #[test]
    fn test_absent_label_is_sentinel() {
        assert_eq!(weather_field("no weather section here"), NOT_DETECTED);
    }

    #[test]
    fn test_optional_colon_after_label() {
        let text = "Weather data:\nPVGIS-SARAH2\nJRC";
        assert_eq!(weather_field(text), "PVGIS-SARAH2 JRC");
    }

    #[test]
    fn test_label_is_case_insensitive() {
        let text = "WEATHER DATA\nMeteonorm 8.1\nStation";
        assert_eq!(weather_field(text), "Meteonorm 8.1 Station");
    }

    #[test]
    fn test_blank_line_after_label_is_skipped() {
        let text = "Weather data\n\nMeteonorm 8.1\nStation";
        assert_eq!(weather_field(text), "Meteonorm 8.1 Station");
    }

    #[test]
    fn test_values_are_trimmed() {
        let text = "Weather data\n   Meteonorm 8.1   \n   Station   ";
        assert_eq!(weather_field(text), "Meteonorm 8.1 Station");
    }
}
