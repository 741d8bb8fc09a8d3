pub(crate) mod capture;
pub(crate) mod equipment;
pub(crate) mod percentiles;
pub(crate) mod weather;

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{labels, ReportRecord, MISSING_PART, NOT_DETECTED};
use capture::{pattern, PatternChain};

// Power ratings appear under different labels depending on which tool
// produced the report, so both fields carry an ordered fallback chain.
static DC_POWER_CHAIN: LazyLock<PatternChain> = LazyLock::new(|| {
    PatternChain::new(vec![
        (pattern(r"System power\s*:\s*([\d\.]+)\s*kWp"), 1),
        (pattern(r"Pnom total\s*([\d\.]+)\s*kWp"), 1),
    ])
});

static AC_POWER_CHAIN: LazyLock<PatternChain> = LazyLock::new(|| {
    PatternChain::new(vec![
        (pattern(r"Grid power limit\s*([\d\.]+)\s*kWac"), 1),
        (pattern(r"Total power\s*([\d\.]+)\s*kVA"), 1),
    ])
});

static PERFORMANCE_RATIO_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"Perf\. Ratio PR\s*([\d\.,]+)\s*%"));

// Prefer the transformer datasheet block; a bare "Nominal power" anywhere
// in the document is the fallback.
static TRANSFORMER_CHAIN: LazyLock<PatternChain> = LazyLock::new(|| {
    PatternChain::new(vec![
        (
            pattern(r"Transformer from Datasheets.*?Nominal power\s*([\d\.]+)\s*kVA"),
            1,
        ),
        (pattern(r"Nominal power\s*([\d\.]+)\s*kVA"), 1),
    ])
});

/// Build the ordered label→value record for one document's text.
///
/// Pure and stateless: no field's absence aborts the record, and the
/// record carries no state across documents.
pub fn build_record(text: &str) -> ReportRecord {
    let mut record = ReportRecord::new();

    record.insert(
        labels::DC_POWER,
        DC_POWER_CHAIN
            .first_capture(text)
            .unwrap_or_else(|| NOT_DETECTED.to_string()),
    );
    record.insert(
        labels::AC_POWER,
        AC_POWER_CHAIN
            .first_capture(text)
            .unwrap_or_else(|| NOT_DETECTED.to_string()),
    );

    percentiles::extract_yield_fields(text, &mut record);

    record.insert(
        labels::PERFORMANCE_RATIO,
        capture::capture(text, &PERFORMANCE_RATIO_RE, 1)
            .unwrap_or_else(|| NOT_DETECTED.to_string()),
    );

    // Section-fatal failures are contained here: the four section fields
    // render "Error" and the rest of the record is unaffected.
    let section = equipment::section_fields(text).unwrap_or_else(|e| {
        log::warn!("equipment section extraction failed: {e}");
        equipment::SectionFields::error()
    });
    let unit_power = or_missing(equipment::unit_power(text));
    let module_count = or_missing(equipment::module_count(text));
    let inverter_count = or_missing(equipment::inverter_count(text));

    record.insert(
        labels::PV_MODULES,
        format!(
            "{} {} ({} Wp) - {} unidades",
            section.module_manufacturer, section.module_model, unit_power, module_count
        ),
    );
    record.insert(
        labels::INVERTERS,
        format!(
            "{} {} - {} unidades",
            section.inverter_manufacturer, section.inverter_model, inverter_count
        ),
    );

    record.insert(labels::WEATHER_DATA, weather::weather_field(text));

    record.insert(
        labels::TRANSFORMER_CAPACITY,
        TRANSFORMER_CHAIN
            .first_capture(text)
            .unwrap_or_else(|| NOT_DETECTED.to_string()),
    );

    record
}

// Composite equipment strings render absent sub-parts literally so a
// partially-described machine still exports as one cell.
fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING_PART.to_string())
}
