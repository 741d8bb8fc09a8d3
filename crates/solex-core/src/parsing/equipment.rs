use regex::Regex;
use std::sync::LazyLock;

use super::capture;
use crate::error::SolexError;
use crate::model::{SECTION_ERROR, UNKNOWN};

/// Byte length of the text window inspected after the section anchor.
///
/// Heuristic carried from the source report family: long enough to cover
/// both equipment columns, short enough to stop before later sections
/// repeat the same labels. Unvalidated against layout variance; tune
/// against a corpus before trusting it.
pub(crate) const SECTION_WINDOW_LEN: usize = 1000;

// Section heading as printed by the report family. Case-sensitive on
// purpose: lowercase "pv module" occurrences elsewhere are prose, not the
// characteristics table.
static SECTION_ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PV Array Characteristics\s+PV module").expect("invalid section anchor pattern")
});

// The characteristics table lists the PV module column first, then the
// inverter column, so the first label occurrence belongs to the module
// and the second to the inverter. Captured values stay within their
// line; the gap between the two labels may span a line break.
static MANUFACTURER_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Manufacturer\s+(?P<module>.+?)\s+Manufacturer\s+(?P<inverter>.+)")
        .expect("invalid manufacturer pair pattern")
});

static MODEL_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Model\s+(?P<module>.+?)\s+Model\s+(?P<inverter>.+)")
        .expect("invalid model pair pattern")
});

static MANUFACTURER_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Manufacturer").expect("invalid label pattern"));

static MODEL_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Model").expect("invalid label pattern"));

// Unit power and counts use single-occurrence labels, so they are matched
// over the whole document rather than the window.
static UNIT_POWER_RE: LazyLock<Regex> =
    LazyLock::new(|| capture::pattern(r"Unit Nom\. Power\s*(\d+)Wp"));

static MODULE_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| capture::pattern(r"Nb\. of modules\s*(\d+)\s*units"));

static INVERTER_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| capture::pattern(r"Nb\. of units\s*(\d+)\s*units"));

/// The four fields scoped to the equipment characteristics section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionFields {
    pub module_manufacturer: String,
    pub inverter_manufacturer: String,
    pub module_model: String,
    pub inverter_model: String,
}

impl SectionFields {
    fn all(value: &str) -> Self {
        SectionFields {
            module_manufacturer: value.to_string(),
            inverter_manufacturer: value.to_string(),
            module_model: value.to_string(),
            inverter_model: value.to_string(),
        }
    }

    fn unknown() -> Self {
        Self::all(UNKNOWN)
    }

    pub(crate) fn error() -> Self {
        Self::all(SECTION_ERROR)
    }
}

/// Extract the section-scoped manufacturer/model fields.
///
/// An absent anchor is a degraded success: all four fields come back
/// `"Unknown"`. `Err` is reserved for section-fatal conditions (ambiguous
/// label layout, out-of-range window); the caller contains those by
/// rendering all four fields as `"Error"` without failing the record.
pub(crate) fn section_fields(text: &str) -> Result<SectionFields, SolexError> {
    let Some(anchor) = SECTION_ANCHOR_RE.find(text) else {
        return Ok(SectionFields::unknown());
    };

    let window = bounded_window(text, anchor.start(), SECTION_WINDOW_LEN)?;

    let (module_manufacturer, inverter_manufacturer) =
        labeled_pair(window, &MANUFACTURER_PAIR_RE, &MANUFACTURER_LABEL_RE, "Manufacturer")?;
    let (module_model, inverter_model) =
        labeled_pair(window, &MODEL_PAIR_RE, &MODEL_LABEL_RE, "Model")?;

    Ok(SectionFields {
        module_manufacturer,
        inverter_manufacturer,
        module_model,
        inverter_model,
    })
}

pub(crate) fn unit_power(text: &str) -> Option<String> {
    capture::capture(text, &UNIT_POWER_RE, 1)
}

pub(crate) fn module_count(text: &str) -> Option<String> {
    capture::capture(text, &MODULE_COUNT_RE, 1)
}

pub(crate) fn inverter_count(text: &str) -> Option<String> {
    capture::capture(text, &INVERTER_COUNT_RE, 1)
}

/// Fixed-length byte slice starting at `offset`, clamped to the end of
/// the text and backed off to a UTF-8 char boundary.
fn bounded_window(text: &str, offset: usize, len: usize) -> Result<&str, SolexError> {
    if offset > text.len() {
        return Err(SolexError::WindowOutOfRange {
            offset,
            len: text.len(),
        });
    }
    let mut end = usize::min(offset.saturating_add(len), text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    Ok(&text[offset..end])
}

/// Positionally pair two occurrences of the same label inside the window.
///
/// The pairing assumes document order (module column first, inverter
/// second), so it is only performed when the label occurs exactly twice.
/// Fewer occurrences degrade to `"Unknown"`; more make the positional
/// assumption unsafe and are reported as a section-fatal error.
fn labeled_pair(
    window: &str,
    pair_re: &Regex,
    label_re: &Regex,
    label: &'static str,
) -> Result<(String, String), SolexError> {
    let count = label_re.find_iter(window).count();
    match count {
        2 => Ok(pair_re
            .captures(window)
            .map(|caps| {
                (
                    caps["module"].trim().to_string(),
                    caps["inverter"].trim().to_string(),
                )
            })
            .unwrap_or_else(|| (UNKNOWN.to_string(), UNKNOWN.to_string()))),
        0 | 1 => Ok((UNKNOWN.to_string(), UNKNOWN.to_string())),
        _ => Err(SolexError::AmbiguousSection { label, count }),
    }
}
