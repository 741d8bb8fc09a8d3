use regex::Regex;

/// Compile an extraction pattern with the flags every simple field lookup
/// uses: case-insensitive, and `.` spans newlines (values are sometimes
/// wrapped across lines in the extracted text).
///
/// A pattern that fails to compile is a programming error, not a
/// per-document condition, so this panics rather than returning a Result.
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(&format!("(?is){re}")).expect("invalid extraction pattern")
}

/// First capture group of the first match, or `None`.
///
/// This is the primitive under every field extraction: absence of a match
/// (or of the requested group) is an ordinary outcome, never an error.
pub(crate) fn capture(text: &str, re: &Regex, group: usize) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().to_string())
}

/// Ordered fallback list of (pattern, capture group) pairs for one logical
/// field. Patterns are tried in order; the first that matches wins and no
/// further patterns are evaluated.
pub(crate) struct PatternChain {
    patterns: Vec<(Regex, usize)>,
}

impl PatternChain {
    pub(crate) fn new(patterns: Vec<(Regex, usize)>) -> Self {
        PatternChain { patterns }
    }

    pub(crate) fn first_capture(&self, text: &str) -> Option<String> {
        self.patterns
            .iter()
            .find_map(|(re, group)| capture(text, re, *group))
    }
}
