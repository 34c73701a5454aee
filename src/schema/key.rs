// Schema key codec for the jsonshape schema system
//
// Schema documents smuggle per-field metadata inside the key text itself:
// a trailing '?' marks the field optional, and a key wrapped in '^...$'
// (whose leaf is a string) declares a regex constraint on the value. This
// module parses that encoding once into an explicit structure so the
// validator never re-derives substrings mid-walk.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches names that are safe to emit verbatim as declaration members.
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid"));

/// A schema key with its marker metadata parsed out.
///
/// The optional strip happens before the regex strip, so `^name?$` is not
/// recognized as a regex key while `^name$?` is both optional and
/// regex-marked. The combined form is unsupported and left to fall out of
/// this parse order; it is never special-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaKey {
    /// The key text exactly as it appears in the schema document.
    pub raw: String,
    /// The key with all markers stripped; this is the data field name.
    pub canonical: String,
    /// True when the raw key carried a trailing '?'.
    pub optional: bool,
    /// True when the marker-stripped key was wrapped in '^...$'.
    ///
    /// Syntactic only. The regex *role* additionally requires the schema
    /// leaf to be a string; the validator combines the two.
    pub has_regex: bool,
}

impl SchemaKey {
    /// Parses a raw schema key. Pure and total: any string parses.
    pub fn parse(raw: &str) -> Self {
        let mut text = raw;

        let optional = text.ends_with('?');
        if optional {
            text = &text[..text.len() - 1];
        }

        // Only the trailing '?' is ever stripped, so a '?' still inside
        // the wrapped text defeats regex detection entirely
        let has_regex = text.len() >= 2
            && text.starts_with('^')
            && text.ends_with('$')
            && !text.contains('?');
        let canonical = if has_regex {
            &text[1..text.len() - 1]
        } else {
            text
        };

        Self {
            raw: raw.to_string(),
            canonical: canonical.to_string(),
            optional,
            has_regex,
        }
    }

    /// Returns true when a data key addresses this schema key: an exact
    /// match on the raw text, or a match after stripping the trailing '?',
    /// or a match after stripping the '^...$' wrapper.
    pub fn matches(&self, data_key: &str) -> bool {
        data_key == self.raw
            || data_key == self.canonical
            || self.raw.strip_suffix('?') == Some(data_key)
    }
}

/// Renders a property name safe for use in a declaration.
///
/// Marker characters ('?', '$', '^') are removed; if what remains is not a
/// plain identifier it is returned as a quoted string literal instead.
pub fn sanitize_identifier(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| !matches!(c, '?' | '$' | '^')).collect();

    if IDENTIFIER.is_match(&cleaned) {
        cleaned
    } else {
        format!("\"{}\"", cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_has_no_markers() {
        let key = SchemaKey::parse("name");
        assert_eq!(key.canonical, "name");
        assert!(!key.optional);
        assert!(!key.has_regex);
    }

    #[test]
    fn trailing_question_mark_means_optional() {
        let key = SchemaKey::parse("age?");
        assert_eq!(key.canonical, "age");
        assert!(key.optional);
        assert!(!key.has_regex);
    }

    #[test]
    fn caret_dollar_wrapper_means_regex() {
        let key = SchemaKey::parse("^id$");
        assert_eq!(key.canonical, "id");
        assert!(!key.optional);
        assert!(key.has_regex);
    }

    #[test]
    fn question_mark_inside_wrapper_defeats_regex_detection() {
        // The key does not end with '?', so nothing is stripped, and a
        // wrapped text still carrying a '?' is never treated as a pattern
        let key = SchemaKey::parse("^name?$");
        assert!(!key.optional);
        assert!(!key.has_regex);
        assert_eq!(key.canonical, "^name?$");
    }

    #[test]
    fn inner_question_mark_defeats_regex_detection_even_when_optional() {
        let key = SchemaKey::parse("^na?me$?");
        assert!(key.optional);
        assert!(!key.has_regex);
        assert_eq!(key.canonical, "^na?me$");
    }

    #[test]
    fn suffix_after_wrapper_yields_both_markers() {
        let key = SchemaKey::parse("^id$?");
        assert!(key.optional);
        assert!(key.has_regex);
        assert_eq!(key.canonical, "id");
    }

    #[test]
    fn matches_accepts_raw_canonical_and_stripped_forms() {
        let key = SchemaKey::parse("age?");
        assert!(key.matches("age"));
        assert!(key.matches("age?"));
        assert!(!key.matches("name"));

        let rx = SchemaKey::parse("^id$");
        assert!(rx.matches("id"));
        assert!(rx.matches("^id$"));
    }

    #[test]
    fn sanitize_strips_markers_and_keeps_identifiers() {
        assert_eq!(sanitize_identifier("name"), "name");
        assert_eq!(sanitize_identifier("age?"), "age");
        assert_eq!(sanitize_identifier("^id$"), "id");
        assert_eq!(sanitize_identifier("_private"), "_private");
    }

    #[test]
    fn sanitize_quotes_non_identifiers() {
        assert_eq!(sanitize_identifier("first-name"), "\"first-name\"");
        assert_eq!(sanitize_identifier("1st"), "\"1st\"");
        assert_eq!(sanitize_identifier(""), "\"\"");
        assert_eq!(sanitize_identifier("with space"), "\"with space\"");
    }
}
