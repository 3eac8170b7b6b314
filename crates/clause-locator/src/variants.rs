//! Search-variant chain for noisy clause references
//!
//! Classifier output references a clause as `"13.7"`, `"Article 3"`, or
//! `"13.7: Gardiennage"`, with punctuation that rarely matches the rendered
//! document byte-for-byte. Each transform below produces one candidate for
//! the literal-search primitive; candidates are tried in the order listed
//! and duplicates are dropped.

use lazy_static::lazy_static;
use regex::Regex;

/// Longest excerpt the search primitive can match within one line.
pub const MAX_EXCERPT_LEN: usize = 100;

/// Minimum length for a bare-title variant.
const MIN_TITLE_LEN: usize = 4;

lazy_static! {
    /// Colon with any adjacent whitespace
    static ref COLON_WS: Regex = Regex::new(r"\s*:\s*").unwrap();

    /// Leading clause number, an optional separator, then the title
    static ref NUMBER_TITLE: Regex =
        Regex::new(r"^\s*\d+(?:\.\d+)*\.?\s*[:\-\u{2013}]?\s*(.*)$").unwrap();

    /// Leading numeric/dotted prefix of at least two characters
    static ref NUMERIC_PREFIX: Regex = Regex::new(r"^\s*(\d[\d.]+)").unwrap();
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    let candidate = candidate.trim().to_string();
    if !candidate.is_empty() && !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

/// Ordered search candidates for a clause reference.
///
/// Priority: the reference verbatim, the colon dropped
/// (`"13.7 Gardiennage"`), the spaced-colon convention re-inserted
/// (`"13.7 : Gardiennage"`), the bare title, the bare numeric prefix.
pub fn build_variants(text: &str) -> Vec<String> {
    let mut variants = Vec::new();

    push_unique(&mut variants, text.to_string());
    push_unique(&mut variants, COLON_WS.replace_all(text, " ").into_owned());
    push_unique(&mut variants, COLON_WS.replace_all(text, " : ").into_owned());

    if let Some(caps) = NUMBER_TITLE.captures(text) {
        let title = caps[1].trim();
        if title.chars().count() >= MIN_TITLE_LEN {
            push_unique(&mut variants, title.to_string());
        }
    }

    if let Some(caps) = NUMERIC_PREFIX.captures(text) {
        push_unique(&mut variants, caps[1].to_string());
    }

    variants
}

/// First line of a risk excerpt, truncated to [`MAX_EXCERPT_LEN`]
/// characters. The search primitive matches within a single line, so a
/// longer multi-line excerpt never matches.
pub fn first_line_excerpt(text: &str) -> String {
    let line = text.lines().next().unwrap_or("").trim();
    line.chars().take(MAX_EXCERPT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_reference_variant_chain() {
        assert_eq!(
            build_variants("13.7: Gardiennage"),
            vec![
                "13.7: Gardiennage",
                "13.7 Gardiennage",
                "13.7 : Gardiennage",
                "Gardiennage",
                "13.7",
            ]
        );
    }

    #[test]
    fn test_bare_number_yields_single_variant() {
        assert_eq!(build_variants("13.7"), vec!["13.7"]);
    }

    #[test]
    fn test_textual_reference_without_number() {
        assert_eq!(build_variants("Article 3"), vec!["Article 3"]);
    }

    #[test]
    fn test_short_title_is_skipped() {
        // "Pay" is under the 4-character floor; the numeric prefix survives
        assert_eq!(
            build_variants("1.2: Pay"),
            vec!["1.2: Pay", "1.2 Pay", "1.2 : Pay", "1.2"]
        );
    }

    #[test]
    fn test_spaced_colon_input_deduplicates() {
        assert_eq!(
            build_variants("13.7 : Gardiennage"),
            vec!["13.7 : Gardiennage", "13.7 Gardiennage", "Gardiennage", "13.7"]
        );
    }

    #[test]
    fn test_number_and_title_without_colon() {
        assert_eq!(
            build_variants("13.7 Gardiennage"),
            vec!["13.7 Gardiennage", "Gardiennage", "13.7"]
        );
    }

    #[test]
    fn test_single_digit_prefix_not_extracted() {
        // A one-character prefix is below the two-character floor
        assert_eq!(
            build_variants("3: Insurance"),
            vec!["3: Insurance", "3 Insurance", "3 : Insurance", "Insurance"]
        );
    }

    #[test]
    fn test_empty_input_yields_no_variants() {
        assert!(build_variants("").is_empty());
        assert!(build_variants("   ").is_empty());
    }

    #[test]
    fn test_first_line_excerpt_takes_first_line() {
        let excerpt = "payment within ninety (90) days\nof invoice receipt";
        assert_eq!(first_line_excerpt(excerpt), "payment within ninety (90) days");
    }

    #[test]
    fn test_first_line_excerpt_truncates_to_limit() {
        let long = "x".repeat(250);
        assert_eq!(first_line_excerpt(&long).chars().count(), MAX_EXCERPT_LEN);
    }

    #[test]
    fn test_first_line_excerpt_of_empty_text() {
        assert_eq!(first_line_excerpt(""), "");
        assert_eq!(first_line_excerpt("\n\n"), "");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the chain never contains duplicates
            #[test]
            fn variants_are_unique(text in "\\PC{0,60}") {
                let variants = build_variants(&text);
                for (i, a) in variants.iter().enumerate() {
                    for b in &variants[i + 1..] {
                        prop_assert_ne!(a, b);
                    }
                }
            }

            /// Property: a non-blank reference is always tried verbatim first
            #[test]
            fn verbatim_reference_comes_first(text in "\\PC{0,60}") {
                prop_assume!(!text.trim().is_empty());
                let variants = build_variants(&text);
                prop_assert_eq!(variants[0].as_str(), text.trim());
            }

            /// Property: excerpts never exceed the single-line search limit
            #[test]
            fn excerpt_fits_one_line_and_limit(text in "\\PC{0,300}") {
                let excerpt = first_line_excerpt(&text);
                prop_assert!(excerpt.chars().count() <= MAX_EXCERPT_LEN);
                prop_assert!(!excerpt.contains('\n'));
            }
        }
    }
}
