//! Dual-audience recommendation text extraction
//!
//! Upstream recommendations may embed two audience-tagged segments in a
//! single string (`CLIENT: ... SUBCONTRACTOR: ...`). Both markers are
//! matched against the original text independently, so either, both, or
//! neither segment may be present.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Perspective;

lazy_static! {
    /// `CLIENT:` segment, up to a following `SUBCONTRACTOR:` marker or end of text
    static ref CLIENT_SEGMENT: Regex =
        Regex::new(r"(?is)\bclient:(.*?)(?:\bsubcontractor:|$)").unwrap();

    /// `SUBCONTRACTOR:` segment, to end of text
    static ref SUBCONTRACTOR_SEGMENT: Regex =
        Regex::new(r"(?is)\bsubcontractor:(.*)$").unwrap();
}

/// The audience-tagged halves of a recommendation, when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudienceSplit {
    pub client: Option<String>,
    pub subcontractor: Option<String>,
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    let segment = pattern.captures(text)?.get(1)?.as_str().trim();
    // A marker followed by nothing is treated as absent, so the view falls
    // back to the raw text instead of rendering an empty recommendation.
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

/// Extract both audience segments from the original text.
pub fn split_audiences(text: &str) -> AudienceSplit {
    AudienceSplit {
        client: capture(&CLIENT_SEGMENT, text),
        subcontractor: capture(&SUBCONTRACTOR_SEGMENT, text),
    }
}

/// The recommendation text as seen from `perspective`.
///
/// Untagged text passes through unchanged for every perspective. A missing
/// segment for the active perspective falls back to the full raw text, so
/// no information is ever silently dropped.
pub fn for_perspective(text: &str, perspective: Perspective) -> String {
    let segment = match perspective {
        Perspective::Client => split_audiences(text).client,
        Perspective::Subcontractor => split_audiences(text).subcontractor,
        Perspective::Unset => None,
    };
    segment.unwrap_or_else(|| text.to_string())
}
