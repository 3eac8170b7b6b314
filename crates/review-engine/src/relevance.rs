//! Perspective filtering of risk findings

use shared_types::{Perspective, Relevance, RiskAssessment};

/// True when a finding tagged `relevance` is visible from `perspective`.
///
/// Untagged findings and `Both` are visible to everyone; only findings
/// tagged for the opposite audience alone are dropped.
pub fn is_visible(relevance: Option<Relevance>, perspective: Perspective) -> bool {
    let audience = match perspective {
        Perspective::Client => Relevance::Client,
        Perspective::Subcontractor => Relevance::Subcontractor,
        Perspective::Unset => return true,
    };
    match relevance {
        None | Some(Relevance::Both) => true,
        Some(tag) => tag == audience,
    }
}

/// Findings visible from `perspective`, in delivery order. Identity when
/// the perspective is unset; a stable filter, never a re-sort.
pub fn filter_by_perspective(
    items: &[RiskAssessment],
    perspective: Perspective,
) -> Vec<&RiskAssessment> {
    items
        .iter()
        .filter(|item| is_visible(item.relevance, perspective))
        .collect()
}
