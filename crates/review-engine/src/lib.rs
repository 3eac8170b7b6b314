//! Perspective-aware review core for classified contract clauses
//!
//! The upstream classifier delivers clause records with scored risk
//! findings. This crate projects them into the view for the active
//! stakeholder perspective: shadow-field resolution for summary metrics,
//! audience filtering of findings, dual-audience recommendation text, and
//! health-score banding. The perspective is always an explicit parameter;
//! nothing here reads it from ambient state.

pub mod health;
pub mod panel;
pub mod perspective;
pub mod recommendation;
pub mod relevance;

pub use health::HealthBand;
pub use panel::{LocateTarget, ReviewPanel, RiskItem};
pub use perspective::{
    resolve_category_scores, resolve_field, MemoryPerspectiveStore, PerspectiveStore, ScoreField,
};
pub use recommendation::{for_perspective, split_audiences, AudienceSplit};
pub use relevance::{filter_by_perspective, is_visible};

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AnalysisResult, Perspective, RiskLevel};

    #[test]
    fn test_delivered_json_through_panel() {
        let json = r#"{
            "clauses": [{
                "clauseNumber": "13.7",
                "clauseTitle": "Gardiennage",
                "order": 1,
                "riskAssessments": [{
                    "category": "payment",
                    "level": "Critical",
                    "score": 88.0,
                    "description": "Unbounded payment window",
                    "recommendation": "CLIENT: Keep the window SUBCONTRACTOR: Cap it at 45 days",
                    "matchedText": "payment at a time of our choosing",
                    "relevance": "Both"
                }]
            }],
            "summary": {
                "overallScore": 62,
                "subcontractorOverallScore": 38,
                "criticalCount": 1
            }
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();

        let mut panel = ReviewPanel::new();
        panel.set_analysis(result);

        // Subcontractor sees its shadow score and its half of the text
        assert_eq!(panel.overall_score(Perspective::Subcontractor), 38.0);
        assert_eq!(
            panel.health_band(Perspective::Subcontractor),
            HealthBand::Critical
        );
        let items = panel.risk_items(Perspective::Subcontractor);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].recommendation, "Cap it at 45 days");
        assert_eq!(items[0].level, RiskLevel::Critical);

        // No client shadow: client falls back to the base score
        assert_eq!(panel.overall_score(Perspective::Client), 62.0);
        assert_eq!(panel.health_band(Perspective::Client), HealthBand::Moderate);
    }
}
