//! Review panel projecting delivered clause/risk records into the view for
//! the active perspective

use serde::{Deserialize, Serialize};
use shared_types::{AnalysisResult, CategoryScores, ClauseRecord, Perspective, RiskAssessment, RiskLevel};

use crate::health::HealthBand;
use crate::perspective::{resolve_category_scores, resolve_field, ScoreField};
use crate::recommendation;
use crate::relevance;

/// One row of the risk list, projected for the active perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskItem {
    pub id: String,
    pub clause_label: String,
    pub category: String,
    pub level: RiskLevel,
    pub score: f64,
    pub description: String,
    pub recommendation: String, // Audience half selected for the perspective
    pub matched_text: Option<String>,
}

/// What the host should ask the clause locator to find for a risk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateTarget {
    /// Literal excerpt that triggered the finding
    Excerpt(String),
    /// Clause display label
    Label(String),
}

/// Holds the delivered analysis result and the current selection. Records
/// are read-only input; every projection takes the perspective explicitly.
#[derive(Debug, Default)]
pub struct ReviewPanel {
    result: AnalysisResult,
    selected_id: Option<String>,
}

fn risk_id(clause_index: usize, risk_index: usize) -> String {
    format!("risk-{}-{}", clause_index, risk_index)
}

fn parse_risk_id(id: &str) -> Option<(usize, usize)> {
    let (clause, risk) = id.strip_prefix("risk-")?.split_once('-')?;
    Some((clause.parse().ok()?, risk.parse().ok()?))
}

impl ReviewPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the delivered analysis result; clears any selection.
    pub fn set_analysis(&mut self, result: AnalysisResult) {
        self.result = result;
        self.selected_id = None;
    }

    pub fn clauses(&self) -> &[ClauseRecord] {
        &self.result.clauses
    }

    /// Risk rows visible from `perspective`, in delivery order. Ids are
    /// stable across perspective changes so a selection survives switching.
    pub fn risk_items(&self, perspective: Perspective) -> Vec<RiskItem> {
        let mut items = Vec::new();
        for (clause_index, clause) in self.result.clauses.iter().enumerate() {
            let label = clause.display_label();
            for (risk_index, risk) in clause.risk_assessments.iter().enumerate() {
                if !relevance::is_visible(risk.relevance, perspective) {
                    continue;
                }
                items.push(RiskItem {
                    id: risk_id(clause_index, risk_index),
                    clause_label: label.clone(),
                    category: risk.category.clone(),
                    level: risk.level,
                    score: risk.score,
                    description: risk.description.clone(),
                    recommendation: recommendation::for_perspective(
                        &risk.recommendation,
                        perspective,
                    ),
                    matched_text: risk.matched_text.clone(),
                });
            }
        }
        items
    }

    pub fn risk_items_json(&self, perspective: Perspective) -> String {
        serde_json::to_string(&self.risk_items(perspective)).unwrap_or_default()
    }

    /// Summary score as seen from `perspective`.
    pub fn overall_score(&self, perspective: Perspective) -> f64 {
        resolve_field(&self.result.summary, ScoreField::OverallScore, perspective)
    }

    /// Health band of the perspective-resolved summary score.
    pub fn health_band(&self, perspective: Perspective) -> HealthBand {
        HealthBand::from_score(self.overall_score(perspective))
    }

    /// Count of findings at `level` as seen from `perspective`, taken from
    /// the upstream summary record rather than recounted locally.
    pub fn level_count(&self, level: RiskLevel, perspective: Perspective) -> u32 {
        let field = match level {
            RiskLevel::Critical => ScoreField::CriticalCount,
            RiskLevel::High => ScoreField::HighCount,
            RiskLevel::Medium => ScoreField::MediumCount,
            RiskLevel::Low => ScoreField::LowCount,
        };
        resolve_field(&self.result.summary, field, perspective) as u32
    }

    pub fn category_scores(&self, perspective: Perspective) -> CategoryScores {
        resolve_category_scores(&self.result.summary, perspective)
    }

    /// Select a risk row by id; an unknown id clears the selection.
    pub fn select_risk(&mut self, id: &str) {
        self.selected_id = match parse_risk_id(id) {
            Some((clause_index, risk_index))
                if self
                    .result
                    .clauses
                    .get(clause_index)
                    .is_some_and(|c| c.risk_assessments.len() > risk_index) =>
            {
                Some(id.to_string())
            }
            _ => None,
        };
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_risk(&self) -> Option<(&ClauseRecord, &RiskAssessment)> {
        let (clause_index, risk_index) = parse_risk_id(self.selected_id.as_ref()?)?;
        let clause = self.result.clauses.get(clause_index)?;
        let risk = clause.risk_assessments.get(risk_index)?;
        Some((clause, risk))
    }

    /// Locate query for the selected risk: the matched excerpt when the
    /// classifier delivered one, else the clause display label.
    pub fn locate_target(&self) -> Option<LocateTarget> {
        let (clause, risk) = self.selected_risk()?;
        match &risk.matched_text {
            Some(excerpt) if !excerpt.trim().is_empty() => {
                Some(LocateTarget::Excerpt(excerpt.clone()))
            }
            _ => Some(LocateTarget::Label(clause.display_label())),
        }
    }
}
