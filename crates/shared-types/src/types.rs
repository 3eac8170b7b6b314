use serde::{Deserialize, Serialize};

/// Analysis result delivered by the upstream classifier API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub clauses: Vec<ClauseRecord>,
    pub summary: AggregateScoreRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseRecord {
    #[serde(default)]
    pub clause_number: Option<String>,
    #[serde(default)]
    pub clause_title: Option<String>,
    #[serde(default)]
    pub clause_content: Option<String>,
    pub order: u32, // Dense sequence assigned by the classifier
    #[serde(default)]
    pub risk_assessments: Vec<RiskAssessment>,
}

impl ClauseRecord {
    /// Label shown in lists and fed to the clause locator: the clause
    /// number when the classifier produced one, else `Clause {order}`.
    pub fn display_label(&self) -> String {
        match &self.clause_number {
            Some(number) if !number.is_empty() => number.clone(),
            _ => format!("Clause {}", self.order),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub category: String,
    pub level: RiskLevel,
    pub score: f64, // Non-negative severity score
    pub description: String,
    pub recommendation: String, // Raw text, may embed audience-tagged segments
    #[serde(default)]
    pub matched_text: Option<String>,
    #[serde(default)]
    pub relevance: Option<Relevance>,
}

/// Risk severity, totally ordered `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

/// Which contracting party a risk finding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relevance {
    Client,
    Subcontractor,
    Both,
}

/// Stakeholder viewpoint selecting shadow fields and audience text.
///
/// `Unset` is the identity perspective: every record is shown as delivered.
/// Unrecognized stored values deserialize to `Unset` rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    Client,
    Subcontractor,
    #[default]
    #[serde(other)]
    Unset,
}

impl Perspective {
    pub fn is_set(&self) -> bool {
        !matches!(self, Perspective::Unset)
    }

    /// Parse a stored selector value; anything unrecognized is `Unset`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "client" => Perspective::Client,
            "subcontractor" => Perspective::Subcontractor,
            _ => Perspective::Unset,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Perspective::Client => "client",
            Perspective::Subcontractor => "subcontractor",
            Perspective::Unset => "unset",
        }
    }
}

/// Template/contract/scan summary with optional per-perspective shadow
/// fields computed upstream. An absent shadow means the base field is the
/// correct value for every perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregateScoreRecord {
    pub overall_score: Option<f64>,
    pub critical_count: Option<u32>,
    pub high_count: Option<u32>,
    pub medium_count: Option<u32>,
    pub low_count: Option<u32>,
    pub category_scores: Option<CategoryScores>,

    pub client_overall_score: Option<f64>,
    pub client_critical_count: Option<u32>,
    pub client_high_count: Option<u32>,
    pub client_medium_count: Option<u32>,
    pub client_low_count: Option<u32>,
    pub client_category_scores: Option<CategoryScores>,

    pub subcontractor_overall_score: Option<f64>,
    pub subcontractor_critical_count: Option<u32>,
    pub subcontractor_high_count: Option<u32>,
    pub subcontractor_medium_count: Option<u32>,
    pub subcontractor_low_count: Option<u32>,
    pub subcontractor_category_scores: Option<CategoryScores>,
}

/// Seven fixed category scores, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryScores {
    pub payment: f64,
    pub role_responsibility: f64,
    pub safety: f64,
    pub temporal: f64,
    pub procedure: f64,
    pub definition: f64,
    pub reference: f64,
}
