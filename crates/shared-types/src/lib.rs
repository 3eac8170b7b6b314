pub mod types;

pub use types::{
    AggregateScoreRecord, AnalysisResult, CategoryScores, ClauseRecord, Perspective, Relevance,
    RiskAssessment, RiskLevel,
};
