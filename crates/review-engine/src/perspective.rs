//! Perspective-resolved views of aggregate score records
//!
//! Summary records carry optional client- and subcontractor-prefixed shadow
//! variants of every displayed metric. Resolution is shadow first, then the
//! base field, then zero, and is re-run on every perspective change (never
//! cached against it).

use shared_types::{AggregateScoreRecord, CategoryScores, Perspective};

/// Numeric summary fields that carry per-perspective shadow variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    OverallScore,
    CriticalCount,
    HighCount,
    MediumCount,
    LowCount,
}

fn count(value: Option<u32>) -> Option<f64> {
    value.map(f64::from)
}

fn pick(
    base: Option<f64>,
    client: Option<f64>,
    subcontractor: Option<f64>,
    perspective: Perspective,
) -> f64 {
    let shadow = match perspective {
        Perspective::Client => client,
        Perspective::Subcontractor => subcontractor,
        Perspective::Unset => None,
    };
    shadow.or(base).unwrap_or(0.0)
}

/// Value of `field` as seen from `perspective`. Absent shadow and base
/// fields resolve to zero; this never panics.
pub fn resolve_field(
    record: &AggregateScoreRecord,
    field: ScoreField,
    perspective: Perspective,
) -> f64 {
    let (base, client, subcontractor) = match field {
        ScoreField::OverallScore => (
            record.overall_score,
            record.client_overall_score,
            record.subcontractor_overall_score,
        ),
        ScoreField::CriticalCount => (
            count(record.critical_count),
            count(record.client_critical_count),
            count(record.subcontractor_critical_count),
        ),
        ScoreField::HighCount => (
            count(record.high_count),
            count(record.client_high_count),
            count(record.subcontractor_high_count),
        ),
        ScoreField::MediumCount => (
            count(record.medium_count),
            count(record.client_medium_count),
            count(record.subcontractor_medium_count),
        ),
        ScoreField::LowCount => (
            count(record.low_count),
            count(record.client_low_count),
            count(record.subcontractor_low_count),
        ),
    };
    pick(base, client, subcontractor, perspective)
}

/// Category scores as seen from `perspective`, defaulting to all-zero when
/// neither shadow nor base scores were delivered.
pub fn resolve_category_scores(
    record: &AggregateScoreRecord,
    perspective: Perspective,
) -> CategoryScores {
    let shadow = match perspective {
        Perspective::Client => record.client_category_scores,
        Perspective::Subcontractor => record.subcontractor_category_scores,
        Perspective::Unset => None,
    };
    shadow.or(record.category_scores).unwrap_or_default()
}

/// Session-scoped storage for the selected perspective.
///
/// Implemented by the UI shell over its key-value store; read once at
/// startup, written only on explicit user selection. Core functions never
/// read the perspective from ambient state - it is always passed in.
pub trait PerspectiveStore {
    fn load(&self) -> Perspective;
    fn store(&mut self, perspective: Perspective);
}

/// In-memory store for tests and hosts without a session store.
#[derive(Debug, Default)]
pub struct MemoryPerspectiveStore {
    current: Perspective,
}

impl PerspectiveStore for MemoryPerspectiveStore {
    fn load(&self) -> Perspective {
        self.current
    }

    fn store(&mut self, perspective: Perspective) {
        self.current = perspective;
    }
}
