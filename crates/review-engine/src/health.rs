//! Health-score banding

/// Qualitative band for a 0-100 health score.
///
/// Feed this the perspective-resolved score, not the base aggregate score,
/// whenever a perspective is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Good,
    Moderate,
    Concerning,
    Critical,
}

impl HealthBand {
    /// Band for a score, inclusive lower bounds at 80/60/40. Total over all
    /// floats; anything below the Concerning floor (NaN included) is Critical.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthBand::Good
        } else if score >= 60.0 {
            HealthBand::Moderate
        } else if score >= 40.0 {
            HealthBand::Concerning
        } else {
            HealthBand::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Good => "Good",
            HealthBand::Moderate => "Moderate",
            HealthBand::Concerning => "Concerning",
            HealthBand::Critical => "Critical",
        }
    }

    /// Display color token for the UI shell.
    pub fn color_token(&self) -> &'static str {
        match self {
            HealthBand::Good => "green",
            HealthBand::Moderate => "yellow",
            HealthBand::Concerning => "orange",
            HealthBand::Critical => "red",
        }
    }
}
