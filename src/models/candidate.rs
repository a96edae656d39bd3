use serde::{Deserialize, Serialize};

use super::column::{Column, ColumnPresence};
use crate::scoring::weights::Weights;

/// One applicant after cleaning. A field is `None` only when its column is
/// absent from the source; present columns are always filled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub row_index: usize,
    pub name: Option<String>,
    pub age: Option<f64>,
    pub years_of_experience: Option<f64>,
    pub test_score: Option<f64>,
    pub interview_score: Option<f64>,
    pub past_company_tier: Option<f64>,
    pub degree: Option<String>,
    pub location_preference: Option<String>,
    pub technical_skills: String,
    pub skills_list: Vec<String>,
}

impl Candidate {
    pub fn numeric(&self, column: Column) -> Option<f64> {
        match column {
            Column::Age => self.age,
            Column::YearsOfExperience => self.years_of_experience,
            Column::TestScore => self.test_score,
            Column::InterviewScore => self.interview_score,
            Column::PastCompanyTier => self.past_company_tier,
            _ => None,
        }
    }

    pub fn numeric_mut(&mut self, column: Column) -> Option<&mut Option<f64>> {
        match column {
            Column::Age => Some(&mut self.age),
            Column::YearsOfExperience => Some(&mut self.years_of_experience),
            Column::TestScore => Some(&mut self.test_score),
            Column::InterviewScore => Some(&mut self.interview_score),
            Column::PastCompanyTier => Some(&mut self.past_company_tier),
            _ => None,
        }
    }

    /// Cell text for reports; `None` when the column is absent.
    pub fn display_value(&self, column: Column) -> Option<String> {
        match column {
            Column::Name => self.name.clone(),
            Column::Degree => self.degree.clone(),
            Column::LocationPreference => self.location_preference.clone(),
            Column::TechnicalSkills => Some(self.technical_skills.clone()),
            _ => self.numeric(column).map(format_number),
        }
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Row {}", self.row_index + 1))
    }
}

pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleanedTable {
    pub columns: ColumnPresence,
    pub candidates: Vec<Candidate>,
}

/// Normalized features in [0, 1]. `None` when the source column is absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SubScores {
    pub test_norm: Option<f64>,
    pub interview_norm: Option<f64>,
    pub exp_norm: Option<f64>,
    pub tier_norm: Option<f64>,
}

impl SubScores {
    /// Weighted sum plus bonus. Absent sub-scores contribute nothing.
    pub fn combine(&self, weights: &Weights, skill_bonus: f64) -> f64 {
        weights.test * self.test_norm.unwrap_or(0.0)
            + weights.interview * self.interview_norm.unwrap_or(0.0)
            + weights.experience * self.exp_norm.unwrap_or(0.0)
            + weights.tier * self.tier_norm.unwrap_or(0.0)
            + skill_bonus
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub scores: SubScores,
    pub skill_bonus: f64,
    pub final_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredTable {
    pub columns: ColumnPresence,
    pub weights: Weights,
    pub candidates: Vec<ScoredCandidate>,
}

impl ScoredTable {
    /// Recomputes every `final_score` from the stored sub-scores and bonus.
    /// Raw columns are never revisited.
    pub fn reweight(&self, weights: &Weights) -> ScoredTable {
        let candidates = self
            .candidates
            .iter()
            .map(|c| ScoredCandidate {
                final_score: c.scores.combine(weights, c.skill_bonus),
                ..c.clone()
            })
            .collect();

        ScoredTable {
            columns: self.columns.clone(),
            weights: *weights,
            candidates,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedCandidate {
    pub rank: usize,
    #[serde(flatten)]
    pub scored: ScoredCandidate,
}
