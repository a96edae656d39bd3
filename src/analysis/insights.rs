use serde::{Deserialize, Serialize};

use crate::models::{Column, ScoredCandidate, ScoredTable};

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    pub name: String,
    pub years_of_experience: f64,
    pub test_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DegreeCount {
    pub degree: String,
    pub count: usize,
}

/// Descriptive views over an already scored table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Insights {
    pub experience_vs_test: Option<Vec<ScatterPoint>>,
    pub degree_distribution: Option<Vec<DegreeCount>>,
}

impl Insights {
    pub fn from_table(table: &ScoredTable) -> Self {
        Self {
            experience_vs_test: experience_vs_test(table),
            degree_distribution: degree_distribution(table),
        }
    }
}

/// One point per candidate; `None` unless both source columns are present.
pub fn experience_vs_test(table: &ScoredTable) -> Option<Vec<ScatterPoint>> {
    if !table.columns.contains(Column::YearsOfExperience)
        || !table.columns.contains(Column::TestScore)
    {
        return None;
    }

    Some(
        table
            .candidates
            .iter()
            .filter_map(|c| {
                let candidate = &c.candidate;
                Some(ScatterPoint {
                    name: candidate.display_name(),
                    years_of_experience: candidate.years_of_experience?,
                    test_score: candidate.test_score?,
                })
            })
            .collect(),
    )
}

/// Candidates per degree, most common first; ties keep first appearance.
pub fn degree_distribution(table: &ScoredTable) -> Option<Vec<DegreeCount>> {
    if !table.columns.contains(Column::Degree) {
        return None;
    }

    let mut counts: Vec<DegreeCount> = Vec::new();
    for degree in table
        .candidates
        .iter()
        .filter_map(|c| c.candidate.degree.as_deref())
    {
        match counts.iter_mut().find(|d| d.degree == degree) {
            Some(entry) => entry.count += 1,
            None => counts.push(DegreeCount {
                degree: degree.to_string(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Some(counts)
}

/// First `rows` scored candidates in input order.
pub fn preview(table: &ScoredTable, rows: usize) -> &[ScoredCandidate] {
    &table.candidates[..rows.min(table.candidates.len())]
}
