use std::io::Read;
use std::path::Path;

use crate::analysis::insights::Insights;
use crate::data::{clean, load_path, load_reader};
use crate::error::Result;
use crate::models::{RankedCandidate, RawTable, ScoredTable};
use crate::scoring::{resolve_weights, top_n, RawWeights, Scorer, Weights};

/// One ranking run over a single dataset.
///
/// The data is loaded, cleaned and scored once on construction. Weight changes
/// only recompute final scores from the stored sub-scores.
pub struct RankingSession {
    scored: ScoredTable,
}

impl RankingSession {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = load_path(path)?;
        Ok(Self::from_raw(&raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw = load_reader(reader)?;
        Ok(Self::from_raw(&raw))
    }

    pub fn from_raw(raw: &RawTable) -> Self {
        let cleaned = clean(raw);
        let scored = Scorer::new().score(&cleaned);
        Self { scored }
    }

    /// Resolves `raw` and recomputes final scores with it.
    pub fn apply_weights(&mut self, raw: &RawWeights) -> Result<Weights> {
        let weights = resolve_weights(raw)?;
        self.scored = self.scored.reweight(&weights);
        tracing::info!("Applied weights ({})", weights);
        Ok(weights)
    }

    pub fn weights(&self) -> Weights {
        self.scored.weights
    }

    pub fn top(&self, n: usize) -> Result<Vec<RankedCandidate>> {
        top_n(&self.scored, n)
    }

    pub fn table(&self) -> &ScoredTable {
        &self.scored
    }

    pub fn insights(&self) -> Insights {
        Insights::from_table(&self.scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    const APPLICANTS: &str = "\
Name,Age,Years of Experience,Test Score,Interview Score,Past Company Tier,Degree,Location Preference,Technical Skills
Asha,29,4,88,8,1,MSc,Remote,\"Python, SQL, Tableau\"
Ben,35,12,72,6,2,BSc,,Excel
Chloe,26,1,95,9,3,,Onsite,\"python,  power bi\"
Dev,41,x,60,7,2,PhD,Hybrid,
Eli,31,6,,5,9,BSc,Remote,SQL
";

    fn session() -> RankingSession {
        RankingSession::from_reader(APPLICANTS.as_bytes()).unwrap()
    }

    fn names(ranked: &[RankedCandidate]) -> Vec<String> {
        ranked
            .iter()
            .map(|r| r.scored.candidate.display_name())
            .collect()
    }

    #[test]
    fn test_session_ranks_with_default_weights() {
        let session = session();
        assert_eq!(session.weights(), Weights::default());

        let top = session.top(3).unwrap();
        assert_eq!(top.len(), 3);
        assert_eq!(names(&top), vec!["Asha", "Chloe", "Ben"]);
    }

    #[test]
    fn test_cleaning_applied_before_scoring() {
        let session = session();
        let dev = &session.table().candidates[3];
        let eli = &session.table().candidates[4];

        // median of 4, 12, 1, 6
        assert_eq!(dev.candidate.years_of_experience, Some(5.0));
        // median of 88, 72, 95, 60
        assert_eq!(eli.candidate.test_score, Some(80.0));
        assert_eq!(eli.scores.tier_norm, Some(0.6));
        assert_eq!(
            session.table().candidates[2].candidate.degree.as_deref(),
            Some("Unknown")
        );
    }

    #[test]
    fn test_apply_weights_changes_ranking() {
        let mut session = session();
        let weights = session
            .apply_weights(&RawWeights {
                test: 0.0,
                interview: 0.0,
                experience: 2.0,
                tier: 0.0,
            })
            .unwrap();

        assert_eq!(weights.experience, 1.0);
        let top = session.top(1).unwrap();
        assert_eq!(names(&top), vec!["Ben"]);
    }

    #[test]
    fn test_apply_zero_weights_restores_defaults() {
        let mut session = session();
        let before: Vec<f64> = session
            .table()
            .candidates
            .iter()
            .map(|c| c.final_score)
            .collect();

        let zero = RawWeights {
            test: 0.0,
            interview: 0.0,
            experience: 0.0,
            tier: 0.0,
        };
        assert_eq!(session.apply_weights(&zero).unwrap(), Weights::default());

        let after: Vec<f64> = session
            .table()
            .candidates
            .iter()
            .map(|c| c.final_score)
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_invalid_weights_leave_scores_untouched() {
        let mut session = session();
        let negative = RawWeights {
            test: -1.0,
            ..Default::default()
        };

        assert!(session.apply_weights(&negative).is_err());
        assert_eq!(session.weights(), Weights::default());
    }

    #[test]
    fn test_from_path_and_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(APPLICANTS.as_bytes()).unwrap();
        let session = RankingSession::from_path(file.path()).unwrap();
        assert_eq!(session.table().len(), 5);

        let err = RankingSession::from_path("does/not/exist.csv").err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_insights_from_session() {
        let insights = session().insights();
        assert_eq!(insights.experience_vs_test.map(|p| p.len()), Some(5));
        assert_eq!(
            insights.degree_distribution.unwrap()[0].degree,
            "BSc".to_string()
        );
    }
}
