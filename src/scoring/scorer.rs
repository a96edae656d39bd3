use crate::models::{Candidate, CleanedTable, ScoredCandidate, ScoredTable, SubScores};
use crate::scoring::weights::Weights;
use crate::taxonomy::SkillTaxonomy;

/// Past company tier to normalized score; 1 is the strongest tier.
pub const TIER_MAP: [(f64, f64); 3] = [(1.0, 1.0), (2.0, 0.8), (3.0, 0.6)];

/// Score for tier codes outside [`TIER_MAP`].
pub const TIER_DEFAULT: f64 = 0.6;

pub const TEST_SCALE: f64 = 100.0;
pub const INTERVIEW_SCALE: f64 = 10.0;
pub const EXPERIENCE_CAP_YEARS: f64 = 10.0;

pub fn tier_norm(tier: f64) -> f64 {
    TIER_MAP
        .iter()
        .find(|(code, _)| *code == tier)
        .map(|(_, score)| *score)
        .unwrap_or(TIER_DEFAULT)
}

pub fn test_norm(test_score: f64) -> f64 {
    test_score / TEST_SCALE
}

pub fn interview_norm(interview_score: f64) -> f64 {
    interview_score / INTERVIEW_SCALE
}

pub fn exp_norm(years: f64) -> f64 {
    years.min(EXPERIENCE_CAP_YEARS) / EXPERIENCE_CAP_YEARS
}

/// Bonus from the default skill taxonomy.
pub fn skill_bonus<S: AsRef<str>>(skills: &[S]) -> f64 {
    SkillTaxonomy::new().bonus_for(skills)
}

pub struct Scorer {
    taxonomy: SkillTaxonomy,
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            taxonomy: SkillTaxonomy::new(),
        }
    }

    /// Scores every candidate with the default weights.
    pub fn score(&self, table: &CleanedTable) -> ScoredTable {
        self.score_with(table, &Weights::default())
    }

    pub fn score_with(&self, table: &CleanedTable, weights: &Weights) -> ScoredTable {
        let candidates: Vec<ScoredCandidate> = table
            .candidates
            .iter()
            .map(|candidate| {
                let scores = self.sub_scores(candidate);
                let skill_bonus = self.taxonomy.bonus_for(&candidate.skills_list);

                ScoredCandidate {
                    candidate: candidate.clone(),
                    scores,
                    skill_bonus,
                    final_score: scores.combine(weights, skill_bonus),
                }
            })
            .collect();

        let unknown_tiers = table
            .candidates
            .iter()
            .filter_map(|c| c.past_company_tier)
            .filter(|tier| !TIER_MAP.iter().any(|(code, _)| code == tier))
            .count();
        if unknown_tiers > 0 {
            tracing::warn!(
                "{} candidate(s) have an unrecognized company tier, scored as {}",
                unknown_tiers,
                TIER_DEFAULT
            );
        }

        tracing::info!("Scored {} candidates", candidates.len());
        ScoredTable {
            columns: table.columns.clone(),
            weights: *weights,
            candidates,
        }
    }

    pub fn sub_scores(&self, candidate: &Candidate) -> SubScores {
        SubScores {
            test_norm: candidate.test_score.map(test_norm),
            interview_norm: candidate.interview_score.map(interview_norm),
            exp_norm: candidate.years_of_experience.map(exp_norm),
            tier_norm: candidate.past_company_tier.map(tier_norm),
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores a cleaned table with the default taxonomy and weights.
pub fn score(table: &CleanedTable) -> ScoredTable {
    Scorer::new().score(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{clean, load_reader};
    use proptest::prelude::*;

    fn scored(csv: &str) -> ScoredTable {
        score(&clean(&load_reader(csv.as_bytes()).unwrap()))
    }

    #[test]
    fn test_tier_lookup() {
        assert_eq!(tier_norm(1.0), 1.0);
        assert_eq!(tier_norm(2.0), 0.8);
        assert_eq!(tier_norm(3.0), 0.6);
        assert_eq!(tier_norm(99.0), 0.6);
        assert_eq!(tier_norm(1.5), 0.6);
    }

    #[test]
    fn test_experience_is_capped() {
        assert_eq!(exp_norm(4.0), 0.4);
        assert_eq!(exp_norm(10.0), 1.0);
        assert_eq!(exp_norm(25.0), 1.0);
    }

    #[test]
    fn test_skill_bonus_examples() {
        assert!((skill_bonus(&["python", "sql", "excel"]) - 0.08).abs() < 1e-9);
        assert_eq!(skill_bonus::<String>(&[]), 0.0);
        assert!((skill_bonus(&["Python", " SQL "]) - 0.06).abs() < 1e-9);
    }

    #[test]
    fn test_full_row_score() {
        let table = scored(
            "Name,Years of Experience,Test Score,Interview Score,Past Company Tier,Technical Skills\n\
             Ann,5,80,9,2,\"Python, Excel\"\n",
        );
        let ann = &table.candidates[0];

        assert_eq!(ann.scores.test_norm, Some(0.8));
        assert_eq!(ann.scores.interview_norm, Some(0.9));
        assert_eq!(ann.scores.exp_norm, Some(0.5));
        assert_eq!(ann.scores.tier_norm, Some(0.8));
        assert!((ann.skill_bonus - 0.05).abs() < 1e-9);

        let expected = 0.4 * 0.8 + 0.3 * 0.9 + 0.2 * 0.5 + 0.1 * 0.8 + 0.05;
        assert!((ann.final_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_missing_test_column_contributes_nothing() {
        let table = scored(
            "Name,Years of Experience,Interview Score,Past Company Tier\nAnn,10,10,1\n",
        );
        let ann = &table.candidates[0];

        assert_eq!(ann.scores.test_norm, None);
        assert!((ann.final_score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_reweight_twice_is_deterministic() {
        let table = scored(
            "Name,Test Score,Interview Score\nAnn,80,7\nBo,65,9\nCy,92,4\n",
        );
        let weights = Weights {
            test: 0.25,
            interview: 0.25,
            experience: 0.25,
            tier: 0.25,
        };

        let first = table.reweight(&weights);
        let second = table.reweight(&weights);
        let a: Vec<f64> = first.candidates.iter().map(|c| c.final_score).collect();
        let b: Vec<f64> = second.candidates.iter().map(|c| c.final_score).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reweight_matches_fresh_scoring() {
        let csv = "Name,Years of Experience,Test Score,Past Company Tier\nAnn,3,70,1\nBo,12,85,3\n";
        let table = scored(csv);
        let weights = Weights {
            test: 0.1,
            interview: 0.2,
            experience: 0.3,
            tier: 0.4,
        };

        let fresh = Scorer::new().score_with(&clean(&load_reader(csv.as_bytes()).unwrap()), &weights);
        assert_eq!(table.reweight(&weights), fresh);
    }

    fn sub_score() -> impl Strategy<Value = f64> {
        0.0f64..=1.0
    }

    proptest! {
        #[test]
        fn prop_final_score_monotone_in_each_sub_score(
            base in proptest::array::uniform4(sub_score()),
            raw_weights in proptest::array::uniform4(0.0f64..=1.0),
            which in 0usize..4,
            bump in 0.0f64..=1.0,
            bonus in 0.0f64..=0.08,
        ) {
            let weights = Weights {
                test: raw_weights[0],
                interview: raw_weights[1],
                experience: raw_weights[2],
                tier: raw_weights[3],
            };
            let to_scores = |v: [f64; 4]| SubScores {
                test_norm: Some(v[0]),
                interview_norm: Some(v[1]),
                exp_norm: Some(v[2]),
                tier_norm: Some(v[3]),
            };

            let mut raised = base;
            raised[which] = (raised[which] + bump).min(1.0);

            let before = to_scores(base).combine(&weights, bonus);
            let after = to_scores(raised).combine(&weights, bonus);
            prop_assert!(after >= before - 1e-12);
        }
    }
}
