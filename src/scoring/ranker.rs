use crate::error::{Error, Result};
use crate::models::{RankedCandidate, ScoredTable};

/// Returns the `n` highest-scoring candidates, best first. Equal scores keep
/// their input order.
pub fn top_n(table: &ScoredTable, n: usize) -> Result<Vec<RankedCandidate>> {
    if n < 1 {
        return Err(Error::InvalidArgument(format!(
            "number of candidates must be at least 1, got {}",
            n
        )));
    }

    let mut ordered: Vec<_> = table.candidates.iter().collect();
    // sort_by is stable
    ordered.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

    let ranked: Vec<RankedCandidate> = ordered
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, scored)| RankedCandidate {
            rank: i + 1,
            scored: scored.clone(),
        })
        .collect();

    tracing::debug!("Ranked top {} of {} candidates", ranked.len(), table.len());
    Ok(ranked)
}
