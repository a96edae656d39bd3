pub mod weights;
pub mod scorer;
pub mod ranker;

pub use weights::{resolve_weights, RawWeights, Weights, DEFAULT_WEIGHTS};
pub use scorer::{score, skill_bonus, tier_norm, Scorer};
pub use ranker::top_n;
