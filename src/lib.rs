pub mod config;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod data;
pub mod scoring;
pub mod analysis;
pub mod report;

pub use config::{Config, RankingConfig};
pub use error::{Error, Result};
pub use analysis::RankingSession;
pub use scoring::{resolve_weights, top_n, RawWeights, Scorer, Weights};
pub use report::{OutputFormat, RankingReport};
