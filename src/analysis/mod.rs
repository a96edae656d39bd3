pub mod pipeline;
pub mod insights;

pub use pipeline::RankingSession;
pub use insights::{Insights, ScatterPoint, DegreeCount};
