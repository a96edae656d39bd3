pub mod loader;
pub mod cleaner;

pub use loader::{load_path, load_reader};
pub use cleaner::{clean, median, normalize_skills, parse_numeric};
