mod loader;
mod results;

pub use loader::{load_questions, parse_line, LoadError};
pub use results::save_results;
