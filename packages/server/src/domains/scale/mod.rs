//! Relationship scale: criterion catalogs, scoring and prompt construction.
//!
//! Everything here is pure and synchronous; the HTTP layer and the LLM
//! relay live in `server` and `kernel`.

pub mod analysis;
pub mod errors;
pub mod models;
pub mod prompt;

pub use analysis::{analyze, AnalysisResult};
pub use errors::ScaleError;
pub use models::*;
pub use prompt::build_prompt;
