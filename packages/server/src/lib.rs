// Cold Format - API Core
//
// Scores the relationship scale questionnaire and relays prompts to an LLM
// provider and visitor feedback to email.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
