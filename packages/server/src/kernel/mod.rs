// Kernel - infrastructure shared by all routes
//
// Traits for external services, their real implementations, and mocks.

pub mod ai;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use ai::*;
pub use deps::{ResendAdapter, ServerDeps, FEEDBACK_FROM};
pub use traits::*;
