// Common test utilities

pub mod harness;
pub mod mock_providers;

pub use harness::*;
pub use mock_providers::*;
