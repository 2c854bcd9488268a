pub mod category;
pub mod criterion;
pub mod gender;
pub mod score_vector;

pub use category::*;
pub use criterion::*;
pub use gender::*;
pub use score_vector::*;
