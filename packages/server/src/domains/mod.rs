// Business domains
pub mod feedback;
pub mod scale;
