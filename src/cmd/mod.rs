pub mod analyze;
pub mod splits;
