pub mod generator;
pub mod templates;
