pub mod fields;
pub mod types;
