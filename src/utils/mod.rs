pub mod constants;
pub mod project;
pub mod tracing;
