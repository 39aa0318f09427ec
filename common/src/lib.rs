pub mod error;
pub mod dataset;
pub mod schema;
pub mod llm;
pub mod agent;
pub mod render;
pub mod tracing;

pub use error::{Result, VegagenError};
