pub mod prompt;
pub mod parser;
pub mod executor;

pub use prompt::{build_chart_prompt, CHART_PROMPT_TEMPLATE};
pub use parser::{extract_chart_spec, sanitize_completion};
pub use executor::generate_chart_spec;
