use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vegagen")]
#[command(about = "natural-language to vega-lite chart spec generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate chart artifacts
    Gen {
        #[command(subcommand)]
        subcommand: GenCommands,
    },
}

#[derive(Subcommand)]
enum GenCommands {
    /// Generate a Vega-Lite spec for the sample sales dataset
    Chart {
        /// Visualization question
        #[arg(
            short,
            long,
            default_value = "How do the sales of each product change over time?"
        )]
        question: String,

        /// Gemini API key
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Generation model identifier
        #[arg(long, default_value = common::llm::gemini::DEFAULT_MODEL)]
        model: String,

        /// Output token budget for the completion
        #[arg(long, default_value_t = common::llm::gemini::DEFAULT_MAX_OUTPUT_TOKENS)]
        max_output_tokens: u32,

        /// Spec JSON output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rendered chart HTML output path
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Gen { subcommand } => match subcommand {
                GenCommands::Chart {
                    question,
                    api_key,
                    model,
                    max_output_tokens,
                    output,
                    html,
                } => generate_chart(question, api_key, model, max_output_tokens, output, html).await,
            },
        }
    }
}

async fn generate_chart(
    question: String,
    api_key: String,
    model: String,
    max_output_tokens: u32,
    output: Option<PathBuf>,
    html: Option<PathBuf>,
) -> Result<()> {
    use common::agent::generate_chart_spec;
    use common::dataset::sample_sales;
    use common::llm::{GeminiClient, GeminiConfig};
    use common::render::{attach_dataset_values, chart_html};
    use common::tracing::init_tracing;
    use common::VegagenError;

    let _guard = init_tracing("vegagen")?;

    let dataset = sample_sales();
    tracing::info!(rows = dataset.row_count(), "loaded sample sales dataset");

    let mut config = GeminiConfig::new(api_key);
    config.model = model;
    config.max_output_tokens = max_output_tokens;

    tracing::info!(
        model = %config.model,
        "generating specification (this may take a moment)"
    );

    let client = GeminiClient::new(config)?;

    let spec = match generate_chart_spec(&client, &dataset, &question).await {
        Ok(spec) => spec,
        Err(VegagenError::SpecParse { reason, raw }) => {
            // the one recoverable failure: show what the model actually said
            tracing::error!("error parsing json from the model response: {}", reason);
            eprintln!("raw model output:\n{}", raw);
            anyhow::bail!("model returned an unparseable chart spec");
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", serde_json::to_string_pretty(&spec)?);

    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(&spec)?)?;
        tracing::info!(output = %path.display(), "wrote chart spec");
    }

    if let Some(path) = html {
        let inlined = attach_dataset_values(&spec, &dataset);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, chart_html(&inlined))?;
        tracing::info!(output = %path.display(), "wrote rendered chart page");
    }

    Ok(())
}
