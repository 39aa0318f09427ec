use crate::agent::parser::extract_chart_spec;
use crate::agent::prompt::build_chart_prompt;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::llm::TextGenerator;
use crate::schema::describe_dataset;
use serde_json::Value;

/// One full pass of the pipeline: describe the dataset, build the prompt,
/// call the generator, extract the chart spec. Single attempt; transport and
/// service failures propagate to the caller unchanged.
#[tracing::instrument(skip(generator, dataset), fields(question_len = question.len()))]
pub async fn generate_chart_spec(
    generator: &dyn TextGenerator,
    dataset: &Dataset,
    question: &str,
) -> Result<Value> {
    let description = describe_dataset(dataset);
    let prompt = build_chart_prompt(question, &description)?;

    tracing::debug!("prompt length: {} chars", prompt.len());

    let completion = generator.generate(&prompt).await?;

    tracing::debug!("completion length: {} chars", completion.len());

    extract_chart_spec(&completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_sales;
    use crate::error::VegagenError;
    use async_trait::async_trait;

    struct MockGenerator {
        completion: String,
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.completion.clone())
        }
    }

    #[tokio::test]
    async fn test_end_to_end_with_mocked_completion() {
        let generator = MockGenerator {
            completion: concat!(
                "```json\n",
                r#"{"mark":"line","encoding":{"x":{"field":"Month","type":"temporal"},"#,
                r#""y":{"field":"Sales","type":"quantitative"},"#,
                r#""color":{"field":"Product","type":"nominal"}},"title":"Sales Over Time"}"#,
                "\n```"
            )
            .to_string(),
        };

        let dataset = sample_sales();
        let question = "How do the sales of each product change over time?";

        let spec = generate_chart_spec(&generator, &dataset, question)
            .await
            .unwrap();

        assert_eq!(spec["mark"], "line");
        assert_eq!(spec["encoding"]["x"]["field"], "Month");
        assert_eq!(spec["encoding"]["color"]["field"], "Product");
        assert_eq!(spec["title"], "Sales Over Time");
    }

    #[tokio::test]
    async fn test_unparseable_completion_surfaces_raw_text() {
        let generator = MockGenerator {
            completion: "I cannot answer that.".to_string(),
        };

        let dataset = sample_sales();
        let result = generate_chart_spec(&generator, &dataset, "show sales").await;

        match result {
            Err(VegagenError::SpecParse { raw, .. }) => {
                assert_eq!(raw, "I cannot answer that.");
            }
            other => panic!("expected SpecParse error, got {:?}", other),
        }
    }
}
