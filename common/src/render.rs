use crate::dataset::Dataset;
use serde_json::{json, Value};

const CHART_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
</head>
<body>
  <div id="vis"></div>
  <script>
    vegaEmbed("#vis", {spec}).catch(console.error);
  </script>
</body>
</html>
"##;

/// Copy of the spec with the dataset inlined as `data.values`, so the page
/// is self-contained. Rendering validity is the chart library's concern.
pub fn attach_dataset_values(spec: &Value, dataset: &Dataset) -> Value {
    let mut merged = spec.clone();

    if let Value::Object(map) = &mut merged {
        map.insert("data".to_string(), json!({ "values": dataset.rows() }));
    }

    merged
}

/// Standalone HTML page rendering the spec with vega-embed.
pub fn chart_html(spec: &Value) -> String {
    let title = spec
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("Vega-Lite Chart");

    CHART_PAGE_TEMPLATE
        .replace("{title}", title)
        .replace("{spec}", &spec.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_sales;

    #[test]
    fn test_attach_dataset_values_inlines_rows() {
        let spec = serde_json::json!({"mark": "line", "title": "Sales"});
        let dataset = sample_sales();

        let merged = attach_dataset_values(&spec, &dataset);

        assert_eq!(merged["mark"], "line");
        assert_eq!(merged["data"]["values"].as_array().unwrap().len(), 10);
        assert_eq!(merged["data"]["values"][0]["Product"], "Product A");
    }

    #[test]
    fn test_chart_html_embeds_spec_and_title() {
        let spec = serde_json::json!({"mark": "bar", "title": "Monthly Sales"});
        let html = chart_html(&spec);

        assert!(html.contains("<title>Monthly Sales</title>"));
        assert!(html.contains(r#""mark":"bar""#));
        assert!(html.contains("vega-embed"));
        assert!(!html.contains("{spec}"));
    }

    #[test]
    fn test_chart_html_falls_back_to_default_title() {
        let spec = serde_json::json!({"mark": "bar"});
        let html = chart_html(&spec);

        assert!(html.contains("<title>Vega-Lite Chart</title>"));
    }
}
