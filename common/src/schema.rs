use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// number of leading rows embedded in the prompt as sample data
pub const SAMPLE_ROWS: usize = 2;

/// Compact, serializable view of a dataset: column dtype tags plus a
/// column-oriented sample of the first rows. Built fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDescription {
    pub columns: BTreeMap<String, String>,
    pub sample_data: BTreeMap<String, Vec<Value>>,
}

pub fn describe_dataset(dataset: &Dataset) -> SchemaDescription {
    let mut columns = BTreeMap::new();
    let mut sample_data = BTreeMap::new();

    for column in dataset.columns() {
        columns.insert(column.name.clone(), column.dtype.as_str().to_string());

        let sample: Vec<Value> = column.values.iter().take(SAMPLE_ROWS).cloned().collect();
        sample_data.insert(column.name.clone(), sample);
    }

    SchemaDescription {
        columns,
        sample_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_sales;
    use serde_json::json;

    #[test]
    fn test_describe_columns_exactly_match_dataset() {
        let dataset = sample_sales();
        let description = describe_dataset(&dataset);

        let mut names: Vec<&str> = description.columns.keys().map(String::as_str).collect();
        names.sort();
        assert_eq!(names, vec!["MoM_Change (%)", "Month", "Product", "Sales"]);

        assert_eq!(description.columns["Product"], "object");
        assert_eq!(description.columns["Month"], "object");
        assert_eq!(description.columns["Sales"], "int64");
        assert_eq!(description.columns["MoM_Change (%)"], "float64");
    }

    #[test]
    fn test_describe_sample_holds_first_two_rows() {
        let dataset = sample_sales();
        let description = describe_dataset(&dataset);

        assert_eq!(
            description.sample_data["Product"],
            vec![json!("Product A"), json!("Product A")]
        );
        assert_eq!(
            description.sample_data["Month"],
            vec![json!("2023-01"), json!("2023-02")]
        );
        assert_eq!(
            description.sample_data["Sales"],
            vec![json!(200), json!(250)]
        );
        assert_eq!(
            description.sample_data["MoM_Change (%)"],
            vec![Value::Null, json!(25.0)]
        );
    }

    #[test]
    fn test_description_serializes_to_json() {
        let dataset = sample_sales();
        let description = describe_dataset(&dataset);

        let text = serde_json::to_string(&description.columns).unwrap();
        assert!(text.contains("\"Sales\":\"int64\""));
    }
}
