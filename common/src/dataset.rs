use crate::error::{Result, VegagenError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// pandas-style dtype tags, kept as the model sees them in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DType {
    Object,
    Int64,
    Float64,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Object => "object",
            DType::Int64 => "int64",
            DType::Float64 => "float64",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub dtype: DType,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: DType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }
}

/// In-memory tabular data the chart is generated from. Immutable after
/// construction; columns are stored in declaration order.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.values.len();
            for column in &columns {
                if column.values.len() != expected {
                    return Err(VegagenError::Dataset(format!(
                        "column {} has {} values, expected {}",
                        column.name,
                        column.values.len(),
                        expected
                    )));
                }
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// row-oriented view, used to inline `data.values` into a chart spec
    pub fn rows(&self) -> Vec<Map<String, Value>> {
        let count = self.row_count();
        let mut rows = Vec::with_capacity(count);

        for i in 0..count {
            let mut row = Map::new();
            for column in &self.columns {
                row.insert(column.name.clone(), column.values[i].clone());
            }
            rows.push(row);
        }

        rows
    }
}

/// The fixed demo frame: monthly sales for two products, with precomputed
/// month-over-month change. The first month of each product has no MoM value.
pub fn sample_sales() -> Dataset {
    let columns = vec![
        Column::new(
            "Product",
            DType::Object,
            vec![
                json!("Product A"),
                json!("Product A"),
                json!("Product A"),
                json!("Product A"),
                json!("Product A"),
                json!("Product B"),
                json!("Product B"),
                json!("Product B"),
                json!("Product B"),
                json!("Product B"),
            ],
        ),
        Column::new(
            "Month",
            DType::Object,
            vec![
                json!("2023-01"),
                json!("2023-02"),
                json!("2023-03"),
                json!("2023-04"),
                json!("2023-05"),
                json!("2023-01"),
                json!("2023-02"),
                json!("2023-03"),
                json!("2023-04"),
                json!("2023-05"),
            ],
        ),
        Column::new(
            "Sales",
            DType::Int64,
            vec![
                json!(200),
                json!(250),
                json!(225),
                json!(275),
                json!(300),
                json!(150),
                json!(160),
                json!(155),
                json!(165),
                json!(170),
            ],
        ),
        Column::new(
            "MoM_Change (%)",
            DType::Float64,
            vec![
                Value::Null,
                json!(25.0),
                json!(-10.0),
                json!(22.22),
                json!(9.09),
                Value::Null,
                json!(6.67),
                json!(-3.13),
                json!(6.45),
                json!(3.03),
            ],
        ),
    ];

    Dataset { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sales_shape() {
        let dataset = sample_sales();

        assert_eq!(dataset.row_count(), 10);
        assert_eq!(dataset.columns().len(), 4);

        let names: Vec<&str> = dataset.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Product", "Month", "Sales", "MoM_Change (%)"]);
    }

    #[test]
    fn test_sample_sales_dtypes() {
        let dataset = sample_sales();

        assert_eq!(dataset.columns()[0].dtype, DType::Object);
        assert_eq!(dataset.columns()[2].dtype, DType::Int64);
        assert_eq!(dataset.columns()[3].dtype, DType::Float64);
    }

    #[test]
    fn test_rows_are_row_oriented() {
        let dataset = sample_sales();
        let rows = dataset.rows();

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0]["Product"], json!("Product A"));
        assert_eq!(rows[0]["Month"], json!("2023-01"));
        assert_eq!(rows[0]["Sales"], json!(200));
        assert_eq!(rows[0]["MoM_Change (%)"], Value::Null);
        assert_eq!(rows[9]["Sales"], json!(170));
    }

    #[test]
    fn test_new_rejects_ragged_columns() {
        let result = Dataset::new(vec![
            Column::new("a", DType::Int64, vec![json!(1), json!(2)]),
            Column::new("b", DType::Int64, vec![json!(1)]),
        ]);

        assert!(result.is_err());
    }
}
