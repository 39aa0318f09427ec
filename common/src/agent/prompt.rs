use crate::error::Result;
use crate::schema::SchemaDescription;

/// Fixed instruction template. Encodes the full output contract the model is
/// expected to honor: allowed mark types, required x/y encoding channels,
/// optional transform keys, title requirement, and the json-only instruction.
pub const CHART_PROMPT_TEMPLATE: &str = r#"You are a deterministic data visualization assistant with expertise in Vega-Lite v5. You must generate a complete, syntactically correct, and schema-compliant Vega-Lite JSON specification based on the official JSON schema defined at https://vega.github.io/schema/vega-lite/v5.json. Do not output any extra commentary or text - only valid JSON.

User Question: {question}

DataFrame Schema:
- Columns (with data types):
    {columns}

- Sample Data:
    {sample_data}

Instructions:
    - Only include keys defined in the schema (such as "mark", "encoding", "transform", "title", "config", etc.) and use proper data types.

1. **Mark Property:**
   - The "mark" property must be one of the allowed values defined in the schema. Allowed mark types are:
       "arc", "area", "bar", "image", "line", "point", "rect", "rule", "text", "tick", "trail", "circle", "square", "geoshape"
   - You may specify additional mark properties (like "color", "fill", "stroke", "opacity", etc.) if relevant.

2. **Encoding Property:**
   - The "encoding" property must include at least the "x" and "y" channels.
   - For each channel, include:
       - "field": a valid column name from the DataFrame.
       - "type": one of "quantitative", "temporal", "ordinal", or "nominal".
   - Optionally, add additional channels (such as "color", "size", "tooltip", "detail", "shape") as needed to answer the question.

3. **Transformations and Additional Properties (Optional):**
   - If the user question requires data manipulation, include a "transform" array with objects using keys like "filter", "calculate", "aggregate", "bin", "timeUnit", "window", etc. Ensure these objects follow the schema.
   - Other keys such as "selection", "layer", "facet", "hconcat", "vconcat", or "repeat" may be included if needed and defined in the schema.

4. **Title Property:**
   - Include a "title" property with a string that describes the chart.

Generalized JSON Template:

{
  "mark": "<mark_type>",
  "encoding": {
    "x": {
      "field": "<x_field>",
      "type": "<x_type>"
    },
    "y": {
      "field": "<y_field>",
      "type": "<y_type>"
    }
  },
  "title": "<Chart Title>"
}

Now, based on the above instructions and the provided DataFrame schema, generate a complete Vega-Lite JSON specification. Strictly your response should be json only without any additional explanation like ```json. json response should start and end with curly braces only nothing else."#;

/// Substitute the question and the serialized schema fields into the fixed
/// template. The output contains the question and both serialized fields
/// verbatim.
pub fn build_chart_prompt(question: &str, description: &SchemaDescription) -> Result<String> {
    let columns = serde_json::to_string(&description.columns)?;
    let sample_data = serde_json::to_string(&description.sample_data)?;

    Ok(CHART_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{columns}", &columns)
        .replace("{sample_data}", &sample_data))
}
