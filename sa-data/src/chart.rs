//! Dataset shapes handed to the JS chart bridge as JSON.
//!
//! Field names are camelCase so they map directly onto Chart.js dataset
//! options on the JS side.

use serde::Serialize;

/// One line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub border_color: String,
    pub background_color: String,
    pub data: Vec<f64>,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u32; 2]>,
    pub tension: f64,
}

impl LineDataset {
    pub fn new(label: &str, border_color: &str, background_color: &str, data: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            border_color: border_color.to_string(),
            background_color: background_color.to_string(),
            data,
            point_radius: 3,
            point_hover_radius: 6,
            border_width: 2,
            border_dash: None,
            tension: 0.0,
        }
    }
}

/// Data for a line chart: shared x labels and one or more series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

/// Data for a doughnut chart: one value and one color per label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DoughnutChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

/// Per-chart display options read by the JS renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    /// Appended to y tick and tooltip values, e.g. `%`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_suffix: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn line_dataset_serializes_camel_case() {
        let mut dataset = LineDataset::new("Current CTR", "#f00", "#fee", vec![1.0]);
        dataset.border_dash = Some([5, 5]);
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["borderColor"], json!("#f00"));
        assert_eq!(value["borderDash"], json!([5, 5]));
        assert_eq!(value["pointHoverRadius"], json!(6));
    }

    #[test]
    fn empty_config_serializes_to_empty_object() {
        let value = serde_json::to_value(ChartConfig::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
