//! CTR forecast view: percent change, trend and the chart series.

use crate::chart::{ChartConfig, LineChartData, LineDataset};
use sa_api::PredictionSnapshot;
use sa_utils::dates::parse_label_date;
use sa_utils::format::{ratio_as_percent, signed_percent};
use std::collections::BTreeMap;

/// Percent change beyond which the trend is styled as up or down.
pub const TREND_THRESHOLD_PERCENT: f64 = 5.0;

/// Horizons offered by the day selector.
pub const HORIZON_OPTIONS: [u32; 5] = [7, 14, 30, 60, 90];

/// Shown when the forecast has no points.
pub const NOT_ENOUGH_DATA: &str = "Not enough historical data to generate predictions";

/// Percent change from `current` to `predicted`; zero when either is zero.
pub fn percent_change(current: f64, predicted: f64) -> f64 {
    if current == 0.0 || predicted == 0.0 {
        return 0.0;
    }
    (predicted - current) / current * 100.0
}

/// Direction of the forecast relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    /// Strictly above +5% is positive, strictly below -5% negative.
    pub fn classify(percent_change: f64) -> Self {
        if percent_change > TREND_THRESHOLD_PERCENT {
            Trend::Positive
        } else if percent_change < -TREND_THRESHOLD_PERCENT {
            Trend::Negative
        } else {
            Trend::Neutral
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Trend::Positive => "\u{2191}",
            Trend::Negative => "\u{2193}",
            Trend::Neutral => "=",
        }
    }

    /// Inline card style.
    pub fn card_style(self) -> &'static str {
        match self {
            Trend::Positive => "background: #28a745; color: #fff;",
            Trend::Negative => "background: #dc3545; color: #fff;",
            Trend::Neutral => "background: #ffc107; color: #212529;",
        }
    }
}

/// Prediction points sorted chronologically by their date labels.
///
/// Labels that do not parse as dates sort after all dated points, in
/// label order.
pub fn sorted_predictions(predictions: &BTreeMap<String, f64>) -> Vec<(String, f64)> {
    let mut points: Vec<(String, f64)> = predictions
        .iter()
        .map(|(label, value)| (label.clone(), *value))
        .collect();
    points.sort_by_cached_key(|(label, _)| {
        let parsed = parse_label_date(label);
        (parsed.is_none(), parsed)
    });
    points
}

/// One prediction request the card should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    pub store_id: String,
    pub days: u32,
}

/// Decides when the prediction card fetches.
///
/// The card reports its chosen horizon to the parent, which echoes it back
/// as the `days` prop. Only a store change (or the first store) reloads
/// from props; an echoed horizon never does. Choosing a horizon in the
/// card fetches exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonControl {
    store_id: Option<String>,
    days: u32,
}

impl HorizonControl {
    pub fn new(days: u32) -> Self {
        Self {
            store_id: None,
            days,
        }
    }

    /// Horizon currently selected in the card.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// New props arrived. Returns a query when the store changed, adopting
    /// the parent's horizon.
    pub fn props_changed(&mut self, store_id: &str, parent_days: u32) -> Option<PredictionQuery> {
        if self.store_id.as_deref() == Some(store_id) {
            return None;
        }
        self.store_id = Some(store_id.to_string());
        self.days = parent_days;
        Some(PredictionQuery {
            store_id: store_id.to_string(),
            days: parent_days,
        })
    }

    /// The user picked a horizon in the card.
    pub fn select_days(&mut self, days: u32) -> Option<PredictionQuery> {
        self.days = days;
        self.store_id.clone().map(|store_id| PredictionQuery { store_id, days })
    }
}

/// Everything the prediction card renders for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    /// Current CTR as a percentage string, e.g. `4.20`.
    pub current_percent: String,
    pub average_percent: String,
    pub percent_change: f64,
    /// e.g. `+12.50%`
    pub change_label: String,
    pub trend: Trend,
    pub labels: Vec<String>,
    /// Predicted values in percent.
    pub predicted: Vec<f64>,
    /// Current CTR in percent, repeated once per label.
    pub current_line: Vec<f64>,
    /// e.g. `Main Street (#42)`
    pub store_label: Option<String>,
    /// The backend's own change figure, formatted like `change_label`.
    pub reported_change_label: Option<String>,
}

fn store_label(snapshot: &PredictionSnapshot) -> Option<String> {
    let name = snapshot.store_name.as_deref().filter(|name| !name.is_empty());
    match (name, snapshot.store_id.as_deref()) {
        (Some(name), Some(id)) => Some(format!("{} (#{})", name, id)),
        (Some(name), None) => Some(name.to_string()),
        (None, Some(id)) => Some(format!("Store #{}", id)),
        (None, None) => None,
    }
}

impl PredictionView {
    pub fn build(snapshot: &PredictionSnapshot) -> Self {
        let change = percent_change(snapshot.current_ctr, snapshot.average_predicted_ctr);
        let (labels, predicted): (Vec<String>, Vec<f64>) = sorted_predictions(&snapshot.predictions)
            .into_iter()
            .map(|(label, ratio)| (label, ratio * 100.0))
            .unzip();
        let current_line = vec![snapshot.current_ctr * 100.0; labels.len()];

        Self {
            current_percent: ratio_as_percent(snapshot.current_ctr),
            average_percent: ratio_as_percent(snapshot.average_predicted_ctr),
            percent_change: change,
            change_label: signed_percent(change),
            trend: Trend::classify(change),
            labels,
            predicted,
            current_line,
            store_label: store_label(snapshot),
            reported_change_label: snapshot
                .predicted_ctr_change
                .map(|ratio| signed_percent(ratio * 100.0)),
        }
    }

    pub fn has_predictions(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn chart_data(&self) -> LineChartData {
        let mut predicted = LineDataset::new(
            "Predicted CTR",
            "rgba(54, 162, 235, 1)",
            "rgba(54, 162, 235, 0.2)",
            self.predicted.clone(),
        );
        predicted.tension = 0.3;

        let mut current = LineDataset::new(
            "Current CTR",
            "rgba(255, 99, 132, 1)",
            "rgba(255, 99, 132, 0.1)",
            self.current_line.clone(),
        );
        current.border_dash = Some([5, 5]);
        current.point_radius = 0;
        current.point_hover_radius = 0;

        LineChartData {
            labels: self.labels.clone(),
            datasets: vec![predicted, current],
        }
    }

    pub fn chart_config() -> ChartConfig {
        ChartConfig {
            x_axis_label: Some("Date".to_string()),
            y_axis_label: Some("Click-Through Rate (%)".to_string()),
            value_suffix: "%".to_string(),
        }
    }
}
