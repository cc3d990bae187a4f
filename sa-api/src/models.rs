//! Response models for the analytics backend.
//!
//! Field names follow the backend's camelCase JSON. Counts and month numbers
//! are accepted either as JSON numbers or as numeric strings, and missing or
//! null collections deserialize as empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An `{id, name}` pair from one of the dropdown endpoints.
///
/// Ids are carried as strings so numeric and string ids from the backend
/// both round-trip into URL paths unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: String,
    pub name: String,
}

pub type Organization = NamedEntity;
pub type Store = NamedEntity;

/// One `{year, month, count}` row of a per-month series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    #[serde(deserialize_with = "de::int")]
    pub year: i64,
    #[serde(deserialize_with = "de::int")]
    pub month: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub count: i64,
}

impl MonthCount {
    pub fn new(year: i64, month: i64, count: i64) -> Self {
        Self { year, month, count }
    }
}

/// Full analytics payload for one store, replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSnapshot {
    #[serde(deserialize_with = "de::count")]
    pub total_messages: i64,
    #[serde(deserialize_with = "de::count")]
    pub total_clicks: i64,
    /// Server-side CTR as a ratio; the dashboard recomputes its own.
    pub click_through_rate: Option<f64>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub messages_by_month: Vec<MonthCount>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub clicks_by_month: Vec<MonthCount>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub messages_by_template: BTreeMap<String, i64>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub clicks_by_template: BTreeMap<String, i64>,
    /// Template id -> click-through ratio.
    #[serde(deserialize_with = "de::null_as_default")]
    pub ctr_by_template: BTreeMap<String, f64>,
}

/// CTR forecast for one store over a day horizon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionSnapshot {
    #[serde(rename = "storeId", deserialize_with = "de::id")]
    pub store_id: Option<String>,
    #[serde(rename = "storeName")]
    pub store_name: Option<String>,
    /// ISO date label -> predicted click-through ratio.
    #[serde(deserialize_with = "de::null_as_default")]
    pub predictions: BTreeMap<String, f64>,
    #[serde(rename = "currentCTR", deserialize_with = "de::ratio")]
    pub current_ctr: f64,
    #[serde(rename = "averagePredictedCTR", deserialize_with = "de::ratio")]
    pub average_predicted_ctr: f64,
    /// Relative change as computed by the backend (ratio, not percent).
    #[serde(rename = "predictedCTRChange")]
    pub predicted_ctr_change: Option<f64>,
}

/// Message volume over a trailing window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentAnalytics {
    pub period: String,
    #[serde(rename = "recentMessages", deserialize_with = "de::count")]
    pub recent_messages: i64,
}

/// Number of days to forecast. The backend accepts 1 to 365.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PredictionHorizon(u32);

impl PredictionHorizon {
    pub const MIN_DAYS: u32 = 1;
    pub const MAX_DAYS: u32 = 365;

    pub fn new(days: u32) -> Option<Self> {
        (Self::MIN_DAYS..=Self::MAX_DAYS)
            .contains(&days)
            .then_some(Self(days))
    }

    pub fn days(self) -> u32 {
        self.0
    }
}

impl Default for PredictionHorizon {
    fn default() -> Self {
        Self(30)
    }
}

/// Lenient field deserializers.
mod de {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Int(i64),
        Float(f64),
        Text(String),
    }

    fn to_i64(value: Lenient) -> Result<i64, String> {
        match value {
            Lenient::Int(i) => Ok(i),
            Lenient::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
            Lenient::Float(f) => Err(format!("non-finite number {}", f)),
            Lenient::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("expected an integer, got {:?}", s)),
        }
    }

    /// Required integer, number or numeric string.
    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        to_i64(Lenient::deserialize(d)?).map_err(D::Error::custom)
    }

    /// Integer where null means zero.
    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        match Option::<Lenient>::deserialize(d)? {
            Some(value) => to_i64(value).map_err(D::Error::custom),
            None => Ok(0),
        }
    }

    /// Ratio where null means zero.
    pub fn ratio<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(0.0))
    }

    /// Numeric or string identifier; empty strings count as absent.
    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Lenient>::deserialize(d)? {
            Some(Lenient::Int(i)) => Some(i.to_string()),
            Some(Lenient::Float(f)) => Some(f.to_string()),
            Some(Lenient::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn analytics_snapshot_from_backend_json() {
        let body = json!({
            "totalMessages": 200,
            "totalClicks": 50,
            "clickThroughRate": 0.25,
            "messagesByMonth": [{"month": 3, "year": 2024, "count": 120}],
            "clicksByMonth": [{"month": "3", "year": "2024", "count": "30"}],
            "messagesByTemplate": {"1": 150, "2": 50},
            "clicksByTemplate": {"1": 40, "2": 10},
            "ctrByTemplate": {"1": 0.2667, "2": 0.2}
        });
        let snapshot: AnalyticsSnapshot = serde_json::from_value(body).unwrap();
        assert_eq!(snapshot.total_messages, 200);
        assert_eq!(snapshot.total_clicks, 50);
        assert_eq!(snapshot.messages_by_month, vec![MonthCount::new(2024, 3, 120)]);
        assert_eq!(snapshot.clicks_by_month, vec![MonthCount::new(2024, 3, 30)]);
        assert_eq!(snapshot.ctr_by_template.len(), 2);
        assert_eq!(snapshot.messages_by_template.get("1"), Some(&150));
    }

    #[test]
    fn analytics_snapshot_missing_fields_default() {
        let snapshot: AnalyticsSnapshot =
            serde_json::from_value(json!({"totalMessages": null, "messagesByMonth": null}))
                .unwrap();
        assert_eq!(snapshot.total_messages, 0);
        assert_eq!(snapshot.total_clicks, 0);
        assert!(snapshot.messages_by_month.is_empty());
        assert!(snapshot.ctr_by_template.is_empty());
        assert_eq!(snapshot.click_through_rate, None);
    }

    #[test]
    fn month_count_rejects_garbage_month() {
        let result: Result<MonthCount, _> =
            serde_json::from_value(json!({"year": 2024, "month": "March", "count": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn prediction_snapshot_field_names() {
        let body = json!({
            "storeId": 42,
            "storeName": "Main Street",
            "predictions": {"2024-05-02": 0.11, "2024-05-01": 0.1},
            "currentCTR": 0.1,
            "averagePredictedCTR": 0.105,
            "predictedCTRChange": 0.05
        });
        let snapshot: PredictionSnapshot = serde_json::from_value(body).unwrap();
        assert_eq!(snapshot.store_id.as_deref(), Some("42"));
        assert_eq!(snapshot.predictions.len(), 2);
        assert_eq!(snapshot.current_ctr, 0.1);
        assert_eq!(snapshot.average_predicted_ctr, 0.105);
        assert_eq!(snapshot.predicted_ctr_change, Some(0.05));
    }

    #[test]
    fn recent_analytics_fields() {
        let recent: RecentAnalytics =
            serde_json::from_value(json!({"period": "7 days", "recentMessages": 12})).unwrap();
        assert_eq!(recent.period, "7 days");
        assert_eq!(recent.recent_messages, 12);
    }

    #[test]
    fn prediction_horizon_bounds() {
        assert!(PredictionHorizon::new(0).is_none());
        assert_eq!(PredictionHorizon::new(1).map(|h| h.days()), Some(1));
        assert_eq!(PredictionHorizon::new(365).map(|h| h.days()), Some(365));
        assert!(PredictionHorizon::new(366).is_none());
        assert_eq!(PredictionHorizon::default().days(), 30);
    }
}
