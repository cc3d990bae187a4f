//! Backend routes, relative to the API origin.
//!
//! A route is kept as raw path segments plus query pairs; ids are never
//! spliced into a path string. [`crate::ApiClient::url`] percent-encodes
//! each segment when it builds the request URL.

use crate::models::PredictionHorizon;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub segments: Vec<String>,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
        }
    }

    fn with_days(mut self, days: u32) -> Self {
        self.query.push(("days", days.to_string()));
        self
    }
}

pub fn organizations_dropdown() -> Endpoint {
    Endpoint::new(&["api", "organizations", "dropdown"])
}

pub fn stores_dropdown(organization_id: &str) -> Endpoint {
    Endpoint::new(&["api", "stores", "organization", organization_id, "dropdown"])
}

pub fn store_analytics(store_id: &str) -> Endpoint {
    Endpoint::new(&["api", "analytics", "store", store_id])
}

pub fn recent_analytics(store_id: &str, days: u32) -> Endpoint {
    Endpoint::new(&["api", "analytics", "store", store_id, "recent"]).with_days(days)
}

pub fn ctr_prediction(store_id: &str, horizon: PredictionHorizon) -> Endpoint {
    Endpoint::new(&["api", "predictions", "ctr", store_id]).with_days(horizon.days())
}
