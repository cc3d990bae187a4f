//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the root view's signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::config::{self, DEFAULT_PREDICTION_DAYS};
use dioxus::prelude::*;
use sa_api::{AnalyticsSnapshot, ApiClient};
use sa_data::load::Resource;

/// Shared state of the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Backend client
    pub api: Signal<ApiClient>,
    /// Analytics of the selected store, with its loading and error slots
    pub analytics: Signal<Resource<AnalyticsSnapshot>>,
    /// Store whose analytics are shown
    pub selected_store: Signal<Option<String>>,
    /// Prediction horizon in days, updated by the prediction card
    pub prediction_days: Signal<u32>,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Signal::new(api),
            analytics: Signal::new(Resource::default()),
            selected_store: Signal::new(None),
            prediction_days: Signal::new(DEFAULT_PREDICTION_DAYS),
        }
    }

    /// State talking to the backend at the page origin.
    pub fn from_window() -> Self {
        Self::new(ApiClient::new(config::api_origin()))
    }
}
