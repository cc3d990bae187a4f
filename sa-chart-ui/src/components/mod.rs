//! Reusable Dioxus RSX components for the store analytics dashboard.

mod analytics_summary;
mod card;
mod chart_container;
mod chart_header;
mod ctr_prediction_chart;
mod date_range_buttons;
mod error_display;
mod loading_spinner;
mod message_history;
mod store_selector;
mod template_performance;

pub use analytics_summary::AnalyticsSummary;
pub use card::Card;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use ctr_prediction_chart::{CtrPredictionChart, PREDICTION_FAILED};
pub use date_range_buttons::DateRangeButtons;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use message_history::MessageHistory;
pub use store_selector::StoreSelector;
pub use template_performance::TemplatePerformance;
