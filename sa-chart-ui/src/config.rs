//! Backend origin and UI defaults.

use log::warn;

/// Used when the page origin cannot be read (e.g. `file://` pages).
pub const FALLBACK_API_ORIGIN: &str = "http://localhost:8080";

/// Horizon requested by the prediction card before the user picks one.
pub const DEFAULT_PREDICTION_DAYS: u32 = 30;

/// DOM ids of the chart containers.
pub const HISTORY_CHART_ID: &str = "message-history-chart";
pub const TEMPLATE_CHART_ID: &str = "template-performance-chart";
pub const PREDICTION_CHART_ID: &str = "ctr-prediction-chart";

/// Origin of the page the app is served from; the backend lives there too.
pub fn api_origin() -> String {
    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    match origin {
        Some(origin) if origin.starts_with("http") => origin,
        other => {
            warn!(
                "Page origin {:?} is not http(s), using {}",
                other, FALLBACK_API_ORIGIN
            );
            FALLBACK_API_ORIGIN.to_string()
        }
    }
}
