//! Store Analytics Dashboard
//!
//! Pick an organization and one of its stores to see message volume, link
//! clicks, click-through rate by template and a CTR forecast.
//!
//! Data flow:
//! 1. `StoreSelector` loads organizations and stores from the backend at the
//!    page origin and emits the auto-selected (or user-selected) store id.
//! 2. The root view fetches that store's analytics snapshot into `AppState`.
//! 3. The summary, history and template cards render from the snapshot; the
//!    prediction card fetches its own forecast.
//! 4. Charts are drawn through the Chart.js bridge in `sa-chart-ui`.

use dioxus::prelude::*;
use log::{error, info, warn};
use sa_chart_ui::components::{
    AnalyticsSummary, CtrPredictionChart, ErrorDisplay, LoadingSpinner, MessageHistory,
    StoreSelector, TemplatePerformance,
};
use sa_chart_ui::state::AppState;
use sa_data::summary::SummaryView;

const ANALYTICS_FAILED: &str = "Failed to load analytics data. Please try again later.";
const NO_ANALYTICS: &str = "No analytics data returned for this store";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("store-dashboard-root"))
        .launch(App);
}

/// Replace the analytics snapshot with the one for `store_id`.
///
/// The previous snapshot and error are cleared before the request goes out;
/// a response for a store that has since been replaced is dropped.
fn load_store_analytics(mut state: AppState, store_id: String) {
    if store_id.is_empty() {
        return;
    }
    state.selected_store.set(Some(store_id.clone()));
    let ticket = state.analytics.write().begin_fresh();
    let api = state.api.peek().clone();

    spawn(async move {
        info!("Loading analytics for store {}", store_id);
        let result = match api.store_analytics(&store_id).await {
            Ok(Some(snapshot)) => Ok(snapshot),
            Ok(None) => {
                warn!("Empty analytics body for store {}", store_id);
                Err(NO_ANALYTICS.to_string())
            }
            Err(e) => {
                error!("Error loading analytics for store {}: {}", store_id, e);
                Err(e.user_message(ANALYTICS_FAILED))
            }
        };
        state.analytics.write().resolve(ticket, result);
    });
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::from_window);

    let analytics = state.analytics.read();
    let snapshot = analytics.data().cloned();
    let selected_store = (state.selected_store)();

    rsx! {
        div {
            style: "min-height: 100vh; background: #f5f6f8; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            nav {
                style: "padding: 12px 24px; margin-bottom: 24px; background: #007bff; color: #fff; font-size: 20px;",
                "Store Analytics Dashboard"
            }

            div {
                style: "max-width: 1140px; margin: 0 auto; padding: 0 16px;",

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    div {
                        style: "flex: 1 1 280px; max-width: 380px;",
                        StoreSelector {
                            on_store_change: move |store_id: String| load_store_analytics(state, store_id),
                        }
                    }
                    if let Some(snapshot) = snapshot.as_ref() {
                        div {
                            style: "flex: 2 1 480px;",
                            AnalyticsSummary { summary: SummaryView::from_snapshot(snapshot) }
                        }
                    }
                }

                if analytics.is_loading() {
                    LoadingSpinner { message: "Loading analytics data...".to_string() }
                } else if let Some(message) = analytics.error() {
                    ErrorDisplay {
                        message: message.to_string(),
                        on_dismiss: move |_| state.analytics.write().dismiss_error(),
                    }
                } else if let Some(snapshot) = snapshot {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 16px;",
                        div {
                            style: "flex: 1 1 480px; min-width: 0;",
                            MessageHistory { analytics: snapshot.clone() }
                        }
                        div {
                            style: "flex: 1 1 480px; min-width: 0;",
                            TemplatePerformance { analytics: snapshot }
                        }
                    }
                    if let Some(store_id) = selected_store {
                        h4 {
                            style: "margin: 16px 0 12px 0;",
                            "AI-Powered Insights"
                        }
                        CtrPredictionChart {
                            store_id,
                            days: (state.prediction_days)(),
                            on_days_change: move |days: u32| state.prediction_days.set(days),
                        }
                    }
                } else {
                    div {
                        style: "margin: 40px 0; padding: 16px; text-align: center; background: #d1ecf1; color: #0c5460; border-radius: 4px;",
                        "Select an organization and store to view analytics"
                    }
                }
            }

            footer {
                style: "margin-top: 48px; padding-bottom: 16px; text-align: center; color: #6c757d; font-size: 13px;",
                "Store Analytics Dashboard"
            }
        }
    }
}
