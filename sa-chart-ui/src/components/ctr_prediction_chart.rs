//! CTR forecast card: horizon selector, forecast line chart and trend cards.
//!
//! The card fetches on mount and whenever the store changes, resetting its
//! horizon to the parent's `days`. Picking another horizon fetches again and
//! reports the new value through `on_days_change`.

use crate::components::{Card, ChartContainer, LoadingSpinner};
use crate::config::PREDICTION_CHART_ID;
use crate::js_bridge::{self, ChartHandle};
use crate::state::AppState;
use dioxus::prelude::*;
use log::{error, info, warn};
use sa_api::{ApiClient, PredictionHorizon, PredictionSnapshot};
use sa_data::load::{Phase, Resource};
use sa_data::prediction::{
    HorizonControl, PredictionQuery, PredictionView, HORIZON_OPTIONS, NOT_ENOUGH_DATA,
};
use std::rc::Rc;

pub const PREDICTION_FAILED: &str = "Failed to load prediction data. Please try again later.";

#[derive(Props, Clone, PartialEq)]
pub struct CtrPredictionChartProps {
    pub store_id: String,
    #[props(default = PredictionHorizon::default().days())]
    pub days: u32,
    pub on_days_change: EventHandler<u32>,
}

fn fetch_prediction(
    api: Signal<ApiClient>,
    mut prediction: Signal<Resource<PredictionSnapshot>>,
    query: PredictionQuery,
) {
    let PredictionQuery { store_id, days } = query;
    let ticket = prediction.write().begin();
    let Some(horizon) = PredictionHorizon::new(days) else {
        warn!("Rejected prediction horizon of {} days", days);
        prediction.write().resolve(
            ticket,
            Err(format!(
                "Prediction horizon must be between {} and {} days",
                PredictionHorizon::MIN_DAYS,
                PredictionHorizon::MAX_DAYS
            )),
        );
        return;
    };

    let client = api.peek().clone();
    spawn(async move {
        info!("Loading CTR prediction for store {} ({} days)", store_id, days);
        let result = client
            .ctr_prediction(&store_id, horizon)
            .await
            .map_err(|e| {
                error!("Error loading prediction for store {}: {}", store_id, e);
                e.user_message(PREDICTION_FAILED)
            });
        prediction.write().resolve(ticket, result);
    });
}

#[component]
fn StatCard(title: String, value: String, style: String) -> Element {
    rsx! {
        div {
            style: "flex: 1 1 160px; padding: 8px; border-radius: 6px; text-align: center; {style}",
            h6 { style: "margin: 0; font-size: 13px;", "{title}" }
            div { style: "font-size: 24px; font-weight: 600;", "{value}" }
        }
    }
}

#[component]
pub fn CtrPredictionChart(props: CtrPredictionChartProps) -> Element {
    let state = use_context::<AppState>();
    let prediction = use_signal(Resource::<PredictionSnapshot>::default);
    let mut control = use_signal(|| HorizonControl::new(props.days));
    let chart = use_hook(|| Rc::new(ChartHandle::new(PREDICTION_CHART_ID)));

    let store_id = props.store_id.clone();
    let days = props.days;
    use_effect(use_reactive!(|(store_id, days)| {
        let query = control.write().props_changed(&store_id, days);
        if let Some(query) = query {
            fetch_prediction(state.api, prediction, query);
        }
    }));

    let handle = chart.clone();
    use_effect(move || {
        let current = prediction.read();
        let view = current
            .data()
            .filter(|_| current.phase() == Phase::Ready)
            .map(PredictionView::build)
            .filter(PredictionView::has_predictions);
        match view {
            Some(view) => {
                js_bridge::init_charts();
                handle.render_line(&view.chart_data(), &PredictionView::chart_config());
            }
            None => handle.release(),
        }
    });

    let on_days_change = props.on_days_change;
    let on_select = move |evt: Event<FormData>| {
        let Ok(days) = evt.value().parse::<u32>() else {
            return;
        };
        let query = control.write().select_days(days);
        on_days_change.call(days);
        if let Some(query) = query {
            fetch_prediction(state.api, prediction, query);
        }
    };

    let current = prediction.read();
    let view = current.data().map(PredictionView::build);
    let chosen = control.read().days();
    let store_label = view
        .as_ref()
        .and_then(|view| view.store_label.clone())
        .unwrap_or_default();

    rsx! {
        Card {
            title: format!("CTR Prediction for Next {} Days", chosen),
            subtitle: store_label,
            actions: rsx! {
                label {
                    style: "display: flex; align-items: center; gap: 6px; font-size: 13px;",
                    "Days:"
                    select {
                        onchange: on_select,
                        for option_days in HORIZON_OPTIONS {
                            option {
                                key: "{option_days}",
                                value: "{option_days}",
                                selected: option_days == chosen,
                                "{option_days}"
                            }
                        }
                    }
                }
            },
            if current.is_loading() {
                LoadingSpinner { message: "Loading predictions...".to_string() }
            } else if let Some(message) = current.error() {
                div {
                    style: "padding: 12px 16px; background: #f8d7da; color: #721c24; border-radius: 4px;",
                    "{message}"
                }
            } else if let Some(view) = view.filter(PredictionView::has_predictions) {
                ChartContainer { id: PREDICTION_CHART_ID.to_string() }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 12px;",
                    StatCard {
                        title: "Current CTR".to_string(),
                        value: format!("{}%", view.current_percent),
                        style: "background: #f8f9fa;".to_string(),
                    }
                    StatCard {
                        title: "Average Predicted CTR".to_string(),
                        value: format!("{}%", view.average_percent),
                        style: view.trend.card_style().to_string(),
                    }
                    StatCard {
                        title: "Trend".to_string(),
                        value: format!("{} {}", view.trend.icon(), view.change_label),
                        style: view.trend.card_style().to_string(),
                    }
                }
            } else {
                div {
                    style: "padding: 12px 16px; background: #fff3cd; color: #856404; border-radius: 4px;",
                    "{NOT_ENOUGH_DATA}"
                }
            }
        }
    }
}
