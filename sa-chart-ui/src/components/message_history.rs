//! Messages-sent and link-clicks line chart with a date range filter.

use crate::components::{Card, ChartContainer, DateRangeButtons};
use crate::config::HISTORY_CHART_ID;
use crate::js_bridge::{self, ChartHandle};
use chrono::Local;
use dioxus::prelude::*;
use sa_api::AnalyticsSnapshot;
use sa_data::history::{DateRange, HistoryView};
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct MessageHistoryProps {
    pub analytics: AnalyticsSnapshot,
}

#[component]
pub fn MessageHistory(props: MessageHistoryProps) -> Element {
    let mut range = use_signal(DateRange::default);
    let chart = use_hook(|| Rc::new(ChartHandle::new(HISTORY_CHART_ID)));

    let analytics = props.analytics.clone();
    let handle = chart.clone();
    use_effect(use_reactive!(|analytics| {
        let selected = range();
        js_bridge::init_charts();
        let view = HistoryView::build(&analytics, selected, Local::now().date_naive());
        handle.render_line(&view.chart_data(), &HistoryView::chart_config());
    }));

    let view = HistoryView::build(&props.analytics, range(), Local::now().date_naive());

    rsx! {
        Card {
            title: "Message History".to_string(),
            footer: "Messages sent and clicks over time".to_string(),
            actions: rsx! {
                DateRangeButtons {
                    selected: range(),
                    on_change: move |next: DateRange| range.set(next),
                }
            },
            ChartContainer { id: HISTORY_CHART_ID.to_string() }
            div {
                style: "display: flex; justify-content: space-between; margin-top: 12px; font-size: 12px; color: #6c757d;",
                span { "Total Messages: {view.total_messages}" }
                span { "Total Clicks: {view.total_clicks}" }
            }
        }
    }
}
