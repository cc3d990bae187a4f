//! Click-through rate by message template as a doughnut chart.

use crate::components::{Card, ChartContainer, DateRangeButtons};
use crate::config::TEMPLATE_CHART_ID;
use crate::js_bridge::{self, ChartHandle};
use dioxus::prelude::*;
use sa_api::AnalyticsSnapshot;
use sa_data::chart::ChartConfig;
use sa_data::history::DateRange;
use sa_data::templates::TemplateView;
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct TemplatePerformanceProps {
    pub analytics: AnalyticsSnapshot,
}

#[component]
pub fn TemplatePerformance(props: TemplatePerformanceProps) -> Element {
    let mut range = use_signal(DateRange::default);
    let chart = use_hook(|| Rc::new(ChartHandle::new(TEMPLATE_CHART_ID)));

    let analytics = props.analytics.clone();
    let handle = chart.clone();
    use_effect(use_reactive!(|analytics| {
        let view = TemplateView::build(&analytics, range());
        if !view.has_data() {
            handle.release();
            return;
        }
        js_bridge::init_charts();
        handle.render_doughnut(&view.chart_data(), &ChartConfig::default());
    }));

    let has_data = TemplateView::build(&props.analytics, range()).has_data();

    rsx! {
        Card {
            title: "Template Performance".to_string(),
            footer: "Click-through rates by template".to_string(),
            actions: rsx! {
                DateRangeButtons {
                    selected: range(),
                    on_change: move |next: DateRange| range.set(next),
                }
            },
            if !has_data {
                div {
                    style: "padding: 16px; text-align: center; background: #d1ecf1; color: #0c5460; border-radius: 4px;",
                    "No template performance data available"
                }
            } else {
                ChartContainer { id: TEMPLATE_CHART_ID.to_string() }
            }
        }
    }
}
