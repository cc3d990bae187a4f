//! Headline totals for the selected store.

use dioxus::prelude::*;
use sa_data::summary::SummaryView;

#[derive(Props, Clone, PartialEq)]
pub struct AnalyticsSummaryProps {
    pub summary: SummaryView,
}

#[component]
fn SummaryCard(value: String, label: String) -> Element {
    rsx! {
        div {
            style: "flex: 1 1 160px; padding: 16px; background: #fff; border: 1px solid #dee2e6; border-radius: 6px; text-align: center;",
            div {
                style: "font-size: 28px; font-weight: 700; color: #007bff;",
                "{value}"
            }
            div {
                style: "font-size: 13px; color: #6c757d;",
                "{label}"
            }
        }
    }
}

/// Total messages, total clicks and the overall click-through rate.
#[component]
pub fn AnalyticsSummary(props: AnalyticsSummaryProps) -> Element {
    let summary = &props.summary;

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 16px;",
            SummaryCard {
                value: summary.total_messages.to_string(),
                label: "Total Messages Sent".to_string(),
            }
            SummaryCard {
                value: summary.total_clicks.to_string(),
                label: "Total Link Clicks".to_string(),
            }
            SummaryCard {
                value: format!("{}%", summary.click_through_rate),
                label: "Overall Click-Through Rate".to_string(),
            }
        }
    }
}
