//! Card header with a title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Card title
    pub title: String,
    /// Short description under the title (e.g., "Y-axis: Click-Through Rate (%)")
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Title block shown at the top of every dashboard card.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            h3 {
                style: "margin: 0; font-size: 16px; font-weight: 600;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 2px 0 0 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
