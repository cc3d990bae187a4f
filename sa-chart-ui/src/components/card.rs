//! Bordered card with a header row, body and optional footer note.

use super::ChartHeader;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    /// Muted note rendered in the footer
    #[props(default = String::new())]
    pub footer: String,
    /// Controls rendered at the right of the header (range buttons, selects)
    pub actions: Element,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "background: #fff; border: 1px solid #dee2e6; border-radius: 6px; margin-bottom: 16px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 8px; flex-wrap: wrap; padding: 10px 16px; border-bottom: 1px solid #dee2e6; background: #f8f9fa;",
                ChartHeader {
                    title: props.title.clone(),
                    subtitle: props.subtitle.clone(),
                }
                {props.actions}
            }
            div {
                style: "padding: 16px;",
                {props.children}
            }
            if !props.footer.is_empty() {
                div {
                    style: "padding: 8px 16px; border-top: 1px solid #dee2e6; background: #f8f9fa; font-size: 12px; color: #6c757d;",
                    "{props.footer}"
                }
            }
        }
    }
}
