//! Button group choosing the history date range.

use dioxus::prelude::*;
use sa_data::history::DateRange;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangeButtonsProps {
    pub selected: DateRange,
    pub on_change: EventHandler<DateRange>,
}

fn button_style(active: bool) -> &'static str {
    if active {
        "padding: 2px 8px; font-size: 12px; border: 1px solid #6c757d; background: #6c757d; color: #fff; cursor: pointer;"
    } else {
        "padding: 2px 8px; font-size: 12px; border: 1px solid #6c757d; background: #fff; color: #6c757d; cursor: pointer;"
    }
}

#[component]
pub fn DateRangeButtons(props: DateRangeButtonsProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            style: "display: flex;",
            for range in DateRange::ALL {
                button {
                    style: button_style(range == props.selected),
                    onclick: move |_| on_change.call(range),
                    {range.label()}
                }
            }
        }
    }
}
