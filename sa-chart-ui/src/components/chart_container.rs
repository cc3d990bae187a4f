//! Chart container with a drag-to-resize handle.

use dioxus::prelude::*;
use sa_data::layout::{ResizeDrag, DEFAULT_CHART_HEIGHT};

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (Chart.js mounts its canvas here)
    pub id: String,
    /// Initial height in pixels
    #[props(default = DEFAULT_CHART_HEIGHT)]
    pub height: f64,
}

/// A container div for Chart.js charts. Dragging the bar under it resizes
/// the chart; heights outside the allowed range are ignored.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let initial = props.height;
    let mut height = use_signal(move || initial);
    let mut drag = use_signal(|| None::<ResizeDrag>);

    let start_resize = move |evt: Event<MouseData>| {
        evt.prevent_default();
        let y = evt.client_coordinates().y;
        drag.set(Some(ResizeDrag::new(y, height())));
    };

    let on_move = move |evt: Event<MouseData>| {
        let Some(active) = drag() else {
            return;
        };
        if let Some(next) = active.height_at(evt.client_coordinates().y) {
            height.set(next);
        }
    };

    let stop_resize = move |_: Event<MouseData>| drag.set(None);

    rsx! {
        div {
            style: "position: relative; width: 100%; height: {height}px;",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
        div {
            title: "Drag to resize",
            style: "height: 8px; margin-top: 4px; cursor: ns-resize; background: #f1f3f5; border-radius: 4px;",
            onmousedown: start_resize,
        }
        // Full-page overlay so the drag keeps tracking outside the handle.
        if drag().is_some() {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; cursor: ns-resize; z-index: 1000;",
                onmousemove: on_move,
                onmouseup: stop_resize,
                onmouseleave: stop_resize,
            }
        }
    }
}
