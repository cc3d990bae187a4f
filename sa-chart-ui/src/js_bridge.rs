//! Typed wrappers around Chart.js interop via `js_sys::eval()`.
//!
//! Chart renderers live in `assets/js/*.js` and are evaluated as globals
//! (no ES modules) once Chart.js is available. Rust owns each chart through
//! a [`ChartHandle`]: rendering destroys the previous instance in that
//! container first, and dropping the handle destroys the chart.

use log::warn;
use sa_data::chart::{ChartConfig, DoughnutChartData, LineChartData};
use serde::Serialize;
use std::cell::Cell;

// Embed all chart JS files at compile time
static CHART_REGISTRY_JS: &str = include_str!("../assets/js/chart-registry.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static DOUGHNUT_CHART_JS: &str = include_str!("../assets/js/doughnut-chart.js");

/// Chart.js build injected when the host page did not load one.
const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// JSON-encode `value` for splicing into a JS snippet.
fn to_js_literal<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Failed to serialize chart payload: {}", e);
            None
        }
    }
}

/// Load Chart.js if needed and initialize the chart scripts. Safe to call
/// more than once; only the first call does anything.
///
/// The renderer files declare plain `function`s. They are evaluated at
/// global scope via indirect eval once `Chart` exists, then promoted to
/// `window.*` explicitly.
pub fn init_charts() {
    let all_js = [CHART_REGISTRY_JS, LINE_CHART_JS, DOUGHNUT_CHART_JS].join("\n");
    let Some(scripts) = to_js_literal(&all_js) else {
        return;
    };
    let Some(chart_js_url) = to_js_literal(CHART_JS_URL) else {
        return;
    };

    call_js(&format!(
        r#"
        (function() {{
            if (window.__saChartsInit) return;
            window.__saChartsInit = true;
            window.__saChartScripts = {scripts};
            if (typeof Chart === 'undefined' && !document.getElementById('sa-chartjs')) {{
                var tag = document.createElement('script');
                tag.id = 'sa-chartjs';
                tag.src = {chart_js_url};
                document.head.appendChild(tag);
            }}
            var waitForChart = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChart);
                    (0, eval)(window.__saChartScripts);
                    delete window.__saChartScripts;
                    if (typeof destroySaChart !== 'undefined') window.destroySaChart = destroySaChart;
                    if (typeof renderSaLineChart !== 'undefined') window.renderSaLineChart = renderSaLineChart;
                    if (typeof renderSaDoughnutChart !== 'undefined') window.renderSaDoughnutChart = renderSaDoughnutChart;
                    window.__saChartsReady = true;
                    console.log('SA charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Queue a render once the scripts are ready and the container exists.
///
/// Each call bumps the container's generation; a queued render whose
/// generation is no longer current gives up instead of drawing.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let Some(id) = to_js_literal(container_id) else {
        return;
    };
    call_js(&format!(
        r#"
        (function() {{
            var gen = window.__saChartGen || (window.__saChartGen = {{}});
            var token = (gen[{id}] || 0) + 1;
            gen[{id}] = token;
            var poll = setInterval(function() {{
                if (gen[{id}] !== token) {{ clearInterval(poll); return; }}
                if (window.__saChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data_json}, {config_json});
                    }} catch(e) {{ console.error('[SA] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart in `container_id` and cancel any queued render for it.
pub fn destroy_chart(container_id: &str) {
    let Some(id) = to_js_literal(container_id) else {
        return;
    };
    call_js(&format!(
        r#"
        var gen = window.__saChartGen || (window.__saChartGen = {{}});
        gen[{id}] = (gen[{id}] || 0) + 1;
        if (typeof window.destroySaChart !== 'undefined') {{
            window.destroySaChart({id});
        }} else {{
            var el = document.getElementById({id}); if (el) el.innerHTML = '';
        }}
        "#,
    ));
}

/// Owned chart instance bound to one container element.
///
/// At most one chart lives in the container at a time. The chart is
/// destroyed on [`ChartHandle::release`] and when the handle is dropped.
#[derive(Debug)]
pub struct ChartHandle {
    container_id: String,
    live: Cell<bool>,
}

impl ChartHandle {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            live: Cell::new(false),
        }
    }

    pub fn render_line(&self, data: &LineChartData, config: &ChartConfig) {
        self.render("renderSaLineChart", data, config);
    }

    pub fn render_doughnut(&self, data: &DoughnutChartData, config: &ChartConfig) {
        self.render("renderSaDoughnutChart", data, config);
    }

    fn render<T: Serialize>(&self, function: &str, data: &T, config: &ChartConfig) {
        let (Some(data_json), Some(config_json)) = (to_js_literal(data), to_js_literal(config))
        else {
            return;
        };
        self.release();
        render_when_ready(function, &self.container_id, &data_json, &config_json);
        self.live.set(true);
    }

    /// Destroy the current chart, if any.
    pub fn release(&self) {
        if self.live.replace(false) {
            destroy_chart(&self.container_id);
        }
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.release();
    }
}
