//! View-model derivations for the store analytics dashboard.
//!
//! Everything here is a pure function of fetched snapshots plus local UI
//! state, so the dashboard components stay thin and the rules they follow
//! can be tested natively:
//! - `summary`: headline totals and click-through rate
//! - `history`: month bucketing, outer-join merge and date-range filtering
//! - `templates`: top-N template ranking and slice colors
//! - `prediction`: percent change, trend classification, sorted forecast
//! - `chart`: serializable dataset shapes handed to the JS chart bridge
//! - `load`: request sequencing and per-component load state
//! - `selector`: the organization -> store cascade
//! - `layout`: chart resize clamping

pub mod chart;
pub mod history;
pub mod layout;
pub mod load;
pub mod prediction;
pub mod selector;
pub mod summary;
pub mod templates;
