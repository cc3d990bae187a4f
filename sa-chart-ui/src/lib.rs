//! Shared Dioxus components and Chart.js bridge for the store analytics dashboard.
//!
//! This crate provides:
//! - `js_bridge`: owned Chart.js chart handles driven via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, cards, charts)
//! - `config`: Backend origin and UI defaults

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod state;
