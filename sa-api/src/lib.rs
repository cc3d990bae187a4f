//! Wire types and HTTP client for the store analytics backend.
//!
//! The backend is an opaque collaborator reached only through JSON GET
//! endpoints. This crate owns:
//! - `models`: the snapshot and dropdown types the endpoints return
//! - `endpoints`: path builders for every route the dashboard reads
//! - `parse`: shape validation turning raw bodies into models or a
//!   [`FetchError::Malformed`]
//! - `client`: an async [`ApiClient`] built on `reqwest`, usable from both
//!   the WASM dashboard and the native CLI

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod parse;

pub use client::ApiClient;
pub use error::{ErrorKind, FetchError};
pub use models::{
    AnalyticsSnapshot, MonthCount, NamedEntity, Organization, PredictionHorizon,
    PredictionSnapshot, RecentAnalytics, Store,
};
