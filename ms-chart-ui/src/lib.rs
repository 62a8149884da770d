//! Shared Dioxus components and D3.js bridge for the market-share dashboard.
//!
//! This crate provides:
//! - `view`: the three chart views and the selector switching between them
//! - `chart_spec`: per-view chart specifications serialized for D3.js
//! - `annotation`: the period strip / growth callout shown under each chart
//! - `js_bridge`: Rust wrappers for the D3.js renderers via `js_sys::eval()`
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components (header, KPI chips, tabs, containers)

pub mod annotation;
pub mod chart_spec;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod theme;
pub mod view;
