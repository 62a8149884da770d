//! Reusable Dioxus RSX components for the market-share dashboard.

mod chart_caption;
mod chart_container;
mod dashboard_header;
mod error_display;
mod growth_callout;
mod kpi_chips;
mod period_strip;
mod source_note;
mod tab_selector;

pub use chart_caption::ChartCaption;
pub use chart_container::ChartContainer;
pub use dashboard_header::DashboardHeader;
pub use error_display::ErrorDisplay;
pub use growth_callout::GrowthCalloutBox;
pub use kpi_chips::KpiChips;
pub use period_strip::PeriodStripRow;
pub use source_note::SourceNote;
pub use tab_selector::TabSelector;
