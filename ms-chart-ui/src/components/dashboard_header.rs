//! Title block with the headline units-change badge.

use crate::theme::TRACKED_COLOR;
use dioxus::prelude::*;
use ms_data::HeadlineKpis;
use ms_utils::units::format_percent;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    /// Small caps line above the title
    pub eyebrow: String,
    pub title: String,
    pub kpis: HeadlineKpis,
}

/// Eyebrow, title, covered period range and the first-to-last variation badge.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    let kpis = &props.kpis;
    let range = format!(
        "{} → {}",
        kpis.first_period.long_label(),
        kpis.last_period.long_label()
    );
    let badge_label = format!(
        "Var. {}→{}",
        kpis.first_period.year(),
        kpis.last_period.year()
    );
    let change = format_percent(kpis.units_change);

    rsx! {
        div {
            style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 8px;",
            div {
                p {
                    style: "color: #38bdf8; font-size: 11px; letter-spacing: 0.15em; text-transform: uppercase; margin: 0;",
                    "{props.eyebrow}"
                }
                h1 {
                    style: "font-size: 28px; font-weight: 800; margin: 6px 0 4px; color: #f0f9ff; letter-spacing: -0.5px;",
                    "{props.title}"
                }
                p {
                    style: "color: #64748b; font-size: 13px; margin: 0;",
                    "{range}"
                }
            }
            div {
                style: "background: rgba(239,68,68,0.15); border: 1px solid rgba(239,68,68,0.4); border-radius: 10px; padding: 10px 18px; text-align: center;",
                p {
                    style: "font-size: 11px; color: #f87171; margin: 0 0 2px; text-transform: uppercase; letter-spacing: 0.1em;",
                    "{badge_label}"
                }
                p {
                    style: "font-size: 26px; font-weight: 800; color: {TRACKED_COLOR}; margin: 0;",
                    "{change}"
                }
            }
        }
    }
}
