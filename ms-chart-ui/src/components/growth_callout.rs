//! Competitor growth callout under the competitor chart.

use crate::annotation::GrowthCallout;
use crate::theme::TRACKED_COLOR;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct GrowthCalloutBoxProps {
    pub callout: GrowthCallout,
}

#[component]
pub fn GrowthCalloutBox(props: GrowthCalloutBoxProps) -> Element {
    let callout = &props.callout;

    rsx! {
        div {
            style: "margin-top: 16px; padding: 12px 16px; background: rgba(239,68,68,0.06); border-left: 3px solid {TRACKED_COLOR}; border-radius: 0 8px 8px 0;",
            p {
                style: "font-size: 12px; color: #fca5a5; margin: 0;",
                "{callout.lead}"
                strong { style: "color: {TRACKED_COLOR};", "{callout.emphasis}" }
                "{callout.tail}"
            }
        }
    }
}
