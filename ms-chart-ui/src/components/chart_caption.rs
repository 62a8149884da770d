//! One-line description above a chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCaptionProps {
    pub text: String,
}

#[component]
pub fn ChartCaption(props: ChartCaptionProps) -> Element {
    rsx! {
        p {
            style: "font-size: 12px; color: #64748b; margin: 0 0 16px 8px;",
            "{props.text}"
        }
    }
}
