//! Chart panel that D3 draws into.

use super::ChartCaption;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Chart height in pixels
    #[props(default = 320)]
    pub height: u32,
    /// Description shown above the chart
    pub caption: String,
    /// Annotations shown under the chart
    pub children: Element,
}

/// Rounded translucent panel: caption, the D3.js chart, then annotations.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let chart_style = format!("width: 100%; height: {}px;", props.height);

    rsx! {
        div {
            style: "background: rgba(255,255,255,0.03); border: 1px solid rgba(255,255,255,0.07); border-radius: 14px; padding: 24px 16px 16px;",
            ChartCaption { text: props.caption.clone() }
            div {
                id: "{props.id}",
                style: "{chart_style}",
            }
            {props.children}
        }
    }
}
