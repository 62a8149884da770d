//! Per-period values under the units and share charts.

use crate::annotation::PeriodStrip;
use crate::theme::{tint, TEXT_COLOR};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PeriodStripRowProps {
    pub strip: PeriodStrip,
}

/// A row of equal-width cells; the highlighted one uses the strip accent.
#[component]
pub fn PeriodStripRow(props: PeriodStripRowProps) -> Element {
    let accent = props.strip.accent;
    let highlight_bg = tint(accent, 0.1);

    rsx! {
        div {
            style: "display: flex; gap: 8px; margin-top: 16px; padding: 0 8px;",
            for cell in props.strip.cells.iter() {
                div {
                    key: "{cell.label}",
                    style: format!(
                        "flex: 1; text-align: center; padding: 8px 4px; border-radius: 6px; background: {};",
                        if cell.highlighted { highlight_bg.as_str() } else { "transparent" }
                    ),
                    p {
                        style: "font-size: 10px; color: #64748b; margin: 0 0 2px;",
                        "{cell.label}"
                    }
                    p {
                        style: format!(
                            "font-size: 13px; font-weight: 700; margin: 0; color: {};",
                            if cell.highlighted { accent } else { TEXT_COLOR }
                        ),
                        "{cell.value}"
                    }
                }
            }
        }
    }
}
