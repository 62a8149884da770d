use dioxus::prelude::*;

/// Data attribution under the chart.
#[component]
pub fn SourceNote(text: String) -> Element {
    rsx! {
        p {
            style: "text-align: right; font-size: 10px; color: #334155; margin-top: 12px;",
            "{text}"
        }
    }
}
