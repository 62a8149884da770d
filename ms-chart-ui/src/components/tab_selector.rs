//! Tab buttons bound to the active view.

use crate::state::AppState;
use crate::theme::{TAB_ACTIVE_BG, TAB_IDLE_BG, TAB_IDLE_TEXT};
use crate::view::View;
use dioxus::prelude::*;

/// One button per [`View`]; clicking selects it.
#[component]
pub fn TabSelector() -> Element {
    let state = use_context::<AppState>();
    let active = state.view();
    let tabs: Vec<(View, &'static str, &'static str, String)> = View::ALL
        .into_iter()
        .map(|view| (view, view.id(), view.label(), tab_style(view == active)))
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 4px; margin-bottom: 24px;",
            for (view, id, label, style) in tabs {
                button {
                    key: "{id}",
                    style: "{style}",
                    onclick: move |_| {
                        let mut state = state;
                        state.select_view(view);
                    },
                    "{label}"
                }
            }
        }
    }
}

fn tab_style(active: bool) -> String {
    let (background, color) = if active {
        (TAB_ACTIVE_BG, "#fff")
    } else {
        (TAB_IDLE_BG, TAB_IDLE_TEXT)
    };
    format!(
        "padding: 7px 16px; border-radius: 6px; border: none; cursor: pointer; font-size: 12px; font-weight: 600; background: {}; color: {}; transition: all 0.2s;",
        background, color
    )
}
