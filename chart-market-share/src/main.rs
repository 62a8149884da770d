//! DIOVAN market share in the Valsartan market
//!
//! Shows SIEGFRIED's DIOVAN against the whole Valsartan market over five
//! MAT periods, with three views: tracked units, market share, and units
//! against the three largest competitors.
//!
//! Data flow:
//! 1. `AppState::embedded()` derives the per-period rows, headline KPIs and
//!    competitor growth once from the compiled-in sales table.
//! 2. The tab selector switches the active view; nothing else changes.
//! 3. On view change: build the view's chart spec and re-render it via D3.js.

use anyhow::Context;
use dioxus::prelude::*;
use ms_chart_ui::annotation::{annotation_for, Annotation};
use ms_chart_ui::chart_spec::{caption, chart_spec, CHART_HEIGHT};
use ms_chart_ui::components::{
    ChartContainer, DashboardHeader, ErrorDisplay, GrowthCalloutBox, KpiChips, PeriodStripRow,
    SourceNote, TabSelector,
};
use ms_chart_ui::js_bridge;
use ms_chart_ui::state::AppState;
use ms_chart_ui::theme::{PAGE_BACKGROUND, TEXT_COLOR};
use ms_chart_ui::view::View;
use ms_data::DerivedRow;

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "market-share-chart";

const EYEBROW: &str = "SIEGFRIED · Valsartan · PM IQVIA";
const TITLE: &str = "DIOVAN — Evolución MAT";
const SOURCE: &str = "Fuente: PM IQVIA · Febrero 2026";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("market-share-root"))
        .launch(App);
}

/// Serialize the chart for `view` and hand it to D3.
fn draw_chart(view: View, rows: &[DerivedRow]) -> anyhow::Result<()> {
    let spec_json = chart_spec(view, rows)
        .to_json()
        .with_context(|| format!("failed to serialize the {} chart", view.id()))?;
    js_bridge::render_chart(CHART_ID, &spec_json);
    Ok(())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::embedded);

    // Load D3 chart scripts once; clear the chart on unmount
    use_hook(js_bridge::init_charts);
    use_drop(|| js_bridge::destroy_chart(CHART_ID));

    // Re-runs whenever the active view changes.
    use_effect(move || {
        let view = state.view();
        let rows: Vec<DerivedRow> = state.rows.read().clone();
        if rows.is_empty() {
            return;
        }

        log::info!("rendering {} view", view.id());
        if let Err(e) = draw_chart(view, &rows) {
            log::error!("{:#}", e);
            state.error_msg.set(Some(format!("{:#}", e)));
        }
    });

    let view = state.view();
    let page_style = format!(
        "background: {}; min-height: 100vh; padding: 32px 24px; font-family: 'Segoe UI', system-ui, sans-serif; color: {};",
        PAGE_BACKGROUND, TEXT_COLOR
    );

    let dashboard = state.kpis.read().clone().map(|kpis| {
        let rows = state.rows.read();
        let growth = state.growth.read();
        let annotation = match annotation_for(view, &rows, &kpis, &growth) {
            Annotation::Strip(strip) => rsx! { PeriodStripRow { strip: strip } },
            Annotation::Callout(callout) => rsx! { GrowthCalloutBox { callout: callout } },
        };

        rsx! {
            DashboardHeader {
                eyebrow: EYEBROW.to_string(),
                title: TITLE.to_string(),
                kpis: kpis.clone(),
            }
            KpiChips { kpis: kpis.clone() }
            TabSelector {}
            ChartContainer {
                id: CHART_ID.to_string(),
                height: CHART_HEIGHT,
                caption: caption(view).to_string(),
                {annotation}
            }
            SourceNote { text: SOURCE.to_string() }
        }
    });

    rsx! {
        div {
            style: "{page_style}",
            div {
                style: "max-width: 900px; margin: 0 auto;",

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                {dashboard}
            }
        }
    }
}
