//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the derived market data and the view selector into a
//! single struct provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.

use crate::view::{View, ViewShell};
use dioxus::prelude::*;
use ms_data::{
    competitor_growth, derive_rows, headline_kpis, CompetitorGrowth, DerivedRow, HeadlineKpis,
    SeriesTable,
};

/// Shared state for the market-share dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active view; the only value that changes after startup
    pub shell: Signal<ViewShell>,
    /// One row per period, derived once from the sales table
    pub rows: Signal<Vec<DerivedRow>>,
    /// Header figures (None if the table produced no rows)
    pub kpis: Signal<Option<HeadlineKpis>>,
    /// First-to-last growth per competitor
    pub growth: Signal<Vec<CompetitorGrowth>>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Derive everything the dashboard shows from `table`.
    pub fn from_table(table: &SeriesTable) -> Self {
        let rows = derive_rows(table);
        let kpis = headline_kpis(&rows);
        let error_msg = kpis
            .is_none()
            .then(|| "No market data available.".to_string());
        log::info!("derived {} period rows", rows.len());

        Self {
            shell: Signal::new(ViewShell::new()),
            kpis: Signal::new(kpis),
            growth: Signal::new(competitor_growth(table)),
            rows: Signal::new(rows),
            error_msg: Signal::new(error_msg),
        }
    }

    /// State for the compiled-in table.
    pub fn embedded() -> Self {
        Self::from_table(&SeriesTable::embedded())
    }

    pub fn view(&self) -> View {
        self.shell.read().current()
    }

    /// Switch views. Re-selecting the active view leaves the signal untouched,
    /// so nothing re-renders.
    pub fn select_view(&mut self, view: View) {
        let next = switched(&self.shell.peek(), view);
        if let Some(shell) = next {
            self.shell.set(shell);
        }
    }
}

/// The shell after selecting `view`, or `None` when nothing would change.
fn switched(shell: &ViewShell, view: View) -> Option<ViewShell> {
    let mut next = *shell;
    next.select(view).then_some(next)
}
