//! The three dashboard views and the selector that switches between them.

/// Which chart the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Tracked-product units over time
    #[default]
    Units,
    /// Tracked-product market share over time
    Share,
    /// Tracked product against the main competitors
    Competitors,
}

impl View {
    /// Tab order.
    pub const ALL: [View; 3] = [View::Units, View::Share, View::Competitors];

    pub fn id(&self) -> &'static str {
        match self {
            View::Units => "units",
            View::Share => "share",
            View::Competitors => "competitors",
        }
    }

    /// Tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            View::Units => "Unidades SIE",
            View::Share => "Market Share",
            View::Competitors => "vs Competencia",
        }
    }
}

/// Single-slot selector holding the active view.
///
/// Any view can be selected from any other; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewShell {
    current: View,
}

impl ViewShell {
    /// A shell showing [`View::Units`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn is_active(&self, view: View) -> bool {
        self.current == view
    }

    /// Switch to `view`. Returns `false` (and changes nothing) if it is already active.
    pub fn select(&mut self, view: View) -> bool {
        if self.current == view {
            return false;
        }
        log::debug!("view: {} -> {}", self.current.id(), view.id());
        self.current = view;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_data::{derive_rows, SeriesTable};

    #[test]
    fn test_initial_view_is_units() {
        assert_eq!(ViewShell::new().current(), View::Units);
        assert_eq!(View::default(), View::Units);
    }

    #[test]
    fn test_any_to_any_transitions() {
        for from in View::ALL {
            for to in View::ALL {
                let mut shell = ViewShell { current: from };
                let changed = shell.select(to);
                assert_eq!(shell.current(), to);
                assert_eq!(changed, from != to);
            }
        }
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut shell = ViewShell::new();
        assert!(shell.select(View::Share));
        let before = shell;
        assert!(!shell.select(View::Share));
        assert_eq!(shell, before);
    }

    #[test]
    fn test_switching_leaves_rows_untouched() {
        let table = SeriesTable::embedded();
        let rows = derive_rows(&table);
        let mut shell = ViewShell::new();

        shell.select(View::Share);
        let during = derive_rows(&table);
        shell.select(View::Units);
        let after = derive_rows(&table);

        assert_eq!(shell.current(), View::Units);
        assert_eq!(rows, during);
        assert_eq!(rows, after);
        assert_eq!(table, SeriesTable::embedded());
    }
}
