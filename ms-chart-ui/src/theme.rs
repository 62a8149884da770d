//! Dashboard palette. Dark background, one accent per series.

pub const TRACKED_COLOR: &str = "#ef4444";
pub const SHARE_COLOR: &str = "#a78bfa";
/// Accents for BALIARDA, ADIUM and MONTPELLIER
pub const COMPETITOR_COLORS: [&str; 3] = ["#38bdf8", "#34d399", "#fbbf24"];

pub const UNITS_FIRST_COLOR: &str = "#38bdf8";
pub const SHARE_LAST_COLOR: &str = "#f97316";

pub const TEXT_COLOR: &str = "#e2e8f0";
pub const TAB_ACTIVE_BG: &str = "#1d4ed8";
pub const TAB_IDLE_BG: &str = "rgba(255,255,255,0.05)";
pub const TAB_IDLE_TEXT: &str = "#94a3b8";

pub const PAGE_BACKGROUND: &str =
    "linear-gradient(135deg, #0a0f1e 0%, #0d1b2a 50%, #091018 100%)";

/// `rgba()` tint of a `#rrggbb` color, used for highlighted cells.
pub fn tint(hex: &str, alpha: f64) -> String {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    format!(
        "rgba({},{},{},{})",
        channel(1..3),
        channel(3..5),
        channel(5..7),
        alpha
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint() {
        assert_eq!(tint(TRACKED_COLOR, 0.1), "rgba(239,68,68,0.1)");
        assert_eq!(tint(SHARE_COLOR, 0.1), "rgba(167,139,250,0.1)");
        assert_eq!(tint("#zzzzzz", 0.5), "rgba(0,0,0,0.5)");
    }
}
