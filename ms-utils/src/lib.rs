//! Shared display helpers for the market-share crates.
//!
//! Everything here is a pure function from a number to a number or a display
//! string. No locale handling: output always uses `.` as the decimal point
//! and no thousands separators.

/// Numeric rounding helpers
pub mod numbers {
    /// Round `value` to `decimals` places, halves away from zero.
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }

    /// Percentage change from `first` to `last`, or 0.0 when `first` is zero.
    pub fn percent_change(first: f64, last: f64) -> f64 {
        if first == 0.0 {
            return 0.0;
        }
        (last - first) / first * 100.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_round_to() {
            assert_eq!(round_to(13.237, 1), 13.2);
            assert_eq!(round_to(8.569, 1), 8.6);
            assert_eq!(round_to(2.5, 0), 3.0);
            assert_eq!(round_to(-19.136, 1), -19.1);
        }

        #[test]
        fn test_percent_change() {
            let change = percent_change(1_087_806.0, 879_635.0);
            assert_eq!(round_to(change, 1), -19.1);
            assert_eq!(percent_change(0.0, 10.0), 0.0);
        }
    }
}

/// Unit and percentage formatting for chips, tooltips and axis ticks
pub mod units {
    use crate::numbers::round_to;

    /// Format a unit count for display.
    ///
    /// - `>= 1,000,000` renders as millions with 2 decimals: `1.09M`
    /// - `>= 1,000` renders as whole thousands: `880K`
    /// - anything smaller renders as-is: `999`
    pub fn format_unit(value: f64) -> String {
        if value >= 1_000_000.0 {
            format!("{:.2}M", round_to(value / 1_000_000.0, 2))
        } else if value >= 1_000.0 {
            format!("{:.0}K", round_to(value / 1_000.0, 0))
        } else {
            format!("{}", value)
        }
    }

    /// Share value with the percent sign appended directly (`13.2%`, `10%`).
    pub fn format_share(value: f64) -> String {
        format!("{}%", value)
    }

    /// Percentage with exactly one decimal (`13.2%`, `10.0%`).
    pub fn format_percent(value: f64) -> String {
        format!("{:.1}%", value)
    }

    /// Percentage-point difference with one decimal (`-4.6 pp`).
    pub fn format_pp_delta(value: f64) -> String {
        format!("{:.1} pp", value)
    }

    /// Signed whole-number growth (`+52%`, `-19%`).
    pub fn format_growth(value: f64) -> String {
        let rounded = round_to(value, 0);
        if rounded > 0.0 {
            format!("+{:.0}%", rounded)
        } else if rounded == 0.0 {
            "0%".to_string()
        } else {
            format!("{:.0}%", rounded)
        }
    }

}

/// Y-axis tick generation
pub mod ticks {
    /// Step multipliers considered "nice" within one power of ten.
    const NICE_STEPS: [f64; 7] = [1.0, 2.0, 2.5, 3.0, 4.0, 5.0, 10.0];

    /// Evenly spaced ticks from zero that cover `max` with `count` ticks.
    ///
    /// The step is the smallest nice multiple of a power of ten, so
    /// `nice_ticks(1_087_806.0, 5)` gives `0, 300K, 600K, 900K, 1.2M`.
    /// A non-positive or non-finite `max` yields `0, 1, 2, ...`.
    pub fn nice_ticks(max: f64, count: usize) -> Vec<f64> {
        let intervals = count.saturating_sub(1).max(1);
        if !max.is_finite() || max <= 0.0 {
            return (0..=intervals).map(|i| i as f64).collect();
        }

        let raw_step = max / intervals as f64;
        let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
        let normalized = raw_step / magnitude;
        let nice = NICE_STEPS
            .iter()
            .copied()
            .find(|step| *step >= normalized)
            .unwrap_or(10.0);
        let step = nice * magnitude;

        log::debug!("nice_ticks: max={} step={}", max, step);
        (0..=intervals).map(|i| i as f64 * step).collect()
    }

    /// Ticks from `min` to `max` inclusive in increments of `step`.
    pub fn stepped_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
        if step <= 0.0 || max < min {
            return vec![min];
        }
        let count = ((max - min) / step).round() as usize;
        (0..=count).map(|i| min + i as f64 * step).collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_nice_ticks_covers_max() {
            let ticks = nice_ticks(1_087_806.0, 5);
            assert_eq!(ticks, vec![0.0, 300_000.0, 600_000.0, 900_000.0, 1_200_000.0]);
        }

        #[test]
        fn test_nice_ticks_exact_power() {
            let ticks = nice_ticks(400.0, 5);
            assert_eq!(ticks, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        }

        #[test]
        fn test_nice_ticks_degenerate() {
            assert_eq!(nice_ticks(0.0, 3), vec![0.0, 1.0, 2.0]);
            assert_eq!(nice_ticks(f64::NAN, 2), vec![0.0, 1.0]);
        }

        #[test]
        fn test_stepped_ticks() {
            assert_eq!(
                stepped_ticks(0.0, 25.0, 5.0),
                vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]
            );
            assert_eq!(stepped_ticks(0.0, 25.0, 0.0), vec![0.0]);
        }
    }
}
