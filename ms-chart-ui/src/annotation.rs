//! The block shown under each chart.
//!
//! Units and share views get a strip with one cell per period; the
//! competitor view gets a callout comparing growth rates.

use crate::theme::{SHARE_COLOR, TRACKED_COLOR};
use crate::view::View;
use ms_data::{CompetitorGrowth, DerivedRow, HeadlineKpis, TRACKED_PRODUCT};
use ms_utils::units::{format_growth, format_percent, format_share, format_unit};

/// Competitors named in the callout.
const CALLOUT_LEADERS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct StripCell {
    /// Period without the `MAT` prefix
    pub label: String,
    pub value: String,
    /// Set on the latest period
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodStrip {
    pub accent: &'static str,
    pub cells: Vec<StripCell>,
}

/// Sentence contrasting the fastest-growing competitors with the tracked product.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthCallout {
    /// Everything before the emphasized tracked-product change
    pub lead: String,
    /// Tracked-product change, e.g. `-19.1%`
    pub emphasis: String,
    pub tail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Strip(PeriodStrip),
    Callout(GrowthCallout),
}

/// Annotation block for `view`.
pub fn annotation_for(
    view: View,
    rows: &[DerivedRow],
    kpis: &HeadlineKpis,
    growth: &[CompetitorGrowth],
) -> Annotation {
    match view {
        View::Units => Annotation::Strip(period_strip(rows, TRACKED_COLOR, |row| {
            format_unit(row.tracked as f64)
        })),
        View::Share => Annotation::Strip(period_strip(rows, SHARE_COLOR, |row| {
            format_share(row.share)
        })),
        View::Competitors => Annotation::Callout(growth_callout(kpis, growth)),
    }
}

fn period_strip(
    rows: &[DerivedRow],
    accent: &'static str,
    value: impl Fn(&DerivedRow) -> String,
) -> PeriodStrip {
    let last = rows.len().saturating_sub(1);
    PeriodStrip {
        accent,
        cells: rows
            .iter()
            .enumerate()
            .map(|(index, row)| StripCell {
                label: row.period.short_label(),
                value: value(row),
                highlighted: index == last,
            })
            .collect(),
    }
}

fn growth_callout(kpis: &HeadlineKpis, growth: &[CompetitorGrowth]) -> GrowthCallout {
    let mut leaders: Vec<&CompetitorGrowth> = growth.iter().collect();
    leaders.sort_by(|a, b| b.growth.total_cmp(&a.growth));
    leaders.truncate(CALLOUT_LEADERS);

    let names: Vec<&str> = leaders.iter().map(|g| g.manufacturer.as_str()).collect();
    let rates: Vec<String> = leaders.iter().map(|g| format_growth(g.growth)).collect();
    let all_grew = leaders.iter().all(|g| g.growth > 0.0);

    let competitor_clause = match leaders.len() {
        0 => String::new(),
        1 => format!(
            "Mientras {} {} {}, ",
            names[0],
            if all_grew { "creció" } else { "varió" },
            rates[0]
        ),
        _ => format!(
            "Mientras {} {} {} respectivamente, ",
            names.join(" y "),
            if all_grew { "crecieron" } else { "variaron" },
            rates.join(" y ")
        ),
    };
    let verb = if kpis.units_change < 0.0 {
        "cayó"
    } else {
        "creció"
    };

    GrowthCallout {
        lead: format!("{}{} {} ", competitor_clause, TRACKED_PRODUCT, verb),
        emphasis: format_percent(kpis.units_change),
        tail: " en el mismo período.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_data::{competitor_growth, derive_rows, headline_kpis, SeriesTable};

    fn fixture() -> (Vec<DerivedRow>, HeadlineKpis, Vec<CompetitorGrowth>) {
        let table = SeriesTable::embedded();
        let rows = derive_rows(&table);
        let kpis = headline_kpis(&rows).unwrap();
        (rows, kpis, competitor_growth(&table))
    }

    #[test]
    fn test_units_strip() {
        let (rows, kpis, growth) = fixture();
        let Annotation::Strip(strip) = annotation_for(View::Units, &rows, &kpis, &growth) else {
            panic!("units view should show a period strip");
        };
        assert_eq!(strip.accent, TRACKED_COLOR);
        assert_eq!(strip.cells.len(), 5);
        assert_eq!(strip.cells[0].label, "Ene 2022");
        assert_eq!(strip.cells[0].value, "1.09M");
        assert_eq!(strip.cells[4].value, "880K");
        let highlighted: Vec<bool> = strip.cells.iter().map(|c| c.highlighted).collect();
        assert_eq!(highlighted, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_share_strip() {
        let (rows, kpis, growth) = fixture();
        let Annotation::Strip(strip) = annotation_for(View::Share, &rows, &kpis, &growth) else {
            panic!("share view should show a period strip");
        };
        assert_eq!(strip.accent, SHARE_COLOR);
        let values: Vec<&str> = strip.cells.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["13.2%", "11.8%", "11.3%", "10.1%", "8.6%"]);
    }

    #[test]
    fn test_competitor_callout() {
        let (rows, kpis, growth) = fixture();
        let Annotation::Callout(callout) =
            annotation_for(View::Competitors, &rows, &kpis, &growth)
        else {
            panic!("competitor view should show a callout");
        };
        assert_eq!(
            callout.lead,
            "Mientras BALIARDA y MONTPELLIER crecieron +52% y +38% respectivamente, DIOVAN cayó "
        );
        assert_eq!(callout.emphasis, "-19.1%");
        assert_eq!(callout.tail, " en el mismo período.");
    }

    #[test]
    fn test_callout_without_competitors() {
        let (_, kpis, _) = fixture();
        let callout = growth_callout(&kpis, &[]);
        assert_eq!(callout.lead, "DIOVAN cayó ");
    }

    #[test]
    fn test_strip_empty_rows() {
        let strip = period_strip(&[], TRACKED_COLOR, |_| String::new());
        assert!(strip.cells.is_empty());
    }
}
