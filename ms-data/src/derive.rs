//! Per-period market figures and headline KPIs derived from the sales table.

use crate::period::Period;
use crate::series::SeriesTable;
use ms_utils::numbers::{percent_change, round_to};
use serde::Serialize;

/// Market figures for one period, as consumed by the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRow {
    pub period: Period,
    /// Units across all manufacturers
    pub total: u64,
    /// Units of the tracked product
    pub tracked: u64,
    /// Tracked share of the total in percent, 1 decimal
    pub share: f64,
    /// Units per competitor, ordered as [`COMPETITORS`](crate::series::COMPETITORS)
    pub competitors: [u64; 3],
}

/// Headline numbers shown above the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineKpis {
    pub first_period: Period,
    pub last_period: Period,
    pub first_units: u64,
    pub last_units: u64,
    pub first_share: f64,
    pub last_share: f64,
    /// Difference of the rounded shares in percentage points, 1 decimal
    pub share_delta: f64,
    /// Tracked units change first to last in percent, 1 decimal
    pub units_change: f64,
}

/// Growth of one competitor between the first and last period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorGrowth {
    pub manufacturer: String,
    /// Unrounded percent change
    pub growth: f64,
}

/// Tracked share of `total` in percent, rounded to 1 decimal.
///
/// A zero total yields `0.0` instead of NaN.
pub fn market_share(tracked: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(tracked as f64 / total as f64 * 100.0, 1)
}

/// One derived row per period, in period order.
pub fn derive_rows(table: &SeriesTable) -> Vec<DerivedRow> {
    let tracked = table.tracked();
    let competitors = table.competitors();

    table
        .periods()
        .iter()
        .enumerate()
        .map(|(index, period)| {
            let total = table.total_at(index);
            let units = tracked.units[index];
            DerivedRow {
                period: *period,
                total,
                tracked: units,
                share: market_share(units, total),
                competitors: competitors.map(|row| row.units[index]),
            }
        })
        .collect()
}

/// Headline KPIs from the first and last derived rows, or `None` if there are none.
pub fn headline_kpis(rows: &[DerivedRow]) -> Option<HeadlineKpis> {
    let first = rows.first()?;
    let last = rows.last()?;
    Some(HeadlineKpis {
        first_period: first.period,
        last_period: last.period,
        first_units: first.tracked,
        last_units: last.tracked,
        first_share: first.share,
        last_share: last.share,
        share_delta: round_to(last.share - first.share, 1),
        units_change: round_to(
            percent_change(first.tracked as f64, last.tracked as f64),
            1,
        ),
    })
}

/// First-to-last growth for each competitor, ordered as [`COMPETITORS`](crate::series::COMPETITORS).
pub fn competitor_growth(table: &SeriesTable) -> Vec<CompetitorGrowth> {
    table
        .competitors()
        .iter()
        .map(|row| CompetitorGrowth {
            manufacturer: row.manufacturer.clone(),
            growth: percent_change(row.first() as f64, row.last() as f64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{SeriesRow, COMPETITORS, PERIODS, PERIOD_COUNT};

    #[test]
    fn test_totals_are_column_sums() {
        let table = SeriesTable::embedded();
        let rows = derive_rows(&table);
        assert_eq!(rows.len(), PERIOD_COUNT);
        for (index, row) in rows.iter().enumerate() {
            let expected: u64 = table.rows().iter().map(|r| r.units[index]).sum();
            assert_eq!(row.total, expected);
            assert!(row.total >= row.tracked);
        }
    }

    #[test]
    fn test_shares_are_rounded_and_bounded() {
        let rows = derive_rows(&SeriesTable::embedded());
        for row in &rows {
            let expected = round_to(row.tracked as f64 / row.total as f64 * 100.0, 1);
            assert_eq!(row.share, expected);
            assert!((0.0..=100.0).contains(&row.share));
        }
        let shares: Vec<f64> = rows.iter().map(|r| r.share).collect();
        assert_eq!(shares, vec![13.2, 11.8, 11.3, 10.1, 8.6]);
    }

    #[test]
    fn test_earliest_share() {
        let rows = derive_rows(&SeriesTable::embedded());
        assert_eq!(rows[0].total, 8_217_996);
        assert_eq!(rows[0].share, market_share(1_087_806, 8_217_996));
        assert_eq!(rows[0].share, 13.2);
    }

    #[test]
    fn test_derivation_is_repeatable() {
        let table = SeriesTable::embedded();
        assert_eq!(derive_rows(&table), derive_rows(&table));
    }

    #[test]
    fn test_competitor_columns() {
        let rows = derive_rows(&SeriesTable::embedded());
        assert_eq!(rows[0].competitors, [2_081_602, 2_403_942, 984_481]);
        assert_eq!(rows[4].competitors[2], 1_358_267);
    }

    #[test]
    fn test_zero_total_fails_closed() {
        assert_eq!(market_share(0, 0), 0.0);
        assert_eq!(market_share(5, 0), 0.0);

        let mut table = SeriesTable::embedded();
        for row in table.rows.iter_mut() {
            row.units[1] = 0;
        }
        let rows = derive_rows(&table);
        assert_eq!(rows[1].total, 0);
        assert_eq!(rows[1].share, 0.0);
    }

    #[test]
    fn test_headline_kpis() {
        let rows = derive_rows(&SeriesTable::embedded());
        let kpis = headline_kpis(&rows).unwrap();
        assert_eq!(kpis.first_units, 1_087_806);
        assert_eq!(kpis.last_units, 879_635);
        assert_eq!(kpis.first_share, 13.2);
        assert_eq!(kpis.last_share, 8.6);
        assert_eq!(kpis.share_delta, -4.6);
        assert_eq!(kpis.units_change, -19.1);
        assert_eq!(kpis.first_period, PERIODS[0]);
        assert_eq!(kpis.last_period, PERIODS[4]);
    }

    #[test]
    fn test_headline_kpis_empty() {
        assert_eq!(headline_kpis(&[]), None);
    }

    #[test]
    fn test_headline_kpis_zero_first_units() {
        let mut table = SeriesTable::embedded();
        table.rows[0] = SeriesRow::new("SIEGFRIED", [0, 1, 2, 3, 4]);
        let kpis = headline_kpis(&derive_rows(&table)).unwrap();
        assert_eq!(kpis.units_change, 0.0);
    }

    #[test]
    fn test_competitor_growth() {
        let growth = competitor_growth(&SeriesTable::embedded());
        let names: Vec<&str> = growth.iter().map(|g| g.manufacturer.as_str()).collect();
        assert_eq!(names, COMPETITORS);
        assert_eq!(round_to(growth[0].growth, 0), 52.0);
        assert_eq!(round_to(growth[2].growth, 0), 38.0);
    }
}
