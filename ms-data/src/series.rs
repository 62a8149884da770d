//! The sales table: one row of unit sales per manufacturer, one column per period.

use crate::error::DatasetError;
use crate::period::Period;
use std::collections::HashSet;

/// Number of periods on the x-axis.
pub const PERIOD_COUNT: usize = 5;

/// Number of manufacturers in the market.
pub const SERIES_COUNT: usize = 6;

/// Manufacturer whose product the dashboard tracks.
pub const TRACKED_MANUFACTURER: &str = "SIEGFRIED";

/// Brand name of the tracked product.
pub const TRACKED_PRODUCT: &str = "DIOVAN";

/// Competitors drawn alongside the tracked product, in chart order.
pub const COMPETITORS: [&str; 3] = ["BALIARDA", "ADIUM", "MONTPELLIER"];

/// MAT periods ending January 2022 through January 2026.
pub const PERIODS: [Period; PERIOD_COUNT] = [
    Period::new(2022, 1),
    Period::new(2023, 1),
    Period::new(2024, 1),
    Period::new(2025, 1),
    Period::new(2026, 1),
];

/// Valsartan market units per manufacturer (PM IQVIA, February 2026).
pub static EMBEDDED_SERIES: [(&str, [u64; PERIOD_COUNT]); SERIES_COUNT] = [
    ("SIEGFRIED", [1087806, 1031930, 1054693, 962668, 879635]),
    ("BALIARDA", [2081602, 2418333, 2771781, 2905356, 3173502]),
    ("ADIUM", [2403942, 2579814, 2571784, 2437360, 2521492]),
    ("MONTPELLIER", [984481, 1059449, 1139948, 1212222, 1358267]),
    ("ROEMMERS", [788147, 774458, 836827, 1017702, 1278960]),
    ("CASASCO", [872018, 862585, 976853, 1017907, 1053788]),
];

/// One manufacturer's unit sales across all periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRow {
    pub manufacturer: String,
    pub units: [u64; PERIOD_COUNT],
}

impl SeriesRow {
    pub fn new(manufacturer: impl Into<String>, units: [u64; PERIOD_COUNT]) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            units,
        }
    }

    pub fn first(&self) -> u64 {
        self.units[0]
    }

    pub fn last(&self) -> u64 {
        self.units[PERIOD_COUNT - 1]
    }
}

/// The full market table. Immutable once built.
///
/// Row positions of the tracked manufacturer and the competitors are
/// resolved at construction, so lookups never fail afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    pub(crate) periods: [Period; PERIOD_COUNT],
    pub(crate) rows: [SeriesRow; SERIES_COUNT],
    pub(crate) tracked: usize,
    pub(crate) competitors: [usize; 3],
}

impl SeriesTable {
    /// The table compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            periods: PERIODS,
            rows: EMBEDDED_SERIES.map(|(manufacturer, units)| SeriesRow::new(manufacturer, units)),
            // Positions within EMBEDDED_SERIES
            tracked: 0,
            competitors: [1, 2, 3],
        }
    }

    /// Build a table from externally supplied periods and rows.
    ///
    /// Checks period count and ordering, row count, duplicate and missing
    /// manufacturers, and that every period has a non-zero market total that
    /// fits in a `u64`.
    pub fn from_parts(periods: Vec<Period>, rows: Vec<SeriesRow>) -> Result<Self, DatasetError> {
        let periods: [Period; PERIOD_COUNT] =
            periods
                .try_into()
                .map_err(|p: Vec<Period>| DatasetError::PeriodCount {
                    expected: PERIOD_COUNT,
                    found: p.len(),
                })?;

        for pair in periods.windows(2) {
            if pair[1] <= pair[0] {
                return Err(DatasetError::PeriodOrder {
                    earlier: pair[0].key(),
                    later: pair[1].key(),
                });
            }
        }

        let rows: [SeriesRow; SERIES_COUNT] =
            rows.try_into()
                .map_err(|r: Vec<SeriesRow>| DatasetError::RowCount {
                    expected: SERIES_COUNT,
                    found: r.len(),
                })?;

        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row.manufacturer.as_str()) {
                return Err(DatasetError::DuplicateManufacturer(row.manufacturer.clone()));
            }
        }

        let position = |name: &str| {
            rows.iter()
                .position(|row| row.manufacturer == name)
                .ok_or_else(|| DatasetError::MissingManufacturer(name.to_string()))
        };
        let tracked = position(TRACKED_MANUFACTURER)?;
        let competitors = [
            position(COMPETITORS[0])?,
            position(COMPETITORS[1])?,
            position(COMPETITORS[2])?,
        ];

        let table = Self {
            periods,
            rows,
            tracked,
            competitors,
        };

        for (index, period) in table.periods.iter().enumerate() {
            match table.checked_total_at(index) {
                None => return Err(DatasetError::TotalOverflow(period.label())),
                Some(0) => return Err(DatasetError::ZeroTotal(period.label())),
                Some(_) => {}
            }
        }

        log::info!(
            "series table validated: {} rows x {} periods",
            SERIES_COUNT,
            PERIOD_COUNT
        );
        Ok(table)
    }

    pub fn periods(&self) -> &[Period; PERIOD_COUNT] {
        &self.periods
    }

    pub fn rows(&self) -> &[SeriesRow; SERIES_COUNT] {
        &self.rows
    }

    pub fn tracked(&self) -> &SeriesRow {
        &self.rows[self.tracked]
    }

    pub fn competitors(&self) -> [&SeriesRow; 3] {
        self.competitors.map(|index| &self.rows[index])
    }

    /// Sum of all manufacturers' units at a period index.
    ///
    /// Tables built through [`SeriesTable::from_parts`] never overflow here;
    /// anything else saturates at `u64::MAX`.
    pub fn total_at(&self, index: usize) -> u64 {
        self.checked_total_at(index).unwrap_or(u64::MAX)
    }

    /// Sum of all manufacturers' units at a period index, or `None` on overflow.
    pub fn checked_total_at(&self, index: usize) -> Option<u64> {
        self.rows
            .iter()
            .try_fold(0u64, |total, row| total.checked_add(row.units[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_rows() -> Vec<SeriesRow> {
        SeriesTable::embedded().rows().to_vec()
    }

    #[test]
    fn test_embedded_shape() {
        let table = SeriesTable::embedded();
        assert_eq!(table.rows().len(), SERIES_COUNT);
        assert_eq!(table.periods().len(), PERIOD_COUNT);
        assert_eq!(table.tracked().manufacturer, TRACKED_MANUFACTURER);
        let competitors: Vec<&str> = table
            .competitors()
            .iter()
            .map(|row| row.manufacturer.as_str())
            .collect();
        assert_eq!(competitors, COMPETITORS);
    }

    #[test]
    fn test_embedded_passes_validation() {
        let table = SeriesTable::from_parts(PERIODS.to_vec(), embedded_rows()).unwrap();
        assert_eq!(table, SeriesTable::embedded());
    }

    #[test]
    fn test_total_at() {
        let table = SeriesTable::embedded();
        assert_eq!(table.total_at(0), 8_217_996);
        assert_eq!(table.total_at(4), 10_265_644);
    }

    #[test]
    fn test_tracked_first_last() {
        let table = SeriesTable::embedded();
        assert_eq!(table.tracked().first(), 1_087_806);
        assert_eq!(table.tracked().last(), 879_635);
    }

    #[test]
    fn test_rejects_wrong_period_count() {
        let err = SeriesTable::from_parts(PERIODS[..4].to_vec(), embedded_rows()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::PeriodCount {
                expected: 5,
                found: 4
            }
        ));
    }

    #[test]
    fn test_rejects_unordered_periods() {
        let mut periods = PERIODS.to_vec();
        periods.swap(1, 2);
        let err = SeriesTable::from_parts(periods, embedded_rows()).unwrap_err();
        assert!(matches!(err, DatasetError::PeriodOrder { .. }));
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let mut rows = embedded_rows();
        rows.pop();
        let err = SeriesTable::from_parts(PERIODS.to_vec(), rows).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::RowCount {
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_manufacturer() {
        let mut rows = embedded_rows();
        rows[5].manufacturer = "ADIUM".to_string();
        let err = SeriesTable::from_parts(PERIODS.to_vec(), rows).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateManufacturer(name) if name == "ADIUM"));
    }

    #[test]
    fn test_rejects_missing_tracked() {
        let mut rows = embedded_rows();
        rows[0].manufacturer = "NOVARTIS".to_string();
        let err = SeriesTable::from_parts(PERIODS.to_vec(), rows).unwrap_err();
        assert!(matches!(err, DatasetError::MissingManufacturer(name) if name == "SIEGFRIED"));
    }

    #[test]
    fn test_rejects_zero_total() {
        let rows = embedded_rows()
            .into_iter()
            .map(|mut row| {
                row.units[2] = 0;
                row
            })
            .collect();
        let err = SeriesTable::from_parts(PERIODS.to_vec(), rows).unwrap_err();
        assert!(matches!(err, DatasetError::ZeroTotal(label) if label == "MAT Ene 2024"));
    }

    #[test]
    fn test_rejects_overflowing_total() {
        let mut rows = embedded_rows();
        rows[1].units[3] = u64::MAX;
        let err = SeriesTable::from_parts(PERIODS.to_vec(), rows).unwrap_err();
        assert!(matches!(err, DatasetError::TotalOverflow(label) if label == "MAT Ene 2025"));
    }

    #[test]
    fn test_checked_total_at() {
        let mut table = SeriesTable::embedded();
        assert_eq!(table.checked_total_at(0), Some(8_217_996));
        table.rows[0].units[0] = u64::MAX;
        assert_eq!(table.checked_total_at(0), None);
        assert_eq!(table.total_at(0), u64::MAX);
    }
}
