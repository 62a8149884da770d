//! CSV import and export of the sales table.
//!
//! # CSV Format
//!
//! One header row naming the periods as `YYYY-MM`, then one row per
//! manufacturer with integer unit counts:
//!
//! ```text
//! manufacturer,2022-01,2023-01,2024-01,2025-01,2026-01
//! SIEGFRIED,1087806,1031930,1054693,962668,879635
//! ```

use crate::error::DatasetError;
use crate::period::Period;
use crate::series::{SeriesRow, SeriesTable, PERIOD_COUNT};

impl SeriesTable {
    /// Parse and validate a sales table from CSV text.
    pub fn from_csv(csv_data: &str) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        // First header cell labels the manufacturer column
        let periods = rdr
            .headers()?
            .iter()
            .skip(1)
            .map(Period::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let manufacturer = record.get(0).unwrap_or("").to_string();
            if manufacturer.is_empty() {
                continue;
            }

            let values: Vec<&str> = record.iter().skip(1).collect();
            if values.len() != PERIOD_COUNT {
                return Err(DatasetError::RowLength {
                    manufacturer,
                    expected: PERIOD_COUNT,
                    found: values.len(),
                });
            }

            let mut units = [0u64; PERIOD_COUNT];
            for (slot, value) in units.iter_mut().zip(values) {
                *slot = value.parse().map_err(|_| DatasetError::InvalidUnits {
                    manufacturer: manufacturer.clone(),
                    value: value.to_string(),
                })?;
            }
            rows.push(SeriesRow::new(manufacturer, units));
        }

        log::info!("loader: parsed {} series rows", rows.len());
        Self::from_parts(periods, rows)
    }

    /// Render the table in the format [`SeriesTable::from_csv`] reads.
    pub fn to_csv(&self) -> String {
        let mut output = String::from("manufacturer");
        for period in self.periods() {
            output.push(',');
            output.push_str(&period.key());
        }
        output.push('\n');

        for row in self.rows() {
            output.push_str(&row.manufacturer);
            for value in row.units {
                output.push_str(&format!(",{}", value));
            }
            output.push('\n');
        }
        output
    }
}
