//! Valsartan market data and the market-share derivations built on it.
//!
//! The sales table is compiled in ([`SeriesTable::embedded`]); every chart
//! works off the [`DerivedRow`]s computed from it once at startup.
//!
//! # Usage
//!
//! ```rust
//! use ms_data::{derive_rows, headline_kpis, SeriesTable};
//!
//! let table = SeriesTable::embedded();
//! let rows = derive_rows(&table);
//! assert_eq!(rows.len(), 5);
//! assert_eq!(rows[0].tracked, 1_087_806);
//!
//! let kpis = headline_kpis(&rows).unwrap();
//! assert_eq!(kpis.units_change, -19.1);
//! ```
//!
//! A table can also be read from CSV, in which case it is validated first
//! (see [`SeriesTable::from_csv`] and [`DatasetError`]).

pub mod derive;
pub mod error;
mod loader;
pub mod period;
pub mod series;

pub use derive::{
    competitor_growth, derive_rows, headline_kpis, market_share, CompetitorGrowth, DerivedRow,
    HeadlineKpis,
};
pub use error::DatasetError;
pub use period::Period;
pub use series::{
    SeriesRow, SeriesTable, COMPETITORS, PERIODS, PERIOD_COUNT, SERIES_COUNT,
    TRACKED_MANUFACTURER, TRACKED_PRODUCT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_rows_serialize_for_charts() {
        let rows = derive_rows(&SeriesTable::embedded());
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["period"], "MAT Ene 2022");
        assert_eq!(json["tracked"], 1_087_806);
        assert_eq!(json["share"], 13.2);
        assert_eq!(json["competitors"][0], 2_081_602);
    }

    #[test]
    fn end_to_end_headline_numbers() {
        let table = SeriesTable::embedded();
        let rows = derive_rows(&table);
        assert_eq!(rows.first().map(|r| r.tracked), Some(1_087_806));
        assert_eq!(rows.last().map(|r| r.tracked), Some(879_635));
        let kpis = headline_kpis(&rows).unwrap();
        assert_eq!(kpis.units_change, -19.1);
    }
}
