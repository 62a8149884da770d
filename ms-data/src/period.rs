use crate::error::DatasetError;
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// A moving-annual-total period, identified by the month it ends in.
///
/// Periods order chronologically. They serialize as their display label
/// (`"MAT Ene 2022"`) since that is what the chart x-axis shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    /// 1-based month
    month: u32,
}

impl Period {
    /// Create a period ending in the given month. Months outside 1..=12 are clamped.
    pub const fn new(year: i32, month: u32) -> Self {
        let month = if month < 1 {
            1
        } else if month > 12 {
            12
        } else {
            month
        };
        Self { year, month }
    }

    /// Parse a `YYYY-MM` key.
    pub fn parse(s: &str) -> Result<Self, DatasetError> {
        let trimmed = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
            .map_err(|_| DatasetError::InvalidPeriod(trimmed.to_string()))?;
        Ok(Self::new(date.year(), date.month()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// `YYYY-MM` key, the inverse of [`Period::parse`].
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Axis label, e.g. `MAT Ene 2022`.
    pub fn label(&self) -> String {
        format!("MAT {}", self.short_label())
    }

    /// Label without the `MAT` prefix, e.g. `Ene 2022`.
    pub fn short_label(&self) -> String {
        format!("{} {}", MONTH_ABBREVIATIONS[self.month_index()], self.year)
    }

    /// Label with the full month name, e.g. `MAT Enero 2022`.
    pub fn long_label(&self) -> String {
        format!("MAT {} {}", MONTH_NAMES[self.month_index()], self.year)
    }

    fn month_index(&self) -> usize {
        (self.month as usize).saturating_sub(1).min(11)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}
