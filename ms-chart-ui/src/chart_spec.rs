//! Chart specifications handed to the D3 renderer as JSON.
//!
//! Each [`View`] maps to one [`ChartSpec`]: which series to draw and how,
//! the y-axis domain with pre-labelled ticks, and one [`ChartPoint`] per
//! period carrying both the raw values and the formatted tooltip rows.
//! All number formatting happens here so the JS side only positions text.

use crate::theme::{COMPETITOR_COLORS, SHARE_COLOR, TRACKED_COLOR};
use crate::view::View;
use ms_data::{DerivedRow, COMPETITORS};
use ms_utils::ticks::{nice_ticks, stepped_ticks};
use ms_utils::units::{format_share, format_unit};
use serde::Serialize;
use std::collections::BTreeMap;

/// Chart height in pixels.
pub const CHART_HEIGHT: u32 = 320;

/// Upper bound of the market-share axis, in percent.
pub const SHARE_AXIS_MAX: f64 = 25.0;
const SHARE_AXIS_STEP: f64 = 5.0;
const UNIT_AXIS_TICKS: usize = 5;

pub const TRACKED_SERIES_NAME: &str = "DIOVAN (SIE)";
pub const SHARE_SERIES_NAME: &str = "MS (%)";

const TRACKED_KEY: &str = "tracked";
const SHARE_KEY: &str = "share";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Area,
    Line,
}

/// How a series value reads in tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Unit formatter (`1.09M`, `880K`)
    Units,
    /// Value with `%` appended (`13.2%`)
    Share,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Units => format_unit(value),
            ValueFormat::Share => format_share(value),
        }
    }
}

/// Vertical fade under an area series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientSpec {
    pub id: String,
    pub top_opacity: f64,
    pub bottom_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    /// Key into [`ChartPoint::values`]
    pub key: String,
    /// Legend and tooltip name
    pub name: String,
    pub color: String,
    pub stroke_width: f64,
    pub dash_array: Option<String>,
    pub dot_radius: f64,
    pub active_dot_radius: f64,
    pub gradient: Option<GradientSpec>,
    pub format: ValueFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub domain: [f64; 2],
    pub ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipEntry {
    pub name: String,
    pub color: String,
    pub value: String,
}

/// One x position on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub values: BTreeMap<String, f64>,
    pub tooltip: Vec<TooltipEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub caption: String,
    pub height: u32,
    pub series: Vec<SeriesSpec>,
    pub y_axis: AxisSpec,
    pub points: Vec<ChartPoint>,
    pub legend: bool,
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Description shown above the chart for `view`.
pub fn caption(view: View) -> &'static str {
    match view {
        View::Units => "Unidades vendidas por Siegfried (DIOVAN) en el mercado de Valsartan",
        View::Share => {
            "Participación de mercado (Market Share %) de DIOVAN sobre el total de Valsartan"
        }
        View::Competitors => "DIOVAN vs principales competidores en unidades (MAT Valsartan)",
    }
}

/// Build the chart for `view` from the derived rows.
pub fn chart_spec(view: View, rows: &[DerivedRow]) -> ChartSpec {
    match view {
        View::Units => units_spec(rows),
        View::Share => share_spec(rows),
        View::Competitors => competitors_spec(rows),
    }
}

fn units_spec(rows: &[DerivedRow]) -> ChartSpec {
    let series = vec![area_series(
        TRACKED_KEY,
        TRACKED_SERIES_NAME,
        TRACKED_COLOR,
        "siegGrad",
        ValueFormat::Units,
    )];
    let max = rows.iter().map(|r| r.tracked).max().unwrap_or(0) as f64;

    ChartSpec {
        kind: ChartKind::Area,
        caption: caption(View::Units).to_string(),
        height: CHART_HEIGHT,
        y_axis: unit_axis(max),
        points: points(rows, &series),
        series,
        legend: false,
    }
}

fn share_spec(rows: &[DerivedRow]) -> ChartSpec {
    let series = vec![area_series(
        SHARE_KEY,
        SHARE_SERIES_NAME,
        SHARE_COLOR,
        "msGrad",
        ValueFormat::Share,
    )];
    let ticks = stepped_ticks(0.0, SHARE_AXIS_MAX, SHARE_AXIS_STEP)
        .into_iter()
        .map(|value| AxisTick {
            value,
            label: format_share(value),
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Area,
        caption: caption(View::Share).to_string(),
        height: CHART_HEIGHT,
        y_axis: AxisSpec {
            domain: [0.0, SHARE_AXIS_MAX],
            ticks,
        },
        points: points(rows, &series),
        series,
        legend: false,
    }
}

fn competitors_spec(rows: &[DerivedRow]) -> ChartSpec {
    let mut series = vec![line_series(
        TRACKED_KEY,
        TRACKED_SERIES_NAME,
        TRACKED_COLOR,
        3.0,
        None,
        4.0,
    )];
    for (name, color) in COMPETITORS.iter().zip(COMPETITOR_COLORS) {
        series.push(line_series(
            &name.to_lowercase(),
            name,
            color,
            2.0,
            Some("4 2"),
            3.0,
        ));
    }

    let max = rows
        .iter()
        .flat_map(|r| std::iter::once(r.tracked).chain(r.competitors))
        .max()
        .unwrap_or(0) as f64;

    ChartSpec {
        kind: ChartKind::Line,
        caption: caption(View::Competitors).to_string(),
        height: CHART_HEIGHT,
        y_axis: unit_axis(max),
        points: points(rows, &series),
        series,
        legend: true,
    }
}

fn area_series(
    key: &str,
    name: &str,
    color: &str,
    gradient_id: &str,
    format: ValueFormat,
) -> SeriesSpec {
    SeriesSpec {
        key: key.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        stroke_width: 3.0,
        dash_array: None,
        dot_radius: 5.0,
        active_dot_radius: 7.0,
        gradient: Some(GradientSpec {
            id: gradient_id.to_string(),
            top_opacity: 0.3,
            bottom_opacity: 0.0,
        }),
        format,
    }
}

fn line_series(
    key: &str,
    name: &str,
    color: &str,
    stroke_width: f64,
    dash_array: Option<&str>,
    dot_radius: f64,
) -> SeriesSpec {
    SeriesSpec {
        key: key.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        stroke_width,
        dash_array: dash_array.map(str::to_string),
        dot_radius,
        active_dot_radius: dot_radius + 2.0,
        gradient: None,
        format: ValueFormat::Units,
    }
}

fn unit_axis(max: f64) -> AxisSpec {
    let ticks = nice_ticks(max, UNIT_AXIS_TICKS);
    let top = ticks.last().copied().unwrap_or(1.0);
    AxisSpec {
        domain: [0.0, top],
        ticks: ticks
            .into_iter()
            .map(|value| AxisTick {
                value,
                label: format_unit(value),
            })
            .collect(),
    }
}

/// Value of the series `key` in a derived row.
fn series_value(row: &DerivedRow, key: &str) -> Option<f64> {
    match key {
        TRACKED_KEY => Some(row.tracked as f64),
        SHARE_KEY => Some(row.share),
        other => COMPETITORS
            .iter()
            .position(|name| name.to_lowercase() == other)
            .map(|index| row.competitors[index] as f64),
    }
}

fn points(rows: &[DerivedRow], series: &[SeriesSpec]) -> Vec<ChartPoint> {
    rows.iter()
        .map(|row| {
            let mut values = BTreeMap::new();
            let mut tooltip = Vec::with_capacity(series.len());
            for s in series {
                if let Some(value) = series_value(row, &s.key) {
                    values.insert(s.key.clone(), value);
                    tooltip.push(TooltipEntry {
                        name: s.name.clone(),
                        color: s.color.clone(),
                        value: s.format.format(value),
                    });
                }
            }
            ChartPoint {
                label: row.period.label(),
                values,
                tooltip,
            }
        })
        .collect()
}
