//! Row of headline figures under the title.

use crate::theme::{SHARE_COLOR, SHARE_LAST_COLOR, TRACKED_COLOR, UNITS_FIRST_COLOR};
use dioxus::prelude::*;
use ms_data::HeadlineKpis;
use ms_utils::units::{format_percent, format_pp_delta, format_unit};

#[derive(Debug, Clone, PartialEq)]
pub struct KpiChip {
    pub label: String,
    pub value: String,
    pub color: &'static str,
}

/// Units and share at both ends of the range, then the share delta.
pub fn kpi_chip_values(kpis: &HeadlineKpis) -> Vec<KpiChip> {
    let first_year = kpis.first_period.year();
    let last_year = kpis.last_period.year();
    vec![
        KpiChip {
            label: format!("Unidades {}", first_year),
            value: format_unit(kpis.first_units as f64),
            color: UNITS_FIRST_COLOR,
        },
        KpiChip {
            label: format!("Unidades {}", last_year),
            value: format_unit(kpis.last_units as f64),
            color: TRACKED_COLOR,
        },
        KpiChip {
            label: format!("MS {}", first_year),
            value: format_percent(kpis.first_share),
            color: SHARE_COLOR,
        },
        KpiChip {
            label: format!("MS {}", last_year),
            value: format_percent(kpis.last_share),
            color: SHARE_LAST_COLOR,
        },
        KpiChip {
            label: "Δ Market Share".to_string(),
            value: format_pp_delta(kpis.share_delta),
            color: TRACKED_COLOR,
        },
    ]
}

#[derive(Props, Clone, PartialEq)]
pub struct KpiChipsProps {
    pub kpis: HeadlineKpis,
}

#[component]
pub fn KpiChips(props: KpiChipsProps) -> Element {
    let chips = kpi_chip_values(&props.kpis);

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin-bottom: 28px; flex-wrap: wrap;",
            for chip in chips {
                div {
                    key: "{chip.label}",
                    style: "background: rgba(255,255,255,0.04); border: 1px solid rgba(255,255,255,0.08); border-radius: 8px; padding: 8px 14px;",
                    p {
                        style: "font-size: 10px; color: #64748b; margin: 0 0 2px; text-transform: uppercase; letter-spacing: 0.1em;",
                        "{chip.label}"
                    }
                    p {
                        style: "font-size: 18px; font-weight: 700; color: {chip.color}; margin: 0;",
                        "{chip.value}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_data::{derive_rows, headline_kpis, SeriesTable};

    #[test]
    fn test_chip_values() {
        let rows = derive_rows(&SeriesTable::embedded());
        let chips = kpi_chip_values(&headline_kpis(&rows).unwrap());
        let pairs: Vec<(&str, &str)> = chips
            .iter()
            .map(|c| (c.label.as_str(), c.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Unidades 2022", "1.09M"),
                ("Unidades 2026", "880K"),
                ("MS 2022", "13.2%"),
                ("MS 2026", "8.6%"),
                ("Δ Market Share", "-4.6 pp"),
            ]
        );
    }
}
