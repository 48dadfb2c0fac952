//! Report rendering.
//!
//! The text report lists each zone by name followed by one `needed;rate`
//! line per rate sample. The grouped variant lists every band as
//! `(lower;upper]` with `start;needed;rate` lines under it.

use hr_analysis::{RateBand, RateSample};

use crate::analysis_service::{AnalysisReport, ZoneStatus};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub grouped: bool,
    pub decimal_separator: char,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            grouped: false,
            decimal_separator: '.',
        }
    }
}

/// Shortest decimal form of `value` with the given separator.
pub fn format_number(value: f64, decimal_separator: char) -> String {
    let text = value.to_string();
    if decimal_separator == '.' {
        text
    } else {
        text.replace('.', &decimal_separator.to_string())
    }
}

fn push_rate_line(out: &mut String, sample: &RateSample, style: TextStyle) {
    out.push_str(&format!(
        "{};{}\n",
        format_number(sample.needed_degrees, style.decimal_separator),
        format_number(sample.rate_per_degree, style.decimal_separator)
    ));
}

fn push_band(out: &mut String, band: &RateBand, style: TextStyle) {
    out.push_str(&format!("({};{}]\n", band.lower_bound, band.upper_bound));
    for sample in &band.samples {
        out.push_str(&format!(
            "{};{};{}\n",
            format_number(sample.start_temp, style.decimal_separator),
            format_number(sample.needed_degrees, style.decimal_separator),
            format_number(sample.rate_per_degree, style.decimal_separator)
        ));
    }
}

pub fn render_text(report: &AnalysisReport, style: TextStyle) -> AppResult<String> {
    if style.decimal_separator == ';' {
        return Err(AppError::InvalidInput(
            "decimal separator cannot be the field separator ';'".to_string(),
        ));
    }

    let mut out = String::new();
    for zone in &report.zones {
        out.push_str(&zone.name);
        out.push('\n');
        match &zone.status {
            ZoneStatus::Skipped { reason } => {
                out.push_str(&format!("# skipped: {}\n", reason));
            }
            ZoneStatus::Analysed(result) => {
                if !style.grouped {
                    for sample in &result.rates {
                        push_rate_line(&mut out, sample, style);
                    }
                    continue;
                }
                let Some(bands) = &result.bands else {
                    return Err(AppError::InvalidInput(
                        "grouped report needs a bands range in the config".to_string(),
                    ));
                };
                for band in bands {
                    push_band(&mut out, band, style);
                }
            }
        }
    }
    Ok(out)
}

pub fn render_json(report: &AnalysisReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::analysis_service::{ZoneReport, ZoneResult};
    use chrono::{TimeZone, Utc};

    fn sample(start_temp: f64, needed_degrees: f64, rate_per_degree: f64) -> RateSample {
        RateSample {
            start_temp,
            needed_degrees,
            rate_per_degree,
            started_at: Utc.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap(),
            duration_minutes: 50,
        }
    }

    fn report() -> AnalysisReport {
        let rates = vec![sample(17.5, 2.5, 20.0)];
        let bands = vec![
            RateBand {
                lower_bound: 16,
                upper_bound: 17,
                samples: Vec::new(),
            },
            RateBand {
                lower_bound: 17,
                upper_bound: 18,
                samples: rates.clone(),
            },
        ];
        AnalysisReport {
            name: "Community hall".to_string(),
            as_of: Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
            lookback: "30d".to_string(),
            bands: None,
            zones: vec![
                ZoneReport {
                    zone: "Foyer".to_string(),
                    name: "Foyer".to_string(),
                    status: ZoneStatus::Analysed(ZoneResult {
                        intervals: 1,
                        completed: 1,
                        rejected: 0,
                        rate_skips: 0,
                        rates,
                        bands: Some(bands),
                    }),
                },
                ZoneReport {
                    zone: "Saal".to_string(),
                    name: "Saal".to_string(),
                    status: ZoneStatus::Skipped {
                        reason: "no data".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn grouped_text_lists_every_band_as_half_open_range() {
        let style = TextStyle {
            grouped: true,
            decimal_separator: ',',
        };
        let text = render_text(&report(), style).unwrap();
        assert_eq!(
            text,
            "Foyer\n(16;17]\n(17;18]\n17,5;2,5;20\nSaal\n# skipped: no data\n"
        );
    }

    #[test]
    fn plain_text_and_separator_clash() {
        let text = render_text(&report(), TextStyle::default()).unwrap();
        assert_eq!(text, "Foyer\n2.5;20\nSaal\n# skipped: no data\n");

        let clash = TextStyle {
            grouped: false,
            decimal_separator: ';',
        };
        assert!(matches!(
            render_text(&report(), clash),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(format_number(20.0, '.'), "20");
        assert_eq!(format_number(22.86, ','), "22,86");
        assert_eq!(format_number(-0.5, ','), "-0,5");
    }
}
