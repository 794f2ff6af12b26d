// File: crates/hover-core/src/tooltip.rs
// Summary: Tooltip assembly from a hover result, plus a pluggable text formatter.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::hover::{HoverInfo, HoverOptions};
use crate::settings::TooltipSettings;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub label: String,
    pub color: String,
    pub value: f64,
    /// Row belongs to the series directly under the cursor.
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Representative time, epoch millis.
    pub time: f64,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    /// Build tooltip content; `None` when the hover result has no representative time.
    ///
    /// `hovered` is the series directly under the cursor, if any. Rows are
    /// sorted by value, largest first; individual mode keeps only the hovered row.
    pub fn build(info: &HoverInfo, hovered: Option<usize>, opts: HoverOptions) -> Option<Self> {
        let time = info.time?;
        let mut sorted = info.clone();
        sorted.sort_by_value_desc();
        let rows = sorted
            .series_hover
            .into_iter()
            .filter(|h| !opts.individual || Some(h.series_index) == hovered)
            .map(|h| TooltipRow {
                active: Some(h.series_index) == hovered,
                label: h.label,
                color: h.color,
                value: h.value,
            })
            .collect();
        Some(Self { time, rows })
    }
}

/// Caller-supplied tooltip rendering.
pub trait TooltipFormatter {
    fn format(&self, tooltip: &Tooltip) -> String;
}

impl<F: Fn(&Tooltip) -> String> TooltipFormatter for F {
    fn format(&self, tooltip: &Tooltip) -> String { self(tooltip) }
}

/// Plain-text formatter: a time header line, then one `label: value units` line per row.
/// Active rows are prefixed with `*`.
#[derive(Clone, Debug)]
pub struct TextFormatter {
    pub decimals: u8,
    pub units: String,
    pub offset: FixedOffset,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { decimals: 2, units: String::new(), offset: Utc.fix() }
    }
}

impl TextFormatter {
    pub fn from_settings(settings: &TooltipSettings) -> Self {
        Self {
            decimals: settings.decimals.unwrap_or(2),
            units: settings.units.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// `YYYY-MM-DD HH:MM:SS` in the formatter's offset; raw number if out of range.
    pub fn format_time(&self, millis: f64) -> String {
        match DateTime::from_timestamp_millis(millis as i64) {
            Some(dt) => dt.with_timezone(&self.offset).format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format!("{millis}"),
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        let mut s = format!("{:.*}", self.decimals as usize, value);
        if !self.units.is_empty() {
            s.push(' ');
            s.push_str(&self.units);
        }
        s
    }
}

impl TooltipFormatter for TextFormatter {
    fn format(&self, tooltip: &Tooltip) -> String {
        let mut out = self.format_time(tooltip.time);
        for row in &tooltip.rows {
            let marker = if row.active { "*" } else { " " };
            let _ = write!(out, "\n{marker} {}: {}", row.label, self.format_value(row.value));
        }
        out
    }
}
