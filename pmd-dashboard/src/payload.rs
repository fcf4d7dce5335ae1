//! JSON payloads handed to the chart renderer.
//!
//! Each bar carries both the scaled revenue (the axis value) and the unscaled
//! figure (the tooltip value), so the renderer never has to undo the scaling.

use chrono::NaiveDate;
use pmd_stats::{MonthlyRecord, TrendReading, WindowSelection};
use serde::Serialize;

use crate::error::Result;

/// One month on the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    /// First day of the month, "YYYY-MM-DD"
    pub date: NaiveDate,
    /// Full month name for tooltips
    pub month: &'static str,
    /// Three letter axis tick
    pub tick: &'static str,
    pub occupation: u8,
    /// Scaled revenue plotted on the shared axis
    pub revenue: u64,
    /// Unscaled revenue in PLN
    pub actual_revenue: u64,
    /// Value label drawn above the bar, if the chart shows one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BarDatum {
    pub fn from_record(record: &MonthlyRecord, label: Option<String>) -> Self {
        BarDatum {
            date: record.period_start,
            month: record.label(),
            tick: record.short_label(),
            occupation: record.occupation_percent,
            revenue: record.revenue_scaled,
            actual_revenue: record.revenue,
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFooter {
    /// Trend the headline describes
    pub trend: TrendReading,
    /// e.g. "Trending up by 4.2% this quarter"
    pub headline: String,
    /// Totals line under the headline
    pub detail: String,
}

/// Everything a chart card needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub title: &'static str,
    pub description: String,
    /// Window selector value; absent for fixed twelve-month charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowSelection>,
    pub bars: Vec<BarDatum>,
    pub footer: ChartFooter,
}

impl ChartPayload {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub(crate) fn bars<F>(records: &[MonthlyRecord], label: F) -> Vec<BarDatum>
where
    F: Fn(&MonthlyRecord) -> Option<String>,
{
    records
        .iter()
        .map(|record| BarDatum::from_record(record, label(record)))
        .collect()
}
