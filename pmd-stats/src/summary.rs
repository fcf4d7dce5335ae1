use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StatsError};
use crate::record::MonthlyRecord;

/// Months compared by [`quarter_trend`] on each side.
pub const QUARTER_LEN: usize = 3;

/// Why a trend could not be measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoTrendReason {
    /// Not enough records to form an earlier period.
    InsufficientData,
    /// The earlier period averages zero, so a percentage change is undefined.
    ZeroBaseline,
}

impl fmt::Display for NoTrendReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoTrendReason::InsufficientData => write!(f, "not enough prior data"),
            NoTrendReason::ZeroBaseline => write!(f, "prior period averages zero"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    fn of(percent: f64) -> TrendDirection {
        if percent > 0.0 {
            TrendDirection::Up
        } else if percent < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }
}

/// Percentage change of a later period's mean against an earlier one's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub percent: f64,
    pub direction: TrendDirection,
}

impl Trend {
    /// `(later - earlier) / earlier * 100`; a zero `earlier` is undefined.
    pub fn between(earlier: f64, later: f64) -> Result<Trend> {
        if earlier == 0.0 {
            return Err(StatsError::UndefinedTrend(NoTrendReason::ZeroBaseline));
        }
        let percent = (later - earlier) / earlier * 100.0;
        Ok(Trend {
            percent,
            direction: TrendDirection::of(percent),
        })
    }

    /// Absolute percentage, for "by 4.2%" style captions.
    pub fn magnitude(&self) -> f64 {
        self.percent.abs()
    }
}

/// A trend, or an explicit statement that there is none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum TrendReading {
    Measured(Trend),
    NoTrend(NoTrendReason),
}

impl TrendReading {
    pub fn trend(&self) -> Option<&Trend> {
        match self {
            TrendReading::Measured(trend) => Some(trend),
            TrendReading::NoTrend(_) => None,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, TrendReading::Measured(_))
    }
}

impl From<Result<Trend>> for TrendReading {
    fn from(value: Result<Trend>) -> Self {
        match value {
            Ok(trend) => TrendReading::Measured(trend),
            Err(StatsError::UndefinedTrend(reason)) => TrendReading::NoTrend(reason),
            Err(_) => TrendReading::NoTrend(NoTrendReason::InsufficientData),
        }
    }
}

/// Which column of a record a trend is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    Occupation,
    Revenue,
}

impl TrendMetric {
    /// Unscaled value of this metric; revenue never uses the scaled figure.
    pub fn value(&self, record: &MonthlyRecord) -> f64 {
        match self {
            TrendMetric::Occupation => f64::from(record.occupation_percent),
            TrendMetric::Revenue => record.revenue as f64,
        }
    }
}

fn mean(records: &[MonthlyRecord], metric: TrendMetric) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(|record| metric.value(record)).sum();
    Some(sum / records.len() as f64)
}

fn rounded_mean(sum: u64, count: u64) -> u64 {
    // round half up, matching display rounding; widened so sum * 2 cannot wrap
    let (sum, count) = (u128::from(sum), u128::from(count));
    // the mean never exceeds sum, which fits in u64
    ((sum * 2 + count) / (count * 2)) as u64
}

/// Compare the mean of the later half against the earlier half.
///
/// The split is at `floor(len / 2)`, so an odd-length window gives the
/// extra record to the later half.
pub fn midpoint_trend(records: &[MonthlyRecord], metric: TrendMetric) -> Result<Trend> {
    let midpoint = records.len() / 2;
    let (earlier, later) = records.split_at(midpoint);
    match (mean(earlier, metric), mean(later, metric)) {
        (Some(earlier), Some(later)) => Trend::between(earlier, later),
        _ => Err(StatsError::UndefinedTrend(NoTrendReason::InsufficientData)),
    }
}

/// Compare the last three records against the three before them.
pub fn quarter_trend(records: &[MonthlyRecord], metric: TrendMetric) -> TrendReading {
    if records.len() < QUARTER_LEN * 2 {
        return TrendReading::NoTrend(NoTrendReason::InsufficientData);
    }
    let recent_start = records.len() - QUARTER_LEN;
    let recent = &records[recent_start..];
    let previous = &records[recent_start - QUARTER_LEN..recent_start];
    match (mean(previous, metric), mean(recent, metric)) {
        (Some(previous), Some(recent)) => Trend::between(previous, recent).into(),
        _ => TrendReading::NoTrend(NoTrendReason::InsufficientData),
    }
}

/// Aggregates over the visible records only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records summarized.
    pub window_len: usize,
    /// Sum of unscaled revenue.
    pub total_revenue: u64,
    /// Rounded mean of unscaled revenue.
    pub average_revenue: u64,
    /// Rounded mean occupation.
    pub average_occupation: u8,
    pub occupation_trend: TrendReading,
    pub revenue_trend: TrendReading,
}

/// Totals, averages and midpoint trends over `records`.
pub fn summarize(records: &[MonthlyRecord]) -> Result<Summary> {
    if records.is_empty() {
        return Err(StatsError::EmptyWindow);
    }
    let count = records.len() as u64;
    let total_revenue = records
        .iter()
        .try_fold(0u64, |total, record| total.checked_add(record.revenue))
        .ok_or(StatsError::RevenueOverflow)?;
    let total_occupation: u64 = records
        .iter()
        .map(|record| u64::from(record.occupation_percent))
        .sum();
    // each occupation is <= 100, so the mean is too
    let average_occupation = rounded_mean(total_occupation, count).min(100) as u8;
    Ok(Summary {
        window_len: records.len(),
        total_revenue,
        average_revenue: rounded_mean(total_revenue, count),
        average_occupation,
        occupation_trend: midpoint_trend(records, TrendMetric::Occupation).into(),
        revenue_trend: midpoint_trend(records, TrendMetric::Revenue).into(),
    })
}
