use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::dates::{month_start, trailing_month_starts};
use crate::error::{Result, StatsError};
use crate::random::RandomSource;
use crate::record::{MonthlyRecord, SeasonalClass, MAX_GENERATED_OCCUPATION};
use crate::window::WindowSelection;

/// Number of monthly records in every series.
pub const SERIES_LEN: usize = 12;

/// Spread added on top of a seasonal class's base occupation.
const OCCUPATION_SPREAD: u8 = 20;
/// Revenue per occupied percentage point lies in `[150, 250)` PLN.
const REVENUE_RATE_FLOOR: f64 = 150.0;
const REVENUE_RATE_SPREAD: f64 = 100.0;

/// Embedded per-calendar-month calibration table used by deterministic generation.
pub static CALIBRATION_CSV: &str = include_str!("../../fixtures/calibration.csv");

/// How sample values are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Fixed calibration table; reproducible output for demos and tests.
    Deterministic,
    /// Bounded pseudo-random values biased by seasonal class.
    #[default]
    Randomized,
}

/// One row of the calibration table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalibrationEntry {
    #[serde(rename = "MONTH")]
    pub month: u32,
    #[serde(rename = "OCCUPATION (%)")]
    pub occupation_percent: u8,
    #[serde(rename = "REVENUE (PLN)")]
    pub revenue: u64,
}

/// Parse the calibration table, ordered January through December.
pub fn calibration_table() -> Result<Vec<CalibrationEntry>> {
    let mut entries = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(CALIBRATION_CSV.as_bytes())
        .deserialize()
        .collect::<std::result::Result<Vec<CalibrationEntry>, csv::Error>>()?;
    entries.sort_by_key(|entry| entry.month);
    let complete = entries.len() == SERIES_LEN
        && entries
            .iter()
            .zip(1..)
            .all(|(entry, month)| entry.month == month);
    if !complete {
        return Err(StatsError::MalformedSeries(
            "calibration table must list each calendar month exactly once".to_string(),
        ));
    }
    Ok(entries)
}

/// Twelve consecutive monthly records, oldest first.
///
/// Immutable once built; regenerating produces a fresh series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MonthlyRecord>", into = "Vec<MonthlyRecord>")]
pub struct TimeSeries {
    records: Vec<MonthlyRecord>,
}

impl TimeSeries {
    /// Validate and wrap existing records.
    ///
    /// Records must number exactly [`SERIES_LEN`], start on the first of a
    /// month, and cover consecutive months in ascending order.
    pub fn from_records(records: Vec<MonthlyRecord>) -> Result<TimeSeries> {
        if records.len() != SERIES_LEN {
            return Err(StatsError::MalformedSeries(format!(
                "expected {SERIES_LEN} records, found {}",
                records.len()
            )));
        }
        if let Some(record) = records
            .iter()
            .find(|record| month_start(&record.period_start) != record.period_start)
        {
            return Err(StatsError::MalformedSeries(format!(
                "period start {} is not the first day of a month",
                record.period_start
            )));
        }
        let Some(last) = records.last() else {
            return Err(StatsError::MalformedSeries("no records".to_string()));
        };
        let expected = trailing_month_starts(&last.period_start, SERIES_LEN)?;
        let consecutive = records
            .iter()
            .zip(&expected)
            .all(|(record, start)| record.period_start == *start);
        if !consecutive {
            return Err(StatsError::MalformedSeries(
                "records are not consecutive ascending months".to_string(),
            ));
        }
        Ok(TimeSeries { records })
    }

    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First day of the most recent month in the series.
    pub fn end_month(&self) -> Option<NaiveDate> {
        self.records.last().map(|record| record.period_start)
    }

    /// The trailing `window` records, in order.
    pub fn window(&self, window: WindowSelection) -> &[MonthlyRecord] {
        let skip = self.records.len().saturating_sub(window.months());
        &self.records[skip..]
    }

    pub fn into_records(self) -> Vec<MonthlyRecord> {
        self.records
    }
}

impl TryFrom<Vec<MonthlyRecord>> for TimeSeries {
    type Error = StatsError;

    fn try_from(value: Vec<MonthlyRecord>) -> Result<Self> {
        TimeSeries::from_records(value)
    }
}

impl From<TimeSeries> for Vec<MonthlyRecord> {
    fn from(value: TimeSeries) -> Self {
        value.records
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a MonthlyRecord;
    type IntoIter = std::slice::Iter<'a, MonthlyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Value ranges for randomized generation; each chart draws from its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesProfile {
    /// Revenue is a per-point rate times occupation.
    #[default]
    Combined,
    /// Wider occupation ranges; revenue as in `Combined`.
    Booking,
    /// Revenue drawn per season, independent of occupation.
    Revenue,
}

impl SeriesProfile {
    /// Half-open occupation range for months of `class`.
    pub fn occupation_range(&self, class: SeasonalClass) -> Range<u8> {
        match (self, class) {
            (SeriesProfile::Booking, SeasonalClass::Summer) => 60..90,
            (SeriesProfile::Booking, SeasonalClass::Winter) => 50..75,
            (SeriesProfile::Booking, SeasonalClass::Other) => 40..70,
            _ => {
                let base = class.base_occupation();
                base..base + OCCUPATION_SPREAD
            }
        }
    }

    /// Half-open revenue range for months of `class`, when revenue does not
    /// follow occupation.
    pub fn revenue_range(&self, class: SeasonalClass) -> Option<Range<u64>> {
        match (self, class) {
            (SeriesProfile::Revenue, SeasonalClass::Summer) => Some(15_000..25_000),
            (SeriesProfile::Revenue, SeasonalClass::Winter) => Some(10_000..18_000),
            (SeriesProfile::Revenue, SeasonalClass::Other) => Some(8_000..16_000),
            _ => None,
        }
    }
}

/// Produce the twelve months ending at `reference`'s month, oldest first.
///
/// `rng` is only consulted in [`GenerationMode::Randomized`].
pub fn generate<R: RandomSource + ?Sized>(
    reference: NaiveDate,
    mode: GenerationMode,
    rng: &mut R,
) -> Result<TimeSeries> {
    generate_profiled(reference, mode, SeriesProfile::Combined, rng)
}

/// [`generate`] with the randomized ranges of `profile`.
///
/// Deterministic generation reads the calibration table whatever the profile.
pub fn generate_profiled<R: RandomSource + ?Sized>(
    reference: NaiveDate,
    mode: GenerationMode,
    profile: SeriesProfile,
    rng: &mut R,
) -> Result<TimeSeries> {
    let months = trailing_month_starts(&reference, SERIES_LEN)?;
    let records: Vec<MonthlyRecord> = match mode {
        GenerationMode::Deterministic => {
            let table = calibration_table()?;
            months
                .into_iter()
                .map(|start| {
                    let entry = &table[start.month0() as usize];
                    MonthlyRecord::new(start, entry.occupation_percent, entry.revenue)
                })
                .collect()
        }
        GenerationMode::Randomized => months
            .into_iter()
            .map(|start| randomized_record(start, profile, &mut *rng))
            .collect(),
    };
    debug!(
        "Generated {:?} {:?} series of {} months ending {}",
        mode,
        profile,
        records.len(),
        month_start(&reference)
    );
    Ok(TimeSeries { records })
}

fn randomized_record<R: RandomSource + ?Sized>(
    start: NaiveDate,
    profile: SeriesProfile,
    rng: &mut R,
) -> MonthlyRecord {
    let class = SeasonalClass::of_month(start.month());
    let range = profile.occupation_range(class);
    // next_below stays under the range width, so the sum stays inside the range
    let spread = rng.next_below(u32::from(range.end - range.start)) as u8;
    let occupation = (range.start + spread).min(MAX_GENERATED_OCCUPATION);
    let revenue = match profile.revenue_range(class) {
        Some(range) => range.start + u64::from(rng.next_below((range.end - range.start) as u32)),
        None => {
            let rate = REVENUE_RATE_FLOOR + rng.next_unit() * REVENUE_RATE_SPREAD;
            (f64::from(occupation) * rate).floor() as u64
        }
    };
    MonthlyRecord::new(start, occupation, revenue)
}

/// The trailing suffix of `series` selected by `window`.
///
/// Never reorders or copies; the source series is untouched.
pub fn filter(series: &TimeSeries, window: WindowSelection) -> &[MonthlyRecord] {
    series.window(window)
}
