use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Divisor between unscaled revenue and the chart-axis value.
///
/// Scaling is lossy; totals and averages always use the unscaled figure.
pub const REVENUE_SCALE: u64 = 10;

/// Upper bound for occupation produced by randomized generation.
pub const MAX_GENERATED_OCCUPATION: u8 = 95;

/// Occupation and revenue for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// First day of the month this record covers.
    pub period_start: NaiveDate,
    /// Percentage of days booked, 0..=100.
    pub occupation_percent: u8,
    /// Revenue in whole PLN.
    pub revenue: u64,
    /// `revenue` divided by [`REVENUE_SCALE`], rounded. Rendering hint only.
    pub revenue_scaled: u64,
}

impl MonthlyRecord {
    /// Build a record, clamping occupation to 100 and deriving the scaled revenue.
    pub fn new(period_start: NaiveDate, occupation_percent: u8, revenue: u64) -> Self {
        MonthlyRecord {
            period_start,
            occupation_percent: occupation_percent.min(100),
            revenue,
            revenue_scaled: scale_revenue(revenue),
        }
    }

    pub fn month(&self) -> Month {
        month_of(&self.period_start)
    }

    /// Full month name, e.g. "January".
    pub fn label(&self) -> &'static str {
        self.month().name()
    }

    /// Three letter month name used for axis ticks, e.g. "Jan".
    pub fn short_label(&self) -> &'static str {
        &self.label()[..3]
    }

    pub fn seasonal_class(&self) -> SeasonalClass {
        SeasonalClass::of_month(self.period_start.month())
    }
}

/// Round-half-up integer division by [`REVENUE_SCALE`].
pub fn scale_revenue(revenue: u64) -> u64 {
    revenue / REVENUE_SCALE + u64::from(revenue % REVENUE_SCALE * 2 >= REVENUE_SCALE)
}

fn month_of(date: &NaiveDate) -> Month {
    // NaiveDate::month() is always 1..=12
    Month::try_from(date.month() as u8).expect("calendar month in 1..=12")
}

/// Seasonal grouping used to bias randomized sample values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalClass {
    /// June through September.
    Summer,
    /// December, January and February.
    Winter,
    /// Everything else.
    Other,
}

impl SeasonalClass {
    /// Class of a 1-indexed calendar month.
    pub fn of_month(month: u32) -> SeasonalClass {
        match month {
            6..=9 => SeasonalClass::Summer,
            12 | 1 | 2 => SeasonalClass::Winter,
            _ => SeasonalClass::Other,
        }
    }

    /// Occupation floor before the random spread is added.
    pub fn base_occupation(&self) -> u8 {
        match self {
            SeasonalClass::Summer => 70,
            SeasonalClass::Winter => 55,
            SeasonalClass::Other => 45,
        }
    }
}
