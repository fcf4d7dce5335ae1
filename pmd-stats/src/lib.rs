//! Monthly occupation and revenue statistics for the property dashboard.
//!
//! A [`TimeSeries`] holds the twelve months ending at a reference date. Views
//! pick a trailing [`WindowSelection`] of it and derive a [`Summary`] (totals,
//! averages, trends) from the visible records only.
//!
//! # Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pmd_stats::random::SequenceSource;
//! use pmd_stats::{filter, generate, summarize, GenerationMode, WindowSelection};
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//! let series = generate(reference, GenerationMode::Deterministic, &mut SequenceSource::constant(0.0)).unwrap();
//! let visible = filter(&series, WindowSelection::Last3);
//! assert_eq!(visible[0].label(), "October");
//!
//! let summary = summarize(visible).unwrap();
//! assert_eq!(summary.total_revenue, 33800);
//! ```

pub mod dates;
pub mod error;
pub mod random;
pub mod record;
pub mod series;
pub mod summary;
pub mod window;

pub use error::{ErrorKind, Result, StatsError};
pub use record::{MonthlyRecord, SeasonalClass, REVENUE_SCALE};
pub use series::{
    filter, generate, generate_profiled, GenerationMode, SeriesProfile, TimeSeries, SERIES_LEN,
};
pub use summary::{
    midpoint_trend, quarter_trend, summarize, NoTrendReason, Summary, Trend, TrendDirection,
    TrendMetric, TrendReading,
};
pub use window::WindowSelection;
