//! Per-view dashboard state.
//!
//! Every view owns its series. Generation happens once, when the view is
//! activated; nothing here is shared between views or held globally.

use chrono::NaiveDate;
use log::{debug, info};
use pmd_stats::random::RandomSource;
use pmd_stats::{
    generate, generate_profiled, quarter_trend, summarize, GenerationMode, MonthlyRecord,
    SeriesProfile, Summary, TimeSeries, TrendMetric, TrendReading, WindowSelection,
};

use crate::error::Result;
use crate::format::{format_kilo_pln, format_percent, format_pln, trend_sentence};
use crate::payload::{bars, ChartFooter, ChartPayload};

/// Footer scope for charts that follow the window selector.
pub const SELECTED_PERIOD: &str = "in selected period";
/// Footer scope for the fixed twelve-month charts.
pub const THIS_QUARTER: &str = "this quarter";

/// Occupation and revenue chart with a window selector.
#[derive(Debug, Clone)]
pub struct CombinedStatsView {
    /// Twelve months generated on activation
    series: TimeSeries,
    /// Currently selected window
    window: WindowSelection,
    /// Summary of the visible records, recomputed on window change
    summary: Summary,
}

impl CombinedStatsView {
    pub const TITLE: &'static str = "Occupation & Revenue Statistics";

    /// Generate the series for `reference` and show the default window.
    pub fn activate<R: RandomSource + ?Sized>(
        reference: NaiveDate,
        mode: GenerationMode,
        rng: &mut R,
    ) -> Result<Self> {
        let series = generate(reference, mode, rng)?;
        Self::with_series(series)
    }

    /// Build the view over an existing series.
    pub fn with_series(series: TimeSeries) -> Result<Self> {
        let window = WindowSelection::default();
        let summary = summarize(series.window(window))?;
        info!(
            "Combined view active with {} months, window {}",
            series.len(),
            window
        );
        Ok(CombinedStatsView {
            series,
            window,
            summary,
        })
    }

    /// Switch windows. Returns whether anything was recomputed.
    ///
    /// The series itself is never regenerated.
    pub fn select_window(&mut self, window: WindowSelection) -> Result<bool> {
        if window == self.window {
            return Ok(false);
        }
        let summary = summarize(self.series.window(window))?;
        debug!("Window changed from {} to {}", self.window, window);
        self.window = window;
        self.summary = summary;
        Ok(true)
    }

    /// Switch windows from a selector token; unknown tokens show twelve months.
    pub fn select_token(&mut self, token: &str) -> Result<bool> {
        self.select_window(WindowSelection::from_token(token))
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn window(&self) -> WindowSelection {
        self.window
    }

    pub fn visible(&self) -> &[MonthlyRecord] {
        self.series.window(self.window)
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn payload(&self) -> ChartPayload {
        let summary = &self.summary;
        ChartPayload {
            title: Self::TITLE,
            description: format!(
                "Showing statistics for the {}",
                self.window.caption().to_lowercase()
            ),
            window: Some(self.window),
            bars: bars(self.visible(), |_| None),
            footer: ChartFooter {
                trend: summary.occupation_trend,
                headline: trend_sentence(&summary.occupation_trend, SELECTED_PERIOD),
                detail: format!(
                    "Total revenue: {} | Avg occupation: {}",
                    format_pln(summary.total_revenue),
                    format_percent(summary.average_occupation)
                ),
            },
        }
    }
}

/// Twelve-month booking percentage chart.
#[derive(Debug, Clone)]
pub struct BookingStatsView {
    series: TimeSeries,
    summary: Summary,
    /// Last three months against the three before them
    quarter: TrendReading,
}

impl BookingStatsView {
    pub const TITLE: &'static str = "Booking Statistics";

    pub fn activate<R: RandomSource + ?Sized>(
        reference: NaiveDate,
        mode: GenerationMode,
        rng: &mut R,
    ) -> Result<Self> {
        Self::with_series(generate_profiled(reference, mode, SeriesProfile::Booking, rng)?)
    }

    pub fn with_series(series: TimeSeries) -> Result<Self> {
        let summary = summarize(series.records())?;
        let quarter = quarter_trend(series.records(), TrendMetric::Occupation);
        info!("Booking view active with {} months", series.len());
        Ok(BookingStatsView {
            series,
            summary,
            quarter,
        })
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn average_occupation(&self) -> u8 {
        self.summary.average_occupation
    }

    pub fn quarter_trend(&self) -> TrendReading {
        self.quarter
    }

    pub fn payload(&self) -> ChartPayload {
        ChartPayload {
            title: Self::TITLE,
            description: "Percentage of days booked - Last 12 months".to_string(),
            window: None,
            bars: bars(self.series.records(), |r| {
                Some(format_percent(r.occupation_percent))
            }),
            footer: ChartFooter {
                trend: self.quarter,
                headline: trend_sentence(&self.quarter, THIS_QUARTER),
                detail: format!(
                    "Showing booking percentage for the last 12 months (avg: {})",
                    format_percent(self.average_occupation())
                ),
            },
        }
    }
}

/// Twelve-month revenue chart.
#[derive(Debug, Clone)]
pub struct RevenueStatsView {
    series: TimeSeries,
    summary: Summary,
    quarter: TrendReading,
}

impl RevenueStatsView {
    pub const TITLE: &'static str = "Revenue Statistics";

    pub fn activate<R: RandomSource + ?Sized>(
        reference: NaiveDate,
        mode: GenerationMode,
        rng: &mut R,
    ) -> Result<Self> {
        Self::with_series(generate_profiled(reference, mode, SeriesProfile::Revenue, rng)?)
    }

    pub fn with_series(series: TimeSeries) -> Result<Self> {
        let summary = summarize(series.records())?;
        let quarter = quarter_trend(series.records(), TrendMetric::Revenue);
        info!("Revenue view active with {} months", series.len());
        Ok(RevenueStatsView {
            series,
            summary,
            quarter,
        })
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn total_revenue(&self) -> u64 {
        self.summary.total_revenue
    }

    pub fn average_revenue(&self) -> u64 {
        self.summary.average_revenue
    }

    pub fn quarter_trend(&self) -> TrendReading {
        self.quarter
    }

    pub fn payload(&self) -> ChartPayload {
        ChartPayload {
            title: Self::TITLE,
            description: "Monthly revenue in PLN - Last 12 months".to_string(),
            window: None,
            bars: bars(self.series.records(), |r| Some(format_kilo_pln(r.revenue))),
            footer: ChartFooter {
                trend: self.quarter,
                headline: trend_sentence(&self.quarter, THIS_QUARTER),
                detail: format!(
                    "Total revenue: {} (avg: {}/month)",
                    format_pln(self.total_revenue()),
                    format_pln(self.average_revenue())
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmd_stats::random::{RngSource, SequenceSource};
    use pmd_stats::TrendDirection;

    fn december_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    fn combined() -> CombinedStatsView {
        CombinedStatsView::activate(
            december_2024(),
            GenerationMode::Deterministic,
            &mut SequenceSource::constant(0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_combined_defaults_to_twelve_months() {
        let view = combined();
        assert_eq!(view.window(), WindowSelection::Last12);
        assert_eq!(view.visible().len(), 12);
        assert_eq!(view.summary().total_revenue, 148800);
        assert_eq!(view.summary().average_occupation, 66);
    }

    #[test]
    fn test_select_window_recomputes_only_on_change() {
        let mut view = combined();
        assert!(!view.select_window(WindowSelection::Last12).unwrap());
        assert!(view.select_window(WindowSelection::Last3).unwrap());
        assert_eq!(view.summary().window_len, 3);
        assert_eq!(view.summary().total_revenue, 33800);
        assert!(!view.select_window(WindowSelection::Last3).unwrap());
    }

    #[test]
    fn test_window_change_keeps_series() {
        let mut view = CombinedStatsView::activate(
            december_2024(),
            GenerationMode::Randomized,
            &mut RngSource::seeded(11),
        )
        .unwrap();
        let before = view.series().clone();
        view.select_window(WindowSelection::Last6).unwrap();
        view.select_window(WindowSelection::Last3).unwrap();
        view.select_window(WindowSelection::Last12).unwrap();
        assert_eq!(view.series(), &before);
    }

    #[test]
    fn test_select_token_falls_back() {
        let mut view = combined();
        view.select_token("6").unwrap();
        assert_eq!(view.window(), WindowSelection::Last6);
        view.select_token("all").unwrap();
        assert_eq!(view.window(), WindowSelection::Last12);
    }

    #[test]
    fn test_combined_payload() {
        let mut view = combined();
        view.select_window(WindowSelection::Last3).unwrap();
        let payload = view.payload();
        assert_eq!(payload.title, "Occupation & Revenue Statistics");
        assert_eq!(payload.description, "Showing statistics for the last 3 months");
        assert_eq!(payload.window, Some(WindowSelection::Last3));
        let ticks: Vec<&str> = payload.bars.iter().map(|b| b.tick).collect();
        assert_eq!(ticks, vec!["Oct", "Nov", "Dec"]);
        assert_eq!(payload.bars[0].revenue, 1120);
        assert_eq!(payload.bars[0].actual_revenue, 11200);
        // occupation over Oct..Dec: 61 against mean(54, 68)
        assert_eq!(payload.footer.headline, "Holding steady in selected period");
        assert_eq!(
            payload.footer.detail,
            "Total revenue: 33\u{a0}800 zł | Avg occupation: 61%"
        );
    }

    #[test]
    fn test_combined_headline_follows_occupation() {
        let mut view = combined();
        view.select_window(WindowSelection::Last6).unwrap();
        let payload = view.payload();
        assert_eq!(payload.footer.trend, view.summary().occupation_trend);
        // (61 - 83) / 83, not the revenue trend (33800 - 50800) / 50800
        assert_eq!(
            payload.footer.headline,
            "Trending down by 26.5% in selected period"
        );
        assert_eq!(
            payload.footer.headline,
            trend_sentence(&view.summary().occupation_trend, SELECTED_PERIOD)
        );
    }

    #[test]
    fn test_combined_payload_json() {
        let json: serde_json::Value =
            serde_json::from_str(&combined().payload().to_json().unwrap()).unwrap();
        assert_eq!(json["window"], 12);
        assert_eq!(json["bars"].as_array().unwrap().len(), 12);
        assert_eq!(json["bars"][0]["date"], "2024-01-01");
        assert!(json["bars"][0].get("label").is_none());
        assert_eq!(json["footer"]["trend"]["status"], "measured");
    }

    #[test]
    fn test_booking_view() {
        let view = BookingStatsView::activate(
            december_2024(),
            GenerationMode::Deterministic,
            &mut SequenceSource::constant(0.0),
        )
        .unwrap();
        assert_eq!(view.average_occupation(), 66);
        // (61 - 83) / 83
        let trend = view.quarter_trend();
        assert_eq!(trend.trend().unwrap().direction, TrendDirection::Down);
        let payload = view.payload();
        assert_eq!(payload.window, None);
        assert_eq!(payload.bars[6].label.as_deref(), Some("86%"));
        assert_eq!(payload.footer.headline, "Trending down by 26.5% this quarter");
        assert_eq!(
            payload.footer.detail,
            "Showing booking percentage for the last 12 months (avg: 66%)"
        );
    }

    #[test]
    fn test_revenue_view() {
        let view = RevenueStatsView::activate(
            december_2024(),
            GenerationMode::Deterministic,
            &mut SequenceSource::constant(0.0),
        )
        .unwrap();
        assert_eq!(view.total_revenue(), 148800);
        assert_eq!(view.average_revenue(), 12400);
        let payload = view.payload();
        assert_eq!(payload.bars[0].label.as_deref(), Some("9.5k zł"));
        // (33800 - 50800) / 50800
        assert_eq!(payload.footer.headline, "Trending down by 33.5% this quarter");
        assert_eq!(
            payload.footer.detail,
            "Total revenue: 148\u{a0}800 zł (avg: 12\u{a0}400 zł/month)"
        );
    }

    #[test]
    fn test_fixed_views_draw_from_their_own_ranges() {
        let booking = BookingStatsView::activate(
            december_2024(),
            GenerationMode::Randomized,
            &mut SequenceSource::constant(0.5),
        )
        .unwrap();
        // July: 60 + 15 on the booking ranges, 70 + 10 on the combined ones
        assert_eq!(booking.series().records()[6].occupation_percent, 75);

        let revenue = RevenueStatsView::activate(
            december_2024(),
            GenerationMode::Randomized,
            &mut SequenceSource::constant(0.5),
        )
        .unwrap();
        assert_eq!(revenue.series().records()[6].revenue, 20000);
        assert_eq!(revenue.series().records()[0].revenue, 14000);
    }
}
