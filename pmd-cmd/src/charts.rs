//! Chart commands: print a dashboard view as text or JSON.

use log::info;
use pmd_dashboard::format::{format_percent, format_pln};
use pmd_dashboard::{BookingStatsView, ChartPayload, CombinedStatsView, RevenueStatsView};
use pmd_stats::WindowSelection;

use crate::GenerationArgs;

/// Print the combined occupation and revenue chart.
pub fn run_dashboard(window: &str, args: &GenerationArgs) -> anyhow::Result<()> {
    let reference = args.reference();
    info!(
        "Building dashboard for window {:?} ending {} ({:?})",
        window, reference, args.mode
    );
    let mut rng = args.rng();
    let mut view = CombinedStatsView::activate(reference, args.mode.into(), &mut *rng)?;
    view.select_window(WindowSelection::from_token(window))?;
    emit(&view.payload(), args.json)
}

pub fn run_bookings(args: &GenerationArgs) -> anyhow::Result<()> {
    info!("Building booking statistics ending {}", args.reference());
    let mut rng = args.rng();
    let view = BookingStatsView::activate(args.reference(), args.mode.into(), &mut *rng)?;
    emit(&view.payload(), args.json)
}

pub fn run_revenue(args: &GenerationArgs) -> anyhow::Result<()> {
    info!("Building revenue statistics ending {}", args.reference());
    let mut rng = args.rng();
    let view = RevenueStatsView::activate(args.reference(), args.mode.into(), &mut *rng)?;
    emit(&view.payload(), args.json)
}

fn emit(payload: &ChartPayload, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", payload.to_json()?);
    } else {
        print!("{}", render_text(payload));
    }
    Ok(())
}

/// Plain-text rendering of a chart payload.
pub fn render_text(payload: &ChartPayload) -> String {
    let mut out = String::new();
    out.push_str(payload.title);
    out.push('\n');
    out.push_str(&payload.description);
    out.push_str("\n\n");
    out.push_str(&format!(
        "{:<10} {:>10} {:>12}\n",
        "Month", "Occupation", "Revenue"
    ));
    for bar in &payload.bars {
        out.push_str(&format!(
            "{:<10} {:>10} {:>12}\n",
            bar.month,
            format_percent(bar.occupation),
            format_pln(bar.actual_revenue)
        ));
    }
    out.push('\n');
    out.push_str(&payload.footer.headline);
    out.push('\n');
    out.push_str(&payload.footer.detail);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pmd_stats::random::SequenceSource;
    use pmd_stats::GenerationMode;

    fn last_quarter() -> ChartPayload {
        let mut view = CombinedStatsView::activate(
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            GenerationMode::Deterministic,
            &mut SequenceSource::constant(0.0),
        )
        .unwrap();
        view.select_window(WindowSelection::Last3).unwrap();
        view.payload()
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&last_quarter());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Occupation & Revenue Statistics");
        assert_eq!(lines[1], "Showing statistics for the last 3 months");
        assert!(lines[3].starts_with("Month"));
        assert!(lines[4].starts_with("October"));
        assert!(lines[4].contains("61%"));
        assert!(lines[4].ends_with("11\u{a0}200 zł"));
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[8], "Holding steady in selected period");
    }
}
