//! Command implementations for the pmd CLI.
//!
//! Provides subcommands that print the dashboard charts, the property
//! ledger and the theme catalogue.

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use pmd_stats::dates::{parse_reference_date, today};
use pmd_stats::random::{RandomSource, RngSource};
use pmd_stats::GenerationMode;

pub mod charts;
pub mod catalogue;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Occupation and revenue chart for a trailing window
    Dashboard {
        /// Months to show: 3, 6 or 12 (anything else shows 12)
        #[arg(short, long, default_value = "12")]
        window: String,

        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Booking percentage for the last 12 months
    Bookings {
        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Monthly revenue for the last 12 months
    Revenue {
        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// List the sample properties and portfolio totals
    Properties {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available color themes
    Themes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Fixed calibration table
    Deterministic,
    /// Seasonal random values
    Randomized,
}

impl From<ModeArg> for GenerationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Deterministic => GenerationMode::Deterministic,
            ModeArg::Randomized => GenerationMode::Randomized,
        }
    }
}

/// Flags shared by the chart commands.
#[derive(Args, Debug, Clone)]
pub struct GenerationArgs {
    /// How monthly values are produced
    #[arg(short, long, value_enum, default_value_t = ModeArg::Randomized)]
    pub mode: ModeArg,

    /// Last month of the series (YYYY-MM-DD), defaults to today
    #[arg(short = 'd', long, value_parser = parse_reference_date)]
    pub reference_date: Option<NaiveDate>,

    /// Seed for randomized generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the chart payload as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerationArgs {
    pub fn reference(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(today)
    }

    pub fn rng(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_os_rng()),
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Dashboard { window, generation } => charts::run_dashboard(&window, &generation),
        Command::Bookings { generation } => charts::run_bookings(&generation),
        Command::Revenue { generation } => charts::run_revenue(&generation),
        Command::Properties { json } => catalogue::run_properties(json),
        Command::Themes => catalogue::run_themes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        TestCli::try_parse_from(std::iter::once("pmd").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_dashboard_defaults() {
        match parse(&["dashboard"]) {
            Command::Dashboard { window, generation } => {
                assert_eq!(window, "12");
                assert_eq!(generation.mode, ModeArg::Randomized);
                assert_eq!(generation.reference_date, None);
                assert_eq!(generation.seed, None);
                assert!(!generation.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_dashboard_flags() {
        let command = parse(&[
            "dashboard",
            "--window",
            "3",
            "--mode",
            "deterministic",
            "--reference-date",
            "2024-12-31",
            "--seed",
            "7",
            "--json",
        ]);
        match command {
            Command::Dashboard { window, generation } => {
                assert_eq!(window, "3");
                assert_eq!(
                    GenerationMode::from(generation.mode),
                    GenerationMode::Deterministic
                );
                assert_eq!(
                    generation.reference(),
                    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
                );
                assert_eq!(generation.seed, Some(7));
                assert!(generation.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_reference_date_rejected() {
        let result = TestCli::try_parse_from(["pmd", "revenue", "--reference-date", "31/12/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_properties_and_themes() {
        assert!(matches!(parse(&["properties", "--json"]), Command::Properties { json: true }));
        assert!(matches!(parse(&["themes"]), Command::Themes));
    }
}
