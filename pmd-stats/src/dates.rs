use chrono::{Datelike, Days, Local, Months, NaiveDate};
use std::mem::replace;

use crate::error::{Result, StatsError};

/// Format accepted for reference dates ("YYYY-MM-DD").
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a reference date in "YYYY-MM-DD" format.
pub fn parse_reference_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| {
        StatsError::InvalidReferenceDate {
            input: s.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Today's date in the local timezone; the default reference date.
pub fn today() -> NaiveDate {
    Local::now().naive_local().date()
}

/// First day of the month containing `date`.
pub fn month_start(date: &NaiveDate) -> NaiveDate {
    *date - Days::new(u64::from(date.day0()))
}

/// First days of the `n` consecutive months ending at the month of
/// `reference`, oldest first.
pub fn trailing_month_starts(reference: &NaiveDate, n: usize) -> Result<Vec<NaiveDate>> {
    let last = month_start(reference);
    let Some(back) = n.checked_sub(1) else {
        return Ok(Vec::new());
    };
    let first = u32::try_from(back)
        .ok()
        .and_then(|back| last.checked_sub_months(Months::new(back)))
        .ok_or_else(|| StatsError::InvalidReferenceDate {
            input: reference.format(DATE_FORMAT).to_string(),
            reason: format!("cannot go back {n} months"),
        })?;
    Ok(MonthRange(first, last).collect())
}

/// A month range iterator that yields the first day of each month from the
/// start month through the end month (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct MonthRange(pub NaiveDate, pub NaiveDate);

impl Iterator for MonthRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            match self.0.checked_add_months(Months::new(1)) {
                Some(next) => Some(replace(&mut self.0, next)),
                None => {
                    // end of the calendar; close the range after this item
                    self.1 = NaiveDate::MIN;
                    Some(self.0)
                }
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_reference_date() {
        let date = parse_reference_date("2024-12-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        let padded = parse_reference_date(" 2024-01-01 ").unwrap();
        assert_eq!(padded, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_reference_date_invalid() {
        for input in ["", "2024-13-01", "2023-02-29", "15/12/2024", "yesterday"] {
            let err = parse_reference_date(input).unwrap_err();
            assert!(
                matches!(err, StatsError::InvalidReferenceDate { .. }),
                "{input:?} should be rejected"
            );
            assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_month_start() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(month_start(&date), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(month_start(&first), first);
    }

    #[test]
    fn test_month_range_crosses_year() {
        let start = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let months: Vec<NaiveDate> = MonthRange(start, end).collect();
        assert_eq!(months.len(), 4);
        assert_eq!(months[1], NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(months[2], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(months[3], end);
    }

    #[test]
    fn test_month_range_empty() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(MonthRange(start, end).count(), 0);
    }

    #[test]
    fn test_trailing_month_starts() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let months = trailing_month_starts(&reference, 12).unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
        assert_eq!(months[11], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(months.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(trailing_month_starts(&reference, 0).unwrap().is_empty());
    }

    #[test]
    fn test_trailing_month_starts_out_of_range() {
        let reference = NaiveDate::MIN;
        let err = trailing_month_starts(&reference, 12).unwrap_err();
        assert!(matches!(err, StatsError::InvalidReferenceDate { .. }));
    }
}
