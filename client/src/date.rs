//! `dd/mm/yyyy` dates, as typed into the masked date inputs and sent on the wire.

use chrono::{Local, NaiveDate};

pub use common::date::{deserialize, format, option, parse, serialize, FORMAT};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl Clock for NaiveDate {
    fn today(&self) -> NaiveDate {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// Not a calendar date (`31/02/2024`, an unfilled mask, garbage).
    Invalid,
    /// A real date, but strictly before today.
    BeforeToday,
}

/// Accepts today or any later date.
pub fn validate_estimated_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let date = parse(input).ok_or(DateError::Invalid)?;

    if date < today {
        return Err(DateError::BeforeToday);
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 11, 10).unwrap()
    }

    #[test]
    fn today_and_future_are_accepted() {
        assert_eq!(validate_estimated_date("10/11/2020", today()), Ok(today()));
        assert_eq!(
            validate_estimated_date("01/01/2021", today()),
            Ok(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
        );
    }

    #[test]
    fn past_dates_are_rejected() {
        assert_eq!(
            validate_estimated_date("09/11/2020", today()),
            Err(DateError::BeforeToday)
        );
        // a later day in an earlier month must not slip through
        assert_eq!(
            validate_estimated_date("30/10/2020", today()),
            Err(DateError::BeforeToday)
        );
    }

    #[test]
    fn invalid_dates_are_rejected() {
        for input in [
            "",
            "__/__/____",
            "31/02/2021",
            "10/13/2020",
            "1O/11/2020",
            "2020-11-10",
            "10/11/20",
            "1/12/2020",
        ] {
            assert_eq!(
                validate_estimated_date(input, today()),
                Err(DateError::Invalid),
                "{input}"
            );
        }
    }
}
