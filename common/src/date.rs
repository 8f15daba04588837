//! Calendar dates travel as `dd/mm/yyyy`.

use chrono::{Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%d/%m/%Y";

#[inline]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses exactly `dd/mm/yyyy`: two-digit day and month, four-digit year.
pub fn parse(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, byte)| match i {
            2 | 5 => byte == b'/',
            _ => byte.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(value, FORMAT).ok()
}

pub fn format(date: NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    parse(&value).ok_or_else(|| {
        de::Error::invalid_value(de::Unexpected::Str(&value), &"a date formatted as dd/mm/yyyy")
    })
}

pub mod option {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super")] NaiveDate);

        Option::<Wrapper>::deserialize(deserializer).map(|date| date.map(|Wrapper(date)| date))
    }
}
