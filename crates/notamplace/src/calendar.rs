//! Month and weekday names

use std::fmt;

use strum::EnumMessage;

/// Calendar month
///
/// Months are numbered `1` (January) through `12` (December),
/// as they appear in the `MM` field of a NOTAM effective time.
///
/// ```
/// use notamplace::Month;
///
/// assert_eq!(Some(Month::April), Month::from_number(4));
/// assert_eq!(None, Month::from_number(13));
/// assert_eq!("April", Month::April.as_display_str());
/// assert_eq!(4, Month::April.number());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
    strum_macros::FromRepr,
)]
#[repr(u8)]
pub enum Month {
    #[strum(serialize = "JAN", detailed_message = "January")]
    January = 1,
    #[strum(serialize = "FEB", detailed_message = "February")]
    February,
    #[strum(serialize = "MAR", detailed_message = "March")]
    March,
    #[strum(serialize = "APR", detailed_message = "April")]
    April,
    #[strum(serialize = "MAY", detailed_message = "May")]
    May,
    #[strum(serialize = "JUN", detailed_message = "June")]
    June,
    #[strum(serialize = "JUL", detailed_message = "July")]
    July,
    #[strum(serialize = "AUG", detailed_message = "August")]
    August,
    #[strum(serialize = "SEP", detailed_message = "September")]
    September,
    #[strum(serialize = "OCT", detailed_message = "October")]
    October,
    #[strum(serialize = "NOV", detailed_message = "November")]
    November,
    #[strum(serialize = "DEC", detailed_message = "December")]
    December,
}

impl Month {
    /// Month from its number, `1..=12`
    pub fn from_number(number: u8) -> Option<Month> {
        Month::from_repr(number)
    }

    /// Month number, `1..=12`
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Full English month name, like "`January`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// Three-letter abbreviation, like "`JAN`"
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Day of the week
///
/// The discriminant is the result of the
/// [`day_of_week()`] congruence: `0` is Sunday.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
    strum_macros::FromRepr,
)]
#[repr(u8)]
pub enum Weekday {
    #[strum(serialize = "SUN", detailed_message = "Sunday")]
    Sunday = 0,
    #[strum(serialize = "MON", detailed_message = "Monday")]
    Monday,
    #[strum(serialize = "TUE", detailed_message = "Tuesday")]
    Tuesday,
    #[strum(serialize = "WED", detailed_message = "Wednesday")]
    Wednesday,
    #[strum(serialize = "THU", detailed_message = "Thursday")]
    Thursday,
    #[strum(serialize = "FRI", detailed_message = "Friday")]
    Friday,
    #[strum(serialize = "SAT", detailed_message = "Saturday")]
    Saturday,
}

impl Weekday {
    /// Full English day name, like "`Saturday`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// Three-letter abbreviation, like "`SAT`"
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Compute the day of the week
///
/// Uses a closed-form Gregorian congruence. January and February
/// count as the last months of the previous year so that the
/// leap-day terms line up. The `day` is not checked against the
/// length of the month: February 30th will happily produce
/// an answer.
///
/// ```
/// use notamplace::{day_of_week, Month, Weekday};
///
/// assert_eq!(Weekday::Saturday, day_of_week(2000, Month::January, 1));
/// assert_eq!(Weekday::Wednesday, day_of_week(2004, Month::July, 14));
/// ```
pub fn day_of_week(year: i32, month: Month, day: u8) -> Weekday {
    // [2.6m - 0.2] mod 7, by month
    const MONTH_TERM: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let month = month.number();
    let year = if month < 3 { year - 1 } else { year };
    let index = (year + year / 4 - year / 100 + year / 400
        + MONTH_TERM[month as usize - 1]
        + day as i32)
        .rem_euclid(7);

    Weekday::from_repr(index as u8).expect("weekday index out of range")
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn test_month_numbers() {
        for (i, month) in Month::iter().enumerate() {
            assert_eq!(month.number() as usize, i + 1);
            assert_eq!(Some(month), Month::from_number(month.number()));
            assert_eq!(3, month.as_str().len());
        }
        assert_eq!(None, Month::from_number(0));
        assert_eq!(None, Month::from_number(13));
        assert_eq!("December", format!("{}", Month::December));
    }

    #[test]
    fn test_day_of_week_anchor() {
        assert_eq!(Weekday::Saturday, day_of_week(2000, Month::January, 1));
        assert_eq!(6, Weekday::Saturday as u8);

        // repeated calls agree
        for _ in 0..3 {
            assert_eq!(Weekday::Saturday, day_of_week(2000, Month::January, 1));
        }
    }

    #[test]
    fn test_day_of_week_known_dates() {
        assert_eq!(Weekday::Wednesday, day_of_week(2004, Month::July, 14));
        assert_eq!(Weekday::Friday, day_of_week(2004, Month::July, 16));
        assert_eq!(Weekday::Wednesday, day_of_week(2020, Month::January, 1));
        assert_eq!(Weekday::Friday, day_of_week(2021, Month::January, 1));
        assert_eq!(Weekday::Thursday, day_of_week(2019, Month::December, 19));

        // leap days
        assert_eq!(Weekday::Tuesday, day_of_week(2000, Month::February, 29));
        assert_eq!(Weekday::Thursday, day_of_week(2024, Month::February, 29));
        assert_eq!(Weekday::Friday, day_of_week(2024, Month::March, 1));

        // no calendar validation: Feb 30th is the day after Feb 29th
        assert_eq!(Weekday::Friday, day_of_week(2024, Month::February, 30));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_day_of_week_against_chrono() {
        use chrono::{Datelike, NaiveDate};

        let mut date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();
        while date <= last {
            let month = Month::from_number(date.month() as u8).unwrap();
            let ours = day_of_week(date.year(), month, date.day() as u8);
            assert_eq!(
                date.weekday().num_days_from_sunday() as u8,
                ours as u8,
                "mismatch on {}",
                date
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_weekday_names() {
        let names: Vec<&str> = Weekday::iter().map(|d| d.as_display_str()).collect();
        assert_eq!(
            names.as_slice(),
            &[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday"
            ]
        );
    }
}
