//! Effective time decoding
//!
//! NOTAMs which are not permanent carry an effective time, usually
//! following the `WEF` ("with effect from") keyword:
//!
//! ```txt
//! WEF 0407141200-0407162000
//!     |         |
//!     |         +-- ending:    YYMMDDHHMM
//!     +------------ beginning: YYMMDDHHMM
//! ```
//!
//! The ending may be absent, leaving only the ten-digit
//! beginning. Times are Zulu (UTC), and two-digit years always
//! belong to the 2000s.

use std::fmt;

#[cfg(feature = "chrono")]
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use thiserror::Error;

use crate::calendar::{day_of_week, Month, Weekday};

/// Error decoding an effective time
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidDateErr {
    /// Token is neither `BEGIN` (10) nor `BEGIN-END` (21) characters long
    #[error("invalid effective time: expected 10 or 21 characters, found {0}")]
    Length(usize),

    /// A 21-character token lacks the `-` between its two halves
    #[error("invalid effective time: missing `-` between beginning and ending")]
    MissingSeparator,

    /// A half is not ten ASCII digits
    #[error("invalid effective time: date must be ten digits")]
    NotNumeric,

    /// Month is zero or greater than twelve
    #[error("invalid effective time: month {0} out of range")]
    Month(u8),

    /// Day is greater than thirty-one
    #[error("invalid effective time: day {0} out of range")]
    Day(u8),

    /// The fields do not name a real instant
    #[error("invalid effective time: no such calendar date or time")]
    Calendar,
}

/// A decoded effective time
///
/// Holds the beginning and, if present, the ending of the
/// period during which a NOTAM is in effect. Each half is
/// decoded independently: a bad ending does not spoil a
/// good beginning.
///
/// ```
/// use notamplace::EffectiveTime;
///
/// let eff = EffectiveTime::new("0407141200-0407162000").expect("bad token");
/// assert_eq!("Wednesday, July 14, 2004  1200 (UTC)", eff.beginning_str());
/// assert_eq!("Friday, July 16, 2004  2000 (UTC)", eff.ending_str());
///
/// let eff = EffectiveTime::new("0413141200-0407162000").expect("bad token");
/// assert_eq!("", eff.beginning_str());
/// assert_eq!("Friday, July 16, 2004  2000 (UTC)", eff.ending_str());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EffectiveTime {
    beginning: Result<DateStamp, InvalidDateErr>,
    ending: Option<Result<DateStamp, InvalidDateErr>>,
}

impl EffectiveTime {
    /// Decode an effective time token
    ///
    /// The `token`, exactly as it appears in the message, must
    /// be either
    ///
    /// - `YYMMDDHHMM`: a beginning only; or
    /// - `YYMMDDHHMM-YYMMDDHHMM`: a beginning and ending.
    ///
    /// Any other length is an error, and nothing is decoded. A
    /// trailing quote or line ending counts toward the length.
    ///
    /// Each half is then cut at its first quote, carriage return,
    /// line feed, or space. A half which is cut short fails with
    /// [`InvalidDateErr::Length`]. Errors in the individual halves
    /// are retained and may be inspected with
    /// [`beginning()`](#method.beginning) and
    /// [`ending()`](#method.ending).
    pub fn new<S>(token: S) -> Result<Self, InvalidDateErr>
    where
        S: AsRef<str>,
    {
        let token = token.as_ref();
        match token.len() {
            Self::RANGE_LEN => {
                let (begin, end) = split_range(token)?;
                Ok(Self {
                    beginning: DateStamp::new(strip_terminators(begin)),
                    ending: Some(DateStamp::new(strip_terminators(end))),
                })
            }
            DateStamp::LEN => Ok(Self {
                beginning: DateStamp::new(strip_terminators(token)),
                ending: None,
            }),
            len => {
                trace!("effective time: rejected \"{}\" ({} chars)", token, len);
                Err(InvalidDateErr::Length(len))
            }
        }
    }

    /// Beginning of the effective period
    pub fn beginning(&self) -> Result<&DateStamp, &InvalidDateErr> {
        self.beginning.as_ref()
    }

    /// Ending of the effective period
    ///
    /// Returns `None` if the token carried only a beginning.
    pub fn ending(&self) -> Option<Result<&DateStamp, &InvalidDateErr>> {
        self.ending.as_ref().map(|e| e.as_ref())
    }

    /// Human-readable beginning, or empty if it did not decode
    pub fn beginning_str(&self) -> String {
        match &self.beginning {
            Ok(stamp) => stamp.to_string(),
            Err(_) => String::new(),
        }
    }

    /// Human-readable ending, or empty if absent or it did not decode
    pub fn ending_str(&self) -> String {
        match &self.ending {
            Some(Ok(stamp)) => stamp.to_string(),
            _ => String::new(),
        }
    }

    /// True if the token carried both a beginning and an ending
    pub fn is_range(&self) -> bool {
        self.ending.is_some()
    }

    /// True if neither half decoded
    pub fn is_undecoded(&self) -> bool {
        self.beginning.is_err() && !matches!(self.ending, Some(Ok(_)))
    }

    /// Is the NOTAM in effect?
    ///
    /// True if `now` falls within the effective period,
    /// inclusive of both ends. A period with no ending is
    /// open-ended. If the beginning, or an ending which is
    /// present, cannot be placed on the calendar, the NOTAM
    /// is not considered to be in effect.
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn is_active_at(&self, now: &DateTime<Utc>) -> bool {
        let begin = match self.beginning.as_ref().map(DateStamp::datetime) {
            Ok(Ok(begin)) => begin,
            _ => return false,
        };

        match &self.ending {
            None => begin <= *now,
            Some(Ok(end)) => match end.datetime() {
                Ok(end) => begin <= *now && *now <= end,
                Err(_) => false,
            },
            Some(Err(_)) => false,
        }
    }

    const RANGE_LEN: usize = 2 * DateStamp::LEN + 1;
}

/// One half of an effective time
///
/// A `YYMMDDHHMM` field. Only the month and day are
/// range-checked, and only loosely: a day of `30` in February
/// is accepted and will be shown as such. Use
/// [`datetime()`](#method.datetime) for a strict conversion.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateStamp {
    // the ten digits, as received
    text: String,
    year: i32,
    month: Month,
    day: u8,
}

impl DateStamp {
    /// Decode a `YYMMDDHHMM` field
    pub fn new<S>(half: S) -> Result<Self, InvalidDateErr>
    where
        S: AsRef<str>,
    {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^[0-9]{10}$").expect("bad date regexp");
        }

        let half = half.as_ref();
        if half.len() != Self::LEN {
            return Err(InvalidDateErr::Length(half.len()));
        }
        if !RE.is_match(half) {
            return Err(InvalidDateErr::NotNumeric);
        }

        let year: i32 = half[0..2].parse().expect(Self::PANIC_MSG);
        let month: u8 = half[2..4].parse().expect(Self::PANIC_MSG);
        let day: u8 = half[4..6].parse().expect(Self::PANIC_MSG);

        if month > 12 {
            return Err(InvalidDateErr::Month(month));
        }
        if day > 31 {
            return Err(InvalidDateErr::Day(day));
        }
        let month = Month::from_number(month).ok_or(InvalidDateErr::Month(month))?;

        Ok(Self {
            text: half.to_owned(),
            year: Self::CENTURY + year,
            month,
            day,
        })
    }

    /// Four-digit year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Day of the month, `0..=31`
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Day of the month, as its original two digits
    pub fn day_str(&self) -> &str {
        &self.text[4..6]
    }

    /// Zulu (UTC) time of day, as its original `HHMM` digits
    pub fn zulu_str(&self) -> &str {
        &self.text[6..10]
    }

    /// Zulu (UTC) time of day, as (`hours`, `minutes`)
    ///
    /// The fields are not range-checked.
    pub fn zulu_fields(&self) -> (u8, u8) {
        (
            self.text[6..8].parse().expect(Self::PANIC_MSG),
            self.text[8..10].parse().expect(Self::PANIC_MSG),
        )
    }

    /// Day of the week
    pub fn weekday(&self) -> Weekday {
        day_of_week(self.year, self.month, self.day)
    }

    /// Original `YYMMDDHHMM` text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert to a UTC datetime
    ///
    /// Unlike the loose checks done when decoding, this fails
    /// for dates which do not exist (like February 30th) and
    /// for times past `2359`.
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn datetime(&self) -> Result<DateTime<Utc>, InvalidDateErr> {
        let (hour, minute) = self.zulu_fields();
        let naive = NaiveDate::from_ymd_opt(self.year, self.month.number() as u32, self.day as u32)
            .ok_or(InvalidDateErr::Calendar)?
            .and_hms_opt(hour as u32, minute as u32, 0)
            .ok_or(InvalidDateErr::Calendar)?;
        Ok(Utc.from_utc_datetime(&naive))
    }

    const LEN: usize = 10;
    const CENTURY: i32 = 2000;
    const PANIC_MSG: &'static str = "DateStamp validity check admitted a malformed field";
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}, {}  {} (UTC)",
            self.weekday(),
            self.month,
            self.day_str(),
            self.year,
            self.zulu_str()
        )
    }
}

impl AsRef<str> for DateStamp {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// Cut a date at the first quote, line-ending, or space character
fn strip_terminators(token: &str) -> &str {
    match token.find(|c| matches!(c, '"' | '\r' | '\n' | ' ')) {
        Some(end) => &token[..end],
        None => token,
    }
}

// Split `BEGIN-END` into its halves
fn split_range(token: &str) -> Result<(&str, &str), InvalidDateErr> {
    if token.as_bytes().get(DateStamp::LEN) != Some(&b'-') {
        return Err(InvalidDateErr::MissingSeparator);
    }
    Ok((&token[..DateStamp::LEN], &token[DateStamp::LEN + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_terminators() {
        assert_eq!("0407141200", strip_terminators("0407141200\"\r\n"));
        assert_eq!("0407141200", strip_terminators("0407141200\n"));
        assert_eq!("04071", strip_terminators("04071 41200"));
        assert_eq!("", strip_terminators("\"0407141200"));
        assert_eq!("0407141200", strip_terminators("0407141200"));
    }

    #[test]
    fn test_range() {
        let eff = EffectiveTime::new("0407141200-0407162000").expect("bad token");
        assert!(eff.is_range());
        assert!(!eff.is_undecoded());

        let begin = eff.beginning().expect("bad beginning");
        assert_eq!(2004, begin.year());
        assert_eq!(Month::July, begin.month());
        assert_eq!(14, begin.day());
        assert_eq!(Weekday::Wednesday, begin.weekday());
        assert_eq!("1200", begin.zulu_str());
        assert_eq!((12, 0), begin.zulu_fields());

        let end = eff.ending().expect("no ending").expect("bad ending");
        assert_eq!(Month::July, end.month());
        assert_eq!(16, end.day());
        assert_eq!(Weekday::Friday, end.weekday());

        assert_eq!("Wednesday, July 14, 2004  1200 (UTC)", eff.beginning_str());
        assert_eq!("Friday, July 16, 2004  2000 (UTC)", eff.ending_str());
    }

    #[test]
    fn test_beginning_only() {
        let eff = EffectiveTime::new("0802091500").expect("bad token");
        assert!(!eff.is_range());
        assert_eq!(None, eff.ending());
        assert_eq!("Saturday, February 09, 2008  1500 (UTC)", eff.beginning_str());
        assert_eq!("", eff.ending_str());

        // trailing line endings and quotes count toward the length
        assert_eq!(
            Err(InvalidDateErr::Length(13)),
            EffectiveTime::new("0802091500\"\r\n")
        );

        // a terminator inside the ten characters cuts the date short
        let eff = EffectiveTime::new("080209150\"").expect("bad token");
        assert_eq!(Err(&InvalidDateErr::Length(9)), eff.beginning());
        assert!(eff.is_undecoded());
    }

    #[test]
    fn test_terminated_range() {
        assert_eq!(
            Err(InvalidDateErr::Length(22)),
            EffectiveTime::new("0407141200-0407162000\"")
        );
        assert_eq!(
            Err(InvalidDateErr::Length(23)),
            EffectiveTime::new("0407141200-0407162000\r\n")
        );

        // each half is cut on its own
        let eff = EffectiveTime::new("0407141200-040716200\n").expect("bad token");
        assert_eq!("Wednesday, July 14, 2004  1200 (UTC)", eff.beginning_str());
        assert_eq!(Some(Err(&InvalidDateErr::Length(9))), eff.ending());

        let eff = EffectiveTime::new("04071 1200-0407162000").expect("bad token");
        assert_eq!(Err(&InvalidDateErr::Length(5)), eff.beginning());
        assert_eq!("Friday, July 16, 2004  2000 (UTC)", eff.ending_str());
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            Err(InvalidDateErr::Length(15)),
            EffectiveTime::new("040714120020000")
        );
        assert_eq!(Err(InvalidDateErr::Length(0)), EffectiveTime::new(""));
        assert_eq!(
            Err(InvalidDateErr::Length(22)),
            EffectiveTime::new("0407141200-04071620001")
        );
        assert_eq!(
            Err(InvalidDateErr::MissingSeparator),
            EffectiveTime::new("040714120000407162000")
        );
    }

    #[test]
    fn test_invalid_half() {
        // bad month in the beginning: ending still decodes
        let eff = EffectiveTime::new("0413141200-0407162000").expect("bad token");
        assert_eq!(Err(&InvalidDateErr::Month(13)), eff.beginning());
        assert_eq!("", eff.beginning_str());
        assert_eq!("Friday, July 16, 2004  2000 (UTC)", eff.ending_str());
        assert!(!eff.is_undecoded());

        // bad day in the ending
        let eff = EffectiveTime::new("0407141200-0407322000").expect("bad token");
        assert_eq!("Wednesday, July 14, 2004  1200 (UTC)", eff.beginning_str());
        assert_eq!(Some(Err(&InvalidDateErr::Day(32))), eff.ending());
        assert_eq!("", eff.ending_str());

        // both bad
        let eff = EffectiveTime::new("0400141200-04AA162000").expect("bad token");
        assert_eq!(Err(&InvalidDateErr::Month(0)), eff.beginning());
        assert_eq!(Some(Err(&InvalidDateErr::NotNumeric)), eff.ending());
        assert!(eff.is_undecoded());
    }

    #[test]
    fn test_loose_calendar() {
        // February 30th passes through
        let stamp = DateStamp::new("2402300000").expect("bad stamp");
        assert_eq!("Friday, February 30, 2024  0000 (UTC)", stamp.to_string());

        // day zero is tolerated, too
        let stamp = DateStamp::new("2403000000").expect("bad stamp");
        assert_eq!("00", stamp.day_str());
    }

    #[test]
    fn test_century() {
        let stamp = DateStamp::new("9912312359").expect("bad stamp");
        assert_eq!(2099, stamp.year());
        let stamp = DateStamp::new("0001010000").expect("bad stamp");
        assert_eq!(2000, stamp.year());
        assert_eq!(Weekday::Saturday, stamp.weekday());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_datetime() {
        let stamp = DateStamp::new("0407141200").expect("bad stamp");
        assert_eq!(
            Utc.with_ymd_and_hms(2004, 7, 14, 12, 0, 0).unwrap(),
            stamp.datetime().unwrap()
        );

        let stamp = DateStamp::new("2402300000").expect("bad stamp");
        assert_eq!(Err(InvalidDateErr::Calendar), stamp.datetime());

        let stamp = DateStamp::new("2402282400").expect("bad stamp");
        assert_eq!(Err(InvalidDateErr::Calendar), stamp.datetime());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_is_active_at() {
        let eff = EffectiveTime::new("0407141200-0407162000").expect("bad token");
        assert!(!eff.is_active_at(&Utc.with_ymd_and_hms(2004, 4, 15, 0, 0, 0).unwrap()));
        assert!(!eff.is_active_at(&Utc.with_ymd_and_hms(2004, 7, 14, 11, 59, 0).unwrap()));
        assert!(eff.is_active_at(&Utc.with_ymd_and_hms(2004, 7, 14, 12, 0, 0).unwrap()));
        assert!(eff.is_active_at(&Utc.with_ymd_and_hms(2004, 7, 15, 3, 30, 0).unwrap()));
        assert!(eff.is_active_at(&Utc.with_ymd_and_hms(2004, 7, 16, 20, 0, 0).unwrap()));
        assert!(!eff.is_active_at(&Utc.with_ymd_and_hms(2004, 7, 16, 20, 1, 0).unwrap()));

        // open-ended
        let eff = EffectiveTime::new("0407141200").expect("bad token");
        assert!(eff.is_active_at(&Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()));

        // unknown ending
        let eff = EffectiveTime::new("0407141200-0413162000").expect("bad token");
        assert!(!eff.is_active_at(&Utc.with_ymd_and_hms(2004, 7, 15, 0, 0, 0).unwrap()));
    }
}
