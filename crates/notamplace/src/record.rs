//! Decoded NOTAM fields

use crate::decoder::DateRegion;
use crate::effective::{EffectiveTime, InvalidDateErr};

/// A decoded NOTAM
///
/// Produced by [`NotamDecoder`](crate::NotamDecoder). Text
/// fields hold either the expansion of a known keyword or
/// the original token. The `beginning` and `ending` are
/// human-readable timestamps, like
///
/// ```txt
/// Wednesday, July 14, 2004  1200 (UTC)
/// ```
///
/// An empty `beginning` or `ending` means "not decoded," never
/// "decoded as empty." Consult [`effective`](#structfield.effective)
/// to learn why.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct NotamRecord {
    /// Accountability location, less the leading `!`
    pub issuing_airport: String,

    /// NOTAM number, like `07/003`
    ///
    /// The first two digits are usually the month of issue,
    /// and the rest a sequence number for that month. The
    /// format is not checked.
    pub notam_number: String,

    /// Affected facility or location identifier
    pub affected_location: String,

    /// NOTAM keyword, expanded if known
    pub subject_keyword: String,

    /// Remaining text, with known contractions expanded
    ///
    /// Each token is followed by a single space, including
    /// the last.
    pub free_text: String,

    /// Start of the effective period, or empty
    pub beginning: String,

    /// End of the effective period, or empty
    pub ending: String,

    /// Where the effective time was found
    pub date_region: DateRegion,

    /// Effective time, if a date token was found
    ///
    /// `Some(Err(…))` if the date token could not be decoded
    /// at all.
    pub effective: Option<Result<EffectiveTime, InvalidDateErr>>,
}

impl NotamRecord {
    /// True if either end of the effective period was decoded
    pub fn has_effective_time(&self) -> bool {
        !self.beginning.is_empty() || !self.ending.is_empty()
    }

    /// Is the effective time a guess that went wrong?
    ///
    /// Without a `WEF` marker, any final token longer than
    /// eight characters is taken to be the effective time. If
    /// that token then fails to decode, it was quite possibly
    /// ordinary text which has been left out of the
    /// [`free_text`](#structfield.free_text).
    pub fn is_date_ambiguous(&self) -> bool {
        if self.date_region != DateRegion::Trailing {
            return false;
        }

        match &self.effective {
            Some(Ok(eff)) => eff.is_undecoded(),
            _ => true,
        }
    }

    /// Free text without its trailing space
    pub fn free_text_trimmed(&self) -> &str {
        self.free_text.trim_end()
    }
}
