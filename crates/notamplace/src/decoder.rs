//! NOTAM field decoder

use log::{debug, trace};
use thiserror::Error;

use crate::effective::EffectiveTime;
use crate::keywords::Keywords;
use crate::record::NotamRecord;
use crate::tokenize::Tokens;

/// Error decoding a NOTAM
///
/// Both variants indicate a malformed header. No fields are
/// decoded from a message with a malformed header.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NotamDecodeErr {
    /// Fewer than the four fixed header tokens
    #[error("malformed NOTAM header: expected at least 4 tokens, found {0}")]
    TooShort(usize),

    /// First token does not begin with the `!` marker
    #[error("malformed NOTAM header: first token does not begin with `!`")]
    MissingMarker,
}

/// Location of the effective time
///
/// NOTAMs do not mark the end of their free text. The
/// decoder looks at the last two tokens to decide whether
/// there is an effective time, in this order:
///
/// 1. [`Wef`](DateRegion::Wef): the second-to-last token
///    is `WEF`. The last token is the effective time.
///
/// 2. [`Trailing`](DateRegion::Trailing): the last token is
///    longer than eight characters. It is assumed to be the
///    effective time. This is a guess and can be wrong: see
///    [`NotamRecord::is_date_ambiguous()`].
///
/// 3. [`Absent`](DateRegion::Absent): everything after the
///    header is free text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DateRegion {
    /// No effective time
    #[default]
    Absent,

    /// Effective time follows a `WEF` marker
    Wef,

    /// Final long token taken as the effective time
    Trailing,
}

/// Decodes NOTAM messages into fields
///
/// The decoder borrows a keyword table, which it consults to
/// expand the NOTAM keyword and the free text. It holds no
/// other state: one decoder may be used for any number of
/// messages, from any number of threads.
///
/// ```
/// use notamplace::{DateRegion, Keywords, NotamDecoder};
///
/// let keywords = Keywords::builtin();
/// let decoder = NotamDecoder::new(&keywords);
///
/// let rec = decoder
///     .decode("!ABC 07/003 XYZ NAV VOR OTS WEF 0407141200-0407162000")
///     .expect("bad NOTAM");
///
/// assert_eq!("ABC", rec.issuing_airport);
/// assert_eq!("07/003", rec.notam_number);
/// assert_eq!("XYZ", rec.affected_location);
/// assert_eq!("Navigation Aids", rec.subject_keyword);
/// assert_eq!("VHF Omnidirectional Range Out Of Service ", rec.free_text);
/// assert_eq!("Wednesday, July 14, 2004  1200 (UTC)", rec.beginning);
/// assert_eq!("Friday, July 16, 2004  2000 (UTC)", rec.ending);
/// assert_eq!(DateRegion::Wef, rec.date_region);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NotamDecoder<'k> {
    keywords: &'k Keywords,
}

impl<'k> NotamDecoder<'k> {
    /// Create a decoder which uses the given `keywords`
    pub fn new(keywords: &'k Keywords) -> Self {
        Self { keywords }
    }

    /// Keyword table in use
    pub fn keywords(&self) -> &'k Keywords {
        self.keywords
    }

    /// Decode one NOTAM message
    ///
    /// The `message` must begin with the `!` marker and contain,
    /// at minimum,
    ///
    /// ```txt
    /// !<ACCOUNTABILITY> <NUMBER> <LOCATION> <KEYWORD>
    /// ```
    ///
    /// If it does not, an error is returned and nothing is
    /// decoded. Problems with the effective time do not cause
    /// an error; they are reported in the record instead.
    pub fn decode(&self, message: &str) -> Result<NotamRecord, NotamDecodeErr> {
        self.decode_tokens(Tokens::new(message).as_slice())
    }

    /// Decode one NOTAM message, already split into `tokens`
    pub fn decode_tokens<S>(&self, tokens: &[S]) -> Result<NotamRecord, NotamDecodeErr>
    where
        S: AsRef<str>,
    {
        check_header(tokens)?;

        let (text_end, date_region) = find_date_region(tokens);
        trace!(
            "decoder: {} tokens, free text ends at {}, date region {:?}",
            tokens.len(),
            text_end,
            date_region
        );

        let mut free_text = String::new();
        for tok in tokens.get(FIXED_FIELDS..text_end).unwrap_or(&[]) {
            free_text.push_str(self.keywords.expand_or_verbatim(tok.as_ref()));
            free_text.push(' ');
        }

        let effective = match date_region {
            DateRegion::Absent => None,
            DateRegion::Wef | DateRegion::Trailing => {
                Some(EffectiveTime::new(tokens[tokens.len() - 1].as_ref()))
            }
        };

        let (beginning, ending) = match &effective {
            Some(Ok(eff)) => (eff.beginning_str(), eff.ending_str()),
            _ => (String::new(), String::new()),
        };

        let record = NotamRecord {
            issuing_airport: tokens[0].as_ref()[MARKER.len_utf8()..].to_owned(),
            notam_number: tokens[1].as_ref().to_owned(),
            affected_location: tokens[2].as_ref().to_owned(),
            subject_keyword: self
                .keywords
                .expand_or_verbatim(tokens[3].as_ref())
                .to_owned(),
            free_text,
            beginning,
            ending,
            date_region,
            effective,
        };

        if record.is_date_ambiguous() {
            debug!(
                "decoder: NOTAM {} ends in \"{}\", which is not a valid effective time",
                record.notam_number,
                tokens[tokens.len() - 1].as_ref()
            );
        }

        Ok(record)
    }
}

/// Marker character which begins every NOTAM
pub const MARKER: char = '!';

/// Keyword which precedes the effective time
pub const WEF: &str = "WEF";

// Header tokens which precede the free text
const FIXED_FIELDS: usize = 4;

// Length beyond which a final token is taken as a date
const DATE_TOKEN_MIN_EXCLUSIVE: usize = 8;

// Check for the fixed header fields and the marker
fn check_header<S>(tokens: &[S]) -> Result<(), NotamDecodeErr>
where
    S: AsRef<str>,
{
    if tokens.len() < FIXED_FIELDS {
        return Err(NotamDecodeErr::TooShort(tokens.len()));
    }
    if !tokens[0].as_ref().starts_with(MARKER) {
        return Err(NotamDecodeErr::MissingMarker);
    }
    Ok(())
}

// Find where the free text ends and what follows it
//
// Returns the index one past the last free-text token and
// the kind of date region, if any. Requires at least two
// tokens.
fn find_date_region<S>(tokens: &[S]) -> (usize, DateRegion)
where
    S: AsRef<str>,
{
    let len = tokens.len();
    if tokens[len - 2].as_ref() == WEF {
        (len - 2, DateRegion::Wef)
    } else if tokens[len - 1].as_ref().len() > DATE_TOKEN_MIN_EXCLUSIVE {
        (len - 1, DateRegion::Trailing)
    } else {
        (len, DateRegion::Absent)
    }
}
