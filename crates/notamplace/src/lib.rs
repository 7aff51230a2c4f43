//! # notamplace: A NOTAM Message Parser
//!
//! This crate decodes the plain-text
//! [Notice to Air Missions](https://en.wikipedia.org/wiki/NOTAM)
//! (NOTAM) format used by the FAA's domestic NOTAM system. It
//! splits a message into its fields, expands the keyword
//! contractions, and turns the compact effective time into
//! readable dates.
//!
//! For a complete CLI binary, see the companion crate `notamdec`.
//!
//! ## Anatomy of a NOTAM
//!
//! ```txt
//! !ABC 07/003 XYZ NAV VOR OTS WEF 0407141200-0407162000
//! ```
//!
//! * `!`: the marker which begins every NOTAM.
//! * `ABC`: the accountability location, which numbers
//!   its NOTAMs.
//! * `07/003`: the NOTAM number: here, the third NOTAM issued
//!   by `ABC` in July.
//! * `XYZ`: the affected facility or location.
//! * `NAV`: the NOTAM keyword, "Navigation Aids."
//! * `VOR OTS`: free text. The VOR is out of service.
//! * `WEF 0407141200-0407162000`: "with effect from" 1200 UTC on
//!   14 July 2004 until 2000 UTC on 16 July 2004.
//!
//! This crate handles that layout only. It is **not** a
//! validator for the ICAO NOTAM format.
//!
//! ## Interpreting Messages
//!
//! ```
//! use notamplace::{Frames, Keywords, NotamDecoder};
//!
//! // the keyword table is built once and shared
//! let keywords = Keywords::builtin();
//! let decoder = NotamDecoder::new(&keywords);
//!
//! let feed = "!ABC 07/003 XYZ NAV VOR OTS WEF 0407141200-0407162000\n\
//!             !XYZ 01/008 XYZ TWY B CLSD\n";
//!
//! for msg in Frames::new(feed) {
//!     let rec = decoder.decode(msg).expect("malformed NOTAM");
//!     println!("{}: {} {}", rec.notam_number, rec.subject_keyword, rec.free_text);
//! }
//!
//! let rec = decoder.decode("!XYZ 01/008 XYZ TWY B CLSD").unwrap();
//! assert_eq!("Taxiway", rec.subject_keyword);
//! assert_eq!("B Closed ", rec.free_text);
//! assert!(!rec.has_effective_time());
//! ```
//!
//! ## Crate features
//!
//! * `chrono`: Use chrono to convert effective times into
//!   true UTC timestamps and to test whether a NOTAM is
//!   [in effect](crate::EffectiveTime::is_active_at). If
//!   enabled, `chrono` becomes part of this crate's public API.

#![deny(unsafe_code)]

mod calendar;
mod decoder;
mod effective;
mod framing;
mod keywords;
mod record;
mod tokenize;

pub use calendar::{day_of_week, Month, Weekday};
pub use decoder::{DateRegion, NotamDecodeErr, NotamDecoder, MARKER, WEF};
pub use effective::{DateStamp, EffectiveTime, InvalidDateErr};
pub use framing::Frames;
pub use keywords::{KeywordTableErr, Keywords};
pub use record::NotamRecord;
pub use tokenize::Tokens;
