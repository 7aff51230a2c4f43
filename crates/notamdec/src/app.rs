//! Decode a NOTAM feed and print the results
//!
//! The feed is split into messages on the `!` marker. Each
//! message is decoded independently:
//!
//! ```txt
//!   feed ==> Frames ==> NotamDecoder ==+==> Report ==> output
//!                                      |
//!                                      +==> warn!() on a bad header
//! ```
//!
//! A message with a malformed header is logged and counted,
//! and never stops the run.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use notamplace::{Frames, NotamDecoder, NotamRecord};

use crate::report::Report;

/// Configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Print nothing
    pub quiet: bool,

    /// Suppress NOTAMs which are not in effect
    pub active_only: bool,

    /// Separator width
    pub width: usize,
}

/// Message counts from one run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Messages decoded and printed
    pub printed: usize,

    /// Messages decoded but not in effect
    pub inactive: usize,

    /// Messages which could not be decoded
    pub failed: usize,
}

impl Summary {
    /// Total messages seen
    pub fn total(&self) -> usize {
        self.printed + self.inactive + self.failed
    }
}

/// Run the application
///
/// Decodes every message in `feed` with the `decoder` and
/// writes a report for each to `out`. The current time, `now`,
/// is used to decide which NOTAMs are in effect.
pub fn run<W>(
    config: &Config,
    decoder: &NotamDecoder<'_>,
    feed: &str,
    now: &DateTime<Utc>,
    out: &mut W,
) -> io::Result<Summary>
where
    W: Write,
{
    let mut summary = Summary::default();

    for (i, msg) in Frames::new(feed).enumerate() {
        let rec = match decoder.decode(msg) {
            Ok(rec) => rec,
            Err(err) => {
                warn!("message {}: {}: \"{}\"", i + 1, err, msg.trim_end());
                summary.failed += 1;
                continue;
            }
        };

        if rec.is_date_ambiguous() {
            info!(
                "message {}: NOTAM {} has no recognizable effective time",
                i + 1,
                rec.notam_number
            );
        }

        if config.active_only && !is_in_effect(&rec, now) {
            debug!("message {}: NOTAM {} is not in effect", i + 1, rec.notam_number);
            summary.inactive += 1;
            continue;
        }

        if !config.quiet {
            writeln!(out, "{}", Report::new(&rec, config.width))?;
        }
        summary.printed += 1;
    }

    info!(
        "decoded {} of {} messages ({} not in effect)",
        summary.printed + summary.inactive,
        summary.total(),
        summary.inactive
    );

    Ok(summary)
}

// NOTAMs without any decoded effective time are always in effect
fn is_in_effect(rec: &NotamRecord, now: &DateTime<Utc>) -> bool {
    match &rec.effective {
        Some(Ok(eff)) if !eff.is_undecoded() => eff.is_active_at(now),
        _ => true,
    }
}
