//! Human-readable NOTAM report

use std::fmt;

use notamplace::NotamRecord;

/// Width of the separator when not writing to a terminal
pub const DEFAULT_WIDTH: usize = 86;

/// Displays a decoded NOTAM
///
/// The effective time section is shown only if at least one
/// end of the effective period was decoded. The report ends
/// with a dashed separator line, `width` characters long, and
/// no trailing newline.
#[derive(Clone, Copy, Debug)]
pub struct Report<'r> {
    record: &'r NotamRecord,
    width: usize,
}

impl<'r> Report<'r> {
    /// Report on `record`
    pub fn new(record: &'r NotamRecord, width: usize) -> Self {
        Self { record, width }
    }
}

impl<'r> fmt::Display for Report<'r> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rec = self.record;

        writeln!(f, "Issuing Airport:\t{}", rec.issuing_airport)?;
        writeln!(f, "NOTAM Number:\t\t{}", rec.notam_number)?;

        if rec.has_effective_time() {
            writeln!(f)?;
            writeln!(f, "Effective Time Frame")?;
            if !rec.beginning.is_empty() {
                writeln!(f, "Beginning:\t\t{}", rec.beginning)?;
            }
            if !rec.ending.is_empty() {
                writeln!(f, "Ending:\t\t\t{}", rec.ending)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Affected Areas")?;
        writeln!(f, "Location:\t\t{}", rec.affected_location)?;
        writeln!(f, "Section:\t\t{}", rec.subject_keyword)?;
        writeln!(f, "Information:\t\t{}", rec.free_text)?;
        write!(f, "{}", "-".repeat(self.width))
    }
}

/// Separator width for standard output
///
/// The terminal width, if standard output is a terminal,
/// or [`DEFAULT_WIDTH`] otherwise.
pub fn output_width() -> usize {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(w), _)) if w > 0 => w as usize,
        _ => DEFAULT_WIDTH,
    }
}
