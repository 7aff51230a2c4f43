//! Split a NOTAM feed into messages

use crate::decoder::MARKER;

/// Iterator over the messages in a NOTAM feed
///
/// Every NOTAM begins with the `!` marker. A feed is any
/// number of NOTAMs, one after the other, with or without
/// line breaks in between. Each message runs from its marker
/// up to the next marker or the end of the feed. The marker is
/// retained. Text before the first marker is discarded.
///
/// ```
/// use notamplace::Frames;
///
/// let feed = "header junk\n!ABC 07/003 XYZ NAV VOR OTS\n!XYZ 01/008 XYZ TWY B CLSD";
/// let msgs: Vec<&str> = Frames::new(feed).collect();
/// assert_eq!(
///     msgs.as_slice(),
///     &["!ABC 07/003 XYZ NAV VOR OTS\n", "!XYZ 01/008 XYZ TWY B CLSD"]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Frames<'f> {
    rest: &'f str,
}

impl<'f> Frames<'f> {
    /// Iterate over the messages in `feed`
    pub fn new(feed: &'f str) -> Self {
        Self { rest: feed }
    }
}

impl<'f> Iterator for Frames<'f> {
    type Item = &'f str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.find(MARKER)?;
        let msg = &self.rest[start..];

        let after_marker = MARKER.len_utf8();
        let end = msg[after_marker..]
            .find(MARKER)
            .map(|i| i + after_marker)
            .unwrap_or(msg.len());

        self.rest = &msg[end..];
        Some(&msg[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames() {
        const FEED: &str = "!PHX 12/133 PHX RWY 07R/25L EDGE MKGS NOT STD 2001010700-2101010659\r\n\
                            !ABC 07/003 XYZ NAV VOR OTS WEF 0407141200-0407162000\r\n\
                            !XYZ 01/008 XYZ TWY B CLSD\r\n";

        let msgs: Vec<&str> = Frames::new(FEED).collect();
        assert_eq!(3, msgs.len());
        assert!(msgs[0].starts_with("!PHX"));
        assert!(msgs[0].ends_with("2101010659\r\n"));
        assert!(msgs[1].starts_with("!ABC"));
        assert_eq!("!XYZ 01/008 XYZ TWY B CLSD\r\n", msgs[2]);
    }

    #[test]
    fn test_frames_edges() {
        assert_eq!(0, Frames::new("").count());
        assert_eq!(0, Frames::new("no markers here").count());

        // adjacent markers make empty messages
        let msgs: Vec<&str> = Frames::new("!!A").collect();
        assert_eq!(msgs.as_slice(), &["!", "!A"]);

        let msgs: Vec<&str> = Frames::new("junk!").collect();
        assert_eq!(msgs.as_slice(), &["!"]);
    }
}
