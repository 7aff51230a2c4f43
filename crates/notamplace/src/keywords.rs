//! Keyword and contraction lookup

use std::collections::HashMap;

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;
use thiserror::Error;

/// A keyword table
///
/// Maps abbreviation tokens, like "`RWY`," to their expanded
/// phrase, like "`Runway`." The table is built once, before
/// decoding begins, and is only read thereafter. Share it
/// by reference between as many decoders as you like.
///
/// ## Built-in table
///
/// The built-in table covers the FAA NOTAM keywords, which
/// name the subject of the notice, and the contractions most
/// often seen in the free text which follows. The keywords
/// are:
///
/// | Keyword    | Description                         |
/// |------------|-------------------------------------|
/// | `AD`       | Aerodrome                           |
/// | `AIRSPACE` | Airspace                            |
/// | `APRON`    | Apron                               |
/// | `CHART`    | Chart                               |
/// | `COM`      | Communications                      |
/// | `DATA`     | Data                                |
/// | `IAP`      | Instrument Approach Procedure       |
/// | `NAV`      | Navigation Aids                     |
/// | `OBST`     | Obstruction                         |
/// | `ODP`      | Obstacle Departure Procedure        |
/// | `ROUTE`    | Route                               |
/// | `RWY`      | Runway                              |
/// | `SECURITY` | Security                            |
/// | `SID`      | Standard Instrument Departure       |
/// | `SPECIAL`  | Special                             |
/// | `STAR`     | Standard Terminal Arrival           |
/// | `SVC`      | Services                            |
/// | `TWY`      | Taxiway                             |
/// | `VFP`      | Visual Flight Procedure             |
///
/// Lookups are exact. There is no case folding and no prefix
/// matching: `rwy` and `RWYS` are both unknown.
///
/// ```
/// use notamplace::Keywords;
///
/// let kw = Keywords::builtin();
/// assert_eq!(Some("Runway"), kw.expand("RWY"));
/// assert_eq!(None, kw.expand("rwy"));
/// assert_eq!("07R/25L", kw.expand_or_verbatim("07R/25L"));
///
/// // your own entries take precedence
/// let kw = Keywords::builtin().with_entry("RWY", "Landing Strip");
/// assert_eq!(Some("Landing Strip"), kw.expand("RWY"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keywords {
    builtin: bool,
    custom: HashMap<String, String>,
}

/// Error loading a keyword table
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeywordTableErr {
    /// Line is not of the form `KEYWORD = Expansion`
    #[error("invalid keyword table: line {0} is not `KEYWORD = Expansion`")]
    Malformed(usize),

    /// Keyword appears more than once
    #[error("invalid keyword table: line {line} repeats keyword \"{keyword}\"")]
    Duplicate {
        /// Line number, starting from one
        line: usize,

        /// The repeated keyword
        keyword: String,
    },
}

impl Keywords {
    /// The built-in table
    pub fn builtin() -> Self {
        Self {
            builtin: true,
            custom: HashMap::new(),
        }
    }

    /// A table with no entries at all
    pub fn empty() -> Self {
        Self {
            builtin: false,
            custom: HashMap::new(),
        }
    }

    /// Add an entry, replacing any existing expansion
    pub fn with_entry<K, V>(mut self, keyword: K, expansion: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(keyword, expansion);
        self
    }

    /// Add an entry
    ///
    /// Returns the previous *custom* expansion for `keyword`,
    /// if any. Built-in entries are shadowed, not replaced.
    pub fn insert<K, V>(&mut self, keyword: K, expansion: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.custom.insert(keyword.into(), expansion.into())
    }

    /// Add entries from a keyword table in text form
    ///
    /// Each line reads `KEYWORD = Expansion`. Blank lines and
    /// lines starting with `#` are ignored. Keywords may not
    /// contain whitespace or `=`, and each may appear only
    /// once in the `text`. Entries override the existing
    /// contents of this table.
    ///
    /// ```
    /// use notamplace::{KeywordTableErr, Keywords};
    ///
    /// let kw = Keywords::empty().extend_from_table(
    ///     "# local contractions\nPPR = Prior Permission Required\n"
    /// ).expect("bad table");
    /// assert_eq!(Some("Prior Permission Required"), kw.expand("PPR"));
    /// assert_eq!(None, kw.expand("RWY"));
    ///
    /// let err = Keywords::empty().extend_from_table("PPR\n");
    /// assert_eq!(Err(KeywordTableErr::Malformed(1)), err);
    /// ```
    pub fn extend_from_table(mut self, text: &str) -> Result<Self, KeywordTableErr> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*([^\s=]+)\s*=\s*(\S.*?)\s*$").expect("bad keyword regexp");
        }

        let mut seen = HashMap::new();
        for (i, line) in text.lines().enumerate() {
            let lineno = i + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let caps = RE.captures(line).ok_or(KeywordTableErr::Malformed(lineno))?;
            let keyword = &caps[1];
            if seen.insert(keyword.to_owned(), lineno).is_some() {
                return Err(KeywordTableErr::Duplicate {
                    line: lineno,
                    keyword: keyword.to_owned(),
                });
            }
            self.insert(keyword, &caps[2]);
        }

        Ok(self)
    }

    /// Look up the expansion of `token`
    ///
    /// Returns `None` if the token is unknown.
    pub fn expand(&self, token: &str) -> Option<&str> {
        if let Some(exp) = self.custom.get(token) {
            return Some(exp.as_str());
        }
        if self.builtin {
            return BUILTIN.get(token).copied();
        }
        None
    }

    /// Expansion of `token`, or the `token` itself if unknown
    pub fn expand_or_verbatim<'a>(&'a self, token: &'a str) -> &'a str {
        self.expand(token).unwrap_or(token)
    }

    /// True if the built-in entries are consulted
    pub fn has_builtin(&self) -> bool {
        self.builtin
    }

    /// Number of custom entries
    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in keywords and contractions
static BUILTIN: phf::Map<&'static str, &'static str> = phf_map! {
    // NOTAM keywords
    "AD" => "Aerodrome",
    "AIRSPACE" => "Airspace",
    "APRON" => "Apron",
    "CHART" => "Chart",
    "COM" => "Communications",
    "DATA" => "Data",
    "IAP" => "Instrument Approach Procedure",
    "NAV" => "Navigation Aids",
    "OBST" => "Obstruction",
    "ODP" => "Obstacle Departure Procedure",
    "ROUTE" => "Route",
    "RWY" => "Runway",
    "SECURITY" => "Security",
    "SID" => "Standard Instrument Departure",
    "SPECIAL" => "Special",
    "STAR" => "Standard Terminal Arrival",
    "SVC" => "Services",
    "TWY" => "Taxiway",
    "VFP" => "Visual Flight Procedure",

    // navigation aids and lighting
    "ALS" => "Approach Light System",
    "DME" => "Distance Measuring Equipment",
    "GS" => "Glide Slope",
    "HIRL" => "High Intensity Runway Lights",
    "ILS" => "Instrument Landing System",
    "LGT" => "Light",
    "LGTS" => "Lights",
    "LOC" => "Localizer",
    "MIRL" => "Medium Intensity Runway Lights",
    "NDB" => "Non-Directional Beacon",
    "PAPI" => "Precision Approach Path Indicator",
    "REIL" => "Runway End Identifier Lights",
    "RVR" => "Runway Visual Range",
    "TACAN" => "Tactical Air Navigation Aid",
    "VASI" => "Visual Approach Slope Indicator",
    "VOR" => "VHF Omnidirectional Range",
    "VORTAC" => "VOR and TACAN",

    // condition
    "AVBL" => "Available",
    "CLSD" => "Closed",
    "CMSND" => "Commissioned",
    "DCMSND" => "Decommissioned",
    "LGTD" => "Lighted",
    "OTS" => "Out Of Service",
    "U/S" => "Unserviceable",
    "UNLGTD" => "Unlighted",
    "UNMKD" => "Unmarked",
    "UNREL" => "Unreliable",
    "UNUSBL" => "Unusable",
    "WIP" => "Work In Progress",

    // surfaces and structures
    "ACFT" => "Aircraft",
    "ARPT" => "Airport",
    "ASPH" => "Asphalt",
    "BLDG" => "Building",
    "CONC" => "Concrete",
    "MKG" => "Marking",
    "MKGS" => "Markings",
    "STD" => "Standard",
    "TWR" => "Tower",

    // measurement
    "AGL" => "Above Ground Level",
    "FREQ" => "Frequency",
    "FT" => "Feet",
    "MSL" => "Mean Sea Level",
    "NM" => "Nautical Miles",

    // time
    "DLY" => "Daily",
    "HR" => "Hours",
    "PERM" => "Permanent",
    "TEMPO" => "Temporary",
    "TIL" => "Until",
    "WEF" => "With Effect From",

    // phrasing
    "ABV" => "Above",
    "ADJ" => "Adjacent",
    "BLW" => "Below",
    "BTN" => "Between",
    "CTC" => "Contact",
    "EXC" => "Except",
    "PPR" => "Prior Permission Required",
    "RTS" => "Return To Service",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_builtin() {
        lazy_static! {
            static ref ASCII_UPPER: Regex =
                Regex::new(r"^[A-Z/]{2,8}$").expect("bad test regexp");
        }

        for (key, val) in BUILTIN.entries() {
            assert!(ASCII_UPPER.is_match(key), "bad keyword {}", key);
            assert!(!val.is_empty());
            assert_eq!(val.trim(), *val);
        }
    }

    #[test]
    fn test_lookup() {
        let kw = Keywords::default();
        assert_eq!(Some("Navigation Aids"), kw.expand("NAV"));
        assert_eq!(Some("Out Of Service"), kw.expand("OTS"));
        assert_eq!(None, kw.expand("NA"));
        assert_eq!(None, kw.expand("NAVS"));
        assert_eq!(None, kw.expand("nav"));
        assert_eq!("B", kw.expand_or_verbatim("B"));
        assert_eq!("Closed", kw.expand_or_verbatim("CLSD"));
    }

    #[test]
    fn test_custom() {
        let mut kw = Keywords::empty();
        assert_eq!(None, kw.expand("NAV"));
        assert!(!kw.has_builtin());

        assert_eq!(None, kw.insert("NAV", "Navaids"));
        assert_eq!(Some("Navaids".to_owned()), kw.insert("NAV", "Navigation"));
        assert_eq!(Some("Navigation"), kw.expand("NAV"));
        assert_eq!(1, kw.custom_len());
    }

    #[test]
    fn test_extend_from_table() {
        const TABLE: &str = "
# comment
  PPR   =  Prior Permission Reqd
RWY=Strip

FICON = Field Condition # not a comment
";
        let kw = Keywords::builtin()
            .extend_from_table(TABLE)
            .expect("bad table");
        assert_eq!(Some("Prior Permission Reqd"), kw.expand("PPR"));
        assert_eq!(Some("Strip"), kw.expand("RWY"));
        assert_eq!(Some("Field Condition # not a comment"), kw.expand("FICON"));
        assert_eq!(Some("Taxiway"), kw.expand("TWY"));
        assert_eq!(3, kw.custom_len());
    }

    #[test]
    fn test_extend_from_table_errors() {
        assert_eq!(
            Err(KeywordTableErr::Malformed(2)),
            Keywords::empty().extend_from_table("A = B\nJUNK\n")
        );
        assert_eq!(
            Err(KeywordTableErr::Malformed(1)),
            Keywords::empty().extend_from_table("A =   \n")
        );
        assert_eq!(
            Err(KeywordTableErr::Duplicate {
                line: 3,
                keyword: "A".to_owned()
            }),
            Keywords::empty().extend_from_table("A = B\n\nA = C\n")
        );
    }
}
