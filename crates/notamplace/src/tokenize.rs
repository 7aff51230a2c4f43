//! Split NOTAM text into tokens

use std::ops::Deref;

/// Whitespace-delimited NOTAM tokens
///
/// Tokens borrow from the message text. Runs of any
/// whitespace separate tokens, and a token consisting only
/// of a double quote (`"`) is dropped. Case is preserved.
///
/// ```
/// use notamplace::Tokens;
///
/// let tokens = Tokens::new("!XYZ 01/008 XYZ  TWY B\tCLSD \" \r\n");
/// assert_eq!(tokens.as_slice(), &["!XYZ", "01/008", "XYZ", "TWY", "B", "CLSD"]);
/// assert!(Tokens::new("   ").is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Tokens<'m> {
    tokens: Vec<&'m str>,
}

impl<'m> Tokens<'m> {
    /// Tokenize the `message`
    pub fn new(message: &'m str) -> Self {
        Self {
            tokens: message
                .split_whitespace()
                .filter(|tok| *tok != QUOTE)
                .collect(),
        }
    }

    /// All tokens, in order
    pub fn as_slice(&self) -> &[&'m str] {
        &self.tokens
    }
}

impl<'m> Deref for Tokens<'m> {
    type Target = [&'m str];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'m> AsRef<[&'m str]> for Tokens<'m> {
    #[inline]
    fn as_ref(&self) -> &[&'m str] {
        self.as_slice()
    }
}

impl<'m> IntoIterator for Tokens<'m> {
    type Item = &'m str;
    type IntoIter = std::vec::IntoIter<&'m str>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

const QUOTE: &str = "\"";
