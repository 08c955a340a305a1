use compact_str::CompactString;

use crate::{Side, SyntaxError};

/// The pair of markers that open and close a token.
///
/// Both sides are guaranteed non-empty. The default is `##` on both sides.
///
/// With the `serde` feature this deserializes from a table with optional
/// `open` and `close` keys; a missing key falls back to `##` and an empty one
/// is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDelimiters", into = "RawDelimiters")
)]
pub struct Delimiters {
    open: CompactString,
    close: CompactString,
}

impl Delimiters {
    /// `##` on both sides.
    pub const SHARPS: Self = Self {
        open: CompactString::const_new("##"),
        close: CompactString::const_new("##"),
    };

    pub fn new(open: &str, close: &str) -> Result<Self, SyntaxError> {
        if open.is_empty() {
            return Err(SyntaxError::EmptyDelimiter { which: Side::Open });
        }
        if close.is_empty() {
            return Err(SyntaxError::EmptyDelimiter { which: Side::Close });
        }

        Ok(Self {
            open: open.into(),
            close: close.into(),
        })
    }

    /// The same marker on both sides.
    pub fn symmetric(delimiter: &str) -> Result<Self, SyntaxError> {
        Self::new(delimiter, delimiter)
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::SHARPS
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawDelimiters {
    open: CompactString,
    close: CompactString,
}

#[cfg(feature = "serde")]
impl Default for RawDelimiters {
    fn default() -> Self {
        Delimiters::SHARPS.into()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawDelimiters> for Delimiters {
    type Error = SyntaxError;

    fn try_from(raw: RawDelimiters) -> Result<Self, Self::Error> {
        Self::new(&raw.open, &raw.close)
    }
}

#[cfg(feature = "serde")]
impl From<Delimiters> for RawDelimiters {
    fn from(delimiters: Delimiters) -> Self {
        Self {
            open: delimiters.open,
            close: delimiters.close,
        }
    }
}
