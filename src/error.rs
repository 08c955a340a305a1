use std::{fmt, io};

use thiserror::Error;

/// One side of a [`Delimiters`](crate::Delimiters) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Open,
    Close,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Close => "close",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum SyntaxError {
    /// An empty delimiter would match at every position.
    #[error("{which} delimiter must not be empty")]
    #[cfg_attr(
        feature = "miette",
        diagnostic(
            code(sharps::empty_delimiter),
            help("use at least one character, for example `##`")
        )
    )]
    EmptyDelimiter { which: Side },
}

#[derive(Debug, Error)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum RenderError {
    /// An I/O error passed through from [`render_raw_into`](crate::render_raw_into).
    #[error(transparent)]
    Io(#[from] io::Error),
}
