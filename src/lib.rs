//! Single-pass placeholder substitution.
//!
//! Sharps scans a document once, left to right, and replaces every
//! `##name##` it can resolve. Anything it cannot resolve is left exactly as
//! written. There is no parsing step, no intermediate template, and no
//! failure mode: unbalanced or doubled delimiters simply stay literal text.
//!
//! # Syntax
//!
//! ```plain
//! Hello ##firstname##, welcome to ##clubname##!
//! ```
//!
//! A token is the text between an opening and a closing delimiter, `##` by
//! default. The name is taken verbatim: spaces, dots and dashes are all part
//! of it. A run of extra delimiter characters in front of a token stays in
//! the output, so `###No##` renders to `#1` and `####No##` to `##1`.
//!
//! # Usage
//!
//! The quickest way is [`render`], which looks keys up case-insensitively:
//!
//! ```
//! let out = sharps::render(
//!     "Hello ##firstname##, welcome to ##clubname##",
//!     [("FirstName", "Bob")],
//! );
//! assert_eq!(out, "Hello Bob, welcome to ##clubname##");
//! ```
//!
//! Default values go in a second mapping, consulted only for keys the first
//! one does not have:
//!
//! ```
//! let out = sharps::render_with_alts(
//!     "Hello ##firstname##, welcome to ##clubname##",
//!     [("clubname", "NBA Club")],
//!     [("firstname", "Daniel"), ("clubname", "Football Club")],
//! );
//! assert_eq!(out, "Hello Daniel, welcome to NBA Club");
//! ```
//!
//! For anything else, build a [`Model`] or implement [`Values`] yourself and
//! call [`render_raw`] with the [`Delimiters`] of your choice:
//!
//! ```
//! use sharps::{render_raw, vals, Delimiters};
//!
//! let delimiters = Delimiters::new("{{", "}}").unwrap();
//! let out = render_raw(
//!     "hi {{ who }}",
//!     &vals(|key| (key == " who ").then(|| "there")),
//!     &delimiters,
//! );
//! assert_eq!(out, "hi there");
//! ```
//!
//! # Errors
//!
//! Rendering itself never fails. [`SyntaxError`] is returned when building
//! [`Delimiters`] from an empty string, and [`RenderError`] passes I/O errors
//! through from [`render_raw_into`].

#[doc(inline)]
pub use case_insensitive::*;

#[doc(inline)]
pub use delimiters::*;

#[doc(inline)]
pub use error::*;

#[doc(inline)]
pub use format::*;

#[doc(inline)]
pub use mapping::*;

#[doc(inline)]
pub use model::*;

#[doc(inline)]
pub use render::*;

#[doc(inline)]
pub use scanner::*;

#[doc(inline)]
pub use values::*;

mod case_insensitive;
mod delimiters;
mod error;
mod format;
mod mapping;
mod model;
mod render;
mod scanner;
mod values;
