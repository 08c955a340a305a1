use std::{borrow::Cow, io::Write};

use tracing::{debug, trace};

use crate::{Delimiters, RenderError, SyntaxError, Values};

/// One piece of rendered output.
///
/// Concatenating the blocks a [`Scanner`] yields, in order, gives the
/// rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block<'s> {
    /// A span of the document, copied as-is.
    Text(&'s str),
    /// An opening delimiter that did not start a resolved token.
    Delimiter(&'s str),
    /// The replacement for a resolved token.
    Value(Cow<'s, str>),
}

impl Block<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Delimiter(text) => text,
            Self::Value(value) => value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Literal,
    InToken,
}

/// Single left-to-right pass over a document, yielding [`Block`]s.
///
/// `cursor` only ever moves forward; `mark` is where the pending literal or
/// token name starts. Every call to `next` either moves `cursor` or changes
/// `state` to one that will, so scanning is linear in the document length.
#[derive(Debug)]
pub struct Scanner<'s, V: ?Sized> {
    document: &'s str,
    values: &'s V,
    delimiters: &'s Delimiters,
    state: State,
    cursor: usize,
    mark: usize,
    pending: Option<Block<'s>>,
    finished: bool,
}

/// Scan `document`, resolving tokens through `values`.
pub fn scan<'s, V>(document: &'s str, values: &'s V, delimiters: &'s Delimiters) -> Scanner<'s, V>
where
    V: Values + ?Sized,
{
    Scanner {
        document,
        values,
        delimiters,
        state: State::Literal,
        cursor: 0,
        mark: 0,
        pending: None,
        finished: false,
    }
}

fn char_len_at(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(1, char::len_utf8)
}

impl<'s, V> Scanner<'s, V>
where
    V: Values + ?Sized,
{
    /// Move `cursor` past any delimiter text overlapping the end of the
    /// opening delimiter that ends at `cursor`, one character at a time.
    fn consume_run(&mut self) {
        let delimiters = self.delimiters;
        let open = delimiters.open();
        while self.cursor < self.document.len() {
            let next = self.cursor + char_len_at(self.document, self.cursor);
            if self.document[..next].ends_with(open) {
                self.cursor = next;
            } else {
                break;
            }
        }
    }

    fn step(&mut self) {
        self.cursor += char_len_at(self.document, self.cursor);
    }

    fn literal(&mut self) -> Option<Block<'s>> {
        let delimiters = self.delimiters;
        let open = delimiters.open();
        if !self.document[self.cursor..].starts_with(open) {
            self.step();
            return None;
        }

        self.cursor += open.len();
        self.consume_run();

        let text = &self.document[self.mark..self.cursor - open.len()];
        self.state = State::InToken;
        self.mark = self.cursor;

        (!text.is_empty()).then_some(Block::Text(text))
    }

    fn in_token(&mut self) -> Option<Block<'s>> {
        let delimiters = self.delimiters;
        if !self.document[self.cursor..].starts_with(delimiters.close()) {
            self.step();
            return None;
        }

        let name = &self.document[self.mark..self.cursor];
        let values = self.values;
        let block = if name.is_empty() {
            Block::Delimiter(delimiters.open())
        } else if let Some(value) = values.get_value(name) {
            self.cursor += delimiters.close().len();
            Block::Value(value)
        } else {
            trace!(token = name, offset = self.mark, "unresolved token left verbatim");
            self.pending = Some(Block::Text(name));
            Block::Delimiter(delimiters.open())
        };

        // On anything but a resolved token the close delimiter stays under
        // the cursor and is looked at again as a possible opening.
        self.state = State::Literal;
        self.mark = self.cursor;

        Some(block)
    }

    fn finish(&mut self) -> Option<Block<'s>> {
        if self.finished {
            return None;
        }
        self.finished = true;

        let delimiters = self.delimiters;
        let rest = &self.document[self.mark..];
        match self.state {
            State::Literal => (!rest.is_empty()).then_some(Block::Text(rest)),
            State::InToken => {
                if !rest.is_empty() {
                    self.pending = Some(Block::Text(rest));
                }
                Some(Block::Delimiter(delimiters.open()))
            }
        }
    }
}

impl<'s, V> Iterator for Scanner<'s, V>
where
    V: Values + ?Sized,
{
    type Item = Block<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(block) = self.pending.take() {
            return Some(block);
        }

        while self.cursor < self.document.len() {
            let block = match self.state {
                State::Literal => self.literal(),
                State::InToken => self.in_token(),
            };
            if block.is_some() {
                return block;
            }
        }

        self.finish()
    }
}

/// Render `document`, replacing every token `values` resolves.
pub fn render_raw<V>(document: &str, values: &V, delimiters: &Delimiters) -> String
where
    V: Values + ?Sized,
{
    let mut out = String::with_capacity(document.len());
    for block in scan(document, values, delimiters) {
        out.push_str(block.as_str());
    }
    out
}

/// Render `document` straight into `writer`.
pub fn render_raw_into<V>(
    writer: &mut dyn Write,
    document: &str,
    values: &V,
    delimiters: &Delimiters,
) -> Result<(), RenderError>
where
    V: Values + ?Sized,
{
    debug!(
        len = document.len(),
        open = delimiters.open(),
        close = delimiters.close(),
        "rendering document"
    );

    for block in scan(document, values, delimiters) {
        writer.write_all(block.as_str().as_bytes())?;
    }
    Ok(())
}

/// Render `document` with delimiters given as plain strings.
///
/// Fails only if either delimiter is empty.
pub fn render_string<V>(
    document: &str,
    values: &V,
    open: &str,
    close: &str,
) -> Result<String, SyntaxError>
where
    V: Values + ?Sized,
{
    let delimiters = Delimiters::new(open, close)?;
    Ok(render_raw(document, values, &delimiters))
}
