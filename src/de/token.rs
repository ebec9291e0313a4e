//! Splitting lines into whitespace-delimited tokens, and the decimal grammar for vertex
//! components.

use std::iter::FusedIterator;

/// A whitespace-delimited word within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'line> {
    pub text: &'line str,
    /// 1-based byte column of the token's first character
    pub column: usize,
}

/// Iterator over the [Tokens](Token) of a single line.
#[derive(Debug, Clone)]
pub(crate) struct Tokens<'line> {
    line: &'line str,
    pos: usize,
}

impl<'line> Tokens<'line> {
    #[inline]
    pub fn new(line: &'line str) -> Self {
        Self { line, pos: 0 }
    }
}

impl<'line> FusedIterator for Tokens<'line> {}

impl<'line> Iterator for Tokens<'line> {
    type Item = Token<'line>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.line[self.pos..];
        let Some(skip) = rest.find(|c: char| !c.is_whitespace()) else {
            self.pos = self.line.len();
            return None;
        };
        let word = &rest[skip..];
        let len = word.find(char::is_whitespace).unwrap_or(word.len());
        let column = self.pos + skip + 1;
        self.pos += skip + len;
        Some(Token {
            text: &word[..len],
            column,
        })
    }
}

/// Whether `c` ends a line. `\r\n` counts as a single terminator.
#[inline]
pub(crate) fn is_line_end(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Split the first line off of `text`, returning it along with the number of bytes it occupies,
/// including its terminator.
pub(crate) fn split_line(text: &str) -> (&str, usize) {
    let Some(len) = text.find(is_line_end) else {
        return (text, text.len());
    };
    let terminator = if text[len..].starts_with("\r\n") { 2 } else { 1 };
    (&text[..len], len + terminator)
}

/// Whether `text` matches `-?[0-9]+\.[0-9]+`.
pub(crate) fn is_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => false,
    }
}
