use std::borrow::Cow;

use super::token::is_line_end;

/// Remove every `#` and everything following it up to, but not including, the next line
/// terminator (`\n`, `\r\n`, or `\r`).
///
/// Line numbers and the columns of the remaining text are unchanged.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains('#') {
        return Cow::Borrowed(text);
    }
    let mut res = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('#') {
        res.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = rest.find(is_line_end).unwrap_or(rest.len());
        rest = &rest[end..];
    }
    res.push_str(rest);
    Cow::Owned(res)
}
