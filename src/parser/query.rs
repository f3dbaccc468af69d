use crate::compat::String;

/// A token produced by the query scanner.
///
/// Keys and values are raw slices of the query string; they are never
/// decoded by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// The scanner reached the end of the query
    Done,
    /// A key without `=`, e.g. `flag` in `?flag&x=1`
    Key(&'a str),
    /// A `key=value` pair; the value may be empty (`key=`)
    Param { key: &'a str, value: &'a str },
}

impl<'a> Token<'a> {
    pub fn key(&self) -> Option<&'a str> {
        match *self {
            Self::Done => None,
            Self::Key(key) | Self::Param { key, .. } => Some(key),
        }
    }

    pub fn value(&self) -> Option<&'a str> {
        match *self {
            Self::Param { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Append the token as it appeared in the query (`key` or `key=value`)
    pub(crate) fn write_into(&self, buffer: &mut String) {
        match *self {
            Self::Done => {}
            Self::Key(key) => buffer.push_str(key),
            Self::Param { key, value } => {
                buffer.push_str(key);
                buffer.push('=');
                buffer.push_str(value);
            }
        }
    }
}

/// Scan the token starting at `cursor` and return it with the advanced cursor.
///
/// Pairs are separated by `&` or `;`. A key ends at `=`, `&` or `;`; a value
/// ends at `&` or `;` and may itself contain `=`. Tokens with an empty key
/// (`&&`, a leading `&`, `=v`) are skipped. Every skipped span moves the
/// cursor forward by at least one byte.
pub fn next_token(source: &str, mut cursor: usize) -> (Token<'_>, usize) {
    let bytes = source.as_bytes();

    while cursor < bytes.len() {
        let rest = &bytes[cursor..];
        let brk = memchr::memchr3(b'&', b';', b'=', rest).unwrap_or(rest.len());
        let key = &source[cursor..cursor + brk];
        cursor += brk;

        let token = if bytes.get(cursor) == Some(&b'=') {
            cursor += 1;
            let rest = &bytes[cursor..];
            let brk = memchr::memchr2(b'&', b';', rest).unwrap_or(rest.len());
            let value = &source[cursor..cursor + brk];
            // Eat the separator terminating the value
            cursor += brk + 1;
            Token::Param { key, value }
        } else {
            cursor += 1;
            Token::Key(key)
        };

        if !key.is_empty() {
            return (token, cursor.min(bytes.len()));
        }
    }

    (Token::Done, bytes.len())
}

/// Lazy tokenizer over a query string.
///
/// Yields [`Token::Key`] and [`Token::Param`] until the query is exhausted.
/// Restart with [`QueryScanner::reset`].
#[derive(Debug, Clone)]
pub struct QueryScanner<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> QueryScanner<'a> {
    /// Create a scanner over a query string (without the leading `?`)
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.source.len()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Scan the next token, returning [`Token::Done`] once exhausted
    pub fn next_token(&mut self) -> Token<'a> {
        let (token, cursor) = next_token(self.source, self.cursor);
        self.cursor = cursor;
        token
    }
}

impl<'a> Iterator for QueryScanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::Done => None,
            token => Some(token),
        }
    }
}
