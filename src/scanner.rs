use crate::error::ProtocolError;
use proconio::source::Source;
use proconio::source::once::OnceSource;
use std::io::{BufRead, Cursor};
use std::str::FromStr;

/// Reads whitespace-separated tokens one line at a time, so it never blocks
/// waiting for input past the line it needs. Suitable for interactive use.
///
/// Lines are read here and only then handed to proconio, so read failures
/// (including non-UTF-8 input) surface as `ProtocolError::Io`.
pub struct TokenReader<R: BufRead> {
    reader: R,
    line: OnceSource<Cursor<String>>,
    pushed_back: Option<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: OnceSource::new(Cursor::new(String::new())),
            pushed_back: None,
        }
    }

    /// Reads lines until one holds a token. Returns `false` at end of input.
    fn fill(&mut self) -> Result<bool, ProtocolError> {
        while self.line.is_empty() {
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(false);
            }
            self.line = OnceSource::new(Cursor::new(buf));
        }
        Ok(true)
    }

    /// Next raw token.
    pub fn token(&mut self) -> Result<String, ProtocolError> {
        if let Some(token) = self.pushed_back.take() {
            return Ok(token);
        }
        if !self.fill()? {
            return Err(ProtocolError::UnexpectedEof);
        }
        self.line
            .next_token()
            .map(str::to_owned)
            .ok_or(ProtocolError::UnexpectedEof)
    }

    /// Makes `token` the next one returned. At most one token is held.
    pub fn push_back(&mut self, token: String) {
        debug_assert!(self.pushed_back.is_none());
        self.pushed_back = Some(token);
    }

    /// Next token parsed as `T`.
    pub fn next<T: FromStr>(&mut self) -> Result<T, ProtocolError> {
        let token = self.token()?;
        token.parse().map_err(|_| ProtocolError::InvalidToken {
            token,
            expected: std::any::type_name::<T>(),
        })
    }

    /// True when no tokens remain.
    pub fn is_exhausted(&mut self) -> Result<bool, ProtocolError> {
        if self.pushed_back.is_some() {
            return Ok(false);
        }
        Ok(!self.fill()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tokens_across_lines() {
        let mut r = TokenReader::new(Cursor::new("? 1  2\n\n! 15\n"));
        assert_eq!(r.token().unwrap(), "?");
        assert_eq!(r.next::<usize>().unwrap(), 1);
        assert_eq!(r.next::<usize>().unwrap(), 2);
        assert_eq!(r.token().unwrap(), "!");
        assert_eq!(r.next::<i64>().unwrap(), 15);
        assert!(r.is_exhausted().unwrap());
        assert!(matches!(r.token(), Err(ProtocolError::UnexpectedEof)));
    }

    #[test]
    fn reports_invalid_tokens() {
        let mut r = TokenReader::new(Cursor::new("x"));
        match r.next::<i64>() {
            Err(ProtocolError::InvalidToken { token, expected }) => {
                assert_eq!(token, "x");
                assert_eq!(expected, "i64");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_utf8_line_is_an_io_error() {
        let mut r = TokenReader::new(Cursor::new(vec![b'?', b' ', 0xff, 0xfe, b'\n']));
        match r.token() {
            Err(ProtocolError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn pushed_back_token_comes_first() {
        let mut r = TokenReader::new(Cursor::new("7\n"));
        r.push_back("10".to_string());
        assert!(!r.is_exhausted().unwrap());
        assert_eq!(r.next::<i64>().unwrap(), 10);
        assert_eq!(r.next::<i64>().unwrap(), 7);
        assert!(r.is_exhausted().unwrap());
    }
}
