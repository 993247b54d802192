use std::io;

use tracing::debug;

/// Used when the terminal cannot report its size, e.g. output is not a tty.
pub const FALLBACK_SIZE: TermSize = TermSize {
    width: 80,
    height: 24,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TermSize {
    pub width: u16,
    pub height: u16,
}

impl TermSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Current size, queried fresh on every call.
    pub fn query() -> Self {
        Self::from_query(crossterm::terminal::size())
    }

    pub fn from_query(result: io::Result<(u16, u16)>) -> Self {
        match result {
            Ok((width, height)) if width > 0 && height > 0 => Self { width, height },
            Ok((width, height)) => {
                debug!(width, height, "terminal reported an empty size, using fallback");
                FALLBACK_SIZE
            }
            Err(err) => {
                debug!(%err, "terminal size unavailable, using fallback");
                FALLBACK_SIZE
            }
        }
    }
}

impl Default for TermSize {
    fn default() -> Self {
        FALLBACK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_size_is_used() {
        let size = TermSize::from_query(Ok((120, 40)));
        assert_eq!(size, TermSize::new(120, 40));
    }

    #[test]
    fn test_query_failure_falls_back() {
        let err = io::Error::new(io::ErrorKind::Unsupported, "not a tty");
        assert_eq!(TermSize::from_query(Err(err)), FALLBACK_SIZE);
    }

    #[test]
    fn test_zero_size_falls_back() {
        assert_eq!(TermSize::from_query(Ok((0, 0))), FALLBACK_SIZE);
    }
}
