#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteKind {
    Single,
    Double,
    Backtick,
}

impl QuoteKind {
    fn opening(c: char) -> Option<Self> {
        match c {
            '\'' => Some(QuoteKind::Single),
            '"' => Some(QuoteKind::Double),
            '`' => Some(QuoteKind::Backtick),
            _ => None,
        }
    }

    fn delimiter(self) -> char {
        match self {
            QuoteKind::Single => '\'',
            QuoteKind::Double => '"',
            QuoteKind::Backtick => '`',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Normal,
    Quoted(QuoteKind),
}

/// Tracks whether the scan position is inside a quoted literal.
///
/// Callers feed it one position at a time; while it reports consumed characters they are
/// literal content and must be copied through untouched.
#[derive(Debug, Clone)]
pub(crate) struct LiteralTracker {
    state: State,
    backslash_escapes: bool,
}

impl LiteralTracker {
    pub(crate) fn new(backslash_escapes: bool) -> Self {
        Self {
            state: State::Normal,
            backslash_escapes,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> State {
        self.state
    }

    /// Advance over `chars[idx]`.
    ///
    /// Returns how many characters (1 or 2) belong to a literal starting at `idx`, or
    /// `None` when `chars[idx]` is ordinary SQL text.
    pub(crate) fn step(&mut self, chars: &[char], idx: usize) -> Option<usize> {
        let c = chars[idx];
        match self.state {
            State::Normal => {
                let kind = QuoteKind::opening(c)?;
                self.state = State::Quoted(kind);
                Some(1)
            }
            State::Quoted(kind) => {
                let next = chars.get(idx + 1).copied();
                if c == '\\'
                    && self.backslash_escapes
                    && kind != QuoteKind::Backtick
                    && next.is_some()
                {
                    return Some(2);
                }
                if c == kind.delimiter() {
                    if next == Some(c) {
                        return Some(2);
                    }
                    self.state = State::Normal;
                }
                Some(1)
            }
        }
    }
}
