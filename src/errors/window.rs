//! Context window for lexical error messages.
//!
//! Starting from the failure offset, the source is walked outwards in both
//! directions with a tiny state machine. Each walk stops after five
//! space-separated words, at a newline, or at the edge of the buffer.

/// Number of word boundaries a single walk may cross before it stops.
pub const MAX_WORD_BOUNDARIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Initial,
    AtWordBoundary,
    InsideWord,
    HitNewline,
}

impl WindowState {
    /// Feeds one byte to the machine.
    ///
    /// The boundary count is owned by the caller and handed back updated, so
    /// two walks never share a counter.
    pub fn step(self, byte: u8, boundaries: usize) -> (WindowState, usize) {
        match (self, byte) {
            (WindowState::HitNewline, _) => (WindowState::HitNewline, boundaries),
            (_, b'\n') => (WindowState::HitNewline, boundaries),
            (WindowState::InsideWord, b' ') => (WindowState::AtWordBoundary, boundaries + 1),
            (_, b' ') => (WindowState::AtWordBoundary, boundaries),
            _ => (WindowState::InsideWord, boundaries),
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == WindowState::HitNewline
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

fn walk(bytes: &[u8], from: usize, direction: Direction) -> usize {
    let mut state = WindowState::Initial;
    let mut boundaries = 0;
    let mut cursor = from;

    loop {
        let next = match direction {
            Direction::Left if cursor > 0 => bytes[cursor - 1],
            Direction::Right if cursor < bytes.len() => bytes[cursor],
            _ => break,
        };

        (state, boundaries) = state.step(next, boundaries);
        if state.is_terminal() || boundaries >= MAX_WORD_BOUNDARIES {
            break;
        }

        match direction {
            Direction::Left => cursor -= 1,
            Direction::Right => cursor += 1,
        }
    }

    cursor
}

/// Byte range `(start, end)` of the window around `offset`.
pub fn find_window(source: &str, offset: usize) -> (usize, usize) {
    let bytes = source.as_bytes();
    let offset = offset.min(bytes.len());

    (
        walk(bytes, offset, Direction::Left),
        walk(bytes, offset, Direction::Right),
    )
}

/// The window around `offset`, trimmed of surrounding whitespace.
pub fn snippet_at(source: &str, offset: usize) -> String {
    let (start, end) = find_window(source, offset);
    source[start..end].trim().to_string()
}
