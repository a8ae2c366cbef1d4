//! # Line Scanner
//!
//! Byte-level state machine isolating the range token of each line.
//!
//! Lines look like `Some random junk:aaa.bbb.ccc.ddd-eee.fff.ggg.hhh`. The
//! scanner sits in [`State::Garbage`] until it meets a `:`, then collects
//! digits, `.` and `-` in [`State::Range`] until the line terminator. Any
//! other byte in a token sends it back to garbage. Every terminator (`\r` or
//! `\n`) ends a line and yields a [`LineEvent`].

use crate::config::{Config, DEFAULT_MAX_LINE_LEN, LONGEST_RANGE};
use crate::error::BufferKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Outside a range token.
    Garbage,
    /// After a `:`, collecting token bytes.
    Range,
    /// A buffer overflowed; everything up to the next terminator is dropped.
    Discard(BufferKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ByteClass {
    Terminator,
    Delimiter,
    Token,
    Other,
}

fn classify(byte: u8) -> ByteClass {
    match byte {
        b'\r' | b'\n' => ByteClass::Terminator,
        b':' => ByteClass::Delimiter,
        b'0'..=b'9' | b'.' | b'-' => ByteClass::Token,
        _ => ByteClass::Other,
    }
}

/// One physical line, terminator excluded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineRecord {
    /// The whole raw line, range token included.
    pub comment: Vec<u8>,
    /// Token bytes collected after the last `:`, `None` when the line ended
    /// outside a token.
    pub token: Option<Vec<u8>>,
}

impl LineRecord {
    /// Token bytes are ASCII by construction.
    pub fn token_text(&self) -> Option<&str> {
        self.token
            .as_deref()
            .and_then(|token| std::str::from_utf8(token).ok())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineEvent {
    Line(LineRecord),
    /// The line was dropped because the named buffer overflowed.
    Overflow(BufferKind),
}

#[derive(Debug)]
pub struct LineScanner {
    state: State,
    line: Vec<u8>,
    token: Vec<u8>,
    max_line_len: usize,
    max_token_len: usize,
    /// Physical lines ended so far, a `\r\n` pair counting once.
    line_number: usize,
    after_cr: bool,
}

impl LineScanner {
    pub fn new(config: &Config) -> Self {
        Self {
            state: State::Garbage,
            line: Vec::with_capacity(config.max_line_len.min(DEFAULT_MAX_LINE_LEN)),
            token: Vec::with_capacity(config.max_token_len.min(LONGEST_RANGE.len())),
            max_line_len: config.max_line_len,
            max_token_len: config.max_token_len,
            line_number: 0,
            after_cr: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of the physical line the last event belongs to, counting from 1.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Bytes of the unfinished line, lost if the stream ends here.
    pub fn pending(&self) -> usize {
        self.line.len()
    }

    /// Feeds one byte. Returns an event whenever `byte` is a line terminator.
    pub fn push(&mut self, byte: u8) -> Option<LineEvent> {
        let class = classify(byte);
        let after_cr = std::mem::replace(&mut self.after_cr, byte == b'\r');

        if class == ByteClass::Terminator {
            if !(after_cr && byte == b'\n') {
                self.line_number += 1;
            }
            return Some(self.end_line());
        }

        if let State::Discard(_) = self.state {
            return None;
        }

        if self.line.len() == self.max_line_len {
            self.discard(BufferKind::Line);
            return None;
        }
        self.line.push(byte);

        match (self.state, class) {
            (State::Garbage, ByteClass::Delimiter) => {
                self.token.clear();
                self.state = State::Range;
            }
            (State::Garbage, _) => {}
            (State::Range, ByteClass::Token) => {
                if self.token.len() == self.max_token_len {
                    self.discard(BufferKind::Token);
                } else {
                    self.token.push(byte);
                }
            }
            // Resync: the byte stays in the comment, the token is abandoned.
            (State::Range, _) => self.state = State::Garbage,
            (State::Discard(_), _) => {}
        }

        None
    }

    fn end_line(&mut self) -> LineEvent {
        let state = std::mem::replace(&mut self.state, State::Garbage);
        let comment = std::mem::take(&mut self.line);

        match state {
            State::Garbage => LineEvent::Line(LineRecord {
                comment,
                token: None,
            }),
            State::Range => LineEvent::Line(LineRecord {
                comment,
                token: Some(std::mem::take(&mut self.token)),
            }),
            State::Discard(kind) => LineEvent::Overflow(kind),
        }
    }

    fn discard(&mut self, kind: BufferKind) {
        self.line.clear();
        self.token.clear();
        self.state = State::Discard(kind);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
