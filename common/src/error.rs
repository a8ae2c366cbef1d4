use std::net::Ipv4Addr;

use thiserror::Error;

/// Which scanner buffer ran out of room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferKind {
    Line,
    Token,
}

impl std::fmt::Display for BufferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferKind::Line => f.write_str("line"),
            BufferKind::Token => f.write_str("range token"),
        }
    }
}

/// A problem with a single input line. The line is skipped, the stream goes on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("malformed range token '{token}': {reason}")]
    MalformedToken { token: String, reason: &'static str },

    #[error("range start {start} is past its end {end}")]
    InvalidRangeOrder { start: Ipv4Addr, end: Ipv4Addr },

    #[error("{buffer} longer than {limit} bytes")]
    BufferOverflow { buffer: BufferKind, limit: usize },
}

impl RecordError {
    pub(crate) fn malformed(token: &str, reason: &'static str) -> Self {
        RecordError::MalformedToken {
            token: token.to_string(),
            reason,
        }
    }
}

/// Aborts the whole conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("stream failure: {0}")]
    Io(#[from] std::io::Error),
}
