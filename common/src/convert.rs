//! # Range Conversion
//!
//! Reads `label:start-end` lines from a byte stream and writes, for each:
//! * the source line as a `# ` comment,
//! * then either the single address or one `addr/len` network per line.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{BufferKind, ConvertError, RecordError};
use crate::network::address::parse_address;
use crate::network::range::{self, Ipv4Range, Networks};
use crate::scanner::{LineEvent, LineRecord, LineScanner};
use crate::stats::Stats;

/// What a range token turned into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Conversion<'a> {
    /// Both ends were textually identical, or there was only one address.
    Single(&'a str),
    Networks(Networks),
}

/// Converts one `start-end` (or bare `addr`) token.
pub fn convert_token(token: &str) -> Result<Conversion<'_>, RecordError> {
    if token.is_empty() {
        return Err(RecordError::malformed(token, "empty range"));
    }

    let Some((first, second)) = token.split_once('-') else {
        parse_address(token)?;
        return Ok(Conversion::Single(token));
    };

    if second.contains('-') {
        return Err(RecordError::malformed(token, "more than one '-'"));
    }

    if first == second {
        parse_address(first)?;
        return Ok(Conversion::Single(first));
    }

    let start = parse_address(first)?;
    let end = parse_address(second)?;
    let networks = range::to_networks(&Ipv4Range::new(start.into(), end.into()))?;

    Ok(Conversion::Networks(networks))
}

/// Runs the whole conversion from `input` to `output`.
///
/// Bad lines are skipped and counted in `stats`; only stream failures abort.
pub fn convert<R, W>(
    mut input: R,
    mut output: W,
    cfg: &Config,
    stats: &mut Stats,
) -> Result<(), ConvertError>
where
    R: BufRead,
    W: Write,
{
    let mut scanner = LineScanner::new(cfg);

    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        for &byte in buf {
            if let Some(event) = scanner.push(byte) {
                stats.lines += 1;
                let line = scanner.line_number();
                handle_event(event, line, &mut output, cfg, stats)?;
            }
        }

        let consumed = buf.len();
        input.consume(consumed);
    }

    if scanner.pending() > 0 {
        debug!(
            "Dropping {} bytes after the last line terminator",
            scanner.pending()
        );
    }

    output.flush()?;
    Ok(())
}

fn handle_event<W: Write>(
    event: LineEvent,
    line: usize,
    output: &mut W,
    cfg: &Config,
    stats: &mut Stats,
) -> Result<(), ConvertError> {
    let record: LineRecord = match event {
        LineEvent::Line(record) => record,
        LineEvent::Overflow(buffer) => {
            let limit = match buffer {
                BufferKind::Line => cfg.max_line_len,
                BufferKind::Token => cfg.max_token_len,
            };
            skip(stats, line, RecordError::BufferOverflow { buffer, limit });
            return Ok(());
        }
    };

    let Some(token) = record.token_text() else {
        // The `\n` of a `\r\n` pair ends an empty line here.
        if cfg.emit_garbage && !record.comment.is_empty() {
            write_comment(output, &record.comment)?;
        }
        return Ok(());
    };

    if cfg.emit_comments && !record.comment.is_empty() {
        write_comment(output, &record.comment)?;
    }

    match convert_token(token) {
        Ok(Conversion::Single(addr)) => {
            writeln!(output, "{addr}")?;
            stats.single_addresses += 1;
        }
        Ok(Conversion::Networks(networks)) => {
            for block in networks.blocks() {
                writeln!(output, "{block}")?;
            }
            match networks {
                Networks::Exact(_) => stats.networks += 1,
                Networks::Split(blocks) => {
                    debug!("Split {token} into {} networks", blocks.len());
                    stats.complex_ranges += 1;
                }
            }
        }
        Err(err) => skip(stats, line, err),
    }

    Ok(())
}

fn skip(stats: &mut Stats, line: usize, err: RecordError) {
    stats.skipped += 1;
    warn!("Skipping line {line}: {err}");
}

/// Copies the raw line bytes, whatever their encoding.
fn write_comment<W: Write>(output: &mut W, comment: &[u8]) -> std::io::Result<()> {
    output.write_all(b"# ")?;
    output.write_all(comment)?;
    output.write_all(b"\n")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
