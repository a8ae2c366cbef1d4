//! # Address Codec
//!
//! Conversion between dotted-decimal text and the `u32` form the CIDR math
//! works on. Octet 0 is the most significant byte.
//!
//! Parsing is deliberately non-validating. Each field is read the way C's
//! `atoi` reads it: leading decimal digits only, nothing at all reads as `0`,
//! and large values wrap in `u32` arithmetic. Fields are then shifted into
//! place and OR-ed together, so a field of 256 or more spills into the
//! neighbouring octet instead of being rejected.

use std::net::Ipv4Addr;

use crate::error::RecordError;

/// Parses `a.b.c.d` into its `u32` value.
///
/// The only structural check is the field count: anything other than exactly
/// four `.`-separated fields is a [`RecordError::MalformedToken`].
pub fn parse_address(text: &str) -> Result<u32, RecordError> {
    let mut fields = [0u32; 4];
    let mut count = 0;

    for field in text.split('.') {
        if count == fields.len() {
            return Err(RecordError::malformed(text, "more than four address fields"));
        }
        fields[count] = field_value(field);
        count += 1;
    }

    if count != fields.len() {
        return Err(RecordError::malformed(text, "fewer than four address fields"));
    }

    Ok((fields[0] << 24) | (fields[1] << 16) | (fields[2] << 8) | fields[3])
}

/// Formats `addr` back to dotted-decimal.
pub fn format_address(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

fn field_value(field: &str) -> u32 {
    field
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(u32::from(digit - b'0'))
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
