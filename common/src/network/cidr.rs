//! # CIDR Math
//!
//! Netmask helpers and the [`CidrBlock`] type emitted by the range splitter.

use std::fmt;
use std::net::Ipv4Addr;

use crate::network::range::Ipv4Range;

/// An aligned IPv4 network: `base/prefix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CidrBlock {
    base: u32,
    prefix: u8,
}

impl CidrBlock {
    /// Returns `None` when `prefix > 32` or `base` has host bits set.
    pub fn new(base: u32, prefix: u8) -> Option<Self> {
        if prefix > 32 || base & !mask_from_length(prefix) != 0 {
            return None;
        }
        Some(Self { base, prefix })
    }

    pub fn base(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn first(&self) -> u32 {
        self.base
    }

    pub fn last(&self) -> u32 {
        self.base | !mask_from_length(self.prefix)
    }

    /// The inclusive address range covered by this block.
    pub fn range(&self) -> Ipv4Range {
        Ipv4Range::new(Ipv4Addr::from(self.first()), Ipv4Addr::from(self.last()))
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base(), self.prefix)
    }
}

/// Length of a netmask, or `None` when the mask is not contiguous.
///
/// Bits are scanned from bit 31 down: once a 0 has been seen, any later 1
/// makes the mask discontiguous.
pub fn mask_length(mask: u32) -> Option<u8> {
    let mut found_zero = false;
    let mut len: u8 = 0;

    for bit in (0..32).rev() {
        if mask & (1 << bit) != 0 {
            if found_zero {
                return None;
            }
            len += 1;
        } else {
            found_zero = true;
        }
    }

    Some(len)
}

/// Netmask with the top `length` bits set.
///
/// # Panics
///
/// When `length > 32`.
pub fn mask_from_length(length: u8) -> u32 {
    assert!(length <= 32, "netmask length {length} out of range");
    u32::MAX.checked_shl(32 - u32::from(length)).unwrap_or(0)
}

/// Prefix length when `range` is exactly one aligned CIDR network.
///
/// For such a range `end - start` is `size - 1`, all ones in the host part,
/// so its complement is the netmask. The start must also carry no host bits.
pub fn is_exact_cidr(range: &Ipv4Range) -> Option<u8> {
    let start = u32::from(range.start_addr);
    let end = u32::from(range.end_addr);

    let candidate = !end.wrapping_sub(start);
    let len = mask_length(candidate)?;

    (start & !candidate == 0).then_some(len)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
