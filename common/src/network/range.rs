//! # IPv4 Range Model
//!
//! Continuous, inclusive ranges of IPv4 addresses and their decomposition
//! into the fewest CIDR networks.

use std::net::Ipv4Addr;

use crate::error::RecordError;
use crate::network::cidr::{self, CidrBlock};

/// The most networks one range can need: two of every prefix length from
/// /1 to /31, e.g. `0.0.0.1-255.255.255.254`.
pub const MAX_BLOCKS: usize = 62;

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_addr > self.end_addr
    }

    /// Greedy CIDR decomposition, lowest network first.
    ///
    /// Yields nothing for an empty range.
    pub fn cidr_blocks(&self) -> CidrBlocks {
        let start = u32::from(self.start_addr);
        let end = u32::from(self.end_addr);
        CidrBlocks {
            cursor: (start <= end).then_some(start),
            end,
        }
    }
}

/// How a range maps onto CIDR networks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Networks {
    /// The range already was a single aligned network.
    Exact(CidrBlock),
    /// The range needed several networks, in ascending order.
    Split(Vec<CidrBlock>),
}

impl Networks {
    pub fn blocks(&self) -> &[CidrBlock] {
        match self {
            Networks::Exact(block) => std::slice::from_ref(block),
            Networks::Split(blocks) => blocks,
        }
    }
}

/// Converts `range` to the minimal ordered set of CIDR networks covering it.
pub fn to_networks(range: &Ipv4Range) -> Result<Networks, RecordError> {
    if range.is_empty() {
        return Err(RecordError::InvalidRangeOrder {
            start: range.start_addr,
            end: range.end_addr,
        });
    }

    if let Some(prefix) = cidr::is_exact_cidr(range) {
        if let Some(block) = CidrBlock::new(u32::from(range.start_addr), prefix) {
            return Ok(Networks::Exact(block));
        }
    }

    let mut blocks = Vec::with_capacity(MAX_BLOCKS);
    blocks.extend(range.cidr_blocks());
    Ok(Networks::Split(blocks))
}

/// Iterator behind [`Ipv4Range::cidr_blocks`].
///
/// Each step emits the largest aligned block starting at the cursor that
/// does not pass the range end, then moves the cursor past it.
#[derive(Clone, Debug)]
pub struct CidrBlocks {
    cursor: Option<u32>,
    end: u32,
}

impl Iterator for CidrBlocks {
    type Item = CidrBlock;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor?;

        let mut prefix: u8 = 32;
        while prefix > 0 {
            let host_bits = !cidr::mask_from_length(prefix - 1);
            if cursor & host_bits != 0 || cursor | host_bits > self.end {
                break;
            }
            prefix -= 1;
        }

        let block = CidrBlock::new(cursor, prefix)?;

        // Ends on wrapping past 255.255.255.255 as well as on reaching the end.
        self.cursor = block.last().checked_add(1).filter(|next| *next <= self.end);

        Some(block)
    }
}

impl std::iter::FusedIterator for CidrBlocks {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
