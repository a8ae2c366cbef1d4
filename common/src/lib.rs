//! # cidrsplit common
//!
//! Turns free-form text lines carrying `label:start-end` IPv4 ranges into
//! lists of CIDR networks, one per line.
//!
//! * **[`network`]**: address codec, CIDR math and the range splitter. Pure, no IO.
//! * **[`scanner`]**: byte-level line scanner isolating range tokens.
//! * **[`convert`]**: the stream-to-stream conversion built on the two above.

pub mod config;
pub mod convert;
pub mod error;
pub mod network;
pub mod scanner;
pub mod stats;
