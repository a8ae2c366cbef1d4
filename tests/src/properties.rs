use std::net::Ipv4Addr;

use cidrsplit_common::network::address::{format_address, parse_address};
use cidrsplit_common::network::cidr::{CidrBlock, mask_from_length, mask_length};
use cidrsplit_common::network::range::{Ipv4Range, Networks, to_networks};
use pnet::ipnetwork::Ipv4Network;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::utils::assert_tiles;

const SEED: u64 = 0x00C1_DA5E;
const ROUNDS: usize = 2_000;

fn blocks(start: u32, end: u32) -> Vec<CidrBlock> {
    let range = Ipv4Range::new(Ipv4Addr::from(start), Ipv4Addr::from(end));
    to_networks(&range).unwrap().blocks().to_vec()
}

fn assert_pnet_agrees(block: &CidrBlock) {
    let net = Ipv4Network::new(block.base(), block.prefix()).unwrap();
    assert_eq!(net.network(), block.base(), "{block} is not aligned");
    assert_eq!(u32::from(net.broadcast()), block.last(), "{block} has the wrong end");
}

#[test]
fn random_ranges_are_tiled_minimally() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..ROUNDS {
        let a: u32 = rng.random();
        let b: u32 = rng.random();
        let (start, end) = (a.min(b), a.max(b));

        let blocks = blocks(start, end);
        assert_tiles(&blocks, start, end);
        blocks.iter().for_each(assert_pnet_agrees);
    }
}

#[test]
fn random_small_ranges_are_tiled_minimally() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);

    for _ in 0..ROUNDS {
        let start: u32 = rng.random();
        let end = start.saturating_add(rng.random_range(0..=1024));

        let blocks = blocks(start, end);
        assert_tiles(&blocks, start, end);
        blocks.iter().for_each(assert_pnet_agrees);
    }
}

#[test]
fn ranges_touching_the_top_address() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);

    for _ in 0..ROUNDS {
        let start: u32 = rng.random();
        let blocks = blocks(start, u32::MAX);
        assert_tiles(&blocks, start, u32::MAX);
    }

    assert_tiles(&blocks(0, u32::MAX), 0, u32::MAX);
    assert_tiles(&blocks(u32::MAX, u32::MAX), u32::MAX, u32::MAX);
}

#[test]
fn aligned_ranges_are_exact() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);

    for _ in 0..ROUNDS {
        let prefix: u8 = rng.random_range(0..=32);
        let base = rng.random::<u32>() & mask_from_length(prefix);
        let block = CidrBlock::new(base, prefix).unwrap();

        let networks = to_networks(&block.range()).unwrap();
        assert_eq!(networks, Networks::Exact(block));
    }
}

#[test]
fn mask_length_matches_contiguity() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);

    for _ in 0..ROUNDS {
        let mask: u32 = rng.random();
        let contiguous = mask.leading_ones() + mask.trailing_zeros() == 32;
        let expected = contiguous.then(|| mask.leading_ones() as u8);
        assert_eq!(mask_length(mask), expected, "mask {mask:#034b}");
    }
}

#[test]
fn well_formed_addresses_round_trip() {
    let mut rng = StdRng::seed_from_u64(SEED + 5);

    for _ in 0..ROUNDS {
        let octets: [u8; 4] = rng.random();
        let text = Ipv4Addr::from(octets).to_string();
        assert_eq!(format_address(parse_address(&text).unwrap()), text);
    }
}
