use std::io::Cursor;

use cidrsplit_common::config::Config;
use cidrsplit_common::convert::convert;
use cidrsplit_common::network::cidr::CidrBlock;
use cidrsplit_common::stats::Stats;

pub fn run(input: &[u8]) -> anyhow::Result<(String, Stats)> {
    run_with(&Config::default(), input)
}

pub fn run_with(cfg: &Config, input: &[u8]) -> anyhow::Result<(String, Stats)> {
    let mut out: Vec<u8> = Vec::new();
    let mut stats = Stats::default();
    convert(Cursor::new(input), &mut out, cfg, &mut stats)?;
    Ok((String::from_utf8(out)?, stats))
}

/// Output lines that are not comments.
pub fn entries(output: &str) -> Vec<&str> {
    output.lines().filter(|line| !line.starts_with('#')).collect()
}

/// Checks the blocks tile `[start, end]` exactly and could not be fewer.
pub fn assert_tiles(blocks: &[CidrBlock], start: u32, end: u32) {
    assert!(!blocks.is_empty(), "no blocks for {start:#x}-{end:#x}");
    assert!(blocks.len() <= 62, "{} blocks for {start:#x}-{end:#x}", blocks.len());
    assert_eq!(blocks[0].first(), start);
    assert_eq!(blocks[blocks.len() - 1].last(), end);

    for pair in blocks.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!(
            u64::from(a.last()) + 1,
            u64::from(b.first()),
            "{a} and {b} are not contiguous"
        );

        // Two equal sized neighbours on a common boundary would have fit one block.
        let mergeable = a.prefix() == b.prefix()
            && a.prefix() > 0
            && CidrBlock::new(a.first(), a.prefix() - 1).is_some();
        assert!(!mergeable, "{a} and {b} could be merged");
    }
}
