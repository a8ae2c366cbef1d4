use cidrsplit_common::config::Config;

use crate::utils::{entries, run, run_with};

#[test]
fn single_address_range() {
    let (out, stats) = run(b"junk text:10.0.0.0-10.0.0.0\n").unwrap();
    assert_eq!(out, "# junk text:10.0.0.0-10.0.0.0\n10.0.0.0\n");
    assert_eq!(stats.single_addresses, 1);
}

#[test]
fn exact_network_with_windows_line_ending() {
    let (out, stats) = run(b"foo:192.168.1.0-192.168.1.255\r\n").unwrap();
    assert_eq!(out, "# foo:192.168.1.0-192.168.1.255\n192.168.1.0/24\n");
    assert_eq!(stats.lines, 2);
    assert_eq!(stats.networks, 1);
}

#[test]
fn aligned_range_is_one_network() {
    let (out, _) = run(b"x:10.0.0.0-10.0.0.3\n").unwrap();
    assert_eq!(entries(&out), ["10.0.0.0/30"]);
}

#[test]
fn unaligned_range_is_split() {
    let (out, stats) = run(b"bar:192.168.1.1-192.168.1.5\n").unwrap();
    assert_eq!(
        entries(&out),
        ["192.168.1.1/32", "192.168.1.2/31", "192.168.1.4/31"]
    );
    assert_eq!(stats.complex_ranges, 1);

    let (out, _) = run(b"x:10.0.0.0-10.0.0.5\n").unwrap();
    assert_eq!(entries(&out), ["10.0.0.0/30", "10.0.0.4/31"]);
}

#[test]
fn line_without_delimiter_produces_nothing() {
    let (out, stats) = run(b"just some text\nmore text with 1.2.3.4-1.2.3.5\n").unwrap();
    assert_eq!(out, "");
    assert_eq!(stats.lines, 2);
    assert_eq!(stats.converted(), 0);
}

#[test]
fn unterminated_last_line_is_dropped() {
    let (out, stats) = run(b"a:1.1.1.1-1.1.1.1\nb:2.2.2.2-2.2.2.3").unwrap();
    assert_eq!(out, "# a:1.1.1.1-1.1.1.1\n1.1.1.1\n");
    assert_eq!(stats.lines, 1);
}

#[test]
fn mixed_file() {
    let input = b"Some random junk:62.4.0.0-62.4.255.255\r\n\
                  header without range\r\n\
                  Other junk:1.2.3.4-1.2.3.4\r\n\
                  Broken:1.2.3-1.2.3.9\r\n\
                  Reversed:9.9.9.9-1.1.1.1\r\n\
                  Tail:80.0.0.1-80.0.0.6\r\n";
    let (out, stats) = run(input).unwrap();

    assert_eq!(
        out,
        "# Some random junk:62.4.0.0-62.4.255.255\n\
         62.4.0.0/16\n\
         # Other junk:1.2.3.4-1.2.3.4\n\
         1.2.3.4\n\
         # Broken:1.2.3-1.2.3.9\n\
         # Reversed:9.9.9.9-1.1.1.1\n\
         # Tail:80.0.0.1-80.0.0.6\n\
         80.0.0.1/32\n\
         80.0.0.2/31\n\
         80.0.0.4/31\n\
         80.0.0.6/32\n"
    );
    assert_eq!(stats.lines, 12);
    assert_eq!(stats.single_addresses, 1);
    assert_eq!(stats.networks, 1);
    assert_eq!(stats.complex_ranges, 1);
    assert_eq!(stats.skipped, 2);
}

#[test]
fn trailing_noise_loses_the_token() {
    let (out, _) = run(b"x:10.0.0.0-10.0.0.3 # note\n").unwrap();
    assert_eq!(out, "");
}

#[test]
fn whole_address_space() {
    let (out, _) = run(b"all:0.0.0.0-255.255.255.255\n").unwrap();
    assert_eq!(entries(&out), ["0.0.0.0/0"]);

    let (out, _) = run(b"top:255.255.255.254-255.255.255.255\n").unwrap();
    assert_eq!(entries(&out), ["255.255.255.254/31"]);
}

#[test]
fn non_validating_octets_are_kept() {
    // 0.0.0.256 reads as 0.0.1.0, which makes the range a /24 plus one host.
    let (out, _) = run(b"x:0.0.0.0-0.0.0.256\n").unwrap();
    assert_eq!(entries(&out), ["0.0.0.0/24", "0.0.1.0/32"]);
}

#[test]
fn options_shape_the_output() {
    let cfg = Config {
        emit_comments: false,
        emit_garbage: true,
        ..Config::default()
    };
    let (out, _) = run_with(&cfg, b"title\nx:10.0.0.0-10.0.0.1\n").unwrap();
    assert_eq!(out, "# title\n10.0.0.0/31\n");
}
