pub mod convert;

use std::path::PathBuf;

use cidrsplit_common::config::{Config, DEFAULT_MAX_LINE_LEN};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "cidrsplit")]
#[command(version)]
#[command(about = "Turns IPv4 address ranges found in text into CIDR networks.")]
pub struct CommandLine {
    /// File holding `label:start-end` lines, `-` for stdin
    pub input: PathBuf,

    /// File receiving the networks, `-` for stdout
    pub output: PathBuf,

    /// Do not copy matched lines to the output as `#` comments
    #[arg(long)]
    pub no_comments: bool,

    /// Also copy lines without a range to the output as `#` comments
    #[arg(long)]
    pub keep_garbage: bool,

    /// Longest accepted input line in bytes, longer lines are skipped
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line_length: usize,

    /// Less output, repeat to only keep errors
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,

    /// More logging, repeat for trace level
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            max_line_len: self.max_line_length,
            emit_comments: !self.no_comments,
            emit_garbage: self.keep_garbage,
            ..Config::default()
        }
    }
}
