use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use colored::*;
use tracing::info;

use crate::commands::CommandLine;
use crate::terminal::{colors, print, progress};
use cidrsplit_common::{config::Config, stats::Stats};

const STDIO: &str = "-";

pub fn convert(commands: &CommandLine, cfg: &Config) -> anyhow::Result<Stats> {
    let input = open_input(&commands.input, commands.quiet == 0)?;
    let output = open_output(&commands.output).inspect_err(|_| progress::finish())?;

    let mut stats = Stats::default();
    let result = cidrsplit_common::convert::convert(input, output, cfg, &mut stats);
    progress::finish();

    result.with_context(|| {
        format!(
            "failed converting {} into {}",
            commands.input.display(),
            commands.output.display()
        )
    })?;

    Ok(stats)
}

fn open_input(path: &Path, show_progress: bool) -> anyhow::Result<Box<dyn BufRead>> {
    if path == Path::new(STDIO) {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;

    if !show_progress {
        return Ok(Box::new(BufReader::new(file)));
    }

    let len = file.metadata().ok().map(|meta| meta.len());
    let bar = progress::start(len)?;
    Ok(Box::new(BufReader::new(bar.clone().wrap_read(file))))
}

fn open_output(path: &Path) -> anyhow::Result<Box<dyn Write>> {
    if path == Path::new(STDIO) {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }

    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

pub fn report(stats: &Stats, q_level: u8) {
    if q_level > 0 {
        return;
    }

    print::header("conversion summary", q_level);

    let rows: [(&str, usize); 5] = [
        ("Lines", stats.lines),
        ("Single addresses", stats.single_addresses),
        ("CIDR networks", stats.networks),
        ("Complex ranges", stats.complex_ranges),
        ("Skipped", stats.skipped),
    ];

    let key_width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    print::GLOBAL_KEY_WIDTH.set(key_width);

    for (key, value) in rows {
        let value: ColoredString = if key == "Skipped" && value > 0 {
            value.to_string().color(colors::WARNING)
        } else {
            value.to_string().color(colors::ACCENT)
        };
        print::aligned_line(key, value);
    }

    print::fat_separator();
    print::centerln(&format!(
        "{}",
        format!("{} lines converted", stats.converted()).bold().green()
    ));

    info!(
        "Parsed {} lines, of which {} defined a single IP address, {} defined a CIDR network and {} defined a more complex range.",
        stats.lines, stats.single_addresses, stats.networks, stats.complex_ranges
    );
}
