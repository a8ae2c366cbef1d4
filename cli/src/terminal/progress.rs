use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

static PROGRESS: OnceLock<ProgressBar> = OnceLock::new();

/// Starts the input progress bar, measured in bytes when `len` is known.
pub fn start(len: Option<u64>) -> anyhow::Result<&'static ProgressBar> {
    let (pb, template) = match len {
        Some(len) => (
            ProgressBar::new(len),
            "{spinner:.blue} {msg} [{bar:32.green/bright_black}] {bytes}/{total_bytes}",
        ),
        None => (ProgressBar::new_spinner(), "{spinner:.blue} {msg} {bytes}"),
    };

    let style = ProgressStyle::with_template(template)?
        .tick_strings(TICK_STRINGS)
        .progress_chars("█▓░");

    pb.set_style(style);
    pb.set_message("Converting");
    pb.enable_steady_tick(TICK);

    Ok(PROGRESS.get_or_init(|| pb))
}

pub fn finish() {
    if let Some(pb) = PROGRESS.get() {
        pb.finish_and_clear();
    }
}

#[cfg(test)]
pub fn is_running() -> bool {
    PROGRESS.get().is_some_and(|pb| !pb.is_finished())
}

/// Log sink that keeps log lines from tearing the progress bar.
pub struct ProgressWriter;

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match PROGRESS.get() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| io::stderr().write_all(buf))?,
            _ => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
