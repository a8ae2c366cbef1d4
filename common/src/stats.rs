/// Counters gathered while converting a stream.
///
/// Purely diagnostic: nothing in the conversion reads them back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Every line terminator consumed, so a `\r\n` pair counts twice.
    pub lines: usize,
    pub single_addresses: usize,
    /// Ranges that already were one CIDR network.
    pub networks: usize,
    /// Ranges that had to be split in several networks.
    pub complex_ranges: usize,
    /// Lines dropped because of a [`crate::error::RecordError`].
    pub skipped: usize,
}

impl Stats {
    /// Lines which produced at least one output entry.
    pub fn converted(&self) -> usize {
        self.single_addresses + self.networks + self.complex_ranges
    }
}
