/// Longest textual range the scanner has to hold.
pub const LONGEST_RANGE: &str = "xxx.xxx.xxx.xxx-xxx.xxx.xxx.xxx";

pub const DEFAULT_MAX_LINE_LEN: usize = 1023;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Bytes a line may hold before its terminator.
    ///
    /// Longer lines are dropped as a whole and reported as a buffer overflow.
    pub max_line_len: usize,
    /// Bytes a range token may hold, sized for [`LONGEST_RANGE`] by default.
    pub max_token_len: usize,
    /// Writes each matched source line back as a `# ` comment before its networks.
    pub emit_comments: bool,
    /// Also writes lines without a range token as comments.
    pub emit_garbage: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            max_token_len: LONGEST_RANGE.len(),
            emit_comments: true,
            emit_garbage: false,
        }
    }
}
