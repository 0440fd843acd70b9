use serde::{Deserialize, Serialize};

pub const DEFAULT_LOOKAHEAD_LINES: usize = 3;

/// Tunables shared by the scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Non-comment lines inspected after a signature's parameter list closes,
    /// looking for a result list wrapped onto the next line.
    #[serde(default = "default_lookahead_lines")]
    pub lookahead_lines: usize,
}

fn default_lookahead_lines() -> usize {
    DEFAULT_LOOKAHEAD_LINES
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            lookahead_lines: DEFAULT_LOOKAHEAD_LINES,
        }
    }
}
