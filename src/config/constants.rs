// Project-wide constants
//
// Import via `use crate::config::constants::*;`.

/// Directory under $HOME holding config and logs
pub const CONFIG_DIR_NAME: &str = ".teachterm";

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const LOG_FILE_NAME: &str = "teachterm.log";

/// Shell used when neither the config nor $SHELL names one
pub const FALLBACK_SHELL: &str = "/bin/sh";

pub const DEFAULT_TERM: &str = "xterm-256color";

/// Quiet period before the tracker re-reads the cursor line
pub const DEFAULT_DEBOUNCE_MS: u64 = 30;

/// Gap between the clear-line sequence and the template write
pub const DEFAULT_INSERT_DELAY_MS: u64 = 50;

/// Anything longer feels like the insert button is broken
pub const MAX_INSERT_DELAY_MS: u64 = 1_000;

pub const DEFAULT_SCROLLBACK: usize = 1_000;

pub const MAX_SCROLLBACK: usize = 100_000;

pub const DEFAULT_PROMPT_MARKERS: [&str; 3] = ["$ ", "# ", "% "];
