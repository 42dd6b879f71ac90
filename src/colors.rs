use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub fatal: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                fatal: "\x1b[1;31m", // Bold red
                warning: "\x1b[33m", // Yellow
                success: "\x1b[32m", // Green
                enabled: true,
            }
        } else {
            Self {
                fatal: "",
                warning: "",
                success: "",
                enabled: false,
            }
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }
}

/// Diagnostics go to stderr, so that is the stream checked for a terminal.
pub fn should_use_colors(force_color: bool, no_color: bool) -> bool {
    // Priority: --color > --no-color > NO_COLOR env > TTY detection
    if force_color {
        return true;
    }
    if no_color {
        return false;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    io::stderr().is_terminal()
}
