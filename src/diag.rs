//! Warning and fatal reporting.
//!
//! Every recoverable problem goes through [`Diagnostics::warn`], which keeps
//! a record of the warning and echoes it to stderr as
//! `source: warning: message`.

use std::fmt;

use crate::colors::Colors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Where the problem was found, e.g. `board.def:PORT:type`
    pub source: String,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: warning: {}", self.source, self.message)
    }
}

pub struct Diagnostics {
    colors: Colors,
    echo: bool,
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Reporter that prints every warning to stderr.
    pub fn new(colors: Colors) -> Self {
        Self {
            colors,
            echo: true,
            warnings: Vec::new(),
        }
    }

    /// Reporter that only records warnings.
    pub fn silent() -> Self {
        Self {
            colors: Colors::new(false),
            echo: false,
            warnings: Vec::new(),
        }
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }

    pub fn warn(&mut self, source: impl Into<String>, message: impl Into<String>) {
        let warning = Warning {
            source: source.into(),
            message: message.into(),
        };
        if self.echo {
            eprintln!(
                "{}: {}warning:{} {}",
                warning.source,
                self.colors.warning,
                self.colors.reset(),
                warning.message
            );
        }
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Print `program: fatal: message`.
    pub fn fatal(&self, program: &str, message: &dyn fmt::Display) {
        eprintln!(
            "{program}: {}fatal:{} {message}",
            self.colors.fatal,
            self.colors.reset()
        );
    }
}
