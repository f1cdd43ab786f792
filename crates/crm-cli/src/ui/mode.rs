//! How record listings and receipts are written: JSON, plain or pretty.

use clap::ValueEnum;

use super::context::Terminal;

/// Value of `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatFlag {
    /// Tab-separated rows and `key=value` lines
    Plain,
    /// Bordered tables, badges and colour-coded statuses
    Pretty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Records as JSON on stdout, nothing else
    Json,
    Plain,
    Pretty,
}

impl OutputMode {
    /// `--json` beats `--format`, and an explicit `--format` beats
    /// detection. Left to detection, a real terminal gets pretty output;
    /// pipes, files and `TERM=dumb` get plain.
    pub fn resolve(json: bool, format: Option<FormatFlag>, terminal: &Terminal) -> Self {
        match (json, format) {
            (true, _) => Self::Json,
            (false, Some(FormatFlag::Plain)) => Self::Plain,
            (false, Some(FormatFlag::Pretty)) => Self::Pretty,
            (false, None) if terminal.stdout_tty && !terminal.dumb => Self::Pretty,
            (false, None) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
