//! What the CLI knows about the terminal it writes to.
//!
//! The process is probed once, in [`Terminal::detect`]. Output decisions
//! are then plain functions of the flags and that snapshot.

use std::io::IsTerminal;

use super::mode::{FormatFlag, OutputMode};

const DEFAULT_WIDTH: usize = 80;
/// Record tables stop growing past this.
const MAX_TABLE_WIDTH: usize = 160;

/// Output flags from the command line and config.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    pub json: bool,
    pub format: Option<FormatFlag>,
    pub no_color: bool,
    pub ascii: bool,
}

/// Snapshot of the standard streams and terminal environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color_env: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdin_tty: std::io::stdin().is_terminal(),
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            columns: env_columns().or_else(tty_columns),
        }
    }

    /// Every stream redirected; nothing known about a terminal.
    pub const fn detached() -> Self {
        Self {
            stdin_tty: false,
            stdout_tty: false,
            stderr_tty: false,
            dumb: false,
            no_color_env: false,
            columns: None,
        }
    }
}

/// Resolved output settings for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub mode: OutputMode,
    /// Colour-coded statuses, plans and trends
    pub color: bool,
    pub unicode: bool,
    /// Width handed to record tables
    pub width: usize,
    pub terminal: Terminal,
}

impl UiContext {
    pub fn new(flags: UiFlags, terminal: Terminal) -> Self {
        let mode = OutputMode::resolve(flags.json, flags.format, &terminal);
        let color = mode.is_pretty()
            && terminal.stdout_tty
            && !terminal.dumb
            && !terminal.no_color_env
            && !flags.no_color;
        Self {
            mode,
            color,
            unicode: !flags.ascii,
            width: terminal
                .columns
                .unwrap_or(DEFAULT_WIDTH)
                .min(MAX_TABLE_WIDTH),
            terminal,
        }
    }

    pub fn detect(flags: UiFlags) -> Self {
        Self::new(flags, Terminal::detect())
    }

    /// Delete confirmations need a person reading stdout and typing on stdin.
    pub fn can_prompt(&self) -> bool {
        self.terminal.stdin_tty && self.terminal.stdout_tty
    }

    /// Spinners draw on stderr and only decorate pretty output.
    pub fn shows_spinner(&self) -> bool {
        self.mode.is_pretty() && self.terminal.stdout_tty && self.terminal.stderr_tty
    }
}

fn env_columns() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .trim()
        .parse()
        .ok()
        .filter(|&cols| cols > 0)
}

#[cfg(unix)]
fn tty_columns() -> Option<usize> {
    // SAFETY: winsize is plain old data; all-zero is a valid value.
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };
    // SAFETY: TIOCGWINSZ writes into `size` and reports failure via its return.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
    (rc == 0 && size.ws_col > 0).then(|| usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn tty_columns() -> Option<usize> {
    None
}
