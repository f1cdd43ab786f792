//! UI primitives for the CRM CLI.
//!
//! - **Context**: terminal snapshot and the settings derived from it
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badges, status colors, symbols
//! - **Render**: tables, headers, receipts, hints
//! - **Progress**: spinner around pending calls
//! - **Format**: string utilities (truncate, dates)

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::{Terminal, UiContext, UiFlags};
pub use mode::{FormatFlag, OutputMode};
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print, print_error, print_json, receipt,
    simple_table, table, Column,
};

pub use progress::with_spinner;
