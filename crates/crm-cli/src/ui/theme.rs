//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

use crm_core::model::{ActivityType, Status, SubscriptionPlan, Trend};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
    Info,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",   // [✓]
            (Self::Err, true) => "[\u{2717}]",  // [✗]
            (Self::Info, true) => "[\u{2139}]", // [ℹ]
            (Self::Ok, false) => "[OK]",
            (Self::Err, false) => "[ERR]",
            (Self::Info, false) => "[INFO]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Err => styles::error(),
            Self::Info => styles::info(),
        }
    }
}

/// Named styles. Callers pass them to [`styled`].
pub mod styles {
    use owo_colors::Style;

    /// Dim text (for labels, metadata)
    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn warning() -> Style {
        Style::new().yellow()
    }

    pub fn error() -> Style {
        Style::new().red()
    }

    pub fn info() -> Style {
        Style::new().cyan()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Lifecycle colors: trial amber, active green, churned red.
pub fn status_style(status: Status) -> Style {
    match status {
        Status::Trial => styles::warning(),
        Status::Active => styles::success(),
        Status::Churned => styles::error(),
    }
}

pub fn plan_style(plan: SubscriptionPlan) -> Style {
    match plan {
        SubscriptionPlan::Starter => styles::dim(),
        SubscriptionPlan::Professional => styles::info(),
        SubscriptionPlan::Enterprise => styles::bold(),
    }
}

pub fn trend_style(trend: Trend) -> Style {
    match trend {
        Trend::Up => styles::success(),
        Trend::Down => styles::error(),
        Trend::Flat => styles::dim(),
    }
}

/// Arrow shown next to a metric change.
pub fn trend_symbol(trend: Trend, unicode: bool) -> &'static str {
    match (trend, unicode) {
        (Trend::Up, true) => "\u{2191}",   // ↑
        (Trend::Down, true) => "\u{2193}", // ↓
        (Trend::Flat, true) => "\u{2192}", // →
        (Trend::Up, false) => "^",
        (Trend::Down, false) => "v",
        (Trend::Flat, false) => "-",
    }
}

pub fn activity_style(kind: ActivityType) -> Style {
    match kind {
        ActivityType::Email => styles::info(),
        ActivityType::Call => styles::success(),
        ActivityType::Meeting => styles::warning(),
    }
}

/// Spinner frames for unicode and ASCII mode.
pub fn spinner_frames(unicode: bool) -> &'static [&'static str] {
    if unicode {
        &[
            "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}",
            "\u{2827}", "\u{2807}", "\u{280F}",
        ]
    } else {
        &["|", "/", "-", "\\"]
    }
}
