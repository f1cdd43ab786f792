//! Prints core notices on stderr after each command.

use crm_core::notify::NoticeLog;
use crm_core::{Notice, NoticeLevel, Notifier};

use crate::ui::{badge, Badge, OutputMode, UiContext};

/// Buffers notices while a command runs; [`ConsoleNotifier::flush`] prints
/// them once its output is settled.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    log: NoticeLog,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print and clear pending notices. Quiet mode keeps errors only.
    pub fn flush(&self, ui: &UiContext, quiet: bool) {
        for notice in self.log.drain() {
            if quiet && notice.level != NoticeLevel::Error {
                continue;
            }
            eprintln!("{}", render_notice(ui, &notice));
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.log.notify(level, message);
    }
}

pub fn render_notice(ui: &UiContext, notice: &Notice) -> String {
    match ui.mode {
        OutputMode::Pretty => {
            let kind = match notice.level {
                NoticeLevel::Success => Badge::Ok,
                NoticeLevel::Error => Badge::Err,
                NoticeLevel::Info => Badge::Info,
            };
            badge(ui, kind, &notice.message)
        }
        OutputMode::Plain => format!("{}={}", notice.level, notice.message),
        OutputMode::Json => serde_json::to_string(notice)
            .unwrap_or_else(|_| format!("{}={}", notice.level, notice.message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Terminal, UiFlags};

    fn ui(mode: OutputMode) -> UiContext {
        UiContext {
            mode,
            unicode: false,
            ..UiContext::new(UiFlags::default(), Terminal::detached())
        }
    }

    fn notice(level: NoticeLevel, message: &str) -> Notice {
        Notice {
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_render_plain() {
        let line = render_notice(
            &ui(OutputMode::Plain),
            &notice(NoticeLevel::Error, "Name: required"),
        );
        assert_eq!(line, "error=Name: required");
    }

    #[test]
    fn test_render_pretty_uses_badges() {
        let line = render_notice(
            &ui(OutputMode::Pretty),
            &notice(NoticeLevel::Success, "Contact created successfully"),
        );
        assert_eq!(line, "[OK] Contact created successfully");
    }

    #[test]
    fn test_render_json() {
        let line = render_notice(
            &ui(OutputMode::Json),
            &notice(NoticeLevel::Info, "Nothing to do"),
        );
        assert_eq!(line, r#"{"level":"info","message":"Nothing to do"}"#);
    }

    #[test]
    fn test_flush_drains() {
        let notifier = ConsoleNotifier::new();
        notifier.success("Company updated successfully");
        notifier.flush(&ui(OutputMode::Plain), true);
        notifier.flush(&ui(OutputMode::Plain), false);
        assert!(notifier.log.notices().is_empty());
    }
}
