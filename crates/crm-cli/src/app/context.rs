//! Application context for the CRM CLI.
//!
//! A [`Session`] owns the repositories for the life of the process, so
//! every command in a `crm shell` run sees the same records. An
//! [`AppContext`] pairs the session with the flags of one command.

use std::sync::Arc;

use crm_core::{Notifier, Repositories};

use crate::cli::Cli;
use crate::config::CrmConfig;
use crate::ui::UiContext;

use super::notifier::ConsoleNotifier;

/// State that outlives a single command.
pub struct Session {
    config: CrmConfig,
    repos: Repositories,
    notifier: Arc<ConsoleNotifier>,
}

impl Session {
    /// Mock-backed session. Latency follows the config unless
    /// `--no-latency` was passed.
    pub fn open(config: CrmConfig, no_latency: bool) -> anyhow::Result<Self> {
        let simulate_latency = config.mock.simulate_latency && !no_latency;
        let repos = Repositories::mock(simulate_latency)?;
        tracing::debug!(simulate_latency, "opened mock session");
        Ok(Self {
            config,
            repos,
            notifier: Arc::new(ConsoleNotifier::new()),
        })
    }
}

/// Application context that bundles CLI args with the session.
pub struct AppContext<'a> {
    cli: &'a Cli,
    session: &'a Session,
    ui: UiContext,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli, session: &'a Session) -> Self {
        let mut flags = cli.ui_flags();
        flags.no_color |= !session.config.ui.color;
        let ui = UiContext::detect(flags);
        Self { cli, session, ui }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn repos(&self) -> &Repositories {
        &self.session.repos
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.session.notifier.as_ref()
    }

    /// Print notices raised while the command ran.
    pub fn flush_notices(&self) {
        self.session.notifier.flush(&self.ui, self.quiet());
    }
}
