//! CRM CLI - contacts, companies, activities and reports from the terminal
//!
//! This is the command-line interface for the CRM record layer. Records
//! live in mock stores seeded from fixtures, for the life of one process
//! (or one `crm shell` session).

mod app;
mod cli;
mod commands;
mod config;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crm_core::VERSION;

use crate::app::{AppContext, Session};
use crate::cli::{Cli, Commands};
use crate::commands::{misc, shell};
use crate::config::{load_config, resolve_config_path, CrmConfig};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        let ui_ctx = UiContext::detect(cli.ui_flags());
        report_error(&ui_ctx, &e);
        std::process::exit(1);
    }
}

/// Print an error, with a hint when one is known.
pub fn report_error(ui_ctx: &UiContext, error: &anyhow::Error) {
    let error_msg = format!("{}", error);
    let (message, hint) = match error_msg.find("\nHint:") {
        Some(idx) => (
            error_msg[..idx].to_string(),
            Some(error_msg[idx + 1..].to_string()),
        ),
        None => (error_msg.clone(), extract_error_hint(&error_msg)),
    };
    print_error(ui_ctx, &message, hint.as_deref());
}

/// Contextual hints for common error messages.
fn extract_error_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("not found") {
        let groups = [
            ("contact", "contacts"),
            ("company", "companies"),
            ("activity", "activities"),
            ("report", "reports"),
            ("metric", "metrics"),
        ];
        for (noun, group) in groups {
            if error_lower.contains(noun) {
                return Some(format!("Hint: Run `crm {} list` to see valid IDs.", group));
            }
        }
    }

    if error_lower.contains("validation failed") {
        return Some("Hint: Run the command with --help to see every field.".to_string());
    }

    if error_lower.contains("failed to parse config") {
        return Some("Hint: Check the TOML syntax, or remove the file to use defaults.".to_string());
    }

    None
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let command = match &cli.command {
        Some(command) => command,
        None => {
            print_quickstart();
            return Ok(());
        }
    };
    if let Commands::Completions(args) = command {
        return misc::handle_completions(args);
    }

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = load_config(&config_path)?;
    init_logging(&config);
    tracing::debug!(path = %config_path.display(), "loaded config");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let session = Session::open(config, cli.no_latency)?;
    runtime.block_on(async {
        match command {
            Commands::Shell => shell::run(&session, cli).await,
            command => {
                let ctx = AppContext::new(cli, &session);
                commands::execute(&ctx, command).await
            }
        }
    })
}

/// Logs go to stderr. `CRM_LOG` wins over the config filter.
fn init_logging(config: &CrmConfig) {
    let filter = EnvFilter::try_from_env("CRM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_quickstart() {
    println!("CRM v{}", VERSION);
    println!("\nQuickstart:");
    println!("  crm contacts list");
    println!("  crm companies add --name Acme --industry Technology --employees 40 \\");
    println!("      --website acme.io --plan Starter --mrr 0");
    println!("  crm activities add --type call --description \"Intro call\" --contact 1");
    println!("  crm dashboard");
    println!("  crm shell");
    println!("\nRun `crm --help` for full usage.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_missing_contact() {
        let hint = extract_error_hint("Not found: Contact with ID 9 not found");
        assert_eq!(
            hint.as_deref(),
            Some("Hint: Run `crm contacts list` to see valid IDs.")
        );
    }

    #[test]
    fn test_hint_for_missing_company() {
        let hint = extract_error_hint("Not found: Company with ID 9 not found");
        assert_eq!(
            hint.as_deref(),
            Some("Hint: Run `crm companies list` to see valid IDs.")
        );
    }

    #[test]
    fn test_no_hint_for_unknown_errors() {
        assert!(extract_error_hint("Backend error: boom").is_none());
    }
}
