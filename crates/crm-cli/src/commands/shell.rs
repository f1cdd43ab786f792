//! `crm shell`: one session, many commands.
//!
//! Each input line is parsed with the same clap definition as the command
//! line. Records changed by one line are visible to the next.

use std::io::{IsTerminal, Write};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{AppContext, Session};
use crate::cli::{Cli, Commands};

const PROMPT: &str = "crm> ";

pub async fn run(session: &Session, base: &Cli) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    if interactive && !base.quiet {
        eprintln!("Type a command (e.g. `contacts list`), `help`, or `exit`.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            eprint!("{}", PROMPT);
            let _ = std::io::stderr().flush();
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let tokens = match tokenize(&line) {
            Ok(tokens) => tokens,
            Err(message) => {
                eprintln!("error={}", message);
                continue;
            }
        };
        match tokens.first().map(String::as_str) {
            None => continue,
            Some("exit") | Some("quit") => break,
            Some(_) => {}
        }

        let mut cli = match Cli::try_parse_from(std::iter::once("crm".to_string()).chain(tokens))
        {
            Ok(cli) => cli,
            Err(err) => {
                // Covers --help and --version too
                let _ = err.print();
                continue;
            }
        };
        inherit_flags(&mut cli, base);

        let command = match &cli.command {
            Some(Commands::Shell) => {
                eprintln!("error=Already in a shell");
                continue;
            }
            Some(command) => command,
            None => continue,
        };
        let ctx = AppContext::new(&cli, session);
        if let Err(err) = super::execute(&ctx, command).await {
            crate::report_error(ctx.ui(), &err);
        }
    }
    Ok(())
}

/// Flags given to `crm shell` apply to every line.
fn inherit_flags(cli: &mut Cli, base: &Cli) {
    cli.json |= base.json;
    cli.no_color |= base.no_color;
    cli.ascii |= base.ascii;
    cli.quiet |= base.quiet;
    if cli.format.is_none() {
        cli.format = base.format;
    }
}

/// Split a line into words. Single quotes are literal; double quotes allow
/// backslash escapes; a backslash outside quotes escapes the next char.
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err("Unclosed single quote".to_string()),
                    }
                }
            }
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c) => current.push(c),
                            None => return Err("Unclosed double quote".to_string()),
                        },
                        Some(c) => current.push(c),
                        None => return Err("Unclosed double quote".to_string()),
                    }
                }
            }
            '\\' => {
                in_token = true;
                if let Some(c) = chars.next() {
                    current.push(c);
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
