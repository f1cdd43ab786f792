use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crm_core::storage::RecordId;
use crm_core::VERSION;

use crate::ui::{FormatFlag, UiFlags};

/// CRM - contacts, companies, activities and reports from the terminal
#[derive(Parser, Debug)]
#[command(name = "crm")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "CRM_CONFIG")]
    pub config: Option<String>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatFlag>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Skip the simulated backend latency
    #[arg(long, global = true)]
    pub no_latency: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn ui_flags(&self) -> UiFlags {
        UiFlags {
            json: self.json,
            format: self.format,
            no_color: self.no_color,
            ascii: self.ascii,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage contacts
    #[command(subcommand)]
    Contacts(ContactsCommand),

    /// Manage companies
    #[command(subcommand)]
    Companies(CompaniesCommand),

    /// Log and review activities
    #[command(subcommand)]
    Activities(ActivitiesCommand),

    /// Manage saved reports
    #[command(subcommand)]
    Reports(ReportsCommand),

    /// Show key metrics
    #[command(subcommand)]
    Metrics(MetricsCommand),

    /// Show metrics and recent activity
    Dashboard,

    /// Run commands interactively against one session
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by `show` commands
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: RecordId,
}

/// Arguments shared by `delete` commands
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: RecordId,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum ContactsCommand {
    /// List contacts
    List(ContactListArgs),
    /// Show one contact
    Show(ShowArgs),
    /// Add a contact
    Add(ContactFields),
    /// Edit a contact
    Edit(ContactEditArgs),
    /// Delete a contact
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ContactListArgs {
    /// Match name, email or company
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (trial, active, churned)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ContactFields {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    /// trial, active or churned
    #[arg(long)]
    pub status: Option<String>,

    /// Monthly recurring revenue
    #[arg(long)]
    pub mrr: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct ContactEditArgs {
    /// Contact ID
    #[arg(value_name = "ID")]
    pub id: RecordId,

    #[command(flatten)]
    pub fields: ContactFields,
}

#[derive(Subcommand, Debug)]
pub enum CompaniesCommand {
    /// List companies
    List(CompanyListArgs),
    /// Show one company
    Show(ShowArgs),
    /// Add a company
    Add(CompanyFields),
    /// Edit a company
    Edit(CompanyEditArgs),
    /// Delete a company
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CompanyListArgs {
    /// Match name or industry
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (trial, active, churned)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by plan (Starter, Professional, Enterprise)
    #[arg(long)]
    pub plan: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct CompanyFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub industry: Option<String>,

    #[arg(long)]
    pub employees: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    /// Starter, Professional or Enterprise
    #[arg(long)]
    pub plan: Option<String>,

    /// trial, active or churned
    #[arg(long)]
    pub status: Option<String>,

    /// Monthly recurring revenue
    #[arg(long)]
    pub mrr: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompanyEditArgs {
    /// Company ID
    #[arg(value_name = "ID")]
    pub id: RecordId,

    #[command(flatten)]
    pub fields: CompanyFields,
}

#[derive(Subcommand, Debug)]
pub enum ActivitiesCommand {
    /// List activities, newest first
    List(ActivityListArgs),
    /// Log an activity
    Add(ActivityAddArgs),
    /// Delete an activity
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ActivityListArgs {
    /// Match description
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by type (email, call, meeting)
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,
}

#[derive(Args, Debug)]
pub struct ActivityAddArgs {
    /// email, call or meeting
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Contact ID the activity belongs to
    #[arg(long, value_name = "ID")]
    pub contact: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ReportsCommand {
    /// List reports
    List(ReportListArgs),
    /// Show one report
    Show(ShowArgs),
    /// Add a report
    Add(ReportFields),
    /// Edit a report
    Edit(ReportEditArgs),
    /// Delete a report
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ReportListArgs {
    /// Match name or tags
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ReportFields {
    #[arg(long)]
    pub name: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub report_type: Option<String>,

    #[arg(long)]
    pub data_source: Option<String>,

    #[arg(long)]
    pub filters: Option<String>,

    #[arg(long)]
    pub layout: Option<String>,

    #[arg(long)]
    pub report_format: Option<String>,

    #[arg(long)]
    pub display_fields: Option<String>,

    #[arg(long)]
    pub filter_parameters: Option<String>,

    /// Linked activity ID
    #[arg(long, value_name = "ID")]
    pub activity: Option<String>,

    /// Linked company ID
    #[arg(long, value_name = "ID")]
    pub company: Option<String>,

    /// Linked contact ID
    #[arg(long, value_name = "ID")]
    pub contact: Option<String>,

    /// Linked metric ID
    #[arg(long, value_name = "ID")]
    pub metric: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReportEditArgs {
    /// Report ID
    #[arg(value_name = "ID")]
    pub id: RecordId,

    #[command(flatten)]
    pub fields: ReportFields,
}

#[derive(Subcommand, Debug)]
pub enum MetricsCommand {
    /// List metrics
    List,
}

/// Arguments for the `completions` command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["crm", "contacts", "list", "--json", "--no-latency"])
            .expect("parse should succeed");
        assert!(cli.json);
        assert!(cli.no_latency);
        assert!(matches!(
            cli.command,
            Some(Commands::Contacts(ContactsCommand::List(_)))
        ));
    }

    #[test]
    fn test_activity_type_flag() {
        let cli = Cli::try_parse_from([
            "crm",
            "activities",
            "add",
            "--type",
            "call",
            "--description",
            "Follow-up on pricing",
            "--contact",
            "2",
        ])
        .expect("parse should succeed");
        match cli.command {
            Some(Commands::Activities(ActivitiesCommand::Add(args))) => {
                assert_eq!(args.kind.as_deref(), Some("call"));
                assert_eq!(args.contact.as_deref(), Some("2"));
            }
            _ => panic!("expected activities add"),
        }
    }

    #[test]
    fn test_delete_requires_id() {
        assert!(Cli::try_parse_from(["crm", "companies", "delete"]).is_err());
    }
}
