use crm_core::forms::{ContactDraft, Form};
use crm_core::model::{Contact, Status};
use crm_core::views::{contact_status_counts, ContactQuery};

use crate::app::AppContext;
use crate::cli::{ContactFields, ContactListArgs, ContactsCommand};
use crate::output::{contact_details, contact_row, record_json, tally_line, CONTACT_COLUMNS};
use crate::ui::{blank_line, header, hint, print, print_json, table};

use super::records;

pub async fn handle(ctx: &AppContext<'_>, command: &ContactsCommand) -> anyhow::Result<()> {
    let repo = ctx.repos().contacts.as_ref();
    match command {
        ContactsCommand::List(args) => handle_list(ctx, args).await,
        ContactsCommand::Show(args) => {
            let contact = records::fetch(ctx, repo, args.id).await?;
            show(ctx, "contact", &contact)
        }
        ContactsCommand::Add(fields) => {
            let form = Form::<ContactDraft>::default();
            let contact = records::save(ctx, form, field_values(fields), repo).await?;
            show(ctx, "contact added", &contact)
        }
        ContactsCommand::Edit(args) => {
            let existing = records::fetch(ctx, repo, args.id).await?;
            let form = Form::<ContactDraft>::edit(&existing);
            let contact = records::save(ctx, form, field_values(&args.fields), repo).await?;
            show(ctx, "contact updated", &contact)
        }
        ContactsCommand::Delete(args) => {
            records::delete(ctx, repo, args, Contact::full_name).await
        }
    }
}

fn field_values(fields: &ContactFields) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("firstName", fields.first_name.clone()),
        ("lastName", fields.last_name.clone()),
        ("email", fields.email.clone()),
        ("phone", fields.phone.clone()),
        ("company", fields.company.clone()),
        ("role", fields.role.clone()),
        ("status", fields.status.clone()),
        ("mrr", fields.mrr.clone()),
        ("notes", fields.notes.clone()),
    ]
}

fn show(ctx: &AppContext<'_>, command: &str, contact: &Contact) -> anyhow::Result<()> {
    let details = contact_details(ctx.ui(), contact);
    records::print_record(ctx, command, contact.id, contact, details)
}

async fn handle_list(ctx: &AppContext<'_>, args: &ContactListArgs) -> anyhow::Result<()> {
    let query = ContactQuery {
        search: args.search.clone().unwrap_or_default(),
        status: args.status.as_deref().map(str::parse::<Status>).transpose()?,
    };
    let contacts = records::load_list(ctx, "contacts", ctx.repos().contacts.as_ref()).await?;
    let matching = query.apply(&contacts);

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&record_json(&matching)?);
    }

    let rows: Vec<Vec<String>> = matching.iter().map(|c| contact_row(ui, c)).collect();
    if !ctx.quiet() {
        print(ui, &header(ui, "contacts", Some(&matching.len().to_string())));
        blank_line(ui);
    }
    if rows.is_empty() {
        if !ctx.quiet() {
            print(ui, &hint(ui, "No contacts found. Add one with `crm contacts add`."));
        }
        return Ok(());
    }
    print(ui, &table(ui, CONTACT_COLUMNS, &rows));
    if !ctx.quiet() && ui.mode.is_pretty() {
        blank_line(ui);
        print(ui, &tally_line(ui, &contact_status_counts(&contacts)));
    }
    Ok(())
}
