use crm_core::forms::{ActivityDraft, Form};
use crm_core::model::{Activity, ActivityType};
use crm_core::views::ActivityQuery;

use crate::app::AppContext;
use crate::cli::{ActivitiesCommand, ActivityAddArgs, ActivityListArgs};
use crate::output::{activity_row, contact_names, record_json, ACTIVITY_COLUMNS};
use crate::ui::format::truncate;
use crate::ui::{blank_line, header, hint, kv, print, print_json, table};

use super::records;

pub async fn handle(ctx: &AppContext<'_>, command: &ActivitiesCommand) -> anyhow::Result<()> {
    let repo = ctx.repos().activities.as_ref();
    match command {
        ActivitiesCommand::List(args) => handle_list(ctx, args).await,
        ActivitiesCommand::Add(args) => handle_add(ctx, args).await,
        ActivitiesCommand::Delete(args) => {
            records::delete(ctx, repo, args, |a: &Activity| truncate(&a.description, 40)).await
        }
    }
}

async fn handle_add(ctx: &AppContext<'_>, args: &ActivityAddArgs) -> anyhow::Result<()> {
    let fields = vec![
        ("type", args.kind.clone()),
        ("description", args.description.clone()),
        ("contactId", args.contact.clone()),
    ];
    let form = Form::<ActivityDraft>::default();
    let activity = records::save(ctx, form, fields, ctx.repos().activities.as_ref()).await?;

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&record_json(&activity)?);
    }
    if ctx.quiet() {
        println!("{}", activity.id);
        return Ok(());
    }
    print(ui, &header(ui, "activity logged", None));
    blank_line(ui);
    print(ui, &kv(ui, "ID", &activity.id.to_string()));
    print(ui, &kv(ui, "Type", activity.kind.as_str()));
    print(ui, &kv(ui, "Description", &activity.description));
    print(ui, &kv(ui, "Contact", &activity.contact_id.to_string()));
    Ok(())
}

async fn handle_list(ctx: &AppContext<'_>, args: &ActivityListArgs) -> anyhow::Result<()> {
    let query = ActivityQuery {
        search: args.search.clone().unwrap_or_default(),
        kind: args
            .kind
            .as_deref()
            .map(str::parse::<ActivityType>)
            .transpose()?,
    };
    let activities =
        records::load_list(ctx, "activities", ctx.repos().activities.as_ref()).await?;
    let matching = query.apply(&activities);

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&record_json(&matching)?);
    }

    // Rows fall back to contact ids when names are unavailable.
    let names = match ctx.repos().contacts.get_all().await {
        Ok(contacts) => contact_names(&contacts),
        Err(err) => {
            tracing::warn!(error = %err, "could not load contact names");
            Default::default()
        }
    };
    let rows: Vec<Vec<String>> = matching
        .iter()
        .map(|a| activity_row(ui, a, &names))
        .collect();
    if !ctx.quiet() {
        print(ui, &header(ui, "activities", Some(&matching.len().to_string())));
        blank_line(ui);
    }
    if rows.is_empty() {
        if !ctx.quiet() {
            print(ui, &hint(ui, "No activities found. Log one with `crm activities add`."));
        }
        return Ok(());
    }
    print(ui, &table(ui, ACTIVITY_COLUMNS, &rows));
    Ok(())
}
