//! Steps shared by every record command: loading a list, fetching one
//! record, submitting a form and deleting with confirmation.

use dialoguer::Confirm;
use serde::Serialize;

use crm_core::forms::{Form, FormDraft};
use crm_core::views::ListPage;
use crm_core::{CrmError, Entity, Keyed, RecordId, RecordRepository};

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::output::{deleted_json, record_json, Details};
use crate::ui::{badge, blank_line, header, kv, print, print_json, receipt, with_spinner, Badge};

/// Load every record through a [`ListPage`]; a failed load becomes the
/// page's error message.
pub async fn load_list<E: Keyed>(
    ctx: &AppContext<'_>,
    noun: &'static str,
    repo: &dyn RecordRepository<E>,
) -> anyhow::Result<Vec<E>> {
    let page = ListPage::new(noun);
    with_spinner(ctx.ui(), &format!("Loading {}", noun), page.load(repo)).await;
    match page.error() {
        Some(message) => Err(anyhow::anyhow!(message)),
        None => Ok(page.items()),
    }
}

/// Fetch one record; an absorbed miss is reported as not found.
pub async fn fetch<E: Keyed>(
    ctx: &AppContext<'_>,
    repo: &dyn RecordRepository<E>,
    id: RecordId,
) -> anyhow::Result<E> {
    let loading = format!("Loading {} {}", E::KIND.to_lowercase(), id);
    with_spinner(ctx.ui(), &loading, repo.get_by_id(id))
        .await?
        .ok_or_else(|| CrmError::not_found(E::KIND, id).into())
}

/// Apply the given field values and submit the form.
pub async fn save<D: FormDraft>(
    ctx: &AppContext<'_>,
    form: Form<D>,
    fields: Vec<(&'static str, Option<String>)>,
    repo: &dyn RecordRepository<D::Record>,
) -> anyhow::Result<D::Record> {
    for (field, value) in fields {
        if let Some(value) = value {
            form.set(field, value)?;
        }
    }
    let kind = <D::Record as Entity>::KIND;
    let saving = format!("Saving {}", kind.to_lowercase());
    match with_spinner(ctx.ui(), &saving, form.submit(repo, ctx.notifier())).await? {
        Some(record) => Ok(record),
        None => Err(anyhow::anyhow!("{} was not saved", kind)),
    }
}

/// Print one record: JSON, or a header followed by its detail lines.
pub fn print_record<T: Serialize>(
    ctx: &AppContext<'_>,
    command: &str,
    id: RecordId,
    record: &T,
    details: Details,
) -> anyhow::Result<()> {
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&record_json(record)?);
    }
    if ctx.quiet() {
        println!("{}", id);
        return Ok(());
    }
    print(ui, &header(ui, command, None));
    blank_line(ui);
    for (label, value) in &details {
        print(ui, &kv(ui, label, value));
    }
    Ok(())
}

/// Delete a record after confirming, unless `--force` was passed.
///
/// `describe` names the record in the prompt and receipt.
pub async fn delete<E: Keyed>(
    ctx: &AppContext<'_>,
    repo: &dyn RecordRepository<E>,
    args: &DeleteArgs,
    describe: impl Fn(&E) -> String,
) -> anyhow::Result<()> {
    let ui = ctx.ui();
    let kind = E::KIND.to_lowercase();
    let record = fetch(ctx, repo, args.id).await?;
    let label = describe(&record);

    if !args.force {
        if !ui.can_prompt() {
            return Err(anyhow::anyhow!(
                "Refusing to delete {} {} without confirmation\nHint: Pass --force to delete non-interactively.",
                kind,
                args.id
            ));
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} '{}'?", kind, label))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                if ui.mode.is_pretty() {
                    print(ui, &badge(ui, Badge::Info, "Cancelled"));
                } else {
                    println!("status=cancelled");
                }
            }
            return Ok(());
        }
    }

    let deleting = format!("Deleting {}", kind);
    let deleted = with_spinner(ui, &deleting, repo.delete(args.id)).await?;
    if !deleted {
        return Err(anyhow::anyhow!("Failed to delete {} {}", kind, args.id));
    }
    tracing::debug!(kind = E::KIND, id = args.id, "deleted record");

    if ui.mode.is_json() {
        return print_json(&deleted_json(E::KIND, args.id));
    }
    if !ctx.quiet() {
        print(
            ui,
            &receipt(
                ui,
                &format!("Deleted {} '{}'", kind, label),
                &[("ID", args.id.to_string())],
            ),
        );
    }
    Ok(())
}
