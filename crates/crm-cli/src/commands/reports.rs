use crm_core::forms::{Form, ReportDraft};
use crm_core::mapper::fields::{report, system};
use crm_core::model::Report;
use crm_core::views::ReportQuery;

use crate::app::AppContext;
use crate::cli::{ReportFields, ReportListArgs, ReportsCommand};
use crate::output::{record_json, report_details, report_row, REPORT_COLUMNS};
use crate::ui::{blank_line, header, hint, print, print_json, table};

use super::records;

pub async fn handle(ctx: &AppContext<'_>, command: &ReportsCommand) -> anyhow::Result<()> {
    let repo = ctx.repos().reports.as_ref();
    match command {
        ReportsCommand::List(args) => handle_list(ctx, args).await,
        ReportsCommand::Show(args) => {
            let report = records::fetch(ctx, repo, args.id).await?;
            show(ctx, "report", &report)
        }
        ReportsCommand::Add(fields) => {
            let form = Form::<ReportDraft>::default();
            let report = records::save(ctx, form, field_values(fields), repo).await?;
            show(ctx, "report added", &report)
        }
        ReportsCommand::Edit(args) => {
            let existing = records::fetch(ctx, repo, args.id).await?;
            let form = Form::<ReportDraft>::edit(&existing);
            let report = records::save(ctx, form, field_values(&args.fields), repo).await?;
            show(ctx, "report updated", &report)
        }
        ReportsCommand::Delete(args) => {
            records::delete(ctx, repo, args, |r: &Report| r.name.clone()).await
        }
    }
}

/// Report drafts are keyed by backend field names.
fn field_values(fields: &ReportFields) -> Vec<(&'static str, Option<String>)> {
    vec![
        (system::NAME, fields.name.clone()),
        (system::TAGS, fields.tags.clone()),
        (report::REPORT_TYPE, fields.report_type.clone()),
        (report::DATA_SOURCE, fields.data_source.clone()),
        (report::FILTERS, fields.filters.clone()),
        (report::LAYOUT, fields.layout.clone()),
        (report::FORMAT, fields.report_format.clone()),
        (report::DISPLAY_FIELDS, fields.display_fields.clone()),
        (report::FILTER_PARAMETERS, fields.filter_parameters.clone()),
        (report::ACTIVITY, fields.activity.clone()),
        (report::COMPANY, fields.company.clone()),
        (report::CONTACT, fields.contact.clone()),
        (report::METRIC, fields.metric.clone()),
    ]
}

fn show(ctx: &AppContext<'_>, command: &str, report: &Report) -> anyhow::Result<()> {
    let details = report_details(ctx.ui(), report);
    records::print_record(ctx, command, report.id, report, details)
}

async fn handle_list(ctx: &AppContext<'_>, args: &ReportListArgs) -> anyhow::Result<()> {
    let query = ReportQuery {
        search: args.search.clone().unwrap_or_default(),
    };
    let reports = records::load_list(ctx, "reports", ctx.repos().reports.as_ref()).await?;
    let matching = query.apply(&reports);

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&record_json(&matching)?);
    }

    let rows: Vec<Vec<String>> = matching.iter().map(|r| report_row(ui, r)).collect();
    if !ctx.quiet() {
        print(ui, &header(ui, "reports", Some(&matching.len().to_string())));
        blank_line(ui);
    }
    if rows.is_empty() {
        if !ctx.quiet() {
            print(ui, &hint(ui, "No reports found. Add one with `crm reports add`."));
        }
        return Ok(());
    }
    print(ui, &table(ui, REPORT_COLUMNS, &rows));
    Ok(())
}
