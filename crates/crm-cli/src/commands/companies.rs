use crm_core::forms::{CompanyDraft, Form};
use crm_core::model::{Company, Status, SubscriptionPlan};
use crm_core::views::{company_plan_counts, company_status_counts, CompanyQuery};

use crate::app::AppContext;
use crate::cli::{CompaniesCommand, CompanyFields, CompanyListArgs};
use crate::output::{company_details, company_row, record_json, tally_line, COMPANY_COLUMNS};
use crate::ui::{blank_line, header, hint, print, print_json, table};

use super::records;

pub async fn handle(ctx: &AppContext<'_>, command: &CompaniesCommand) -> anyhow::Result<()> {
    let repo = ctx.repos().companies.as_ref();
    match command {
        CompaniesCommand::List(args) => handle_list(ctx, args).await,
        CompaniesCommand::Show(args) => {
            let company = records::fetch(ctx, repo, args.id).await?;
            show(ctx, "company", &company)
        }
        CompaniesCommand::Add(fields) => {
            let form = Form::<CompanyDraft>::default();
            let company = records::save(ctx, form, field_values(fields), repo).await?;
            show(ctx, "company added", &company)
        }
        CompaniesCommand::Edit(args) => {
            let existing = records::fetch(ctx, repo, args.id).await?;
            let form = Form::<CompanyDraft>::edit(&existing);
            let company = records::save(ctx, form, field_values(&args.fields), repo).await?;
            show(ctx, "company updated", &company)
        }
        CompaniesCommand::Delete(args) => {
            records::delete(ctx, repo, args, |c: &Company| c.name.clone()).await
        }
    }
}

fn field_values(fields: &CompanyFields) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("name", fields.name.clone()),
        ("industry", fields.industry.clone()),
        ("employees", fields.employees.clone()),
        ("website", fields.website.clone()),
        ("subscriptionPlan", fields.plan.clone()),
        ("status", fields.status.clone()),
        ("mrr", fields.mrr.clone()),
    ]
}

fn show(ctx: &AppContext<'_>, command: &str, company: &Company) -> anyhow::Result<()> {
    let details = company_details(ctx.ui(), company);
    records::print_record(ctx, command, company.id, company, details)
}

async fn handle_list(ctx: &AppContext<'_>, args: &CompanyListArgs) -> anyhow::Result<()> {
    let query = CompanyQuery {
        search: args.search.clone().unwrap_or_default(),
        status: args.status.as_deref().map(str::parse::<Status>).transpose()?,
        plan: args
            .plan
            .as_deref()
            .map(str::parse::<SubscriptionPlan>)
            .transpose()?,
    };
    let companies = records::load_list(ctx, "companies", ctx.repos().companies.as_ref()).await?;
    let matching = query.apply(&companies);

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&record_json(&matching)?);
    }

    let rows: Vec<Vec<String>> = matching.iter().map(|c| company_row(ui, c)).collect();
    if !ctx.quiet() {
        print(ui, &header(ui, "companies", Some(&matching.len().to_string())));
        blank_line(ui);
    }
    if rows.is_empty() {
        if !ctx.quiet() {
            print(ui, &hint(ui, "No companies found. Add one with `crm companies add`."));
        }
        return Ok(());
    }
    print(ui, &table(ui, COMPANY_COLUMNS, &rows));
    if !ctx.quiet() && ui.mode.is_pretty() {
        blank_line(ui);
        print(ui, &tally_line(ui, &company_status_counts(&companies)));
        print(ui, &tally_line(ui, &company_plan_counts(&companies)));
    }
    Ok(())
}
