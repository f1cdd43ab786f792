use crm_core::views::Dashboard;

use crate::app::AppContext;
use crate::output::{
    activity_row, contact_names, dashboard_json, metric_row, ACTIVITY_COLUMNS, METRIC_COLUMNS,
};
use crate::ui::{blank_line, divider, header, hint, print, print_json, simple_table, table, with_spinner};

pub async fn handle(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let repos = ctx.repos();
    let dashboard = with_spinner(
        ctx.ui(),
        "Loading dashboard",
        Dashboard::load(repos.metrics.as_ref(), repos.activities.as_ref()),
    )
    .await;
    if let Some(message) = &dashboard.error {
        return Err(anyhow::anyhow!(message.clone()));
    }

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&dashboard_json(&dashboard)?);
    }

    let names = match repos.contacts.get_all().await {
        Ok(contacts) => contact_names(&contacts),
        Err(err) => {
            tracing::warn!(error = %err, "could not load contact names");
            Default::default()
        }
    };

    if !ctx.quiet() {
        print(ui, &header(ui, "dashboard", None));
        blank_line(ui);
    }
    let metric_rows: Vec<Vec<String>> = dashboard
        .metrics
        .iter()
        .enumerate()
        .map(|(index, m)| metric_row(ui, index, m))
        .collect();
    print(ui, &table(ui, METRIC_COLUMNS, &metric_rows));

    blank_line(ui);
    if !ctx.quiet() {
        print(ui, "Recent activity");
        print(ui, &divider(ui));
    }
    if dashboard.recent_activities.is_empty() {
        if !ctx.quiet() {
            print(ui, &hint(ui, "No activity yet. Log one with `crm activities add`."));
        }
        return Ok(());
    }
    let activity_rows: Vec<Vec<String>> = dashboard
        .recent_activities
        .iter()
        .map(|a| activity_row(ui, a, &names))
        .collect();
    print(ui, &simple_table(ui, ACTIVITY_COLUMNS, &activity_rows));
    Ok(())
}
