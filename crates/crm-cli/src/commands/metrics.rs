use crate::app::AppContext;
use crate::cli::MetricsCommand;
use crate::output::{metric_row, metrics_json, METRIC_COLUMNS};
use crate::ui::{blank_line, header, print, print_json, table, with_spinner};

pub async fn handle(ctx: &AppContext<'_>, command: &MetricsCommand) -> anyhow::Result<()> {
    match command {
        MetricsCommand::List => handle_list(ctx).await,
    }
}

async fn handle_list(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let metrics = with_spinner(ctx.ui(), "Loading metrics", ctx.repos().metrics.get_all())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Error loading metrics");
            anyhow::anyhow!("Failed to load metrics")
        })?;

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&serde_json::Value::Array(metrics_json(&metrics)));
    }

    if !ctx.quiet() {
        print(ui, &header(ui, "metrics", None));
        blank_line(ui);
    }
    let rows: Vec<Vec<String>> = metrics
        .iter()
        .enumerate()
        .map(|(index, m)| metric_row(ui, index, m))
        .collect();
    print(ui, &table(ui, METRIC_COLUMNS, &rows));
    Ok(())
}
