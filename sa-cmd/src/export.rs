//! CSV export of the merged monthly history.

use anyhow::Context;
use chrono::Local;
use log::info;
use sa_api::ApiClient;
use sa_data::history::{DateRange, HistoryView, MonthSeries};
use std::io;

/// Write `month,label,messages,clicks` rows, header first.
pub fn write_history<W: io::Write>(series: &MonthSeries, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["month", "label", "messages", "clicks"])?;
    for point in &series.points {
        wtr.write_record([
            point.key.as_str(),
            point.label.as_str(),
            point.messages.to_string().as_str(),
            point.clicks.to_string().as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub async fn run_export_history(
    client: &ApiClient,
    store_id: &str,
    out: &str,
    range: DateRange,
) -> anyhow::Result<()> {
    let snapshot = client
        .store_analytics(store_id)
        .await
        .with_context(|| format!("failed to load analytics for store {}", store_id))?
        .with_context(|| format!("No analytics data returned for store {}", store_id))?;

    let history = HistoryView::build(&snapshot, range, Local::now().date_naive());
    let file = std::fs::File::create(out).with_context(|| format!("failed to create {}", out))?;
    write_history(&history.series, file)?;

    info!(
        "Wrote {} months ({}) for store {} to {}",
        history.series.points.len(),
        range,
        store_id,
        out
    );
    Ok(())
}
