//! Text reports for the summary, predict and recent subcommands.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use log::info;
use sa_api::{AnalyticsSnapshot, ApiClient, PredictionHorizon, PredictionSnapshot, RecentAnalytics};
use sa_data::history::{DateRange, HistoryView};
use sa_data::prediction::{PredictionView, NOT_ENOUGH_DATA};
use sa_data::summary::SummaryView;
use sa_data::templates::TemplateView;
use sa_utils::format::fixed2;
use std::io::{self, Write};

/// Totals, monthly history inside `range` and the ranked templates.
pub fn write_summary<W: Write>(
    out: &mut W,
    snapshot: &AnalyticsSnapshot,
    range: DateRange,
    today: NaiveDate,
) -> io::Result<()> {
    let summary = SummaryView::from_snapshot(snapshot);
    let history = HistoryView::build(snapshot, range, today);
    let templates = TemplateView::build(snapshot, range);

    writeln!(out, "Total Messages Sent:        {}", summary.total_messages)?;
    writeln!(out, "Total Link Clicks:          {}", summary.total_clicks)?;
    writeln!(out, "Overall Click-Through Rate: {}%", summary.click_through_rate)?;
    if let Some(reported) = &summary.reported_rate {
        writeln!(out, "Server-Reported CTR:        {}%", reported)?;
    }

    writeln!(out, "\nMessage History ({})", range)?;
    if history.series.is_empty() {
        writeln!(out, "  no months in range")?;
    }
    for point in &history.series.points {
        writeln!(
            out,
            "  {:<16} {:>8} messages {:>8} clicks",
            point.label, point.messages, point.clicks
        )?;
    }
    writeln!(
        out,
        "  Total Messages: {}  Total Clicks: {}",
        history.total_messages, history.total_clicks
    )?;

    writeln!(out, "\nTemplate Performance")?;
    if !templates.has_data() {
        writeln!(out, "  No template performance data available")?;
    }
    for slice in &templates.slices {
        write!(out, "  {:<16} {:>7}%  {}", slice.label, fixed2(slice.ctr * 100.0), slice.color)?;
        if let (Some(messages), Some(clicks)) = (slice.messages, slice.clicks) {
            write!(out, "  ({} clicks / {} messages)", clicks, messages)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Current and predicted CTR, trend and the dated forecast series.
pub fn write_prediction<W: Write>(
    out: &mut W,
    snapshot: &PredictionSnapshot,
    days: u32,
) -> io::Result<()> {
    let view = PredictionView::build(snapshot);

    writeln!(out, "CTR Prediction for Next {} Days", days)?;
    if let Some(store) = &view.store_label {
        writeln!(out, "Store: {}", store)?;
    }
    if !view.has_predictions() {
        return writeln!(out, "{}", NOT_ENOUGH_DATA);
    }
    writeln!(out, "Current CTR:           {}%", view.current_percent)?;
    writeln!(out, "Average Predicted CTR: {}%", view.average_percent)?;
    writeln!(out, "Trend:                 {} {}", view.trend.icon(), view.change_label)?;
    if let Some(reported) = &view.reported_change_label {
        writeln!(out, "Server-Reported Change: {}", reported)?;
    }
    for (label, value) in view.labels.iter().zip(&view.predicted) {
        writeln!(out, "  {}  {}%", label, fixed2(*value))?;
    }
    Ok(())
}

pub fn write_recent<W: Write>(out: &mut W, recent: &RecentAnalytics) -> io::Result<()> {
    writeln!(out, "Messages sent ({}): {}", recent.period, recent.recent_messages)
}

pub async fn run_summary(client: &ApiClient, store_id: &str, range: DateRange) -> anyhow::Result<()> {
    let snapshot = client
        .store_analytics(store_id)
        .await
        .with_context(|| format!("failed to load analytics for store {}", store_id))?
        .with_context(|| format!("No analytics data returned for store {}", store_id))?;
    info!(
        "Loaded analytics for store {}: {} months, {} templates",
        store_id,
        snapshot.messages_by_month.len(),
        snapshot.ctr_by_template.len()
    );
    write_summary(&mut io::stdout().lock(), &snapshot, range, Local::now().date_naive())?;
    Ok(())
}

pub async fn run_predict(client: &ApiClient, store_id: &str, days: u32) -> anyhow::Result<()> {
    let horizon = PredictionHorizon::new(days).with_context(|| {
        format!(
            "days must be between {} and {}, got {}",
            PredictionHorizon::MIN_DAYS,
            PredictionHorizon::MAX_DAYS,
            days
        )
    })?;
    let snapshot = client
        .ctr_prediction(store_id, horizon)
        .await
        .with_context(|| format!("failed to load prediction for store {}", store_id))?;
    write_prediction(&mut io::stdout().lock(), &snapshot, horizon.days())?;
    Ok(())
}

pub async fn run_recent(client: &ApiClient, store_id: &str, days: u32) -> anyhow::Result<()> {
    if days == 0 {
        anyhow::bail!("days must be at least 1");
    }
    let recent = client
        .recent_analytics(store_id, days)
        .await
        .with_context(|| format!("failed to load recent analytics for store {}", store_id))?;
    write_recent(&mut io::stdout().lock(), &recent)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sa_api::MonthCount;
    use std::collections::BTreeMap;

    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            total_messages: 200,
            total_clicks: 50,
            messages_by_month: vec![MonthCount::new(2024, 3, 120), MonthCount::new(2023, 1, 80)],
            clicks_by_month: vec![MonthCount::new(2024, 3, 30), MonthCount::new(2023, 1, 20)],
            ctr_by_template: BTreeMap::from([("1".to_string(), 0.25)]),
            ..Default::default()
        }
    }

    #[test]
    fn summary_report_lists_totals_months_and_templates() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        let report = render(|out| write_summary(out, &snapshot(), DateRange::AllTime, today));
        assert!(report.contains("Overall Click-Through Rate: 25.00%"));
        assert!(report.contains("January 2023"));
        assert!(report.contains("March 2024"));
        assert!(report.contains("Total Messages: 200  Total Clicks: 50"));
        assert!(report.contains("Template 1"));
        assert!(report.contains("25.00%  hsl(0, 70%, 60%)\n"));
        assert!(!report.contains("Server-Reported CTR"));
    }

    #[test]
    fn summary_report_shows_server_figures() {
        let mut snapshot = snapshot();
        snapshot.click_through_rate = Some(0.2);
        snapshot.messages_by_template = BTreeMap::from([("1".to_string(), 40)]);
        snapshot.clicks_by_template = BTreeMap::from([("1".to_string(), 10)]);
        let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        let report = render(|out| write_summary(out, &snapshot, DateRange::AllTime, today));
        assert!(report.contains("Server-Reported CTR:        20.00%"));
        assert!(report.contains("hsl(0, 70%, 60%)  (10 clicks / 40 messages)"));
    }

    #[test]
    fn summary_report_applies_range() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        let report = render(|out| write_summary(out, &snapshot(), DateRange::Last90Days, today));
        assert!(report.contains("March 2024"));
        assert!(!report.contains("January 2023"));
        assert!(report.contains("Total Messages: 120  Total Clicks: 30"));
    }

    #[test]
    fn prediction_report_without_points() {
        let report = render(|out| write_prediction(out, &PredictionSnapshot::default(), 30));
        assert!(report.starts_with("CTR Prediction for Next 30 Days\n"));
        assert!(report.contains(NOT_ENOUGH_DATA));
    }

    #[test]
    fn prediction_report_sorted_series() {
        let snapshot = PredictionSnapshot {
            store_id: Some("42".into()),
            store_name: Some("Main Street".into()),
            predicted_ctr_change: Some(0.02),
            current_ctr: 0.1,
            average_predicted_ctr: 0.12,
            predictions: BTreeMap::from([
                ("2024-05-02".to_string(), 0.12),
                ("2024-05-01".to_string(), 0.11),
            ]),
            ..Default::default()
        };
        let report = render(|out| write_prediction(out, &snapshot, 7));
        assert!(report.contains("Store: Main Street (#42)"));
        assert!(report.contains("Server-Reported Change: +2.00%"));
        assert!(report.contains("Trend:                 \u{2191} +20.00%"));
        let first = report.find("2024-05-01").unwrap();
        let second = report.find("2024-05-02").unwrap();
        assert!(first < second);
        assert!(report.contains("2024-05-01  11.00%"));
    }

    #[test]
    fn recent_report_line() {
        let recent = RecentAnalytics {
            period: "Last 7 days".into(),
            recent_messages: 12,
        };
        assert_eq!(render(|out| write_recent(out, &recent)), "Messages sent (Last 7 days): 12\n");
    }
}
