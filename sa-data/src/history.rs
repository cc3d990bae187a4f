//! Month bucketing for the message history chart.
//!
//! Raw `{year, month, count}` rows are filtered by the selected date range,
//! keyed as zero-padded `YYYY-MM`, and outer-joined so every month present
//! in either series gets a point (the missing metric is zero). Keys sort
//! lexicographically, which is chronological for zero-padded keys.

use crate::chart::{ChartConfig, LineChartData, LineDataset};
use chrono::NaiveDate;
use sa_api::{AnalyticsSnapshot, MonthCount};
use sa_utils::dates::{cutoff_date, month_key, month_name, month_start};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Local date-range filter shared by the history and template cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateRange {
    Last30Days,
    #[default]
    Last90Days,
    Last180Days,
    AllTime,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::Last30Days,
        DateRange::Last90Days,
        DateRange::Last180Days,
        DateRange::AllTime,
    ];

    /// Length of the window in days; `None` for all time.
    pub fn days(self) -> Option<u64> {
        match self {
            DateRange::Last30Days => Some(30),
            DateRange::Last90Days => Some(90),
            DateRange::Last180Days => Some(180),
            DateRange::AllTime => None,
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last30Days => "30 Days",
            DateRange::Last90Days => "90 Days",
            DateRange::Last180Days => "6 Months",
            DateRange::AllTime => "All Time",
        }
    }

    /// Short key used on the command line: `30`, `90`, `180` or `all`.
    pub fn key(self) -> &'static str {
        match self {
            DateRange::Last30Days => "30",
            DateRange::Last90Days => "90",
            DateRange::Last180Days => "180",
            DateRange::AllTime => "all",
        }
    }

    /// Earliest date kept by this range, relative to `today`.
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|days| cutoff_date(&today, days))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|range| range.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown date range {:?} (expected 30, 90, 180 or all)", s))
    }
}

/// Keep rows whose month starts on or after the range cutoff.
///
/// A month is dated by its first day, so with a 30-day range only months
/// starting inside the window survive. Rows with an invalid month number
/// are dropped unless the range is `AllTime`.
pub fn filter_months(rows: &[MonthCount], range: DateRange, today: NaiveDate) -> Vec<MonthCount> {
    let Some(cutoff) = range.cutoff(today) else {
        return rows.to_vec();
    };
    rows.iter()
        .filter(|row| {
            let start = i32::try_from(row.year)
                .ok()
                .zip(u32::try_from(row.month).ok())
                .and_then(|(year, month)| month_start(year, month));
            matches!(start, Some(start) if start >= cutoff)
        })
        .copied()
        .collect()
}

/// One merged month on the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPoint {
    /// `YYYY-MM`
    pub key: String,
    /// e.g. `March 2024`
    pub label: String,
    pub messages: i64,
    pub clicks: i64,
}

/// Merged, chronologically sorted month series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthSeries {
    pub points: Vec<MonthPoint>,
}

impl MonthSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn messages(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.messages).collect()
    }

    pub fn clicks(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.clicks).collect()
    }
}

fn bucket_label(year: i64, month: i64) -> String {
    match u32::try_from(month).ok().and_then(month_name) {
        Some(name) => format!("{} {}", name, year),
        None => format!("{}-{:02}", year, month),
    }
}

fn bucket_key(row: &MonthCount) -> String {
    match (i32::try_from(row.year), u32::try_from(row.month)) {
        (Ok(year), Ok(month)) => month_key(year, month),
        _ => format!("{}-{:02}", row.year, row.month),
    }
}

fn bucket_for<'a>(
    buckets: &'a mut BTreeMap<String, MonthPoint>,
    row: &MonthCount,
) -> &'a mut MonthPoint {
    buckets
        .entry(bucket_key(row))
        .or_insert_with_key(|key| MonthPoint {
            key: key.clone(),
            label: bucket_label(row.year, row.month),
            messages: 0,
            clicks: 0,
        })
}

/// Outer-join message and click rows into one sorted series.
///
/// If a series repeats a month, the later row wins.
pub fn merge_months(messages: &[MonthCount], clicks: &[MonthCount]) -> MonthSeries {
    let mut buckets: BTreeMap<String, MonthPoint> = BTreeMap::new();
    for row in messages {
        bucket_for(&mut buckets, row).messages = row.count;
    }
    for row in clicks {
        bucket_for(&mut buckets, row).clicks = row.count;
    }

    MonthSeries {
        points: buckets.into_values().collect(),
    }
}

/// Everything the history card renders for one range selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryView {
    pub series: MonthSeries,
    /// Sum of message counts inside the range.
    pub total_messages: i64,
    /// Sum of click counts inside the range.
    pub total_clicks: i64,
}

impl HistoryView {
    pub fn build(snapshot: &AnalyticsSnapshot, range: DateRange, today: NaiveDate) -> Self {
        let messages = filter_months(&snapshot.messages_by_month, range, today);
        let clicks = filter_months(&snapshot.clicks_by_month, range, today);
        Self {
            total_messages: messages.iter().map(|r| r.count).sum(),
            total_clicks: clicks.iter().map(|r| r.count).sum(),
            series: merge_months(&messages, &clicks),
        }
    }

    pub fn chart_data(&self) -> LineChartData {
        let to_f64 =
            |values: Vec<i64>| -> Vec<f64> { values.into_iter().map(|v| v as f64).collect() };
        LineChartData {
            labels: self.series.labels(),
            datasets: vec![
                LineDataset::new(
                    "Messages Sent",
                    "#007bff",
                    "rgba(0, 123, 255, 0.1)",
                    to_f64(self.series.messages()),
                ),
                LineDataset::new(
                    "Link Clicks",
                    "#28a745",
                    "rgba(40, 167, 69, 0.1)",
                    to_f64(self.series.clicks()),
                ),
            ],
        }
    }

    pub fn chart_config() -> ChartConfig {
        ChartConfig::default()
    }
}
