//! Headline totals for the analytics summary cards.

use sa_api::AnalyticsSnapshot;
use sa_utils::format::{fixed2, ratio_as_percent};

/// Click-through rate as a percentage with two decimals.
///
/// Returns `"0.00"` when no messages were sent, whatever the click count.
pub fn click_through_rate(total_messages: i64, total_clicks: i64) -> String {
    if total_messages <= 0 {
        return fixed2(0.0);
    }
    fixed2(total_clicks as f64 / total_messages as f64 * 100.0)
}

/// The three values shown by the summary cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub total_messages: i64,
    pub total_clicks: i64,
    pub click_through_rate: String,
    /// The backend's own CTR, as a percentage string, when it sent one.
    pub reported_rate: Option<String>,
}

impl SummaryView {
    pub fn from_snapshot(snapshot: &AnalyticsSnapshot) -> Self {
        Self {
            total_messages: snapshot.total_messages,
            total_clicks: snapshot.total_clicks,
            click_through_rate: click_through_rate(snapshot.total_messages, snapshot.total_clicks),
            reported_rate: snapshot.click_through_rate.map(ratio_as_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_messages_is_zero_rate() {
        assert_eq!(click_through_rate(0, 0), "0.00");
        assert_eq!(click_through_rate(0, 17), "0.00");
    }

    #[test]
    fn quarter_click_through() {
        assert_eq!(click_through_rate(200, 50), "25.00");
    }

    #[test]
    fn rate_rounds_to_two_decimals() {
        assert_eq!(click_through_rate(3, 1), "33.33");
        assert_eq!(click_through_rate(3, 2), "66.67");
    }

    #[test]
    fn summary_from_empty_snapshot() {
        let view = SummaryView::from_snapshot(&AnalyticsSnapshot::default());
        assert_eq!(view.total_messages, 0);
        assert_eq!(view.total_clicks, 0);
        assert_eq!(view.click_through_rate, "0.00");
        assert_eq!(view.reported_rate, None);
    }

    #[test]
    fn reported_rate_is_kept_apart() {
        let snapshot = AnalyticsSnapshot {
            total_messages: 200,
            total_clicks: 50,
            click_through_rate: Some(0.2),
            ..Default::default()
        };
        let view = SummaryView::from_snapshot(&snapshot);
        assert_eq!(view.click_through_rate, "25.00");
        assert_eq!(view.reported_rate.as_deref(), Some("20.00"));
    }
}
