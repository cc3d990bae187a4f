//! Template performance ranking for the doughnut chart.

use crate::chart::DoughnutChartData;
use crate::history::DateRange;
use sa_api::AnalyticsSnapshot;
use std::cmp::Ordering;

/// Maximum number of templates drawn.
pub const TOP_TEMPLATES: usize = 10;

/// Slice color for position `index`: hue rotates by 137.5 degrees per slot
/// at 70% saturation and 60% lightness. Colors follow position, not
/// template id, so re-sorting recolors slices.
pub fn slice_color(index: usize) -> String {
    let hue = (index as f64 * 137.5) % 360.0;
    format!("hsl({}, 70%, 60%)", hue)
}

/// Numeric ids ascending first, then any other ids in string order.
fn template_id_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// One slice of the template chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSlice {
    pub template_id: String,
    pub label: String,
    /// Click-through ratio.
    pub ctr: f64,
    pub color: String,
    /// Messages sent with this template, when the backend reported them.
    pub messages: Option<i64>,
    pub clicks: Option<i64>,
}

/// Templates visible under `range`.
///
/// The snapshot carries no per-template dates, so every template with a
/// CTR is in range regardless of the selection.
pub fn templates_in_range(snapshot: &AnalyticsSnapshot, _range: DateRange) -> Vec<(String, f64)> {
    let mut templates: Vec<(String, f64)> = snapshot
        .ctr_by_template
        .iter()
        .map(|(id, ctr)| (id.clone(), *ctr))
        .collect();
    templates.sort_by(|a, b| template_id_order(&a.0, &b.0));
    templates
}

/// Rank templates for display.
///
/// With more than `limit` templates, keep the `limit` highest CTRs in
/// descending order; otherwise keep the incoming order.
pub fn rank_templates(mut templates: Vec<(String, f64)>, limit: usize) -> Vec<TemplateSlice> {
    if templates.len() > limit {
        templates.sort_by(|a, b| b.1.total_cmp(&a.1));
        templates.truncate(limit);
    }
    templates
        .into_iter()
        .enumerate()
        .map(|(index, (template_id, ctr))| TemplateSlice {
            label: format!("Template {}", template_id),
            template_id,
            ctr,
            color: slice_color(index),
            messages: None,
            clicks: None,
        })
        .collect()
}

/// Everything the template performance card renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateView {
    pub slices: Vec<TemplateSlice>,
}

impl TemplateView {
    pub fn build(snapshot: &AnalyticsSnapshot, range: DateRange) -> Self {
        let mut slices = rank_templates(templates_in_range(snapshot, range), TOP_TEMPLATES);
        for slice in &mut slices {
            slice.messages = snapshot.messages_by_template.get(&slice.template_id).copied();
            slice.clicks = snapshot.clicks_by_template.get(&slice.template_id).copied();
        }
        Self { slices }
    }

    pub fn has_data(&self) -> bool {
        !self.slices.is_empty()
    }

    pub fn chart_data(&self) -> DoughnutChartData {
        DoughnutChartData {
            labels: self.slices.iter().map(|s| s.label.clone()).collect(),
            values: self.slices.iter().map(|s| s.ctr).collect(),
            colors: self.slices.iter().map(|s| s.color.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn snapshot_with(ctrs: &[(&str, f64)]) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            ctr_by_template: ctrs
                .iter()
                .map(|(id, ctr)| (id.to_string(), *ctr))
                .collect::<BTreeMap<_, _>>(),
            ..Default::default()
        }
    }

    #[test]
    fn fifteen_templates_keep_top_ten_descending() {
        let ctrs: Vec<(String, f64)> = (1..=15)
            .map(|i| (i.to_string(), i as f64 / 100.0))
            .collect();
        let pairs: Vec<(&str, f64)> = ctrs.iter().map(|(id, c)| (id.as_str(), *c)).collect();
        let view = TemplateView::build(&snapshot_with(&pairs), DateRange::default());

        assert_eq!(view.slices.len(), 10);
        let ids: Vec<&str> = view.slices.iter().map(|s| s.template_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["15", "14", "13", "12", "11", "10", "9", "8", "7", "6"]
        );
        assert!(view.slices.windows(2).all(|w| w[0].ctr >= w[1].ctr));
    }

    #[test]
    fn ten_or_fewer_keep_id_order() {
        let view = TemplateView::build(
            &snapshot_with(&[("10", 0.5), ("2", 0.1), ("1", 0.3)]),
            DateRange::AllTime,
        );
        let labels: Vec<&str> = view.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Template 1", "Template 2", "Template 10"]);
    }

    #[test]
    fn colors_rotate_by_position() {
        assert_eq!(slice_color(0), "hsl(0, 70%, 60%)");
        assert_eq!(slice_color(1), "hsl(137.5, 70%, 60%)");
        assert_eq!(slice_color(2), "hsl(275, 70%, 60%)");
        assert_eq!(slice_color(3), "hsl(52.5, 70%, 60%)");
    }

    #[test]
    fn date_range_does_not_drop_templates() {
        let snapshot = snapshot_with(&[("1", 0.2), ("2", 0.4)]);
        for range in DateRange::ALL {
            assert_eq!(TemplateView::build(&snapshot, range).slices.len(), 2);
        }
    }

    #[test]
    fn empty_snapshot_has_no_data() {
        let view = TemplateView::build(&AnalyticsSnapshot::default(), DateRange::AllTime);
        assert!(!view.has_data());
        assert_eq!(view.chart_data(), DoughnutChartData::default());
    }

    #[test]
    fn slices_carry_template_counts() {
        let mut snapshot = snapshot_with(&[("1", 0.25), ("2", 0.1)]);
        snapshot.messages_by_template = BTreeMap::from([("1".to_string(), 40)]);
        snapshot.clicks_by_template = BTreeMap::from([("1".to_string(), 10)]);

        let view = TemplateView::build(&snapshot, DateRange::AllTime);
        assert_eq!(view.slices[0].messages, Some(40));
        assert_eq!(view.slices[0].clicks, Some(10));
        assert_eq!(view.slices[1].messages, None);
        assert_eq!(view.slices[1].clicks, None);
    }

    #[test]
    fn chart_data_lines_up() {
        let view = TemplateView::build(&snapshot_with(&[("3", 0.25)]), DateRange::AllTime);
        let data = view.chart_data();
        assert_eq!(data.labels, vec!["Template 3"]);
        assert_eq!(data.values, vec![0.25]);
        assert_eq!(data.colors, vec!["hsl(0, 70%, 60%)"]);
    }
}
