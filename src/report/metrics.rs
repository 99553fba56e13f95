use serde::Serialize;

use crate::data::filter::FilteredView;

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub average_salary: f64,
    pub max_salary: f64,
    pub record_count: usize,
    /// Most frequent role title; empty when the view is empty.
    pub modal_role: String,
}

/// Compute the headline metrics for a view.
///
/// An empty view yields all zeros and an empty role.
pub fn summarize(view: &FilteredView<'_>) -> Metrics {
    if view.is_empty() {
        return Metrics::default();
    }

    let total: f64 = view.iter().map(|r| r.usd).sum();
    let max = view.iter().map(|r| r.usd).fold(f64::NEG_INFINITY, f64::max);

    Metrics {
        average_salary: total / view.len() as f64,
        max_salary: max,
        record_count: view.len(),
        modal_role: modal_role(view),
    }
}

/// Most frequent role; ties go to the role seen first.
fn modal_role(view: &FilteredView<'_>) -> String {
    // (role, count) in first-seen order
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for rec in view.iter() {
        match counts.iter_mut().find(|(role, _)| *role == rec.role) {
            Some((_, n)) => *n += 1,
            None => counts.push((rec.role.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (role, n) in counts {
        if best.map_or(true, |(_, best_n)| n > best_n) {
            best = Some((role, n));
        }
    }
    best.map(|(role, _)| role.to_string()).unwrap_or_default()
}
