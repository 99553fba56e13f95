use std::collections::HashMap;

use serde::Serialize;

use crate::data::filter::FilteredView;
use crate::data::model::SalaryRecord;

pub const TOP_ROLES_LIMIT: usize = 10;
pub const HISTOGRAM_BINS: usize = 30;
/// Role used for the per-country breakdown.
pub const COUNTRY_ROLE: &str = "Data Scientist";

// ---------------------------------------------------------------------------
// Aggregate tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleAverage {
    pub role: String,
    pub mean_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `bins + 1` edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if !self.counts.is_empty() => (hi - lo) / self.counts.len() as f64,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteCount {
    pub mode: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryAverage {
    pub country_iso3: String,
    pub mean_usd: f64,
}

// ---------------------------------------------------------------------------
// Group-by helpers
// ---------------------------------------------------------------------------

/// Sum and count per key, keys in first-seen order.
fn group<'a, I, K>(rows: I, key: K) -> Vec<(&'a str, f64, usize)>
where
    I: Iterator<Item = &'a SalaryRecord>,
    K: Fn(&'a SalaryRecord) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();
    for rec in rows {
        let k = key(rec);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k, 0.0, 0));
            groups.len() - 1
        });
        groups[slot].1 += rec.usd;
        groups[slot].2 += 1;
    }
    groups
}

// ---------------------------------------------------------------------------
// Aggregators – `None` means "no data to chart"
// ---------------------------------------------------------------------------

/// The ten roles with the highest mean salary, ascending by mean.
pub fn top_roles(view: &FilteredView<'_>) -> Option<Vec<RoleAverage>> {
    if view.is_empty() {
        return None;
    }
    let mut means: Vec<RoleAverage> = group(view.iter(), |r| r.role.as_str())
        .into_iter()
        .map(|(role, sum, n)| RoleAverage {
            role: role.to_string(),
            mean_usd: sum / n as f64,
        })
        .collect();

    // Stable: equal means keep first-seen order.
    means.sort_by(|a, b| b.mean_usd.total_cmp(&a.mean_usd));
    means.truncate(TOP_ROLES_LIMIT);
    means.reverse();
    Some(means)
}

/// Equal-width histogram of salaries over the observed range.
///
/// A degenerate range (all salaries equal) is widened by 0.5 on each side.
/// The last bin includes its right edge.
pub fn salary_histogram(view: &FilteredView<'_>) -> Option<Histogram> {
    if view.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = view
        .iter()
        .map(|r| r.usd)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / HISTOGRAM_BINS as f64;
    let edges: Vec<f64> = (0..=HISTOGRAM_BINS)
        .map(|i| if i == HISTOGRAM_BINS { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for rec in view.iter() {
        counts[bin_index(&edges, rec.usd)] += 1;
    }

    Some(Histogram { edges, counts })
}

/// Bin holding `v`, consistent with `edges`: `edges[i] <= v < edges[i + 1]`,
/// with the last bin closed on the right.
fn bin_index(edges: &[f64], v: f64) -> usize {
    let last = edges.len() - 2;
    let (lo, hi) = (edges[0], edges[last + 1]);
    let width = (hi - lo) / (last + 1) as f64;
    let mut bin = (((v - lo) / width).floor().max(0.0) as usize).min(last);
    // The division can round across an edge; settle against the edges themselves.
    if bin > 0 && v < edges[bin] {
        bin -= 1;
    } else if bin < last && v >= edges[bin + 1] {
        bin += 1;
    }
    bin
}

/// Record count per remote-work mode, most frequent first.
pub fn remote_breakdown(view: &FilteredView<'_>) -> Option<Vec<RemoteCount>> {
    if view.is_empty() {
        return None;
    }
    let mut counts: Vec<RemoteCount> = group(view.iter(), |r| r.remote.as_str())
        .into_iter()
        .map(|(mode, _, n)| RemoteCount {
            mode: mode.to_string(),
            count: n,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Some(counts)
}

/// Mean salary per country for [`COUNTRY_ROLE`], sorted by country code.
///
/// Empty (not `None`) when the view has rows but none for that role.
pub fn country_average(view: &FilteredView<'_>) -> Option<Vec<CountryAverage>> {
    if view.is_empty() {
        return None;
    }
    let role_rows = view.iter().filter(|r| r.role == COUNTRY_ROLE);
    let mut means: Vec<CountryAverage> = group(role_rows, |r| r.country_iso3.as_str())
        .into_iter()
        .map(|(country, sum, n)| CountryAverage {
            country_iso3: country.to_string(),
            mean_usd: sum / n as f64,
        })
        .collect();
    means.sort_by(|a, b| a.country_iso3.cmp(&b.country_iso3));
    Some(means)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{record, SalaryRecord};

    fn view(rows: &[SalaryRecord]) -> FilteredView<'_> {
        FilteredView::from_rows(rows.iter().collect())
    }

    fn with(role: &str, usd: f64, remote: &str, country: &str) -> SalaryRecord {
        let mut r = record(2024, "senior", role, usd);
        r.remote = remote.to_string();
        r.country_iso3 = country.to_string();
        r
    }

    #[test]
    fn empty_view_signals_no_data() {
        let empty = FilteredView::default();
        assert!(top_roles(&empty).is_none());
        assert!(salary_histogram(&empty).is_none());
        assert!(remote_breakdown(&empty).is_none());
        assert!(country_average(&empty).is_none());
    }

    #[test]
    fn top_roles_keeps_ten_highest_ascending() {
        let rows: Vec<_> = (0..15)
            .map(|i| record(2024, "senior", &format!("Role {i}"), 1000.0 * i as f64))
            .collect();
        let top = top_roles(&view(&rows)).expect("data");

        assert_eq!(top.len(), TOP_ROLES_LIMIT);
        assert!(top.windows(2).all(|w| w[0].mean_usd <= w[1].mean_usd));
        assert_eq!(top.first().map(|r| r.role.as_str()), Some("Role 5"));
        assert_eq!(top.last().map(|r| r.role.as_str()), Some("Role 14"));
        for entry in &top {
            assert!(rows.iter().any(|r| r.role == entry.role));
        }
    }

    #[test]
    fn top_roles_averages_per_group() {
        let rows = vec![
            record(2024, "senior", "A", 100.0),
            record(2024, "senior", "B", 500.0),
            record(2024, "senior", "A", 300.0),
        ];
        let top = top_roles(&view(&rows)).expect("data");
        assert_eq!(
            top,
            vec![
                RoleAverage { role: "A".into(), mean_usd: 200.0 },
                RoleAverage { role: "B".into(), mean_usd: 500.0 },
            ]
        );
    }

    #[test]
    fn histogram_counts_sum_to_view_len() {
        let rows: Vec<_> = [15_000.0, 40_000.0, 40_000.0, 99_999.0, 250_000.0, 800_000.0]
            .iter()
            .map(|&usd| record(2024, "senior", "R", usd))
            .collect();
        let hist = salary_histogram(&view(&rows)).expect("data");

        assert_eq!(hist.counts.len(), HISTOGRAM_BINS);
        assert_eq!(hist.edges.len(), HISTOGRAM_BINS + 1);
        assert_eq!(hist.counts.iter().sum::<usize>(), rows.len());
        assert_eq!(hist.edges[0], 15_000.0);
        assert_eq!(hist.edges[HISTOGRAM_BINS], 800_000.0);
        // maximum lands in the last, right-closed bin
        assert_eq!(hist.counts[HISTOGRAM_BINS - 1], 1);
        assert_eq!(hist.counts[0], 3);
    }

    #[test]
    fn histogram_of_identical_salaries_widens_range() {
        let rows = vec![record(2024, "senior", "R", 50.0); 4];
        let hist = salary_histogram(&view(&rows)).expect("data");
        assert_eq!(hist.edges[0], 49.5);
        assert_eq!(hist.edges[HISTOGRAM_BINS], 50.5);
        assert_eq!(hist.counts.iter().sum::<usize>(), 4);
        assert!((hist.bin_width() - 1.0 / HISTOGRAM_BINS as f64).abs() < 1e-12);
    }

    #[test]
    fn histogram_bins_agree_with_edges() {
        // tenths of 0..=3 sit on interior edges where float division drifts
        let rows: Vec<_> = (0..=30)
            .map(|k| record(2024, "senior", "R", k as f64 * 0.1))
            .collect();
        let hist = salary_histogram(&view(&rows)).expect("data");

        let mut expected = vec![0usize; HISTOGRAM_BINS];
        for r in &rows {
            let bin = (0..HISTOGRAM_BINS)
                .find(|&i| {
                    r.usd >= hist.edges[i]
                        && (r.usd < hist.edges[i + 1] || i == HISTOGRAM_BINS - 1)
                })
                .expect("inside range");
            expected[bin] += 1;
        }
        assert_eq!(hist.counts, expected);
        assert_eq!(hist.counts.iter().sum::<usize>(), rows.len());
    }

    #[test]
    fn top_roles_tie_at_cutoff_keeps_first_seen() {
        // Nine clear leaders, then "Early" and "Late" tie for the tenth slot.
        let mut rows: Vec<_> = (0..9)
            .map(|i| record(2024, "senior", &format!("Lead {i}"), 10_000.0 + i as f64))
            .collect();
        rows.push(record(2024, "senior", "Early", 500.0));
        rows.push(record(2024, "senior", "Low", 100.0));
        rows.push(record(2024, "senior", "Late", 500.0));

        let top = top_roles(&view(&rows)).expect("data");
        assert_eq!(top.len(), TOP_ROLES_LIMIT);
        assert_eq!(top[0].role, "Early");
        assert!(top.iter().all(|r| r.role != "Late" && r.role != "Low"));
    }

    #[test]
    fn remote_breakdown_ties_keep_input_order() {
        let rows = vec![
            with("A", 1.0, "presencial", "USA"),
            with("A", 1.0, "remoto", "USA"),
            with("A", 1.0, "hibrido", "USA"),
            with("A", 1.0, "remoto", "USA"),
            with("A", 1.0, "hibrido", "USA"),
            with("A", 1.0, "presencial", "USA"),
        ];
        let modes: Vec<String> = remote_breakdown(&view(&rows))
            .expect("data")
            .into_iter()
            .map(|c| c.mode)
            .collect();
        assert_eq!(modes, vec!["presencial", "remoto", "hibrido"]);
    }

    #[test]
    fn remote_breakdown_counts_sum_to_view_len() {
        let rows = vec![
            with("A", 1.0, "hibrido", "USA"),
            with("A", 1.0, "remoto", "USA"),
            with("A", 1.0, "remoto", "USA"),
            with("A", 1.0, "presencial", "USA"),
        ];
        let counts = remote_breakdown(&view(&rows)).expect("data");
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), rows.len());
        assert_eq!(counts[0], RemoteCount { mode: "remoto".into(), count: 2 });
        assert_eq!(counts[1].mode, "hibrido");
    }

    #[test]
    fn country_average_only_uses_data_scientists() {
        let rows = vec![
            with(COUNTRY_ROLE, 100.0, "remoto", "USA"),
            with(COUNTRY_ROLE, 300.0, "remoto", "USA"),
            with(COUNTRY_ROLE, 50.0, "remoto", "BRA"),
            with("Data Engineer", 10_000.0, "remoto", "USA"),
            with("Data Engineer", 10_000.0, "remoto", "DEU"),
        ];
        let avg = country_average(&view(&rows)).expect("data");
        assert_eq!(
            avg,
            vec![
                CountryAverage { country_iso3: "BRA".into(), mean_usd: 50.0 },
                CountryAverage { country_iso3: "USA".into(), mean_usd: 200.0 },
            ]
        );
    }

    #[test]
    fn country_average_without_matching_role_is_empty() {
        let rows = vec![with("Data Engineer", 1.0, "remoto", "USA")];
        assert_eq!(country_average(&view(&rows)), Some(Vec::new()));
    }
}
