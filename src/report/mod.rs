//! Report layer: everything the dashboard draws for one filter selection.
//!
//! [`render`] is pure and cheap enough to call on every UI frame.

pub mod aggregates;
pub mod format;
pub mod metrics;

use serde::Serialize;

use crate::data::filter::{self, FilterSelection, FilteredView};
use crate::data::model::SalaryDataset;

use aggregates::{CountryAverage, Histogram, RemoteCount, RoleAverage};
use metrics::Metrics;

#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub metrics: Metrics,
    pub top_roles: Option<Vec<RoleAverage>>,
    pub histogram: Option<Histogram>,
    pub remote_modes: Option<Vec<RemoteCount>>,
    pub country_average: Option<Vec<CountryAverage>>,
    pub view: FilteredView<'a>,
}

/// Filter the dataset and derive metrics and chart tables from the result.
pub fn render<'a>(dataset: &'a SalaryDataset, selection: &FilterSelection) -> Report<'a> {
    let view = filter::apply(dataset, selection);
    Report {
        metrics: metrics::summarize(&view),
        top_roles: aggregates::top_roles(&view),
        histogram: aggregates::salary_histogram(&view),
        remote_modes: aggregates::remote_breakdown(&view),
        country_average: aggregates::country_average(&view),
        view,
    }
}
