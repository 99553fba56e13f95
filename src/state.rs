use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::filter::{Dimension, FilterSelection};
use crate::data::model::SalaryDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Only the dataset and the selection live here; the report itself is
/// re-derived from them every frame.
pub struct AppState {
    /// Dataset being viewed (None only if nothing has loaded yet).
    pub dataset: Option<Arc<SalaryDataset>>,

    /// Current side-panel selection.
    pub selection: FilterSelection,

    /// Colours for remote-work modes, stable across filter changes.
    pub remote_colors: ColorMap,

    /// Label of where the dataset came from (URL or path).
    pub source_label: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: FilterSelection::default(),
            remote_colors: ColorMap::new(std::iter::empty::<&str>()),
            source_label: String::new(),
            status_message: None,
        }
    }
}

impl AppState {
    pub fn with_dataset(dataset: Arc<SalaryDataset>, source: &str) -> Self {
        let mut state = Self::default();
        state.set_dataset(dataset, source);
        state
    }

    /// Ingest a newly loaded dataset and select everything.
    pub fn set_dataset(&mut self, dataset: Arc<SalaryDataset>, source: &str) {
        self.selection = FilterSelection::all(&dataset);
        self.remote_colors = ColorMap::new(dataset.records.iter().map(|r| r.remote.as_str()));
        self.source_label = source.to_string();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Flip one value in a dimension's selection.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        self.selection.toggle(dim, value);
        log::debug!("{} filter toggled: {value}", dim.label());
    }

    /// Select all values in a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            self.selection.select_all(dim, ds);
            log::debug!("{} filter: all selected", dim.label());
        }
    }

    /// Deselect all values in a dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selection.select_none(dim);
        log::debug!("{} filter: none selected", dim.label());
    }
}
