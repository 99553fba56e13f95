use std::collections::BTreeSet;

use serde::Serialize;

use super::model::{SalaryDataset, SalaryRecord};

// ---------------------------------------------------------------------------
// Filter dimensions
// ---------------------------------------------------------------------------

/// The four columns the side panel filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Year,
    Seniority,
    Contract,
    CompanySize,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Year,
        Dimension::Seniority,
        Dimension::Contract,
        Dimension::CompanySize,
    ];

    /// Label shown in the side panel.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Year => "Year",
            Dimension::Seniority => "Seniority",
            Dimension::Contract => "Contract type",
            Dimension::CompanySize => "Company Size",
        }
    }

    /// Sorted distinct values the dataset offers for this dimension.
    pub fn options(self, dataset: &SalaryDataset) -> Vec<String> {
        match self {
            Dimension::Year => dataset.years.iter().map(|y| y.to_string()).collect(),
            Dimension::Seniority => dataset.seniorities.iter().cloned().collect(),
            Dimension::Contract => dataset.contracts.iter().cloned().collect(),
            Dimension::CompanySize => dataset.company_sizes.iter().cloned().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSelection – allowed values per dimension
// ---------------------------------------------------------------------------

/// Allowed values per filter dimension.
///
/// An empty set matches nothing. Values that do not occur in the dataset
/// are accepted and simply never match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub seniorities: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl FilterSelection {
    /// Select every value present in the dataset (the initial state).
    pub fn all(dataset: &SalaryDataset) -> Self {
        FilterSelection {
            years: dataset.years.clone(),
            seniorities: dataset.seniorities.clone(),
            contracts: dataset.contracts.clone(),
            company_sizes: dataset.company_sizes.clone(),
        }
    }

    /// Whether a record passes all four membership tests.
    pub fn matches(&self, rec: &SalaryRecord) -> bool {
        self.years.contains(&rec.year)
            && self.seniorities.contains(&rec.seniority)
            && self.contracts.contains(&rec.contract)
            && self.company_sizes.contains(&rec.company_size)
    }

    /// Whether `value` is currently selected for `dim`.
    pub fn contains(&self, dim: Dimension, value: &str) -> bool {
        match dim {
            Dimension::Year => value
                .parse::<i32>()
                .map(|y| self.years.contains(&y))
                .unwrap_or(false),
            Dimension::Seniority => self.seniorities.contains(value),
            Dimension::Contract => self.contracts.contains(value),
            Dimension::CompanySize => self.company_sizes.contains(value),
        }
    }

    /// Number of selected values for `dim`.
    pub fn count(&self, dim: Dimension) -> usize {
        match dim {
            Dimension::Year => self.years.len(),
            Dimension::Seniority => self.seniorities.len(),
            Dimension::Contract => self.contracts.len(),
            Dimension::CompanySize => self.company_sizes.len(),
        }
    }

    /// Add or remove a single value. Unparseable years are ignored.
    pub fn set(&mut self, dim: Dimension, value: &str, selected: bool) {
        match dim {
            Dimension::Year => {
                let Ok(year) = value.parse::<i32>() else {
                    return;
                };
                if selected {
                    self.years.insert(year);
                } else {
                    self.years.remove(&year);
                }
            }
            Dimension::Seniority => toggle_str(&mut self.seniorities, value, selected),
            Dimension::Contract => toggle_str(&mut self.contracts, value, selected),
            Dimension::CompanySize => toggle_str(&mut self.company_sizes, value, selected),
        }
    }

    /// Flip a single value.
    pub fn toggle(&mut self, dim: Dimension, value: &str) {
        let selected = self.contains(dim, value);
        self.set(dim, value, !selected);
    }

    /// Select every dataset value for `dim`.
    pub fn select_all(&mut self, dim: Dimension, dataset: &SalaryDataset) {
        match dim {
            Dimension::Year => self.years = dataset.years.clone(),
            Dimension::Seniority => self.seniorities = dataset.seniorities.clone(),
            Dimension::Contract => self.contracts = dataset.contracts.clone(),
            Dimension::CompanySize => self.company_sizes = dataset.company_sizes.clone(),
        }
    }

    /// Deselect every value for `dim`.
    pub fn select_none(&mut self, dim: Dimension) {
        match dim {
            Dimension::Year => self.years.clear(),
            Dimension::Seniority => self.seniorities.clear(),
            Dimension::Contract => self.contracts.clear(),
            Dimension::CompanySize => self.company_sizes.clear(),
        }
    }
}

fn toggle_str(set: &mut BTreeSet<String>, value: &str, selected: bool) {
    if selected {
        set.insert(value.to_string());
    } else {
        set.remove(value);
    }
}

// ---------------------------------------------------------------------------
// FilteredView
// ---------------------------------------------------------------------------

/// Records passing a [`FilterSelection`], in dataset order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    pub rows: Vec<&'a SalaryRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn from_rows(rows: Vec<&'a SalaryRecord>) -> Self {
        FilteredView { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SalaryRecord> + '_ {
        self.rows.iter().copied()
    }
}

/// Return the records that pass every dimension of `selection`.
pub fn apply<'a>(dataset: &'a SalaryDataset, selection: &FilterSelection) -> FilteredView<'a> {
    let rows = dataset
        .records
        .iter()
        .filter(|rec| selection.matches(rec))
        .collect();
    FilteredView::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn dataset() -> SalaryDataset {
        SalaryDataset::from_records(vec![
            record(2022, "junior", "Data Analyst", 50_000.0),
            record(2023, "senior", "Data Scientist", 140_000.0),
            record(2024, "senior", "Data Engineer", 160_000.0),
            record(2024, "pleno", "Data Scientist", 110_000.0),
        ])
    }

    #[test]
    fn full_selection_keeps_every_record_in_order() {
        let ds = dataset();
        let view = apply(&ds, &FilterSelection::all(&ds));
        assert_eq!(view.len(), ds.len());
        let years: Vec<i32> = view.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2022, 2023, 2024, 2024]);
    }

    #[test]
    fn empty_set_on_any_dimension_matches_nothing() {
        let ds = dataset();
        for dim in Dimension::ALL {
            let mut sel = FilterSelection::all(&ds);
            sel.select_none(dim);
            assert!(apply(&ds, &sel).is_empty(), "{dim:?}");
        }
    }

    #[test]
    fn selection_narrows_view() {
        let ds = dataset();
        let mut sel = FilterSelection::all(&ds);
        sel.set(Dimension::Year, "2024", false);
        sel.set(Dimension::Seniority, "junior", false);
        let view = apply(&ds, &sel);
        assert_eq!(view.len(), 1);
        assert_eq!(view.rows[0].role, "Data Scientist");
        assert!(view.len() <= ds.len());
    }

    #[test]
    fn unknown_values_are_inert() {
        let ds = dataset();
        let mut sel = FilterSelection::all(&ds);
        sel.set(Dimension::Contract, "freelance-on-mars", true);
        sel.set(Dimension::Year, "not-a-year", true);
        assert_eq!(apply(&ds, &sel).len(), ds.len());

        let mut only_unknown = FilterSelection::all(&ds);
        only_unknown.select_none(Dimension::Year);
        only_unknown.set(Dimension::Year, "1999", true);
        assert!(apply(&ds, &only_unknown).is_empty());
    }

    #[test]
    fn toggle_and_select_all_round_trip() {
        let ds = dataset();
        let mut sel = FilterSelection::all(&ds);
        sel.toggle(Dimension::Seniority, "senior");
        assert!(!sel.contains(Dimension::Seniority, "senior"));
        assert_eq!(sel.count(Dimension::Seniority), 2);
        sel.select_all(Dimension::Seniority, &ds);
        assert_eq!(sel, FilterSelection::all(&ds));
    }

    #[test]
    fn options_are_sorted_strings() {
        let ds = dataset();
        assert_eq!(Dimension::Year.options(&ds), vec!["2022", "2023", "2024"]);
        assert_eq!(
            Dimension::Seniority.options(&ds),
            vec!["junior", "pleno", "senior"]
        );
    }
}
