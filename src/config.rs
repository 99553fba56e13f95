use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::data::filter::{Dimension, FilterSelection};
use crate::data::loader::DEFAULT_DATA_URL;
use crate::data::model::SalaryDataset;

/// Salary dashboard for the data-science field.
#[derive(Debug, Clone, Parser)]
#[command(name = "salary-dash", version, about)]
pub struct Cli {
    /// CSV source: an http(s) URL or a local path.
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    pub source: String,

    /// Network timeout for fetching the source, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Write the report as JSON to this path and exit instead of opening a window.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Headless filter: allowed year (repeatable). Omit to allow all.
    #[arg(long = "year")]
    pub years: Vec<i32>,

    /// Headless filter: allowed seniority (repeatable).
    #[arg(long = "seniority")]
    pub seniorities: Vec<String>,

    /// Headless filter: allowed contract type (repeatable).
    #[arg(long = "contract")]
    pub contracts: Vec<String>,

    /// Headless filter: allowed company size (repeatable).
    #[arg(long = "company-size")]
    pub company_sizes: Vec<String>,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Selection for headless export: dimensions not given on the
    /// command line select every value in the dataset.
    pub fn selection(&self, dataset: &SalaryDataset) -> FilterSelection {
        let mut sel = FilterSelection::all(dataset);
        if !self.years.is_empty() {
            sel.years = self.years.iter().copied().collect();
        }
        let text_dims = [
            (Dimension::Seniority, &self.seniorities),
            (Dimension::Contract, &self.contracts),
            (Dimension::CompanySize, &self.company_sizes),
        ];
        for (dim, values) in text_dims {
            if values.is_empty() {
                continue;
            }
            sel.select_none(dim);
            for v in values {
                sel.set(dim, v, true);
            }
        }
        sel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    #[test]
    fn defaults_point_at_published_table() {
        let cli = Cli::parse_from(["salary-dash"]);
        assert_eq!(cli.source, DEFAULT_DATA_URL);
        assert_eq!(cli.timeout(), Duration::from_secs(30));
        assert!(cli.export.is_none());
    }

    #[test]
    fn unspecified_dimensions_select_everything() {
        let ds = SalaryDataset::from_records(vec![
            record(2023, "junior", "A", 1.0),
            record(2024, "senior", "B", 2.0),
        ]);
        let cli = Cli::parse_from([
            "salary-dash",
            "--year",
            "2024",
            "--seniority",
            "senior",
            "--seniority",
            "junior",
        ]);
        let sel = cli.selection(&ds);
        assert_eq!(sel.years.iter().copied().collect::<Vec<_>>(), vec![2024]);
        assert_eq!(sel.seniorities.len(), 2);
        assert_eq!(sel.contracts, ds.contracts);
        assert_eq!(sel.company_sizes, ds.company_sizes);
    }
}
