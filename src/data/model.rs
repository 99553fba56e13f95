use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single salary observation.
///
/// Field names follow the source CSV header (`ano`, `senioridade`, …);
/// columns not listed here are ignored when parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "senioridade")]
    pub seniority: String,
    #[serde(rename = "contrato")]
    pub contract: String,
    #[serde(rename = "tamanho_empresa")]
    pub company_size: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "remoto")]
    pub remote: String,
    #[serde(rename = "residencia_iso3")]
    pub country_iso3: String,
    /// Annual salary in USD.
    pub usd: f64,
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct values of each filter column.
#[derive(Debug, Clone, Default)]
pub struct SalaryDataset {
    /// All records, in source order.
    pub records: Vec<SalaryRecord>,
    pub years: BTreeSet<i32>,
    pub seniorities: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl SalaryDataset {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        let mut dataset = SalaryDataset::default();
        for rec in &records {
            dataset.years.insert(rec.year);
            dataset.seniorities.insert(rec.seniority.clone());
            dataset.contracts.insert(rec.contract.clone());
            dataset.company_sizes.insert(rec.company_size.clone());
        }
        dataset.records = records;
        dataset
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shorthand used by tests across the crate.
#[cfg(test)]
pub(crate) fn record(year: i32, seniority: &str, role: &str, usd: f64) -> SalaryRecord {
    SalaryRecord {
        year,
        seniority: seniority.to_string(),
        contract: "integral".to_string(),
        company_size: "media".to_string(),
        role: role.to_string(),
        remote: "remoto".to_string(),
        country_iso3: "USA".to_string(),
        usd,
    }
}
