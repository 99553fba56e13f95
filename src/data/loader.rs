use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use thiserror::Error;

use super::model::{SalaryDataset, SalaryRecord};

/// Published copy of the salary table.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures reaching the remote table.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load from a URL (`http://` / `https://`) or a local path.
pub fn load_source(source: &str, timeout: Duration) -> Result<SalaryDataset> {
    if is_url(source) {
        fetch_url(source, timeout)
    } else {
        load_file(Path::new(source))
    }
}

pub fn is_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetch the CSV over HTTP(S) and parse it.
pub fn fetch_url(url: &str, timeout: Duration) -> Result<SalaryDataset> {
    let agent = ureq::AgentBuilder::new().timeout(timeout).build();

    log::info!("Fetching salary table from {url}");
    let response = agent.get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => SourceError::Status {
            url: url.to_string(),
            status,
        },
        ureq::Error::Transport(t) => SourceError::Transport {
            url: url.to_string(),
            source: Box::new(t),
        },
    })?;

    parse_csv(response.into_reader()).with_context(|| format!("parsing CSV from {url}"))
}

/// Read a local CSV copy of the table.
pub fn load_file(path: &Path) -> Result<SalaryDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_csv(file).with_context(|| format!("parsing CSV {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse the salary table.
///
/// Required columns: `ano, senioridade, contrato, tamanho_empresa, cargo,
/// remoto, residencia_iso3, usd`. Any other column is ignored.
pub fn parse_csv<R: Read>(reader: R) -> Result<SalaryDataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_no, result) in csv_reader.deserialize::<SalaryRecord>().enumerate() {
        let rec = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        if !rec.usd.is_finite() || rec.usd < 0.0 {
            bail!("CSV row {}: invalid salary {}", row_no + 1, rec.usd);
        }
        records.push(rec);
    }

    Ok(SalaryDataset::from_records(records))
}
