//! Data layer: core types, loading, caching, and filtering.
//!
//! Architecture:
//! ```text
//!  https://… .csv  /  local .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  fetch + parse → SalaryDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  cache    │  load once, Arc<SalaryDataset> for the process
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  FilterSelection → FilteredView
//!   └──────────┘
//! ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
