use std::sync::{Arc, OnceLock};

use anyhow::Result;

use super::model::SalaryDataset;

/// Load-once holder for the startup dataset.
///
/// The first successful load is kept for the life of the process; later
/// calls return the same `Arc` without running the loader. Failed loads are
/// not stored, so the next call retries.
pub struct DatasetCache {
    slot: OnceLock<Arc<SalaryDataset>>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        DatasetCache {
            slot: OnceLock::new(),
        }
    }

    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<SalaryDataset>>
    where
        F: FnOnce() -> Result<SalaryDataset>,
    {
        if let Some(ds) = self.slot.get() {
            log::debug!("Reusing cached dataset ({} records)", ds.len());
            return Ok(Arc::clone(ds));
        }
        let loaded = Arc::new(load()?);
        Ok(Arc::clone(self.slot.get_or_init(|| loaded)))
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

static STARTUP_DATASET: DatasetCache = DatasetCache::new();

/// Process-wide cache used by `main`.
pub fn startup_dataset() -> &'static DatasetCache {
    &STARTUP_DATASET
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;
    use std::cell::Cell;

    #[test]
    fn second_call_reuses_first_load() {
        let cache = DatasetCache::new();
        let calls = Cell::new(0);
        let load = || {
            calls.set(calls.get() + 1);
            Ok(SalaryDataset::from_records(vec![record(
                2024,
                "senior",
                "Data Scientist",
                1.0,
            )]))
        };

        let a = cache.get_or_load(load).expect("first");
        let b = cache.get_or_load(load).expect("second");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cache = DatasetCache::new();
        assert!(cache
            .get_or_load(|| Err(anyhow::anyhow!("offline")))
            .is_err());

        let ds = cache
            .get_or_load(|| Ok(SalaryDataset::default()))
            .expect("retry");
        assert!(ds.is_empty());

        let again = cache
            .get_or_load(|| Err(anyhow::anyhow!("should not run")))
            .expect("cached");
        assert!(Arc::ptr_eq(&ds, &again));
    }
}
