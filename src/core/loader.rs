use crate::domain::model::{HiringItem, HiringItemMap};
use crate::utils::error::LoadError;
use std::io::Read;

/// Parses a JSON array of hiring items and groups the named ones by list id.
///
/// The loader keeps no state between calls; one instance can be shared by
/// any number of callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemLoader;

impl ItemLoader {
    pub fn new() -> Self {
        Self
    }

    /// Reads `source` to the end and returns the grouped items.
    ///
    /// Malformed input fails the whole load; there is no partial result.
    pub fn load<R: Read>(&self, source: R) -> Result<HiringItemMap, LoadError> {
        let items: Vec<HiringItem> = serde_json::from_reader(source)?;
        Ok(self.group_items(items))
    }

    pub fn load_str(&self, source: &str) -> Result<HiringItemMap, LoadError> {
        self.load(source.as_bytes())
    }

    pub fn load_slice(&self, source: &[u8]) -> Result<HiringItemMap, LoadError> {
        self.load(source)
    }

    /// Drops items with a blank name, groups the rest by list id and sorts
    /// each group by name in plain code-point order.
    pub fn group_items(&self, items: Vec<HiringItem>) -> HiringItemMap {
        let parsed = items.len();
        let mut map = HiringItemMap::new();

        for item in items.into_iter().filter(|item| !item.has_blank_name()) {
            map.entry(item.list_id).or_default().push(item);
        }

        // Stable, so equal names keep their input order.
        for group in map.values_mut() {
            group.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        }

        let kept: usize = map.values().map(Vec::len).sum();
        tracing::debug!(
            "Parsed {} hiring items, dropped {} without a name, {} groups",
            parsed,
            parsed - kept,
            map.len()
        );

        map
    }
}
