use super::{SlotStorage, StorageResult};
use std::collections::HashMap;

/// Process-local slot storage. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: HashMap<String, String>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with one slot already populated.
    pub fn with_slot(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(name.into(), value.into());
        Self { slots }
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(name).cloned())
    }

    fn write_slot(&mut self, name: &str, value: &str) -> StorageResult<()> {
        self.slots.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&mut self, name: &str) -> StorageResult<()> {
        self.slots.remove(name);
        Ok(())
    }
}
