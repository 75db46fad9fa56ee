use std::sync::{Mutex, PoisonError};

use crate::{PublishError, TableSink, TableSnapshot, TableValue};

/// The dashboard's own table, living in this process.
#[derive(Debug)]
pub struct LocalTable {
    name: String,
    entries: Mutex<TableSnapshot>,
}

impl LocalTable {
    pub const DEFAULT_NAME: &'static str = "SmartDashboard";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Mutex::new(TableSnapshot::new()),
        }
    }
}

impl Default for LocalTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl TableSink for LocalTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn put_all(&self, entries: &[(&str, TableValue)]) -> Result<(), PublishError> {
        let mut table = self.entries.lock().map_err(|_| PublishError::Poisoned {
            table: self.name.clone(),
        })?;
        for (key, value) in entries {
            table.insert((*key).to_owned(), *value);
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<TableValue> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }

    fn snapshot(&self) -> TableSnapshot {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
