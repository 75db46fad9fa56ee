use std::collections::BTreeMap;

use crate::{PublishError, TableValue};

/// Point-in-time copy of a table, ordered by key.
pub type TableSnapshot = BTreeMap<String, TableValue>;

/// Destination for published target state.
///
/// Implementations are shared with reader threads (the robot's control loop
/// or a dashboard widget), so every method takes `&self`.
pub trait TableSink: Send + Sync {
    fn name(&self) -> &str;

    /// Write a single entry.
    fn put(&self, key: &str, value: TableValue) -> Result<(), PublishError> {
        self.put_all(&[(key, value)])
    }

    /// Write every entry under one exclusive access scope. Readers observe
    /// either none or all of the batch.
    fn put_all(&self, entries: &[(&str, TableValue)]) -> Result<(), PublishError>;

    fn get(&self, key: &str) -> Option<TableValue>;

    /// Consistent copy of every entry.
    fn snapshot(&self) -> TableSnapshot;
}
