use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{PublishError, TableSink, TableSnapshot, TableValue};

#[derive(Debug, Default)]
struct CameraState {
    entries: TableSnapshot,
    revision: u64,
    reachable: bool,
}

/// The shared `camera` table read by the robot's aiming loop.
///
/// Each [`TableSink::put_all`] call is one transaction: the entries are
/// applied under the table lock and the commit revision is bumped once.
/// While the table is marked unreachable every write fails with
/// [`PublishError::Unreachable`] and nothing is applied.
#[derive(Debug)]
pub struct CameraTable {
    name: String,
    state: Mutex<CameraState>,
}

impl CameraTable {
    pub const DEFAULT_NAME: &'static str = "camera";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(CameraState {
                reachable: true,
                ..CameraState::default()
            }),
        }
    }

    fn read(&self) -> MutexGuard<'_, CameraState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of committed transactions.
    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    /// Snapshot together with the revision it was taken at.
    pub fn snapshot_at_revision(&self) -> (u64, TableSnapshot) {
        let state = self.read();
        (state.revision, state.entries.clone())
    }

    /// Mark the table unreachable, e.g. after the transport dropped.
    pub fn disconnect(&self) {
        log::warn!("camera table `{}` marked unreachable", self.name);
        self.read().reachable = false;
    }

    pub fn reconnect(&self) {
        log::info!("camera table `{}` reachable again", self.name);
        self.read().reachable = true;
    }

    pub fn is_reachable(&self) -> bool {
        self.read().reachable
    }
}

impl Default for CameraTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl TableSink for CameraTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn put_all(&self, entries: &[(&str, TableValue)]) -> Result<(), PublishError> {
        let mut state = self.state.lock().map_err(|_| PublishError::Poisoned {
            table: self.name.clone(),
        })?;
        if !state.reachable {
            return Err(PublishError::Unreachable {
                table: self.name.clone(),
            });
        }
        for (key, value) in entries {
            state.entries.insert((*key).to_owned(), *value);
        }
        state.revision += 1;
        log::trace!(
            "camera table `{}` commit r{} ({} entries)",
            self.name,
            state.revision,
            entries.len()
        );
        Ok(())
    }

    fn get(&self, key: &str) -> Option<TableValue> {
        self.read().entries.get(key).copied()
    }

    fn snapshot(&self) -> TableSnapshot {
        self.read().entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_batch_is_one_revision() {
        let t = CameraTable::default();
        assert_eq!(t.revision(), 0);
        t.put_all(&[("A", TableValue::Int(1)), ("B", TableValue::Bool(true))]).unwrap();
        t.put("C", TableValue::Int(2)).unwrap();
        let (rev, snap) = t.snapshot_at_revision();
        assert_eq!(rev, 2);
        assert_eq!(snap.len(), 3);
    }

    #[test]
    fn unreachable_table_rejects_and_keeps_state() {
        let t = CameraTable::new("camera");
        t.put("A", TableValue::Int(1)).unwrap();
        t.disconnect();
        assert!(!t.is_reachable());
        assert_eq!(
            t.put_all(&[("A", TableValue::Int(2)), ("B", TableValue::Int(3))]),
            Err(PublishError::Unreachable {
                table: "camera".into()
            })
        );
        assert_eq!(t.get("A"), Some(TableValue::Int(1)));
        assert_eq!(t.get("B"), None);
        assert_eq!(t.revision(), 1);

        t.reconnect();
        t.put("B", TableValue::Int(3)).unwrap();
        assert_eq!(t.get("B"), Some(TableValue::Int(3)));
    }
}
