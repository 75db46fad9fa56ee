use std::sync::Arc;

use crate::{CameraTable, LocalTable, TableSink};

/// The two possible destinations, chosen per frame by configuration.
#[derive(Clone)]
pub struct TableRoute {
    pub local: Arc<dyn TableSink>,
    pub camera: Arc<dyn TableSink>,
}

impl TableRoute {
    pub fn new(local: Arc<dyn TableSink>, camera: Arc<dyn TableSink>) -> Self {
        Self { local, camera }
    }

    /// Fresh in-process tables with their default names.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(LocalTable::default()),
            Arc::new(CameraTable::default()),
        )
    }

    pub fn select(&self, use_camera_table: bool) -> &dyn TableSink {
        if use_camera_table {
            self.camera.as_ref()
        } else {
            self.local.as_ref()
        }
    }
}

impl std::fmt::Debug for TableRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRoute")
            .field("local", &self.local.name())
            .field("camera", &self.camera.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_by_flag() {
        let route = TableRoute::in_memory();
        assert_eq!(route.select(false).name(), "SmartDashboard");
        assert_eq!(route.select(true).name(), "camera");
    }
}
