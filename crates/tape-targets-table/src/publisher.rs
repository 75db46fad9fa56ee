use serde::{Deserialize, Serialize};
use tape_targets_core::TargetMeasurement;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::keys;
use crate::{PublishError, TableSink, TableValue};

/// PID gains tuned on the dashboard and forwarded to the robot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PidCoefficients {
    pub proportional: i32,
    pub integral: i32,
    pub derivative: i32,
}

/// Inputs for one frame's publish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameState {
    /// `None` when no target was found.
    pub measurement: Option<TargetMeasurement>,
    pub ignore_cam_data: bool,
    pub coefficients: PidCoefficients,
}

/// What a publish call actually wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishSummary {
    pub table: String,
    pub found: bool,
    /// Coefficient keys written this frame, in write order.
    pub coefficient_writes: Vec<String>,
}

/// Last coefficient values that reached a table. `None` never equals a
/// configured value, so the first frame always publishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CoefficientCache {
    derivative: Option<i32>,
    integral: Option<i32>,
    proportional: Option<i32>,
}

/// Writes target state every frame and coefficients on change.
///
/// The coefficient cache lives as long as the publisher, independent of
/// which table a frame is routed to.
#[derive(Debug, Default)]
pub struct StatePublisher {
    last: CoefficientCache,
}

impl StatePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every published coefficient; the next frame republishes all.
    pub fn reset(&mut self) {
        self.last = CoefficientCache::default();
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, sink, frame), fields(table = sink.name()))
    )]
    pub fn publish(
        &mut self,
        sink: &dyn TableSink,
        frame: &FrameState,
    ) -> Result<PublishSummary, PublishError> {
        match frame.measurement {
            Some(m) => sink.put_all(&[
                (keys::TARGET_X_FROM_CENTER, TableValue::Int(m.x_from_center)),
                (keys::TARGET_HEIGHT, TableValue::Int(m.height)),
                (keys::TARGET_WIDTH, TableValue::Int(m.width)),
                (keys::FOUND, TableValue::Bool(true)),
                (keys::IGNORE_CAM_DATA, TableValue::Bool(frame.ignore_cam_data)),
            ])?,
            None => sink.put(keys::FOUND, TableValue::Bool(false))?,
        }

        let coeffs = frame.coefficients;
        let mut coefficient_writes = Vec::new();
        for (key, value, cached) in [
            (keys::DERIVATIVE, coeffs.derivative, &mut self.last.derivative),
            (keys::INTEGRAL, coeffs.integral, &mut self.last.integral),
            (keys::PROPORTIONAL, coeffs.proportional, &mut self.last.proportional),
        ] {
            if *cached == Some(value) {
                continue;
            }
            sink.put(key, TableValue::Int(value))?;
            *cached = Some(value);
            log::info!("published {key}={value} to `{}`", sink.name());
            coefficient_writes.push(key.to_owned());
        }

        Ok(PublishSummary {
            table: sink.name().to_owned(),
            found: frame.measurement.is_some(),
            coefficient_writes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CameraTable, LocalTable};

    fn measured(x: i32) -> FrameState {
        FrameState {
            measurement: Some(TargetMeasurement {
                x_from_center: x,
                height: 20,
                width: 18,
            }),
            ..FrameState::default()
        }
    }

    #[test]
    fn found_frame_writes_the_whole_group() {
        let table = LocalTable::default();
        let mut publisher = StatePublisher::new();
        let mut frame = measured(-12);
        frame.ignore_cam_data = true;
        let summary = publisher.publish(&table, &frame).unwrap();
        assert!(summary.found);
        let snap = table.snapshot();
        assert_eq!(snap[keys::TARGET_X_FROM_CENTER], TableValue::Int(-12));
        assert_eq!(snap[keys::TARGET_HEIGHT], TableValue::Int(20));
        assert_eq!(snap[keys::TARGET_WIDTH], TableValue::Int(18));
        assert_eq!(snap[keys::FOUND], TableValue::Bool(true));
        assert_eq!(snap[keys::IGNORE_CAM_DATA], TableValue::Bool(true));
    }

    #[test]
    fn missing_target_writes_found_only() {
        let table = CameraTable::default();
        let mut publisher = StatePublisher::new();
        publisher.publish(&table, &measured(5)).unwrap();
        let rev = table.revision();
        let summary = publisher.publish(&table, &FrameState::default()).unwrap();
        assert!(!summary.found);
        assert!(summary.coefficient_writes.is_empty());
        assert_eq!(table.revision(), rev + 1);
        assert_eq!(table.get(keys::FOUND), Some(TableValue::Bool(false)));
        // stale offset stays; readers gate on `Found`
        assert_eq!(table.get(keys::TARGET_X_FROM_CENTER), Some(TableValue::Int(5)));
    }

    #[test]
    fn first_frame_publishes_all_coefficients_in_order() {
        let table = LocalTable::default();
        let mut publisher = StatePublisher::new();
        let summary = publisher.publish(&table, &FrameState::default()).unwrap();
        assert_eq!(
            summary.coefficient_writes,
            vec!["Derivative", "Integral", "Proportional"]
        );
        assert_eq!(table.get(keys::PROPORTIONAL), Some(TableValue::Int(0)));
    }

    #[test]
    fn failed_write_leaves_cache_untouched() {
        let table = CameraTable::default();
        let mut publisher = StatePublisher::new();
        table.disconnect();
        assert!(publisher.publish(&table, &FrameState::default()).is_err());

        table.reconnect();
        let summary = publisher.publish(&table, &FrameState::default()).unwrap();
        assert_eq!(summary.coefficient_writes.len(), 3);
    }

    #[test]
    fn reset_forces_republish() {
        let table = LocalTable::default();
        let mut publisher = StatePublisher::new();
        publisher.publish(&table, &FrameState::default()).unwrap();
        assert!(publisher
            .publish(&table, &FrameState::default())
            .unwrap()
            .coefficient_writes
            .is_empty());
        publisher.reset();
        assert_eq!(
            publisher
                .publish(&table, &FrameState::default())
                .unwrap()
                .coefficient_writes
                .len(),
            3
        );
    }
}
