use tape_targets_select::{alignment, measure, TargetSelector};
use tape_targets_table::{FrameState, PublishError, StatePublisher, TableRoute};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::config::{ConfigError, VisionConfig};
use crate::io::{Frame, FrameReport};
use crate::overlay::build_overlay;

/// Errors that abort processing of a frame.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// What happened to one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Target processing is switched off; the raw frame is shown as is.
    Disabled,
    /// The operator is looking at the threshold mask; no analysis ran.
    BinaryPreview,
    Processed(Box<FrameReport>),
}

impl FrameOutcome {
    pub fn report(&self) -> Option<&FrameReport> {
        match self {
            FrameOutcome::Processed(report) => Some(report),
            _ => None,
        }
    }
}

/// Frame-synchronous pass: select, measure, publish.
///
/// The publisher's coefficient cache lives as long as the pipeline, so one
/// pipeline should be kept for the whole session.
pub struct TargetPipeline {
    route: TableRoute,
    publisher: StatePublisher,
}

impl TargetPipeline {
    pub fn new(route: TableRoute) -> Self {
        Self {
            route,
            publisher: StatePublisher::new(),
        }
    }

    #[inline]
    pub fn route(&self) -> &TableRoute {
        &self.route
    }

    /// Process one frame with the configuration current at that moment.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, frame, config),
            fields(width = frame.width, height = frame.height, candidates = frame.candidates.len())
        )
    )]
    pub fn process_frame(
        &mut self,
        frame: &Frame,
        config: &VisionConfig,
    ) -> Result<FrameOutcome, PipelineError> {
        config.validate()?;

        let flags = &config.flags;
        if !flags.do_target_processing {
            return Ok(FrameOutcome::Disabled);
        }
        if flags.show_binary_image {
            return Ok(FrameOutcome::BinaryPreview);
        }

        let selector = TargetSelector::new(config.select.clone());
        let selection = selector.select(frame.candidate_polygons());

        let measurement = measure(&selection.target, config.crosshair.horizontal_px);
        let aligned = alignment(&selection.target, &config.crosshair);
        let overlay = build_overlay(
            &selection,
            aligned,
            &config.crosshair,
            flags,
            (frame.width, frame.height),
        );

        let sink = self.route.select(flags.use_camera_table);
        let published = self.publisher.publish(
            sink,
            &FrameState {
                measurement,
                ignore_cam_data: flags.ignore_cam_data,
                coefficients: config.pid,
            },
        )?;

        match measurement {
            Some(m) => log::debug!(
                "target at {} px from aim point ({}x{}) -> `{}`",
                m.x_from_center,
                m.width,
                m.height,
                published.table
            ),
            None => log::debug!("no target -> `{}`", published.table),
        }

        Ok(FrameOutcome::Processed(Box::new(FrameReport {
            frame_width: frame.width,
            frame_height: frame.height,
            accepted: selection.accepted,
            filtered: selection.filtered,
            rejected: selection.rejected,
            target: selection.target,
            measurement,
            alignment: aligned,
            published,
            overlay,
        })))
    }
}
