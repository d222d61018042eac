use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Camera;

impl Stage3Camera {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Camera {
    fn name(&self) -> &'static str {
        "stage3_camera"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(info) = ctx
            .exercise
            .implementation()
            .estimate_camera_angle(&ctx.frames)
        else {
            return Ok(());
        };

        info!(
            angle_estimate = ?info.angle_estimate,
            should_reject = info.should_reject,
            "camera_angle_estimated"
        );

        // The one pipeline-level refusal: everything downstream measures in
        // the image plane and an extreme viewpoint poisons every metric.
        if info.should_reject {
            let message = info.message.clone();
            ctx.camera = Some(info);
            bail!(
                "{} Please record again with the person standing perpendicular to the camera for accurate measurements.",
                message
            );
        }

        ctx.camera = Some(info);
        Ok(())
    }
}
