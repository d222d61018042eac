use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::pose::validation;

pub struct Stage2Validate;

impl Stage2Validate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Validate {
    fn name(&self) -> &'static str {
        "stage2_validate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let implementation = ctx.exercise.implementation();
        let required = implementation.required_landmarks();
        let mut batch = validation::validate_batch(&ctx.frames, required);
        if !batch.overall_valid && !ctx.frames.is_empty() {
            batch.recommendation = Some(implementation.visibility_recommendation().to_string());
        }

        if batch.overall_valid {
            info!(
                valid_frames = batch.valid_frame_count,
                total_frames = batch.total_frame_count,
                valid_pct = batch.valid_frame_percentage * 100.0,
                "landmark_validation_ok"
            );
        } else {
            warn!(
                valid_frames = batch.valid_frame_count,
                total_frames = batch.total_frame_count,
                valid_pct = batch.valid_frame_percentage * 100.0,
                "landmark_validation_below_threshold"
            );
        }
        ctx.warnings.extend(batch.warnings.iter().cloned());

        ctx.validation = Some(batch);
        Ok(())
    }
}
