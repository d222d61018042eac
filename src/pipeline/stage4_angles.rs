use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::series;

pub struct Stage4Angles;

impl Stage4Angles {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Angles {
    fn name(&self) -> &'static str {
        "stage4_angles"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let calc = ctx.exercise.implementation().calculate_form(&ctx.frames);
        info!(
            frames = ctx.frames.len(),
            torso_valid = series::valid_values(&calc.torso).len(),
            quad_valid = series::valid_values(&calc.quad).len(),
            ankle_valid = series::valid_values(&calc.ankle).len(),
            "angle_series_ready"
        );
        ctx.calculation = Some(calc);
        Ok(())
    }
}
