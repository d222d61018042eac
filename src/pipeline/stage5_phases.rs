use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage5Phases;

impl Stage5Phases {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Phases {
    fn name(&self) -> &'static str {
        "stage5_phases"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let calc = ctx.calculation.as_ref().context("angle series missing")?;
        let phases = ctx.exercise.implementation().detect_phases(calc, ctx.fps);
        info!(reps = phases.rep_count(), fps = ctx.fps, "phases_detected");
        ctx.phases = Some(phases);
        Ok(())
    }
}
