use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage6Analysis;

impl Stage6Analysis {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Analysis {
    fn name(&self) -> &'static str {
        "stage6_analysis"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let calc = ctx.calculation.as_ref().context("angle series missing")?;
        let phases = ctx.phases.as_ref().context("phases missing")?;
        let analysis = ctx.exercise.implementation().analyze_form(
            calc,
            phases,
            ctx.fps,
            ctx.camera.as_ref(),
            &ctx.frames,
            ctx.validation.as_ref(),
        );
        info!(
            final_score = analysis.final_score.final_score,
            grade = analysis.final_score.grade.label(),
            error_components = analysis.error_components().len(),
            "form_analysis_ready"
        );
        ctx.analysis = Some(analysis);
        Ok(())
    }
}
