use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let analysis = ctx
        .analysis
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("form analysis missing"))?;
    let rep_count = ctx.phases.as_ref().map(|p| p.rep_count()).unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("formqc v{}\n", version));
    out.push_str(&format!(
        "Input: {} ({} frames @ {:.2} fps)\n",
        ctx.input.display(),
        ctx.frames.len(),
        ctx.fps
    ));
    if let Some(camera) = &ctx.camera {
        out.push_str(&format!("Camera: {}\n", camera.message));
    }
    out.push_str(&format!("Reps: {}\n", rep_count));
    out.push_str(&format!(
        "Score: {}/100 ({})\n",
        analysis.final_score.final_score,
        analysis.final_score.grade.label()
    ));

    let errors = analysis.error_components();
    if errors.is_empty() {
        out.push_str("Errors: none\n");
    } else {
        out.push_str(&format!("Errors: {}\n", errors.join(", ")));
    }

    Ok(out)
}
