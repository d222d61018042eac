//! Per-frame TSV export for downstream plotting. One row per frame, missing
//! values as NA, plus an `in_rep` column marking the active phases.

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let calc = ctx.calculation.as_ref().context("angle series missing")?;
    let phases = ctx.phases.as_ref().context("phases missing")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "frame\ttorso_angle\tquad_angle\tankle_angle\ttorso_asymmetry\tquad_asymmetry\tankle_asymmetry\tin_rep"
    )?;
    for frame in 0..ctx.frames.len() {
        let in_rep = phases
            .reps
            .iter()
            .any(|rep| frame >= rep.start_frame && frame <= rep.end_frame);
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            frame,
            cell(&calc.torso, frame),
            cell(&calc.quad, frame),
            cell(&calc.ankle, frame),
            cell(&calc.torso_asymmetry, frame),
            cell(&calc.quad_asymmetry, frame),
            cell(&calc.ankle_asymmetry, frame),
            if in_rep { 1 } else { 0 }
        )?;
    }

    Ok(())
}

fn cell(series: &[Option<f64>], frame: usize) -> String {
    match series.get(frame).copied().flatten() {
        Some(v) => format!("{:.3}", v),
        None => "NA".to_string(),
    }
}
