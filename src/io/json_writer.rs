//! Explicit domain-to-schema mapping for the v1 report.

use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis;
use crate::ctx::Ctx;
use crate::schema::v1;

pub fn build_report(ctx: &Ctx) -> Result<v1::FormQcV1> {
    let implementation = ctx.exercise.implementation();
    let calc = ctx.calculation.as_ref().context("angle series missing")?;
    let phases = ctx.phases.as_ref().context("phases missing")?;
    let analysis = ctx.analysis.as_ref().context("form analysis missing")?;

    let input_meta = v1::InputMeta {
        source: ctx.source.clone(),
        frames: ctx.frames.len() as u64,
        fps: ctx.fps,
        frame_skip: ctx.frame_skip as u64,
        exercise_id: implementation.id().to_string(),
        exercise_name: implementation.name().to_string(),
    };

    let validation = ctx.validation.as_ref().map(|batch| v1::Validation {
        overall_valid: batch.overall_valid,
        valid_frame_count: batch.valid_frame_count as u64,
        total_frame_count: batch.total_frame_count as u64,
        valid_frame_percentage: batch.valid_frame_percentage,
        quality_score: batch.quality_score,
        missing_critical_frames: batch
            .missing_critical_frames
            .iter()
            .map(|&f| f as u64)
            .collect(),
        errors: batch.errors.clone(),
        warnings: batch.warnings.clone(),
        recommendation: batch.recommendation.clone(),
    });

    let camera_angle = ctx.camera.as_ref().map(|info| v1::CameraAngle {
        angle_estimate: info.angle_estimate,
        should_reject: info.should_reject,
        message: info.message.clone(),
    });

    let angles_per_frame = v1::AnglesPerFrame {
        torso_angle: calc.torso.clone(),
        quad_angle: calc.quad.clone(),
        ankle_angle: calc.ankle.clone(),
    };
    let asymmetry_per_frame = v1::AsymmetryPerFrame {
        torso_asymmetry: calc.torso_asymmetry.clone(),
        quad_asymmetry: calc.quad_asymmetry.clone(),
        ankle_asymmetry: calc.ankle_asymmetry.clone(),
    };

    let reps = phases
        .reps
        .iter()
        .map(|rep| v1::Rep {
            start_frame: rep.start_frame as u64,
            bottom_frame: rep.bottom_frame as u64,
            end_frame: rep.end_frame as u64,
        })
        .collect();

    Ok(v1::FormQcV1 {
        tool: "formqc".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta,
        validation,
        camera_angle,
        angles_per_frame: Some(angles_per_frame),
        asymmetry_per_frame: Some(asymmetry_per_frame),
        phases: Some(v1::Phases { reps }),
        form_analysis: Some(map_form_analysis(analysis)),
    })
}

pub fn write_json(path: &Path, report: &v1::FormQcV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

fn map_form_analysis(analysis: &analysis::FormAnalysis) -> v1::FormAnalysis {
    v1::FormAnalysis {
        torso_angle: map_angle_metric(&analysis.torso_angle),
        quad_angle: map_angle_metric(&analysis.quad_angle),
        ankle_angle: v1::AnkleMetric {
            status: map_status(analysis.ankle_angle.status),
            score: analysis.ankle_angle.score,
            min_angle: analysis.ankle_angle.min_angle,
            avg_angle: analysis.ankle_angle.avg_angle,
            message: analysis.ankle_angle.message.clone(),
        },
        torso_asymmetry: map_asymmetry_metric(&analysis.torso_asymmetry),
        quad_asymmetry: map_asymmetry_metric(&analysis.quad_asymmetry),
        ankle_asymmetry: map_asymmetry_metric(&analysis.ankle_asymmetry),
        rep_consistency: v1::ConsistencyMetric {
            status: map_status(analysis.rep_consistency.status),
            score: analysis.rep_consistency.score,
            rep_count: analysis.rep_consistency.rep_count as u64,
            depth: map_consistency_sub(&analysis.rep_consistency.depth),
            torso: map_consistency_sub(&analysis.rep_consistency.torso),
            asymmetry: map_consistency_sub(&analysis.rep_consistency.asymmetry),
            message: analysis.rep_consistency.message.clone(),
        },
        glute_dominance: v1::DominanceMetric {
            status: map_status(analysis.glute_dominance.status),
            score: analysis.glute_dominance.score,
            avg_timing_diff_ms: analysis.glute_dominance.avg_timing_diff_ms,
            message: analysis.glute_dominance.message.clone(),
        },
        knee_valgus: v1::ValgusMetric {
            status: map_status(analysis.knee_valgus.status),
            score: analysis.knee_valgus.score,
            max_deviation: analysis.knee_valgus.max_deviation,
            fppa: analysis.knee_valgus.fppa,
            frame: analysis.knee_valgus.frame.map(|f| f as u64),
            fppa_per_frame: analysis.knee_valgus.fppa_per_frame.clone(),
            message: analysis.knee_valgus.message.clone(),
        },
        final_score: v1::FinalScore {
            final_score: analysis.final_score.final_score,
            grade: map_grade(analysis.final_score.grade),
            component_scores: analysis.final_score.component_scores.clone(),
            weights: analysis.final_score.weights.clone(),
        },
    }
}

fn map_angle_metric(metric: &analysis::AngleMetric) -> v1::AngleMetric {
    v1::AngleMetric {
        status: map_status(metric.status),
        score: metric.score,
        max_angle: metric.max_angle,
        avg_angle: metric.avg_angle,
        message: metric.message.clone(),
    }
}

fn map_asymmetry_metric(metric: &analysis::AsymmetryMetric) -> v1::AsymmetryMetric {
    v1::AsymmetryMetric {
        status: map_status(metric.status),
        score: metric.score,
        max_asymmetry: metric.max_asymmetry,
        avg_asymmetry: metric.avg_asymmetry,
        message: metric.message.clone(),
    }
}

fn map_consistency_sub(sub: &analysis::ConsistencySub) -> v1::ConsistencySub {
    v1::ConsistencySub {
        status: map_status(sub.status),
        score: sub.score,
        cv: sub.cv,
        mean: sub.mean,
        std: sub.std,
        message: sub.message.clone(),
    }
}

fn map_status(status: analysis::MetricStatus) -> v1::Status {
    match status {
        analysis::MetricStatus::Good => v1::Status::Good,
        analysis::MetricStatus::Warning => v1::Status::Warning,
        analysis::MetricStatus::Poor => v1::Status::Poor,
        analysis::MetricStatus::Error => v1::Status::Error,
    }
}

fn map_grade(grade: analysis::Grade) -> v1::Grade {
    match grade {
        analysis::Grade::Excellent => v1::Grade::Excellent,
        analysis::Grade::Good => v1::Grade::Good,
        analysis::Grade::Fair => v1::Grade::Fair,
        analysis::Grade::NeedsImprovement => v1::Grade::NeedsImprovement,
    }
}
