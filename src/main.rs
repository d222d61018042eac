use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use formqc::cli::{AnalyzeArgs, Cli, Commands, ExerciseArg, ValidateArgs};
use formqc::ctx::Ctx;
use formqc::exercise::ExerciseKind;
use formqc::io;
use formqc::pipeline::Pipeline;
use formqc::pipeline::stage0_scaffold::Stage0Scaffold;
use formqc::pipeline::stage1_input::Stage1Input;
use formqc::pipeline::stage2_validate::Stage2Validate;
use formqc::pipeline::stage3_camera::Stage3Camera;
use formqc::pipeline::stage4_angles::Stage4Angles;
use formqc::pipeline::stage5_phases::Stage5Phases;
use formqc::pipeline::stage6_analysis::Stage6Analysis;
use formqc::pipeline::stage7_output::Stage7Output;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Exercises => {
            print_exercises();
            Ok(())
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    if args.input.is_empty() {
        anyhow::bail!("at least one --input is required");
    }
    let exercise = exercise_kind(args.exercise);

    if args.input.len() == 1 {
        let input = args.input.into_iter().next().unwrap();
        let summary = analyze_one(
            input,
            args.out,
            exercise,
            args.fps,
            args.frame_skip,
            args.json,
            args.tsv,
        )?;
        print!("{}", summary);
        return Ok(());
    }

    // Each input is an independent analysis; run them on a pool and print
    // the summaries in input order afterward.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
    let results: Vec<Result<String>> = pool.install(|| {
        args.input
            .par_iter()
            .map(|input| {
                let label = label_from_path(input);
                let out_dir = args.out.join(&label);
                analyze_one(
                    input.clone(),
                    out_dir,
                    exercise,
                    args.fps,
                    args.frame_skip,
                    args.json,
                    args.tsv,
                )
            })
            .collect()
    });

    let mut first_err = None;
    for (input, result) in args.input.iter().zip(results) {
        match result {
            Ok(summary) => print!("{}", summary),
            Err(err) => {
                eprintln!("{}: {:#}", input.display(), err);
                if first_err.is_none() {
                    first_err = Some(err);
                }
            }
        }
    }
    match first_err {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn analyze_one(
    input: PathBuf,
    out_dir: PathBuf,
    exercise: ExerciseKind,
    fps: Option<f64>,
    frame_skip: usize,
    json: bool,
    tsv: bool,
) -> Result<String> {
    let mut ctx = Ctx::new(input, out_dir, exercise, fps, frame_skip, json, tsv);
    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Input::new()),
        Box::new(Stage2Validate::new()),
        Box::new(Stage3Camera::new()),
        Box::new(Stage4Angles::new()),
        Box::new(Stage5Phases::new()),
        Box::new(Stage6Analysis::new()),
        Box::new(Stage7Output::new()),
    ]);
    pipeline.run(&mut ctx)?;

    let mut summary = io::summary::format_summary(&ctx)?;
    if !ctx.warnings.is_empty() {
        summary.push_str("warnings:\n");
        for warning in &ctx.warnings {
            summary.push_str(&format!("- {}\n", warning));
        }
    }
    Ok(summary)
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let exercise = exercise_kind(args.exercise);
    let mut ctx = Ctx::new(args.input, PathBuf::from("."), exercise, None, 1, false, false);
    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage2Validate::new()),
    ]);
    pipeline.run(&mut ctx)?;

    // Low data quality is a reported condition, not a process failure.
    let batch = ctx
        .validation
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("validation missing"))?;
    println!(
        "frames: {} ({} valid, {:.0}%)",
        batch.total_frame_count,
        batch.valid_frame_count,
        batch.valid_frame_percentage * 100.0
    );
    println!("quality score: {:.2}", batch.quality_score);
    for error in &batch.errors {
        println!("error: {}", error);
    }
    for warning in &batch.warnings {
        println!("warning: {}", warning);
    }
    if let Some(recommendation) = &batch.recommendation {
        println!("recommendation: {}", recommendation);
    }
    Ok(())
}

fn print_exercises() {
    for kind in ExerciseKind::ALL {
        let implementation = kind.implementation();
        let names: Vec<&str> = implementation
            .required_landmarks()
            .iter()
            .map(|&idx| formqc::pose::landmark_name(idx))
            .collect();
        println!(
            "{}\t{}\t{} landmarks\t{}",
            implementation.id(),
            implementation.name(),
            implementation.required_landmarks().len(),
            names.join(",")
        );
    }
}

fn exercise_kind(arg: ExerciseArg) -> ExerciseKind {
    match arg {
        ExerciseArg::Squat => ExerciseKind::Squat,
    }
}

fn label_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string()
}
