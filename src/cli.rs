use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "formqc", version, about = "Exercise form scoring from pose landmark dumps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full analysis pipeline on one or more landmark dumps.
    Analyze(AnalyzeArgs),
    /// Check landmark coverage without scoring.
    Validate(ValidateArgs),
    /// List the supported exercises and their required landmarks.
    Exercises,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(long, num_args = 1.., help = "Landmark dump (.json or .json.gz, repeatable)")]
    pub input: Vec<PathBuf>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = ExerciseArg::Squat)]
    pub exercise: ExerciseArg,

    #[arg(long, help = "Frames per second; overrides the file value")]
    pub fps: Option<f64>,

    #[arg(long, default_value_t = 1, help = "Keep every Nth frame")]
    pub frame_skip: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Landmark dump (.json or .json.gz)")]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = ExerciseArg::Squat)]
    pub exercise: ExerciseArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExerciseArg {
    Squat,
}
