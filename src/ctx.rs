use std::path::PathBuf;

use crate::analysis::FormAnalysis;
use crate::camera::CameraAngleInfo;
use crate::exercise::ExerciseKind;
use crate::kinematics::FormCalculation;
use crate::phases::Phases;
use crate::pose::FrameLandmarks;
use crate::pose::validation::BatchValidation;

pub const DEFAULT_FPS: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// Per-analysis state threaded through the pipeline stages. Each stage reads
/// the products of earlier stages and fills in its own; one Ctx corresponds
/// to one input file, with no state shared between concurrent analyses.
#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub exercise: ExerciseKind,
    pub fps_override: Option<f64>,
    pub frame_skip: usize,
    pub write_json: bool,
    pub write_tsv: bool,

    pub source: Option<String>,
    pub fps: f64,
    pub frames: Vec<Option<FrameLandmarks>>,
    pub validation: Option<BatchValidation>,
    pub camera: Option<CameraAngleInfo>,
    pub calculation: Option<FormCalculation>,
    pub phases: Option<Phases>,
    pub analysis: Option<FormAnalysis>,
    pub warnings: Vec<String>,

    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        exercise: ExerciseKind,
        fps_override: Option<f64>,
        frame_skip: usize,
        write_json: bool,
        write_tsv: bool,
    ) -> Self {
        let json_path = out_dir.join("formqc.json");
        let tsv_path = out_dir.join("formqc.tsv");
        Self {
            input,
            exercise,
            fps_override,
            frame_skip: frame_skip.max(1),
            write_json,
            write_tsv,
            source: None,
            fps: DEFAULT_FPS,
            frames: Vec::new(),
            validation: None,
            camera: None,
            calculation: None,
            phases: None,
            analysis: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
        }
    }
}
