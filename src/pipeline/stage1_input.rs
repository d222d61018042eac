use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::{Ctx, DEFAULT_FPS};
use crate::io::landmarks;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let file = landmarks::read_landmark_file(&ctx.input)?;
        let total_frames = file.frames.len();

        // --fps wins over the file value; the default is a guess worth
        // flagging because every timing metric scales with it.
        let fps = match (ctx.fps_override, file.fps) {
            (Some(flag), _) => flag,
            (None, Some(from_file)) => from_file,
            (None, None) => {
                warn!(default_fps = DEFAULT_FPS, "fps missing; using default");
                ctx.warnings.push(format!(
                    "fps not provided by flag or landmark file; assuming {:.1}",
                    DEFAULT_FPS
                ));
                DEFAULT_FPS
            }
        };

        let (frames, fps) = if ctx.frame_skip > 1 {
            let kept: Vec<_> = file
                .frames
                .into_iter()
                .step_by(ctx.frame_skip)
                .collect();
            (kept, fps / ctx.frame_skip as f64)
        } else {
            (file.frames, fps)
        };

        info!(
            input = %ctx.input.display(),
            total_frames,
            kept_frames = frames.len(),
            fps,
            "landmarks_loaded"
        );

        ctx.source = file.source;
        ctx.fps = fps;
        ctx.frames = frames;
        Ok(())
    }
}
