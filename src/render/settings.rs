use std::path::PathBuf;

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{AnimdlError, AnimdlResult};
use crate::output::sequencer::DEFAULT_ANIM_DIR;
use crate::raster::lighting::Lighting;

/// Threading and chunking controls for multi-frame rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderThreading {
    /// Render frames concurrently when `true`.
    pub parallel: bool,
    /// Frames rendered per parallel batch.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Rendering options shared by every frame of an animation.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Frame buffer dimensions.
    pub canvas: Canvas,
    /// Color every frame starts from.
    pub clear_color: Rgb8,
    /// Color used by `line` commands.
    pub line_color: Rgb8,
    /// Subdivisions used for spheres and tori.
    pub step: u32,
    /// View vector, ambient light and light source.
    pub lighting: Lighting,
    /// Directory receiving the numbered end-of-frame artifacts.
    pub anim_dir: PathBuf,
    /// Frame-level parallelism.
    pub threading: RenderThreading,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            clear_color: Rgb8::black(),
            line_color: Rgb8::white(),
            step: 100,
            lighting: Lighting::default(),
            anim_dir: PathBuf::from(DEFAULT_ANIM_DIR),
            threading: RenderThreading::default(),
        }
    }
}

impl RenderSettings {
    /// Check option ranges before any frame work starts.
    pub fn validate(&self) -> AnimdlResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(AnimdlError::validation("canvas width/height must be > 0"));
        }
        if self.step < 3 {
            return Err(AnimdlError::validation("step must be >= 3"));
        }
        if self.threading.threads == Some(0) {
            return Err(AnimdlError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}
