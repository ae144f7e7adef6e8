use std::path::{Path, PathBuf};

use crate::foundation::core::FrameIndex;
use crate::foundation::error::AnimdlResult;
use crate::output::sink::FrameOutput;
use crate::raster::frame::Frame;

/// Directory, relative to the working directory, that receives numbered frames.
pub const DEFAULT_ANIM_DIR: &str = "anim";

/// Naming and placement policy for end-of-frame artifacts: `<dir>/<base_name><NNNN>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequencer {
    dir: PathBuf,
    base_name: String,
}

impl FrameSequencer {
    /// Sequencer writing `<dir>/<base_name><NNNN>`.
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Artifact name for `frame`: base name plus the index zero-padded to at least 4 digits.
    pub fn artifact_name(&self, frame: FrameIndex) -> String {
        format!("{}{:04}", self.base_name, frame.0)
    }

    /// Full artifact path for `frame`.
    pub fn artifact_path(&self, frame: FrameIndex) -> PathBuf {
        self.dir.join(self.artifact_name(frame))
    }

    /// Persist `buffers` as the artifact for `frame` and return the path handed to `out`.
    pub fn persist(
        &self,
        frame: FrameIndex,
        buffers: &Frame,
        out: &mut dyn FrameOutput,
    ) -> AnimdlResult<PathBuf> {
        let path = self.artifact_path(frame);
        out.save(buffers, &path)?;
        Ok(path)
    }
}

impl Default for FrameSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_ANIM_DIR, "")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/sequencer.rs"]
mod tests;
