use std::path::{Path, PathBuf};

use crate::foundation::error::AnimdlResult;
use crate::raster::frame::Frame;

/// Destination for frame buffers: an interactive surface and durable artifacts.
///
/// Neither method mutates the frame.
pub trait FrameOutput: Send {
    /// Show `frame` on an interactive surface.
    fn display(&mut self, frame: &Frame) -> AnimdlResult<()>;
    /// Persist `frame` as an artifact at `path`; the encoding is chosen by the implementation.
    fn save(&mut self, frame: &Frame, path: &Path) -> AnimdlResult<()>;
}

/// One call recorded by [`InMemoryOutput`].
#[derive(Clone, Debug, PartialEq)]
pub enum OutputEvent {
    /// `display` with a snapshot of the frame.
    Display(Frame),
    /// `save` with the requested path and a snapshot of the frame.
    Save {
        /// Path passed to `save`.
        path: PathBuf,
        /// Frame contents at the time of the call.
        frame: Frame,
    },
}

/// Output that records every call in order, for tests and for deferred replay.
#[derive(Clone, Debug, Default)]
pub struct InMemoryOutput {
    events: Vec<OutputEvent>,
}

impl InMemoryOutput {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in call order.
    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    /// Paths passed to `save`, in call order.
    pub fn saved_paths(&self) -> Vec<&Path> {
        self.events
            .iter()
            .filter_map(|e| match e {
                OutputEvent::Save { path, .. } => Some(path.as_path()),
                OutputEvent::Display(_) => None,
            })
            .collect()
    }

    /// Frame saved at `path` (last write wins).
    pub fn saved(&self, path: impl AsRef<Path>) -> Option<&Frame> {
        let path = path.as_ref();
        self.events.iter().rev().find_map(|e| match e {
            OutputEvent::Save { path: p, frame } if p == path => Some(frame),
            _ => None,
        })
    }

    /// Number of `display` calls.
    pub fn display_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, OutputEvent::Display(_)))
            .count()
    }

    /// Number of `save` calls.
    pub fn save_count(&self) -> usize {
        self.events.len() - self.display_count()
    }

    /// Forward every recorded call to `out`, in order, consuming the recorder.
    pub fn replay_into(self, out: &mut dyn FrameOutput) -> AnimdlResult<()> {
        for event in self.events {
            match event {
                OutputEvent::Display(frame) => out.display(&frame)?,
                OutputEvent::Save { path, frame } => out.save(&frame, &path)?,
            }
        }
        Ok(())
    }
}

impl FrameOutput for InMemoryOutput {
    fn display(&mut self, frame: &Frame) -> AnimdlResult<()> {
        self.events.push(OutputEvent::Display(frame.clone()));
        Ok(())
    }

    fn save(&mut self, frame: &Frame, path: &Path) -> AnimdlResult<()> {
        self.events.push(OutputEvent::Save {
            path: path.to_path_buf(),
            frame: frame.clone(),
        });
        Ok(())
    }
}
