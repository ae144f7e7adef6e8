//! Frame outputs.
//!
//! Outputs receive frame buffers from inline `display`/`save` commands and from the end-of-frame
//! save performed by the [`crate::FrameSequencer`].

pub(crate) mod disk;
pub(crate) mod sequencer;
pub(crate) mod sink;
