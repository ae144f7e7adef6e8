//! Animation rendering: settings and the frame loop.

pub(crate) mod pipeline;
pub(crate) mod settings;
