//! Per-frame command replay.

pub(crate) mod interpreter;
