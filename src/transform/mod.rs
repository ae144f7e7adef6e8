//! Coordinate-frame stack used during command replay.

pub(crate) mod stack;
