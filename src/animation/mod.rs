//! Knob timeline construction.

pub(crate) mod timeline;
