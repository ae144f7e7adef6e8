//! Parsed command stream and material table (the interpreter's read-only inputs).

pub(crate) mod command;
pub(crate) mod material;
#[allow(clippy::module_inception)]
pub(crate) mod script;
