//! Primitive geometry generators (box, sphere, torus, edge).

pub(crate) mod primitives;
