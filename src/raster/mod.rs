//! Frame buffers and the rasterizer seam.

pub(crate) mod backend;
pub(crate) mod frame;
pub(crate) mod lighting;
pub(crate) mod scanline;
