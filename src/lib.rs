//! animdl renders numbered animation frames from a stream of scene commands.
//!
//! A [`Script`] is an ordered list of [`Command`]s: solid primitives, lines, transforms, stack
//! push/pop, inline `display`/`save`, and the animation directives `frames`, `basename` and
//! `vary`. Rendering runs in three steps:
//!
//! - Build an [`AnimationPlan`]: resolve the frame count and base name, then interpolate every
//!   `vary` into a per-frame [`KnobTimeline`]
//! - Replay the whole stream once per frame with [`interpret_frame`], scaling knob-bound
//!   commands by the knob's value at that frame
//! - Persist each finished frame through a [`FrameSequencer`] as `<anim_dir>/<base><NNNN>`
//!
//! [`render_animation`] runs all of it, sequentially or frame-parallel on a rayon pool.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod geometry;
pub(crate) mod interpret;
pub(crate) mod output;
pub(crate) mod raster;
pub(crate) mod render;
pub(crate) mod script;
pub(crate) mod transform;

pub use crate::foundation::core::{Canvas, FrameIndex, Rgb8};
pub use crate::foundation::error::{AnimdlError, AnimdlResult};
pub use crate::foundation::math::{
    Axis, DMat4, DVec3, compose_into, identity, make_rotation, make_scale, make_translate,
    transform_point,
};

pub use crate::animation::timeline::{
    AnimationConfig, AnimationPlan, DEFAULT_BASENAME, KnobFrame, KnobTimeline, MAX_FRAME_COUNT,
    build_timeline, scan_config,
};
pub use crate::geometry::primitives::{
    EdgeList, PolygonList, add_box, add_edge, add_sphere, add_torus,
};
pub use crate::interpret::interpreter::{
    FrameContext, FrameOutcome, interpret_frame, resolve_multiplier,
};
pub use crate::output::disk::{ImageOutput, ImageOutputOpts, is_program_on_path, resolve_format};
pub use crate::output::sequencer::{DEFAULT_ANIM_DIR, FrameSequencer};
pub use crate::output::sink::{FrameOutput, InMemoryOutput, OutputEvent};
pub use crate::raster::backend::Rasterizer;
pub use crate::raster::frame::Frame;
pub use crate::raster::lighting::{Lighting, PointLight};
pub use crate::raster::scanline::ScanlineRasterizer;
pub use crate::render::pipeline::{
    RenderStats, render_animation, render_frame, render_plan,
};
pub use crate::render::settings::{RenderSettings, RenderThreading};
pub use crate::script::command::{Arg, Command, Op};
pub use crate::script::material::{DEFAULT_MATERIAL, Material, MaterialTable, Reflectance};
pub use crate::script::script::Script;
pub use crate::transform::stack::TransformStack;
