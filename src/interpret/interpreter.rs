use std::path::Path;

use crate::animation::timeline::KnobFrame;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::AnimdlResult;
use crate::foundation::math::{Axis, make_rotation, make_scale, make_translate};
use crate::geometry::primitives::{
    EdgeList, PolygonList, add_box, add_edge, add_sphere, add_torus,
};
use crate::output::sink::FrameOutput;
use crate::raster::backend::Rasterizer;
use crate::raster::frame::Frame;
use crate::render::settings::RenderSettings;
use crate::script::command::{Command, Op};
use crate::script::material::{DEFAULT_MATERIAL, MaterialTable};
use crate::transform::stack::TransformStack;

/// Read-only inputs shared by every frame of a render.
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    /// Full command stream, replayed once per frame.
    pub commands: &'a [Command],
    /// Materials available to primitives.
    pub materials: &'a MaterialTable,
    /// Canvas, colors, tessellation and lighting.
    pub settings: &'a RenderSettings,
    /// Rasterizer collaborator.
    pub rasterizer: &'a dyn Rasterizer,
}

/// Final buffers of one frame plus counters for the inline output commands it ran.
#[derive(Clone, Debug)]
pub struct FrameOutcome {
    /// Buffers after the last command.
    pub frame: Frame,
    /// `save` commands executed.
    pub inline_saves: u64,
    /// `display` commands executed.
    pub displays: u64,
}

/// Multiplier for `cmd` at this frame: the knob's value when the knob is present in `knobs`,
/// otherwise `1.0`.
pub fn resolve_multiplier(cmd: &Command, knobs: &KnobFrame) -> f64 {
    cmd.knob
        .as_deref()
        .and_then(|k| knobs.get(k).copied())
        .unwrap_or(1.0)
}

/// Replay the whole command stream for one frame.
///
/// Starts from a fresh transform stack and blank buffers; nothing survives from other frames.
/// Inline `display`/`save` commands go to `out`. The end-of-frame artifact is not written here.
#[tracing::instrument(skip_all, fields(frame = %index))]
pub fn interpret_frame(
    ctx: &FrameContext<'_>,
    knobs: &KnobFrame,
    index: FrameIndex,
    out: &mut dyn FrameOutput,
) -> AnimdlResult<FrameOutcome> {
    let settings = ctx.settings;
    let mut stack = TransformStack::new();
    let mut frame = Frame::new(settings.canvas, settings.clear_color);
    let mut inline_saves = 0u64;
    let mut displays = 0u64;

    // Persistent default; per-command material references never replace it.
    let default_material = DEFAULT_MATERIAL;

    for cmd in ctx.commands {
        let m = resolve_multiplier(cmd, knobs);
        if !matches!(cmd.op, Op::Other(_)) {
            tracing::trace!(op = %cmd.op, knob = ?cmd.knob, multiplier = m, "command");
        }
        match &cmd.op {
            Op::Box => {
                let [x, y, z, w, h, d] = cmd.scaled_nums::<6>(m)?;
                let mut polys = PolygonList::new();
                add_box(&mut polys, x, y, z, w, h, d);
                draw_solid(ctx, cmd, polys, &stack, &mut frame, default_material)?;
            }
            Op::Sphere => {
                let [cx, cy, cz, r] = cmd.scaled_nums::<4>(m)?;
                let mut polys = PolygonList::new();
                add_sphere(&mut polys, cx, cy, cz, r, settings.step);
                draw_solid(ctx, cmd, polys, &stack, &mut frame, default_material)?;
            }
            Op::Torus => {
                let [cx, cy, cz, r_tube, r_ring] = cmd.scaled_nums::<5>(m)?;
                let mut polys = PolygonList::new();
                add_torus(&mut polys, cx, cy, cz, r_tube, r_ring, settings.step);
                draw_solid(ctx, cmd, polys, &stack, &mut frame, default_material)?;
            }
            Op::Line => {
                let [x0, y0, z0, x1, y1, z1] = cmd.scaled_nums::<6>(m)?;
                let mut edges = EdgeList::new();
                add_edge(&mut edges, x0, y0, z0, x1, y1, z1);
                edges.transform(stack.top());
                ctx.rasterizer
                    .draw_lines(&edges, &mut frame, settings.line_color)?;
            }
            Op::Move => {
                let [x, y, z] = cmd.scaled_nums::<3>(m)?;
                stack.apply(&make_translate(x, y, z));
            }
            Op::Scale => {
                let [x, y, z] = cmd.scaled_nums::<3>(m)?;
                stack.apply(&make_scale(x, y, z));
            }
            Op::Rotate => {
                let axis = Axis::parse(cmd.expect_str(0)?)?;
                let theta = cmd.expect_num(1)?.to_radians() * m;
                stack.apply(&make_rotation(axis, theta));
            }
            Op::Push => stack.push(),
            Op::Pop => stack.pop()?,
            Op::Display => {
                out.display(&frame)?;
                displays += 1;
            }
            Op::Save => {
                out.save(&frame, Path::new(cmd.expect_str(0)?))?;
                inline_saves += 1;
            }
            // Configuration directives were consumed by the timeline passes; unknown tags are
            // skipped.
            Op::Frames | Op::Basename | Op::Vary | Op::Other(_) => {}
        }
    }

    Ok(FrameOutcome {
        frame,
        inline_saves,
        displays,
    })
}

fn draw_solid(
    ctx: &FrameContext<'_>,
    cmd: &Command,
    mut polys: PolygonList,
    stack: &TransformStack,
    frame: &mut Frame,
    default_material: &str,
) -> AnimdlResult<()> {
    polys.transform(stack.top());
    let material = cmd.material.as_deref().unwrap_or(default_material);
    ctx.rasterizer.draw_polygons(
        &polys,
        frame,
        &ctx.settings.lighting,
        ctx.materials,
        material,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/interpret/interpreter.rs"]
mod tests;
