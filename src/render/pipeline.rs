use std::ops::Range;

use rayon::prelude::*;

use crate::animation::timeline::{AnimationPlan, KnobFrame};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{AnimdlError, AnimdlResult};
use crate::interpret::interpreter::{FrameContext, FrameOutcome, interpret_frame};
use crate::output::sequencer::FrameSequencer;
use crate::output::sink::{FrameOutput, InMemoryOutput};
use crate::raster::backend::Rasterizer;
use crate::raster::frame::Frame;
use crate::render::settings::RenderSettings;
use crate::script::script::Script;

/// Counters reported by [`render_animation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames declared by the script.
    pub frames_total: u64,
    /// Frames rendered and persisted.
    pub frames_rendered: u64,
    /// Inline `save` commands executed across all frames.
    pub inline_saves: u64,
    /// Inline `display` commands executed across all frames.
    pub displays: u64,
}

impl RenderStats {
    fn record(&mut self, outcome: &FrameOutcome) {
        self.frames_rendered += 1;
        self.inline_saves += outcome.inline_saves;
        self.displays += outcome.displays;
    }
}

/// Render every frame of `script` and persist each one through the frame sequencer.
///
/// Pipeline:
/// 1. [`RenderSettings::validate`](crate::RenderSettings::validate)
/// 2. [`AnimationPlan::build`](crate::AnimationPlan::build) (no frame is touched if this fails)
/// 3. [`render_plan`]
pub fn render_animation(
    script: &Script,
    settings: &RenderSettings,
    rasterizer: &dyn Rasterizer,
    out: &mut dyn FrameOutput,
) -> AnimdlResult<RenderStats> {
    settings.validate()?;
    let plan = AnimationPlan::build(&script.commands)?;
    render_plan(script, &plan, settings, rasterizer, out)
}

/// Render frames `0..frame_count` of an already-built plan.
///
/// Output order is the same in sequential and parallel mode: for each frame, its inline
/// `display`/`save` calls followed by the end-of-frame save. A failing frame stops the render
/// after its own inline output has been emitted.
#[tracing::instrument(skip_all, fields(base = %plan.config.base_name))]
pub fn render_plan(
    script: &Script,
    plan: &AnimationPlan,
    settings: &RenderSettings,
    rasterizer: &dyn Rasterizer,
    out: &mut dyn FrameOutput,
) -> AnimdlResult<RenderStats> {
    settings.validate()?;
    let materials = script.material_table();
    let ctx = FrameContext {
        commands: &script.commands,
        materials: &materials,
        settings,
        rasterizer,
    };
    let seq = FrameSequencer::new(&settings.anim_dir, plan.config.base_name.as_str());
    let frame_count = plan.config.frame_count;
    let mut stats = RenderStats {
        frames_total: frame_count,
        ..RenderStats::default()
    };

    tracing::info!(
        frames = frame_count,
        dir = %seq.dir().display(),
        parallel = settings.threading.parallel,
        "rendering animation"
    );

    if !settings.threading.parallel {
        for f in 0..frame_count {
            let index = FrameIndex(f);
            let outcome = interpret_frame(&ctx, knob_row(plan, index)?, index, out)?;
            let path = seq.persist(index, &outcome.frame, out)?;
            tracing::debug!(frame = %index, path = %path.display(), "frame persisted");
            stats.record(&outcome);
        }
        return Ok(stats);
    }

    let pool = build_thread_pool(settings.threading.threads)?;
    let chunk_size = normalized_chunk_size(settings.threading.chunk_size);

    let mut chunk_start = 0u64;
    while chunk_start < frame_count {
        let chunk_end = (chunk_start + chunk_size).min(frame_count);
        let rendered = render_chunk_parallel(&ctx, plan, chunk_start..chunk_end, &pool);

        for (f, (deferred, result)) in (chunk_start..chunk_end).zip(rendered) {
            let index = FrameIndex(f);
            deferred.replay_into(out)?;
            let outcome = result?;
            let path = seq.persist(index, &outcome.frame, out)?;
            tracing::debug!(frame = %index, path = %path.display(), "frame persisted");
            stats.record(&outcome);
        }
        chunk_start = chunk_end;
    }

    Ok(stats)
}

/// Render one frame of `plan` and return its final buffers.
///
/// Inline `display`/`save` commands go to `out`; the end-of-frame artifact is left to the caller.
pub fn render_frame(
    script: &Script,
    plan: &AnimationPlan,
    index: FrameIndex,
    settings: &RenderSettings,
    rasterizer: &dyn Rasterizer,
    out: &mut dyn FrameOutput,
) -> AnimdlResult<Frame> {
    settings.validate()?;
    let materials = script.material_table();
    let ctx = FrameContext {
        commands: &script.commands,
        materials: &materials,
        settings,
        rasterizer,
    };
    interpret_frame(&ctx, knob_row(plan, index)?, index, out).map(|o| o.frame)
}

fn render_chunk_parallel(
    ctx: &FrameContext<'_>,
    plan: &AnimationPlan,
    range: Range<u64>,
    pool: &rayon::ThreadPool,
) -> Vec<(InMemoryOutput, AnimdlResult<FrameOutcome>)> {
    let indices: Vec<u64> = range.collect();
    pool.install(|| {
        indices
            .par_iter()
            .map(|&f| {
                let index = FrameIndex(f);
                let mut deferred = InMemoryOutput::new();
                let result = knob_row(plan, index)
                    .and_then(|knobs| interpret_frame(ctx, knobs, index, &mut deferred));
                (deferred, result)
            })
            .collect()
    })
}

fn knob_row(plan: &AnimationPlan, index: FrameIndex) -> AnimdlResult<&KnobFrame> {
    plan.knobs.frame(index).ok_or_else(|| {
        AnimdlError::validation(format!(
            "frame {index} is outside the animation (frame count {})",
            plan.config.frame_count
        ))
    })
}

fn build_thread_pool(threads: Option<usize>) -> AnimdlResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(AnimdlError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AnimdlError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
