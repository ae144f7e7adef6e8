use std::collections::BTreeMap;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{AnimdlError, AnimdlResult};
use crate::script::command::{Command, Op};

/// Base name used when `frames` is given without `basename`.
pub const DEFAULT_BASENAME: &str = "base";

/// Largest frame count a `frames` directive may request. Each frame owns a knob row, so the
/// bound keeps the timeline allocation finite.
pub const MAX_FRAME_COUNT: u64 = 1_000_000;

/// Result of the configuration scan over a command stream.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AnimationConfig {
    /// Root of every numbered frame artifact name.
    pub base_name: String,
    /// Number of frames to render (always >= 1).
    pub frame_count: u64,
}

/// Knob values for a single frame. A missing knob means no `vary` covers this frame.
pub type KnobFrame = BTreeMap<String, f64>;

/// Per-frame knob table; index `i` holds the knob values for frame `i`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct KnobTimeline {
    frames: Vec<KnobFrame>,
}

impl KnobTimeline {
    /// Timeline with `frame_count` empty rows.
    pub fn empty(frame_count: usize) -> Self {
        Self {
            frames: vec![KnobFrame::new(); frame_count],
        }
    }

    /// Number of rows (equals the resolved frame count).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when the timeline has no rows.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Knob row for `frame`.
    pub fn frame(&self, frame: FrameIndex) -> Option<&KnobFrame> {
        self.frames.get(frame.as_usize())
    }

    /// Value of `knob` at `frame`, if a `vary` covers it.
    pub fn value(&self, frame: FrameIndex, knob: &str) -> Option<f64> {
        self.frame(frame).and_then(|row| row.get(knob).copied())
    }

    /// Rows in frame order.
    pub fn rows(&self) -> &[KnobFrame] {
        &self.frames
    }
}

/// Configuration and knob table, built once before the frame loop.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationPlan {
    /// Resolved base name and frame count.
    pub config: AnimationConfig,
    /// Knob values for every frame.
    pub knobs: KnobTimeline,
}

impl AnimationPlan {
    /// Run both passes over `commands`.
    ///
    /// Any error here means no frame may be rendered.
    pub fn build(commands: &[Command]) -> AnimdlResult<Self> {
        let config = scan_config(commands)?;
        let knobs = build_timeline(commands, config.frame_count)?;
        Ok(Self { config, knobs })
    }
}

/// First pass: resolve base name and frame count.
///
/// Later `frames`/`basename` directives override earlier ones. A `vary` without any `frames`
/// directive is rejected.
pub fn scan_config(commands: &[Command]) -> AnimdlResult<AnimationConfig> {
    let mut frame_count = 1u64;
    let mut base_name = String::new();

    let mut frames_requested = false;
    let mut basename_set = false;
    let mut vary_requested = false;

    for cmd in commands {
        match cmd.op {
            Op::Frames => {
                frame_count = frame_operand(cmd, 0, "frame count")?;
                if frame_count == 0 {
                    return Err(AnimdlError::animation("frames must be >= 1"));
                }
                if frame_count > MAX_FRAME_COUNT {
                    return Err(AnimdlError::animation(format!(
                        "frames must be <= {MAX_FRAME_COUNT}, got {frame_count}"
                    )));
                }
                frames_requested = true;
            }
            Op::Basename => {
                base_name = cmd
                    .arg_str(0)
                    .ok_or_else(|| AnimdlError::animation("basename expects a name operand"))?
                    .to_string();
                basename_set = true;
            }
            Op::Vary => vary_requested = true,
            _ => {}
        }
    }

    if vary_requested && !frames_requested {
        return Err(AnimdlError::animation(
            "vary requires a frames directive; refusing to render",
        ));
    }

    if frames_requested && !basename_set {
        base_name = DEFAULT_BASENAME.to_string();
        tracing::info!(base_name = %base_name, "no basename directive; using default");
    }

    Ok(AnimationConfig {
        base_name,
        frame_count,
    })
}

/// Second pass: interpolate every `vary` directive into a per-frame knob table.
///
/// Directives are applied in stream order, so where two ranges of the same knob overlap the
/// later directive's values win.
pub fn build_timeline(commands: &[Command], frame_count: u64) -> AnimdlResult<KnobTimeline> {
    if frame_count > MAX_FRAME_COUNT {
        return Err(AnimdlError::animation(format!(
            "frame count {frame_count} exceeds the limit of {MAX_FRAME_COUNT}"
        )));
    }
    let mut timeline = KnobTimeline::empty(frame_count as usize);

    for cmd in commands.iter().filter(|c| c.op == Op::Vary) {
        let knob = cmd
            .knob
            .as_deref()
            .ok_or_else(|| AnimdlError::animation("vary requires a knob name"))?;
        let f0 = frame_operand(cmd, 0, "first frame")?;
        let f1 = frame_operand(cmd, 1, "last frame")?;
        let v0 = vary_value(cmd, 2, knob)?;
        let v1 = vary_value(cmd, 3, knob)?;

        if f0 >= f1 {
            return Err(AnimdlError::animation(format!(
                "vary '{knob}': first frame ({f0}) must be before last frame ({f1})"
            )));
        }
        if f1 >= frame_count {
            return Err(AnimdlError::animation(format!(
                "vary '{knob}': last frame {f1} is outside 0..{frame_count}"
            )));
        }

        let span = (f1 - f0) as f64;
        for i in f0..=f1 {
            let value = if i == f1 {
                v1
            } else {
                v0 + (v1 - v0) * ((i - f0) as f64) / span
            };
            timeline.frames[i as usize].insert(knob.to_string(), value);
        }
    }

    Ok(timeline)
}

fn frame_operand(cmd: &Command, idx: usize, what: &str) -> AnimdlResult<u64> {
    let v = cmd.arg_num(idx).ok_or_else(|| {
        AnimdlError::animation(format!("{} expects a numeric {what}", cmd.op))
    })?;
    if !v.is_finite() || v < 0.0 || v.fract() != 0.0 {
        return Err(AnimdlError::animation(format!(
            "{}: {what} must be a non-negative integer, got {v}",
            cmd.op
        )));
    }
    Ok(v as u64)
}

fn vary_value(cmd: &Command, idx: usize, knob: &str) -> AnimdlResult<f64> {
    cmd.arg_num(idx).ok_or_else(|| {
        AnimdlError::animation(format!("vary '{knob}' expects a numeric value at position {idx}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
