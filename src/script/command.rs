use crate::foundation::error::{AnimdlError, AnimdlResult};

/// Operation tag of a [`Command`].
///
/// Tags the interpreter does not know are kept verbatim in [`Op::Other`] and are skipped during
/// replay.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Op {
    /// Axis-aligned box primitive.
    Box,
    /// Sphere primitive.
    Sphere,
    /// Torus primitive.
    Torus,
    /// Single line segment.
    Line,
    /// Translate the active coordinate frame.
    Move,
    /// Scale the active coordinate frame.
    Scale,
    /// Rotate the active coordinate frame.
    Rotate,
    /// Push a copy of the active coordinate frame.
    Push,
    /// Pop the active coordinate frame.
    Pop,
    /// Show the current frame buffers.
    Display,
    /// Persist the current frame buffers to a named artifact.
    Save,
    /// Requested animation frame count.
    Frames,
    /// Base name for numbered frame artifacts.
    Basename,
    /// Linear knob interpolation between two frames.
    Vary,
    /// Any other tag.
    Other(String),
}

impl Op {
    /// Wire name of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Torus => "torus",
            Self::Line => "line",
            Self::Move => "move",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Display => "display",
            Self::Save => "save",
            Self::Frames => "frames",
            Self::Basename => "basename",
            Self::Vary => "vary",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for Op {
    fn from(s: String) -> Self {
        match s.as_str() {
            "box" => Self::Box,
            "sphere" => Self::Sphere,
            "torus" => Self::Torus,
            "line" => Self::Line,
            "move" => Self::Move,
            "scale" => Self::Scale,
            "rotate" => Self::Rotate,
            "push" => Self::Push,
            "pop" => Self::Pop,
            "display" => Self::Display,
            "save" => Self::Save,
            "frames" => Self::Frames,
            "basename" => Self::Basename,
            "vary" => Self::Vary,
            _ => Self::Other(s),
        }
    }
}

impl From<Op> for String {
    fn from(op: Op) -> Self {
        match op {
            Op::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single command operand.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Arg {
    /// Numeric operand.
    Num(f64),
    /// Symbolic operand (axis names, file names, base names).
    Str(String),
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

/// One parsed scene-description command.
///
/// Commands are immutable once a render starts; the interpreter only reads them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Command {
    /// Operation tag.
    pub op: Op,
    /// Ordered operands.
    #[serde(default)]
    pub args: Vec<Arg>,
    /// Knob whose per-frame value scales the numeric operands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knob: Option<String>,
    /// Material reference used for this command only.
    #[serde(
        default,
        alias = "constants",
        skip_serializing_if = "Option::is_none"
    )]
    pub material: Option<String>,
}

impl Command {
    /// Build a command with no knob and no material.
    pub fn new(op: Op, args: Vec<Arg>) -> Self {
        Self {
            op,
            args,
            knob: None,
            material: None,
        }
    }

    /// Attach a knob reference.
    pub fn with_knob(mut self, knob: impl Into<String>) -> Self {
        self.knob = Some(knob.into());
        self
    }

    /// Attach a material reference.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// `frames <n>`.
    pub fn frames(n: u64) -> Self {
        Self::new(Op::Frames, vec![Arg::Num(n as f64)])
    }

    /// `basename <name>`.
    pub fn basename(name: &str) -> Self {
        Self::new(Op::Basename, vec![name.into()])
    }

    /// `vary <knob> <first_frame> <last_frame> <first_value> <last_value>`.
    pub fn vary(knob: &str, first_frame: u64, last_frame: u64, v0: f64, v1: f64) -> Self {
        Self::new(
            Op::Vary,
            vec![
                Arg::Num(first_frame as f64),
                Arg::Num(last_frame as f64),
                Arg::Num(v0),
                Arg::Num(v1),
            ],
        )
        .with_knob(knob)
    }

    /// `move <x> <y> <z>`.
    pub fn translate(x: f64, y: f64, z: f64) -> Self {
        Self::new(Op::Move, nums(&[x, y, z]))
    }

    /// `scale <x> <y> <z>`.
    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        Self::new(Op::Scale, nums(&[x, y, z]))
    }

    /// `rotate <axis> <degrees>`.
    pub fn rotate(axis: &str, degrees: f64) -> Self {
        Self::new(Op::Rotate, vec![axis.into(), Arg::Num(degrees)])
    }

    /// `box <x> <y> <z> <w> <h> <d>`.
    pub fn cuboid(x: f64, y: f64, z: f64, w: f64, h: f64, d: f64) -> Self {
        Self::new(Op::Box, nums(&[x, y, z, w, h, d]))
    }

    /// `sphere <cx> <cy> <cz> <r>`.
    pub fn sphere(cx: f64, cy: f64, cz: f64, r: f64) -> Self {
        Self::new(Op::Sphere, nums(&[cx, cy, cz, r]))
    }

    /// `torus <cx> <cy> <cz> <r_tube> <r_ring>`.
    pub fn torus(cx: f64, cy: f64, cz: f64, r_tube: f64, r_ring: f64) -> Self {
        Self::new(Op::Torus, nums(&[cx, cy, cz, r_tube, r_ring]))
    }

    /// `line <x0> <y0> <z0> <x1> <y1> <z1>`.
    pub fn line(x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) -> Self {
        Self::new(Op::Line, nums(&[x0, y0, z0, x1, y1, z1]))
    }

    /// `push`.
    pub fn push() -> Self {
        Self::new(Op::Push, Vec::new())
    }

    /// `pop`.
    pub fn pop() -> Self {
        Self::new(Op::Pop, Vec::new())
    }

    /// `display`.
    pub fn display() -> Self {
        Self::new(Op::Display, Vec::new())
    }

    /// `save <name>`.
    pub fn save(name: &str) -> Self {
        Self::new(Op::Save, vec![name.into()])
    }

    /// Numeric operand at `idx`, if present.
    pub fn arg_num(&self, idx: usize) -> Option<f64> {
        match self.args.get(idx) {
            Some(Arg::Num(v)) => Some(*v),
            _ => None,
        }
    }

    /// Symbolic operand at `idx`, if present.
    pub fn arg_str(&self, idx: usize) -> Option<&str> {
        match self.args.get(idx) {
            Some(Arg::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric operand at `idx`, or a render error naming the command.
    pub fn expect_num(&self, idx: usize) -> AnimdlResult<f64> {
        self.arg_num(idx).ok_or_else(|| {
            AnimdlError::render(format!(
                "'{}' expects a numeric operand at position {idx}",
                self.op
            ))
        })
    }

    /// Symbolic operand at `idx`, or a render error naming the command.
    pub fn expect_str(&self, idx: usize) -> AnimdlResult<&str> {
        self.arg_str(idx).ok_or_else(|| {
            AnimdlError::render(format!(
                "'{}' expects a symbolic operand at position {idx}",
                self.op
            ))
        })
    }

    /// First `N` numeric operands, each multiplied by `multiplier`.
    pub fn scaled_nums<const N: usize>(&self, multiplier: f64) -> AnimdlResult<[f64; N]> {
        let mut out = [0.0; N];
        for (idx, slot) in out.iter_mut().enumerate() {
            *slot = self.expect_num(idx)? * multiplier;
        }
        Ok(out)
    }
}

fn nums(values: &[f64]) -> Vec<Arg> {
    values.iter().copied().map(Arg::Num).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/script/command.rs"]
mod tests;
