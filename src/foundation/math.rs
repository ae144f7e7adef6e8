use crate::foundation::error::{AnimdlError, AnimdlResult};

pub use glam::{DMat4, DVec3};

/// Rotation axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Rotate about the x axis.
    X,
    /// Rotate about the y axis.
    Y,
    /// Rotate about the z axis.
    Z,
}

impl Axis {
    /// Parse an axis selector (`x`, `y` or `z`, case-insensitive).
    pub fn parse(s: &str) -> AnimdlResult<Self> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            "z" | "Z" => Ok(Self::Z),
            other => Err(AnimdlError::render(format!(
                "unknown rotation axis '{other}' (expected x, y or z)"
            ))),
        }
    }
}

/// Identity transform.
pub fn identity() -> DMat4 {
    DMat4::IDENTITY
}

/// Elementary translation.
pub fn make_translate(x: f64, y: f64, z: f64) -> DMat4 {
    DMat4::from_translation(DVec3::new(x, y, z))
}

/// Elementary (possibly non-uniform) scale.
pub fn make_scale(x: f64, y: f64, z: f64) -> DMat4 {
    DMat4::from_scale(DVec3::new(x, y, z))
}

/// Elementary rotation by `theta_rad` radians about `axis`.
pub fn make_rotation(axis: Axis, theta_rad: f64) -> DMat4 {
    match axis {
        Axis::X => DMat4::from_rotation_x(theta_rad),
        Axis::Y => DMat4::from_rotation_y(theta_rad),
        Axis::Z => DMat4::from_rotation_z(theta_rad),
    }
}

/// Compose `elementary` into `dst` in place.
///
/// Column-vector convention: the result maps a point through `elementary` first and then
/// through the previous `dst`, so transforms issued later act in the coordinate frame built by
/// the ones before them.
pub fn compose_into(dst: &mut DMat4, elementary: &DMat4) {
    *dst = *dst * *elementary;
}

/// Map a point through `m`.
pub fn transform_point(m: &DMat4, p: DVec3) -> DVec3 {
    m.transform_point3(p)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
