use crate::foundation::core::Rgb8;
use crate::foundation::error::{AnimdlError, AnimdlResult};
use crate::foundation::math::DVec3;
use crate::geometry::primitives::{EdgeList, PolygonList};
use crate::raster::backend::Rasterizer;
use crate::raster::frame::Frame;
use crate::raster::lighting::Lighting;
use crate::script::material::MaterialTable;

/// CPU rasterizer: back-face culling, flat shading, scanline fill with depth testing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Create a rasterizer.
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn draw_polygons(
        &self,
        polys: &PolygonList,
        frame: &mut Frame,
        lighting: &Lighting,
        materials: &MaterialTable,
        material: &str,
    ) -> AnimdlResult<()> {
        let material = materials
            .get(material)
            .ok_or_else(|| AnimdlError::render(format!("unknown material '{material}'")))?;

        for tri in polys.triangles() {
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            if normal.dot(lighting.view) <= 0.0 {
                continue;
            }
            let color = lighting.shade(normal, material);
            scanline_fill(frame, tri, color);
        }
        Ok(())
    }

    fn draw_lines(&self, edges: &EdgeList, frame: &mut Frame, color: Rgb8) -> AnimdlResult<()> {
        for [a, b] in edges.edges() {
            draw_line(frame, a, b, color);
        }
        Ok(())
    }
}

fn scanline_fill(frame: &mut Frame, mut tri: [DVec3; 3], color: Rgb8) {
    tri.sort_by(|a, b| a.y.total_cmp(&b.y));
    let [bot, mid, top] = tri;

    // Rows outside the canvas are never visited.
    let y_start = (bot.y.round() as i64).max(0);
    let y_end = (top.y.round() as i64).min(i64::from(frame.height()) - 1);
    for y in y_start..=y_end {
        let yf = y as f64;
        let (x0, z0) = edge_at(bot, top, yf);
        let (x1, z1) = if yf < mid.y {
            edge_at(bot, mid, yf)
        } else {
            edge_at(mid, top, yf)
        };
        draw_span(frame, y, x0, z0, x1, z1, color);
    }
}

/// `(x, z)` where the edge `a -> b` crosses height `y`, clamped to the edge's endpoints.
fn edge_at(a: DVec3, b: DVec3, y: f64) -> (f64, f64) {
    let dy = b.y - a.y;
    let t = if dy.abs() < f64::EPSILON {
        1.0
    } else {
        ((y - a.y) / dy).clamp(0.0, 1.0)
    };
    (a.x + (b.x - a.x) * t, a.z + (b.z - a.z) * t)
}

fn draw_span(frame: &mut Frame, y: i64, x0: f64, z0: f64, x1: f64, z1: f64, color: Rgb8) {
    let (xl, zl, xr, zr) = if x0 <= x1 {
        (x0, z0, x1, z1)
    } else {
        (x1, z1, x0, z0)
    };
    let dx = xr - xl;
    let x_start = (xl.round() as i64).max(0);
    let x_end = (xr.round() as i64).min(i64::from(frame.width()) - 1);
    for x in x_start..=x_end {
        let t = if dx.abs() < f64::EPSILON {
            0.0
        } else {
            ((x as f64 - xl) / dx).clamp(0.0, 1.0)
        };
        frame.plot(x, y, zl + (zr - zl) * t, color);
    }
}

fn draw_line(frame: &mut Frame, a: DVec3, b: DVec3, color: Rgb8) {
    let d = b - a;
    let steps = d.x.abs().max(d.y.abs()).round().max(1.0) as i64;
    // One pixel of margin: points further out round off the canvas.
    let bounds = [
        -1.0,
        f64::from(frame.width()),
        -1.0,
        f64::from(frame.height()),
    ];
    let Some((t0, t1)) = visible_interval(a, d, bounds) else {
        return;
    };
    let s_start = ((t0 * steps as f64).floor() as i64).max(0);
    let s_end = ((t1 * steps as f64).ceil() as i64).min(steps);
    for s in s_start..=s_end {
        let t = s as f64 / steps as f64;
        let p = a + d * t;
        frame.plot(p.x.round() as i64, p.y.round() as i64, p.z, color);
    }
}

/// Parameter range `[t0, t1]` of `a + d * t`, `t` in `[0, 1]`, that lies inside the rectangle
/// `[xmin, xmax, ymin, ymax]` (Liang-Barsky).
fn visible_interval(a: DVec3, d: DVec3, [xmin, xmax, ymin, ymax]: [f64; 4]) -> Option<(f64, f64)> {
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-d.x, a.x - xmin),
        (d.x, xmax - a.x),
        (-d.y, a.y - ymin),
        (d.y, ymax - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((t0, t1))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/scanline.rs"]
mod tests;
