use std::f64::consts::{PI, TAU};

use crate::foundation::math::{DMat4, DVec3, transform_point};

/// Triangle soup; every three consecutive points form one triangle wound counter-clockwise when
/// seen from outside the surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonList {
    points: Vec<DVec3>,
}

impl PolygonList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one triangle.
    pub fn add_triangle(&mut self, a: DVec3, b: DVec3, c: DVec3) {
        self.points.extend_from_slice(&[a, b, c]);
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.points.len() / 3
    }

    /// Return `true` when no triangle has been added.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Triangles in insertion order.
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.points.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Map every vertex through `m`.
    pub fn transform(&mut self, m: &DMat4) {
        transform_all(&mut self.points, m);
    }
}

/// Line segments; every two consecutive points form one edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    points: Vec<DVec3>,
}

impl EdgeList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one edge.
    pub fn add_edge(&mut self, a: DVec3, b: DVec3) {
        self.points.extend_from_slice(&[a, b]);
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.points.len() / 2
    }

    /// Return `true` when no edge has been added.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = [DVec3; 2]> + '_ {
        self.points.chunks_exact(2).map(|e| [e[0], e[1]])
    }

    /// Map every vertex through `m`.
    pub fn transform(&mut self, m: &DMat4) {
        transform_all(&mut self.points, m);
    }
}

fn transform_all(points: &mut [DVec3], m: &DMat4) {
    for p in points {
        *p = transform_point(m, *p);
    }
}

/// Box with top-left-front corner `(x, y, z)`, extending `w` along +x, `h` along -y and `d`
/// along -z.
pub fn add_box(polys: &mut PolygonList, x: f64, y: f64, z: f64, w: f64, h: f64, d: f64) {
    let xs = [x, x + w];
    let ys = [y, y - h];
    let zs = [z, z - d];
    let c = |ix: usize, iy: usize, iz: usize| DVec3::new(xs[ix], ys[iy], zs[iz]);

    // Each face listed counter-clockwise as seen from outside.
    let faces = [
        [c(0, 0, 0), c(0, 1, 0), c(1, 1, 0), c(1, 0, 0)], // front
        [c(1, 0, 1), c(1, 1, 1), c(0, 1, 1), c(0, 0, 1)], // back
        [c(1, 0, 0), c(1, 1, 0), c(1, 1, 1), c(1, 0, 1)], // right
        [c(0, 0, 1), c(0, 1, 1), c(0, 1, 0), c(0, 0, 0)], // left
        [c(0, 0, 1), c(0, 0, 0), c(1, 0, 0), c(1, 0, 1)], // top
        [c(0, 1, 0), c(0, 1, 1), c(1, 1, 1), c(1, 1, 0)], // bottom
    ];
    for [a, b, cc, dd] in faces {
        polys.add_triangle(a, b, cc);
        polys.add_triangle(a, cc, dd);
    }
}

/// Sphere of radius `r` centered at `(cx, cy, cz)`, tessellated into `step` slices and `step`
/// bands. `step < 3` produces nothing.
pub fn add_sphere(polys: &mut PolygonList, cx: f64, cy: f64, cz: f64, r: f64, step: u32) {
    if step < 3 {
        return;
    }
    let n = step as usize;
    let center = DVec3::new(cx, cy, cz);

    // Rows are slices (angle about x), columns run pole to pole.
    let mut grid = Vec::with_capacity(n * (n + 1));
    for i in 0..n {
        let phi = TAU * (i as f64) / (n as f64);
        for j in 0..=n {
            let theta = PI * (j as f64) / (n as f64);
            grid.push(
                center
                    + r * DVec3::new(
                        theta.cos(),
                        theta.sin() * phi.cos(),
                        theta.sin() * phi.sin(),
                    ),
            );
        }
    }
    let at = |i: usize, j: usize| grid[(i % n) * (n + 1) + j];

    for i in 0..n {
        for j in 0..n {
            let p0 = at(i, j);
            let p1 = at(i, j + 1);
            let p2 = at(i + 1, j + 1);
            let p3 = at(i + 1, j);
            // Skip the triangles that collapse at the poles.
            if j != n - 1 {
                polys.add_triangle(p0, p1, p2);
            }
            if j != 0 {
                polys.add_triangle(p0, p2, p3);
            }
        }
    }
}

/// Torus around the y axis through `(cx, cy, cz)`: tube radius `r_tube`, ring radius `r_ring`.
/// `step < 3` produces nothing.
pub fn add_torus(
    polys: &mut PolygonList,
    cx: f64,
    cy: f64,
    cz: f64,
    r_tube: f64,
    r_ring: f64,
    step: u32,
) {
    if step < 3 {
        return;
    }
    let n = step as usize;
    let center = DVec3::new(cx, cy, cz);

    // Rows sweep the ring (phi), columns sweep the tube cross-section (theta).
    let mut grid = Vec::with_capacity(n * n);
    for i in 0..n {
        let phi = TAU * (i as f64) / (n as f64);
        for j in 0..n {
            let theta = TAU * (j as f64) / (n as f64);
            let k = r_tube * theta.cos() + r_ring;
            grid.push(center + DVec3::new(phi.cos() * k, r_tube * theta.sin(), -phi.sin() * k));
        }
    }
    let at = |i: usize, j: usize| grid[(i % n) * n + (j % n)];

    for i in 0..n {
        for j in 0..n {
            let p0 = at(i, j);
            let p1 = at(i + 1, j);
            let p2 = at(i + 1, j + 1);
            let p3 = at(i, j + 1);
            polys.add_triangle(p0, p1, p2);
            polys.add_triangle(p0, p2, p3);
        }
    }
}

/// Single segment from `(x0, y0, z0)` to `(x1, y1, z1)`.
pub fn add_edge(edges: &mut EdgeList, x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) {
    edges.add_edge(DVec3::new(x0, y0, z0), DVec3::new(x1, y1, z1));
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitives.rs"]
mod tests;
