use crate::foundation::core::Rgb8;
use crate::foundation::math::DVec3;
use crate::script::material::Material;

/// Directional light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// Direction toward the light.
    pub direction: DVec3,
    /// Light color, `0..=255` per channel.
    pub color: [f64; 3],
}

/// Scene-wide lighting parameters handed to the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    /// Direction toward the viewer.
    pub view: DVec3,
    /// Ambient light color, `0..=255` per channel.
    pub ambient: [f64; 3],
    /// The single light source.
    pub light: PointLight,
    /// Phong specular exponent.
    pub specular_exponent: i32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            view: DVec3::new(0.0, 0.0, 1.0),
            ambient: [50.0, 50.0, 50.0],
            light: PointLight {
                direction: DVec3::new(0.5, 0.75, 1.0),
                color: [255.0, 255.0, 255.0],
            },
            specular_exponent: 4,
        }
    }
}

impl Lighting {
    /// Flat ambient + diffuse + specular color of a surface with `normal`.
    pub fn shade(&self, normal: DVec3, material: &Material) -> Rgb8 {
        let n = normal.normalize_or_zero();
        let l = self.light.direction.normalize_or_zero();
        let v = self.view.normalize_or_zero();

        let n_dot_l = n.dot(l);
        let diffuse_factor = n_dot_l.max(0.0);
        let specular_factor = if n_dot_l > 0.0 {
            let reflected = 2.0 * n_dot_l * n - l;
            reflected.dot(v).max(0.0).powi(self.specular_exponent)
        } else {
            0.0
        };

        let mut out = [0.0; 3];
        for (ch, k) in material.channels().iter().enumerate() {
            out[ch] = self.ambient[ch] * k.ambient
                + self.light.color[ch] * k.diffuse * diffuse_factor
                + self.light.color[ch] * k.specular * specular_factor;
        }
        Rgb8::from_f64_clamped(out[0], out[1], out[2])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/lighting.rs"]
mod tests;
