use std::collections::BTreeMap;

/// Name of the material every table is seeded with.
pub const DEFAULT_MATERIAL: &str = ".white";

/// Reflection constants for one color channel, serialized as `[ambient, diffuse, specular]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Reflectance {
    /// Ambient reflection coefficient.
    pub ambient: f64,
    /// Diffuse reflection coefficient.
    pub diffuse: f64,
    /// Specular reflection coefficient.
    pub specular: f64,
}

impl From<[f64; 3]> for Reflectance {
    fn from([ambient, diffuse, specular]: [f64; 3]) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }
}

impl From<Reflectance> for [f64; 3] {
    fn from(r: Reflectance) -> Self {
        [r.ambient, r.diffuse, r.specular]
    }
}

/// Per-channel reflectance of a surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    /// Red channel constants.
    pub red: Reflectance,
    /// Green channel constants.
    pub green: Reflectance,
    /// Blue channel constants.
    pub blue: Reflectance,
}

impl Material {
    /// Same constants on every channel.
    pub fn uniform(ambient: f64, diffuse: f64, specular: f64) -> Self {
        let r = Reflectance {
            ambient,
            diffuse,
            specular,
        };
        Self {
            red: r,
            green: r,
            blue: r,
        }
    }

    /// Constants in `r, g, b` order.
    pub fn channels(&self) -> [Reflectance; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Named materials available to the rasterizer.
///
/// Always contains [`DEFAULT_MATERIAL`]. The table is filled before rendering and only read
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialTable {
    entries: BTreeMap<String, Material>,
}

impl MaterialTable {
    /// Table holding only the default material.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(DEFAULT_MATERIAL.to_string(), Material::uniform(0.2, 0.5, 0.5));
        Self { entries }
    }

    /// Add or replace a material.
    pub fn insert(&mut self, name: impl Into<String>, material: Material) {
        self.entries.insert(name.into(), material);
    }

    /// Look up a material by name.
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.entries.get(name)
    }

    /// Return `true` when `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of defined materials, the default included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; the default material cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> Extend<(S, Material)> for MaterialTable {
    fn extend<I: IntoIterator<Item = (S, Material)>>(&mut self, iter: I) {
        for (name, material) in iter {
            self.insert(name, material);
        }
    }
}
