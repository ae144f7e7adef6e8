use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{AnimdlError, AnimdlResult};
use crate::script::command::Command;
use crate::script::material::{Material, MaterialTable};

/// A parsed scene description: the ordered command stream plus the materials it defines.
///
/// This is the JSON-facing boundary object. It is built once before rendering and never mutated
/// by the interpreter.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// Commands in stream order.
    pub commands: Vec<Command>,
    /// Materials added on top of the default table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub materials: BTreeMap<String, Material>,
}

impl Script {
    /// Script from a command list with no extra materials.
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands,
            materials: BTreeMap::new(),
        }
    }

    /// Add a material definition.
    pub fn with_material(mut self, name: impl Into<String>, material: Material) -> Self {
        self.materials.insert(name.into(), material);
        self
    }

    /// Parse a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AnimdlResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AnimdlError::serde(format!("parse script JSON: {e}")))
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AnimdlResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AnimdlError::validation(format!("open script JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Default material table extended with this script's materials.
    pub fn material_table(&self) -> MaterialTable {
        let mut table = MaterialTable::new();
        table.extend(self.materials.iter().map(|(k, v)| (k.clone(), *v)));
        table
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/script.rs"]
mod tests;
