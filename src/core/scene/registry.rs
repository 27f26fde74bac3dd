//=========================================================================
// Scene Registry
//=========================================================================
//
// Build-time list of loadable scenes.
//
// Entries keep their build order and index. Lookup by name goes through
// a map that keeps the first entry registered under each name, which is
// what a front-to-back scan of the list would find.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::path::Path;

//=== SceneEntry ==========================================================

/// One scene in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEntry {
    /// Position in build order.
    pub index: usize,

    /// Path as registered, e.g. `Assets/Scenes/Level1.unity`.
    pub path: String,

    /// File name without extension, e.g. `Level1`.
    pub name: String,
}

//=== SceneRegistry =======================================================

/// Ordered, read-only registry of scenes known at build time.
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    entries: Vec<SceneEntry>,
    by_name: HashMap<String, usize>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from scene paths in build order.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let mut registry = Self::new();
        for path in paths {
            registry.push(path);
        }
        registry
    }

    /// Appends a scene and returns its build index.
    pub fn push(&mut self, path: impl Into<String>) -> usize {
        let path = path.into();
        let index = self.entries.len();
        let name = scene_name_from_path(&path);

        // First registration wins on duplicate names
        self.by_name.entry(name.clone()).or_insert(index);
        self.entries.push(SceneEntry { index, path, name });
        index
    }

    //--- Queries ----------------------------------------------------------

    /// First entry whose derived name equals `name`.
    pub fn find(&self, name: &str) -> Option<&SceneEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, index: usize) -> Option<&SceneEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//=== Helpers =============================================================

/// Derives a scene name from its path: the file name without extension.
pub fn scene_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

//=========================================================================
// Tests
//=========================================================================
