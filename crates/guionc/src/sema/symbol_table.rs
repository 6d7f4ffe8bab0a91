//! Symbol table for declared scenes

use std::collections::HashMap;
use string_interner::backend::StringBackend;
use string_interner::{DefaultSymbol, StringInterner};

/// Kind of symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Scene,
}

/// A declared symbol; `name` is interned in the owning table
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    pub name: DefaultSymbol,
    pub kind: SymbolKind,
}

/// Registry of declared scene identifiers.
///
/// Lives for exactly one compilation; there is no way to remove an entry.
pub struct SymbolTable {
    names: StringInterner<StringBackend>,
    scenes: HashMap<DefaultSymbol, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            names: StringInterner::new(),
            scenes: HashMap::new(),
        }
    }

    /// Register a scene name. Returns `false` without mutating the table when
    /// the name is already present.
    pub fn add_scene(&mut self, name: &str) -> bool {
        let sym = self.names.get_or_intern(name);
        if self.scenes.contains_key(&sym) {
            return false;
        }
        self.scenes.insert(
            sym,
            Symbol {
                name: sym,
                kind: SymbolKind::Scene,
            },
        );
        true
    }

    /// Pure lookup: is a scene with this name declared?
    pub fn scene_exists(&self, name: &str) -> bool {
        self.names
            .get(name)
            .is_some_and(|sym| self.scenes.contains_key(&sym))
    }

    /// Number of distinct declared scenes
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
