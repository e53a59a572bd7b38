//! Per-build map from component identifier to its rendered box.
//!
//! The components panel fills a registry while it lays out boxes; the
//! assembler hands it to the connections panel, which reads it to attach
//! connectors. A registry lives for exactly one build.

use indexmap::IndexMap;
use log::warn;

use archboard_core::cell::CellRef;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionRegistry {
    entries: IndexMap<String, CellRef>,
}

impl PositionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component box.
    ///
    /// A duplicate identifier replaces the earlier entry; connectors then
    /// attach to the last box drawn for that identifier.
    pub fn insert(&mut self, id: impl Into<String>, cell: CellRef) -> Option<CellRef> {
        let id = id.into();
        let previous = self.entries.insert(id.clone(), cell);
        if previous.is_some() {
            warn!(component = id.as_str(); "Duplicate component id, later box wins");
        }
        previous
    }

    pub fn get(&self, id: &str) -> Option<CellRef> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves all entries of `other` into this registry.
    pub fn merge(&mut self, other: PositionRegistry) {
        for (id, cell) in other.entries {
            self.insert(id, cell);
        }
    }

    /// Iterates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CellRef)> {
        self.entries.iter().map(|(id, cell)| (id.as_str(), *cell))
    }
}

#[cfg(test)]
mod tests {
    use archboard_core::{
        builder::CellBuilder, draw::RectangleDefinition, geometry::Position,
    };

    use super::*;

    fn boxed(builder: &mut CellBuilder, x: f32) -> CellRef {
        builder
            .rectangle(Position::new(x, 0.0, 10.0, 10.0), &RectangleDefinition::new())
            .to_ref()
            .unwrap()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut builder = CellBuilder::new();
        let mut registry = PositionRegistry::new();
        let a = boxed(&mut builder, 0.0);

        assert!(registry.insert("A", a).is_none());
        assert_eq!(registry.get("A"), Some(a));
        assert!(registry.contains("A"));
        assert!(!registry.contains("B"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_replaces() {
        let mut builder = CellBuilder::new();
        let mut registry = PositionRegistry::new();
        let first = boxed(&mut builder, 0.0);
        let second = boxed(&mut builder, 50.0);

        registry.insert("A", first);
        assert_eq!(registry.insert("A", second), Some(first));
        assert_eq!(registry.get("A"), Some(second));
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut builder = CellBuilder::new();
        let mut registry = PositionRegistry::new();
        registry.insert("A", boxed(&mut builder, 0.0));

        let mut fragment = PositionRegistry::new();
        fragment.insert("B", boxed(&mut builder, 20.0));
        fragment.insert("C", boxed(&mut builder, 40.0));
        registry.merge(fragment);

        let ids: Vec<_> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }
}
