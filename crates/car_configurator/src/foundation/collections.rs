//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable identifier of a node inside a [`crate::scene::SceneGraph`]
    ///
    /// Keys are handed out in insertion order, so two graphs built by the same
    /// sequence of insertions produce the same identifiers.
    pub struct NodeId;
}

/// Arena holding scene nodes keyed by [`NodeId`]
pub type NodeArena<T> = SlotMap<NodeId, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_stable_after_insert() {
        let mut arena: NodeArena<&str> = NodeArena::with_key();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_ne!(a, b);
        assert_eq!(arena[a], "a");
        assert_eq!(arena[b], "b");
    }
}
