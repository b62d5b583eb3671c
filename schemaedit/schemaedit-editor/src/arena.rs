//! Generation-checked storage for editor nodes.

use std::fmt;

/// Handle to an editor in an [`EditorTree`](crate::EditorTree).
///
/// Handles outlive the editors they point at: once an editor is disposed its
/// slot may be reused, but the generation changes, so a stale handle never
/// resolves to the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Never live; generations start at 1.
    pub(crate) const DANGLING: NodeId = NodeId {
        index: usize::MAX,
        generation: 0,
    };
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

#[derive(Debug)]
pub(crate) struct Arena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index];
            entry.generation += 1;
            entry.value = Some(value);
            return NodeId {
                index,
                generation: entry.generation,
            };
        }
        self.entries.push(Entry {
            generation: 1,
            value: Some(value),
        });
        NodeId {
            index: self.entries.len() - 1,
            generation: 1,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.entries
            .get(id.index)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.value.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.entries
            .get_mut(id.index)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.value.as_mut())
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        let entry = self
            .entries
            .get_mut(id.index)
            .filter(|e| e.generation == id.generation)?;
        let value = entry.value.take()?;
        self.free.push(id.index);
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn is_live(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
