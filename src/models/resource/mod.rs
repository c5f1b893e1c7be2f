// Resource module
// Ordered resource rows of the scheduling grid

use crate::services::error::GridError;

/// Stable identity of a resource row, independent of its display position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: ResourceId,
    pub label: String,
}

/// Ordered sequence of resource rows.
///
/// Events reference rows by position; see
/// [`EventStore::detach_resource`](crate::services::event::EventStore::detach_resource)
/// for keeping those positions valid after a removal.
#[derive(Debug, Clone)]
pub struct ResourceList {
    resources: Vec<Resource>,
    next_id: u64,
}

impl ResourceList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a list holding `count` auto-labelled resources
    pub fn with_count(count: usize) -> Self {
        let mut list = Self::new();
        for _ in 0..count {
            list.add();
        }
        list
    }

    /// Append a resource labelled `Resource {len + 1}`
    pub fn add(&mut self) -> &Resource {
        let label = format!("Resource {}", self.resources.len() + 1);
        let id = ResourceId(self.next_id);
        self.next_id += 1;
        self.resources.push(Resource { id, label });
        log::info!("Added resource {:?}", id);
        &self.resources[self.resources.len() - 1]
    }

    /// Remove the resource at `index`; later rows move up by one
    pub fn remove(&mut self, index: usize) -> Result<Resource, GridError> {
        if index >= self.resources.len() {
            return Err(GridError::ResourceOutOfRange {
                index,
                len: self.resources.len(),
            });
        }
        let removed = self.resources.remove(index);
        log::info!("Removed resource '{}' at index {}", removed.label, index);
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Option<&Resource> {
        self.resources.get(index)
    }

    /// Current row position of the resource with `id`
    pub fn index_of(&self, id: ResourceId) -> Option<usize> {
        self.resources.iter().position(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.resources.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl Default for ResourceList {
    /// A single `Resource 1` row
    fn default() -> Self {
        Self::with_count(1)
    }
}
