//! Event store entry point.
//! Owns every event on the grid; mutations live in [`crud`].

use crate::models::event::{Event, EventId};
use crate::services::palette::{ColorSource, PaletteCycle};

pub mod crud;

/// In-memory owner of the grid's events, kept in creation order.
///
/// The store is held by the application shell and passed by reference to
/// whoever needs it. Readers re-fetch [`EventStore::events`] after a mutation;
/// nothing is pushed to them.
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    /// Number of events ever created; ids are never reused
    pub(crate) created: u64,
    pub(crate) color_source: Box<dyn ColorSource>,
}

impl EventStore {
    /// Create an empty store drawing colours from `color_source`
    pub fn new(color_source: Box<dyn ColorSource>) -> Self {
        Self {
            events: Vec::new(),
            created: 0,
            color_source,
        }
    }

    /// Look up an event by id
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// All events in creation order
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events placed on the given resource row
    pub fn events_for_resource(&self, resource_index: usize) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |event| event.resource_index == resource_index)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|event| &event.id == id)
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new(Box::new(PaletteCycle))
    }
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("events", &self.events)
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}
