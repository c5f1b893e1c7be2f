use super::EventStore;
use crate::models::event::{Event, EventId};
use crate::services::error::GridError;

impl EventStore {
    /// Create a single-day event on `(resource_index, day_index)`.
    ///
    /// The day is not checked against the visible month.
    pub fn create(&mut self, resource_index: usize, day_index: usize) -> &Event {
        self.created += 1;
        let sequence = self.created;

        let event = Event {
            id: EventId::from_sequence(sequence),
            name: format!("Event {}", self.events.len() + 1),
            color: self.color_source.color_for(sequence),
            resource_index,
            start_day: day_index,
            end_day: day_index,
        };
        log::info!(
            "Created {} on resource {} day {}",
            event.id,
            resource_index,
            day_index
        );

        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Delete an event. Returns `None` when no event has that id.
    ///
    /// Callers are expected to have passed the confirmation gate already.
    pub fn remove(&mut self, id: &EventId) -> Option<Event> {
        let index = self.position(id)?;
        let removed = self.events.remove(index);
        log::info!("Removed {} ({})", removed.id, removed.name);
        Some(removed)
    }

    /// Move an event to a new row and start day, keeping its duration.
    pub fn move_event(
        &mut self,
        id: &EventId,
        new_resource_index: usize,
        new_start_day: usize,
    ) -> Result<&Event, GridError> {
        let index = self
            .position(id)
            .ok_or_else(|| GridError::EventNotFound(id.clone()))?;

        let event = &mut self.events[index];
        let duration = event.end_day - event.start_day;
        event.resource_index = new_resource_index;
        event.start_day = new_start_day;
        event.end_day = new_start_day + duration;
        log::info!(
            "Moved {} to resource {} days {}..={}",
            event.id,
            event.resource_index,
            event.start_day,
            event.end_day
        );

        Ok(&self.events[index])
    }

    /// Overwrite an event's span. Rejects `new_start > new_end`.
    pub fn resize(
        &mut self,
        id: &EventId,
        new_start: usize,
        new_end: usize,
    ) -> Result<&Event, GridError> {
        let index = self
            .position(id)
            .ok_or_else(|| GridError::EventNotFound(id.clone()))?;

        if new_start > new_end {
            return Err(GridError::InvalidSpan {
                start: new_start,
                end: new_end,
            });
        }

        let event = &mut self.events[index];
        event.start_day = new_start;
        event.end_day = new_end;
        log::debug!("Resized {} to days {}..={}", event.id, new_start, new_end);

        Ok(&self.events[index])
    }

    /// Follow the removal of the resource row at `resource_index`.
    ///
    /// Events on that row are dropped and events on later rows move up one
    /// row, so every `resource_index` keeps pointing at the same resource.
    /// Returns the number of dropped events.
    pub fn detach_resource(&mut self, resource_index: usize) -> usize {
        let before = self.events.len();
        self.events
            .retain(|event| event.resource_index != resource_index);
        for event in &mut self.events {
            if event.resource_index > resource_index {
                event.resource_index -= 1;
            }
        }

        let dropped = before - self.events.len();
        if dropped > 0 {
            log::info!(
                "Dropped {} event(s) with removed resource {}",
                dropped,
                resource_index
            );
        }
        dropped
    }
}
