// Drag transfer channel
//
// A whole-block drag carries exactly one payload, the event id as a plain
// string. It is attached when the drag starts and read back at drop time.

use crate::models::event::EventId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragTransfer {
    payload: String,
}

impl DragTransfer {
    pub fn for_event(event_id: &EventId) -> Self {
        Self {
            payload: event_id.as_str().to_string(),
        }
    }

    /// Raw payload as it crosses the channel
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Read the event id back out of the payload
    pub fn event_id(&self) -> EventId {
        EventId::new(self.payload.clone())
    }
}

/// Model-space cell resolved by the renderer under a drop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub resource_index: usize,
    pub day_index: usize,
}

impl DropTarget {
    pub fn new(resource_index: usize, day_index: usize) -> Self {
        Self {
            resource_index,
            day_index,
        }
    }
}
