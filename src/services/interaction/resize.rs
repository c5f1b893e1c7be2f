// Event Resize System
//
// Resizing drags one of the horizontal edge handles of a block.
// - Left handle: adjusts the start day
// - Right handle: adjusts the end day

use crate::models::event::{Event, EventId};
use crate::services::layout::delta_columns;

/// Which edge of the event is being resized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Left edge - adjusts start day
    Left,
    /// Right edge - adjusts end day
    Right,
}

/// Width of the handle hit zone at each block edge
pub const HANDLE_SIZE: f32 = 8.0;

impl ResizeHandle {
    /// Check whether an x offset inside a block of `block_width` hits a handle
    ///
    /// Narrow blocks split their width between the two handles so a middle
    /// strip always remains for whole-block dragging.
    pub fn hit_test(block_width: f32, x_in_block: f32) -> Option<Self> {
        if !(0.0..block_width).contains(&x_in_block) {
            return None;
        }
        let zone = HANDLE_SIZE.min(block_width / 3.0);
        if x_in_block < zone {
            Some(ResizeHandle::Left)
        } else if x_in_block >= block_width - zone {
            Some(ResizeHandle::Right)
        } else {
            None
        }
    }
}

/// Context for an active resize operation
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeContext {
    /// The event being resized
    pub event_id: EventId,
    /// Which handle is being dragged
    pub handle: ResizeHandle,
    /// Start day when the gesture began
    pub original_start: usize,
    /// End day when the gesture began
    pub original_end: usize,
    /// Pointer x minus the block's left edge at press time
    pub grab_offset: f32,
}

impl ResizeContext {
    pub fn from_event(event: &Event, handle: ResizeHandle, grab_offset: f32) -> Self {
        Self {
            event_id: event.id().clone(),
            handle,
            original_start: event.start_day(),
            original_end: event.end_day(),
            grab_offset,
        }
    }

    /// Pointer offset from the block's original left edge
    pub fn offset_from_left(&self, pointer_delta: f32) -> f32 {
        self.grab_offset + pointer_delta
    }

    /// Span to commit for the current pointer position, or `None` when the
    /// left handle would reach or pass the end day.
    pub fn proposed_span(
        &self,
        current: &Event,
        pointer_delta: f32,
        cell_width: f32,
    ) -> Option<(usize, usize)> {
        let delta = delta_columns(self.offset_from_left(pointer_delta), cell_width);
        let original_start = self.original_start as i64;

        match self.handle {
            ResizeHandle::Left => {
                let new_start = original_start.saturating_add(delta).max(0) as usize;
                (new_start < current.end_day()).then_some((new_start, current.end_day()))
            }
            ResizeHandle::Right => {
                let new_end = original_start
                    .saturating_add(delta)
                    .saturating_sub(1)
                    .max(original_start) as usize;
                Some((current.start_day(), new_end))
            }
        }
    }
}
