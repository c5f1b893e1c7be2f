//! Pixel <-> day-column conversion for event blocks.
//!
//! Stateless. Every function takes the per-day `cell_width` explicitly.

use crate::models::event::{Event, EventId};

/// Left edge of a block starting on `start_day`
pub fn pixel_left(start_day: usize, cell_width: f32) -> f32 {
    start_day as f32 * cell_width
}

/// Width of a block covering `start_day..=end_day`
pub fn pixel_width(start_day: usize, end_day: usize, cell_width: f32) -> f32 {
    (end_day.saturating_sub(start_day) + 1) as f32 * cell_width
}

/// Snap a horizontal pixel offset to the nearest whole number of columns
pub fn delta_columns(offset_pixels: f32, cell_width: f32) -> i64 {
    (offset_pixels / cell_width).round() as i64
}

/// Column containing the x coordinate (relative to the first day column)
pub fn column_at(x: f32, cell_width: f32) -> Option<usize> {
    if x < 0.0 || !x.is_finite() {
        return None;
    }
    Some((x / cell_width).floor() as usize)
}

/// Horizontal placement of one event inside its resource row
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    pub event_id: EventId,
    pub row: usize,
    pub left: f32,
    pub width: f32,
}

impl EventBlock {
    pub fn for_event(event: &Event, cell_width: f32) -> Self {
        Self {
            event_id: event.id().clone(),
            row: event.resource_index(),
            left: pixel_left(event.start_day(), cell_width),
            width: pixel_width(event.start_day(), event.end_day(), cell_width),
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x < self.right()
    }
}

/// Blocks for every event, in the order given
pub fn layout_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    cell_width: f32,
) -> Vec<EventBlock> {
    events
        .into_iter()
        .map(|event| EventBlock::for_event(event, cell_width))
        .collect()
}
