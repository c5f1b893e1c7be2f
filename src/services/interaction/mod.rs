//! Gesture state machine for the scheduling grid.
//!
//! The controller turns host input (gesture begin, pointer movement, release,
//! double activation on an empty cell) into [`EventStore`] mutations. It knows
//! nothing about the windowing toolkit: the renderer resolves pointer
//! positions into model coordinates ([`DropTarget`], grab offsets) before
//! calling in.
//!
//! Only one gesture is active at a time. Every call performs at most one
//! store mutation.
//!
//! Resizes commit live: each pointer movement that changes the proposed span
//! writes it to the store straight away, and release performs no mutation.

pub mod confirm;
pub mod drag;
pub mod resize;

use self::confirm::{ConfirmAction, Confirmation};
use self::drag::{DragTransfer, DropTarget};
use self::resize::{ResizeContext, ResizeHandle};
use crate::models::event::{Event, EventId};
use crate::services::error::{GestureError, GridError};
use crate::services::event::EventStore;

/// Host-assigned identity of one press-move-release sequence
pub type GestureId = u64;

/// What the pointer pressed on when a gesture began
#[derive(Debug, Clone, PartialEq)]
pub enum GestureStart {
    /// Whole-block drag
    Drag { event_id: EventId },
    /// Edge-handle resize; `grab_offset` is the pointer x minus the block's
    /// left edge at press time
    Resize {
        event_id: EventId,
        handle: ResizeHandle,
        grab_offset: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    Dragging {
        gesture: GestureId,
        transfer: DragTransfer,
    },
    ResizingLeft {
        gesture: GestureId,
        context: ResizeContext,
    },
    ResizingRight {
        gesture: GestureId,
        context: ResizeContext,
    },
}

impl InteractionState {
    fn gesture(&self) -> Option<GestureId> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Dragging { gesture, .. }
            | InteractionState::ResizingLeft { gesture, .. }
            | InteractionState::ResizingRight { gesture, .. } => Some(*gesture),
        }
    }
}

#[derive(Debug)]
pub struct InteractionController {
    state: InteractionState,
    cell_width: f32,
}

impl InteractionController {
    pub fn new(cell_width: f32) -> Self {
        Self {
            state: InteractionState::Idle,
            cell_width,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == InteractionState::Idle
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Event targeted by the active gesture, if any
    pub fn active_event(&self) -> Option<EventId> {
        match &self.state {
            InteractionState::Idle => None,
            InteractionState::Dragging { transfer, .. } => Some(transfer.event_id()),
            InteractionState::ResizingLeft { context, .. }
            | InteractionState::ResizingRight { context, .. } => Some(context.event_id.clone()),
        }
    }

    /// Start a gesture. Rejected while another gesture is active.
    pub fn begin(
        &mut self,
        store: &EventStore,
        gesture: GestureId,
        start: GestureStart,
    ) -> Result<(), GestureError> {
        if let Some(active) = self.state.gesture() {
            log::debug!("Rejected gesture {} while {} is active", gesture, active);
            return Err(GestureError::Busy { active });
        }

        self.state = match start {
            GestureStart::Drag { event_id } => {
                let event = lookup(store, &event_id)?;
                log::debug!("Gesture {} dragging {}", gesture, event.id());
                InteractionState::Dragging {
                    gesture,
                    transfer: DragTransfer::for_event(event.id()),
                }
            }
            GestureStart::Resize {
                event_id,
                handle,
                grab_offset,
            } => {
                let event = lookup(store, &event_id)?;
                let context = ResizeContext::from_event(event, handle, grab_offset);
                log::debug!("Gesture {} resizing {} ({:?})", gesture, event.id(), handle);
                match handle {
                    ResizeHandle::Left => InteractionState::ResizingLeft { gesture, context },
                    ResizeHandle::Right => InteractionState::ResizingRight { gesture, context },
                }
            }
        };
        Ok(())
    }

    /// Pointer moved by `pointer_delta` pixels since the gesture began.
    ///
    /// During a resize this commits the proposed span when it differs from the
    /// stored one and returns the updated event. Drags never mutate here.
    pub fn pointer_moved(
        &mut self,
        store: &mut EventStore,
        gesture: GestureId,
        pointer_delta: f32,
    ) -> Result<Option<Event>, GestureError> {
        self.ensure_active(gesture)?;

        let context = match &self.state {
            InteractionState::ResizingLeft { context, .. }
            | InteractionState::ResizingRight { context, .. } => context,
            _ => return Ok(None),
        };

        let current = lookup(store, &context.event_id)?;
        let Some((start, end)) = context.proposed_span(current, pointer_delta, self.cell_width)
        else {
            log::debug!("Resize of {} declined: start would reach end", context.event_id);
            return Ok(None);
        };
        if (start, end) == (current.start_day(), current.end_day()) {
            return Ok(None);
        }

        match store.resize(&context.event_id, start, end) {
            Ok(event) => Ok(Some(event.clone())),
            Err(GridError::EventNotFound(id)) => Err(GestureError::EventNotFound(id)),
            Err(err) => {
                log::debug!("Resize declined: {}", err);
                Ok(None)
            }
        }
    }

    /// Release the pointer, ending the gesture.
    ///
    /// A drag released over `Some(target)` moves the event there; released
    /// over nothing it is abandoned. Resizes were already committed while the
    /// pointer moved, so release leaves the store alone.
    pub fn end(
        &mut self,
        store: &mut EventStore,
        gesture: GestureId,
        target: Option<DropTarget>,
    ) -> Result<Option<Event>, GestureError> {
        self.ensure_active(gesture)?;

        match std::mem::replace(&mut self.state, InteractionState::Idle) {
            InteractionState::Dragging { transfer, .. } => {
                let Some(target) = target else {
                    log::debug!("Drag of {} abandoned outside the grid", transfer.payload());
                    return Ok(None);
                };
                let event_id = transfer.event_id();
                store
                    .move_event(&event_id, target.resource_index, target.day_index)
                    .map(|event| Some(event.clone()))
                    .map_err(|_| GestureError::EventNotFound(event_id))
            }
            InteractionState::ResizingLeft { context, .. }
            | InteractionState::ResizingRight { context, .. } => {
                log::debug!("Resize of {} finished", context.event_id);
                Ok(None)
            }
            InteractionState::Idle => Ok(None),
        }
    }

    /// Drop the active gesture without touching the store
    pub fn cancel(&mut self) {
        if let Some(gesture) = self.state.gesture() {
            log::debug!("Gesture {} cancelled", gesture);
        }
        self.state = InteractionState::Idle;
    }

    /// Double activation on an empty cell creates a single-day event there
    pub fn activate_cell(
        &mut self,
        store: &mut EventStore,
        resource_index: usize,
        day_index: usize,
    ) -> Result<EventId, GestureError> {
        if let Some(active) = self.state.gesture() {
            return Err(GestureError::Busy { active });
        }
        Ok(store.create(resource_index, day_index).id().clone())
    }

    /// Remove an event once `confirmation` approves. Returns whether it was removed.
    ///
    /// The event targeted by an active gesture cannot be removed.
    pub fn request_removal(
        &self,
        store: &mut EventStore,
        event_id: &EventId,
        confirmation: &mut impl Confirmation,
    ) -> bool {
        if self.active_event().as_ref() == Some(event_id) {
            log::debug!("Refusing to remove {} during an active gesture", event_id);
            return false;
        }
        let Some(event) = store.get(event_id) else {
            return false;
        };

        let action = ConfirmAction::delete_event(event);
        if !confirmation.confirm(&action) {
            log::debug!("Removal of {} declined", event_id);
            return false;
        }
        store.remove(event_id).is_some()
    }

    fn ensure_active(&self, gesture: GestureId) -> Result<(), GestureError> {
        match self.state.gesture() {
            Some(active) if active == gesture => Ok(()),
            _ => Err(GestureError::UnknownGesture(gesture)),
        }
    }
}

fn lookup<'a>(store: &'a EventStore, event_id: &EventId) -> Result<&'a Event, GestureError> {
    store
        .get(event_id)
        .ok_or_else(|| GestureError::EventNotFound(event_id.clone()))
}
