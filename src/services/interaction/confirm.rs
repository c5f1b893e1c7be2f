//! Confirmation gate for destructive actions.
//!
//! The core never blocks on a prompt itself. Whoever drives the controller
//! supplies a [`Confirmation`]: a modal dialog in the desktop shell, a mock
//! or a closure in tests.

use crate::models::event::{Event, EventId};
use crate::models::resource::{Resource, ResourceId};

/// Actions that need the user's consent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete an event by ID
    DeleteEvent { event_id: EventId, event_name: String },
    /// Remove a resource row along with the events placed on it
    RemoveResource {
        resource_id: ResourceId,
        label: String,
        event_count: usize,
    },
}

impl ConfirmAction {
    pub fn delete_event(event: &Event) -> Self {
        ConfirmAction::DeleteEvent {
            event_id: event.id().clone(),
            event_name: event.name().to_string(),
        }
    }

    pub fn remove_resource(resource: &Resource, event_count: usize) -> Self {
        ConfirmAction::RemoveResource {
            resource_id: resource.id,
            label: resource.label.clone(),
            event_count,
        }
    }

    /// Get the dialog title for this action
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete Event",
            ConfirmAction::RemoveResource { .. } => "Remove Resource",
        }
    }

    /// Get the confirmation message for this action
    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteEvent { event_name, .. } => {
                format!(
                    "Are you sure you want to delete \"{}\"?\n\nThis action cannot be undone.",
                    event_name
                )
            }
            ConfirmAction::RemoveResource {
                label, event_count, ..
            } => {
                format!(
                    "Remove \"{}\" and its {} event(s)?\n\nThis action cannot be undone.",
                    label, event_count
                )
            }
        }
    }

    /// Get the confirm button text for this action
    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete",
            ConfirmAction::RemoveResource { .. } => "Remove",
        }
    }
}

/// Synchronous yes/no answer to a [`ConfirmAction`]
pub trait Confirmation {
    fn confirm(&mut self, action: &ConfirmAction) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&ConfirmAction) -> bool,
{
    fn confirm(&mut self, action: &ConfirmAction) -> bool {
        self(action)
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// User confirmed the action
    Confirmed,
    /// User cancelled the action
    Cancelled,
    /// Dialog is still open
    Pending,
}

impl Confirmation for ConfirmResult {
    fn confirm(&mut self, _action: &ConfirmAction) -> bool {
        *self == ConfirmResult::Confirmed
    }
}
