//! Confirmation dialog for destructive actions.
//!
//! Shows a modal asking the user to confirm deleting an event or removing a
//! resource row that still has events on it.

use egui::{Context, RichText};

use super::SchedulerApp;
use crate::services::interaction::confirm::{ConfirmAction, ConfirmResult};

/// State for the confirmation dialog
#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    /// The pending action to confirm
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request confirmation for an action
    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    /// Render the dialog. Once the user answers, the action is handed back
    /// together with the answer and the dialog closes.
    pub fn render(&mut self, ctx: &Context) -> Option<(ConfirmAction, ConfirmResult)> {
        let action = self.pending_action.as_ref()?;
        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.vertical(|ui| {
                        ui.label(action.message());
                    });
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_button = egui::Button::new(
                            RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                        )
                        .fill(egui::Color32::from_rgb(180, 60, 60));

                        if ui.add(confirm_button).clicked() {
                            result = ConfirmResult::Confirmed;
                        }

                        ui.add_space(10.0);

                        if ui.button("Cancel").clicked() {
                            result = ConfirmResult::Cancelled;
                        }
                    });
                });

                ui.add_space(5.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        if result == ConfirmResult::Pending {
            return None;
        }
        self.pending_action.take().map(|action| (action, result))
    }
}

impl SchedulerApp {
    /// Render the confirmation dialog and carry out the answered action
    pub(super) fn handle_confirm_dialog(&mut self, ctx: &Context) {
        let Some((action, mut result)) = self.confirm_dialog.render(ctx) else {
            return;
        };

        match action {
            ConfirmAction::DeleteEvent { event_id, .. } => {
                self.controller
                    .request_removal(&mut self.store, &event_id, &mut result);
            }
            ConfirmAction::RemoveResource {
                resource_id, label, ..
            } => {
                if result == ConfirmResult::Confirmed {
                    self.remove_resource(resource_id);
                } else {
                    log::debug!("Kept resource '{}'", label);
                }
            }
        }
    }
}
