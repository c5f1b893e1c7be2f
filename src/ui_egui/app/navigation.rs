use super::SchedulerApp;
use crate::services::grid::{month_title, navigate, Navigation};

impl SchedulerApp {
    pub(super) fn navigate(&mut self, navigation: Navigation) {
        self.current_date = navigate(self.current_date, navigation);
    }

    pub(super) fn render_header(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.confirm_dialog.is_open();
        ui.add_enabled_ui(enabled, |ui| self.render_header_controls(ui));
    }

    fn render_header_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(month_title(self.current_date));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Right-to-left, so the buttons read Previous / Today / Next
                if ui.button("Next").clicked() {
                    self.navigate(Navigation::Next);
                }
                if ui.button("Today").clicked() {
                    self.navigate(Navigation::Today);
                }
                if ui.button("Previous").clicked() {
                    self.navigate(Navigation::Previous);
                }
            });
        });
        ui.add_space(4.0);
        if ui.button("Add Resource").clicked() {
            self.resources.add();
        }
        ui.add_space(6.0);
    }

    /// Arrow keys step months, `T` jumps to today
    pub(super) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.confirm_dialog.is_open() || ctx.wants_keyboard_input() {
            return;
        }

        let (previous, next, today) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::T),
            )
        });

        if previous {
            self.navigate(Navigation::Previous);
        } else if next {
            self.navigate(Navigation::Next);
        } else if today {
            self.navigate(Navigation::Today);
        }
    }
}
