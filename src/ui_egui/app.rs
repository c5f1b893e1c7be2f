mod confirm;
mod navigation;

use self::confirm::ConfirmDialogState;
use crate::models::resource::{ResourceId, ResourceList};
use crate::models::settings::Settings;
use crate::services::event::EventStore;
use crate::services::grid::{day_columns, remove_resource_by_id, visible_days};
use crate::services::interaction::confirm::ConfirmAction;
use crate::services::interaction::{GestureId, InteractionController, InteractionState};
use crate::services::palette::color_source_for;
use crate::ui_egui::views::{GridInput, GridView};
use chrono::{Local, NaiveDate};

/// Desktop shell around the scheduling core.
///
/// Owns the event store, resource rows and interaction controller, renders
/// them every frame and routes grid input back into the controller.
pub struct SchedulerApp {
    settings: Settings,
    /// Anchor date; the visible month is derived from it each frame
    current_date: NaiveDate,
    resources: ResourceList,
    store: EventStore,
    controller: InteractionController,
    confirm_dialog: ConfirmDialogState,
    /// Gesture id handed to the controller for the press in progress
    active_gesture: Option<GestureId>,
    next_gesture: GestureId,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("scheduler_header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let days = visible_days(self.current_date);
            let columns = day_columns(&days, Local::now().date_naive());
            let dragging = matches!(self.controller.state(), InteractionState::Dragging { .. });

            let inputs = egui::ScrollArea::both()
                .drag_to_scroll(false)
                .show(ui, |ui| {
                    GridView::show(
                        ui,
                        &columns,
                        &self.resources,
                        &self.store,
                        self.settings.cell_width,
                        self.settings.row_height,
                        self.settings.resource_column_width,
                        dragging,
                    )
                })
                .inner;

            for input in inputs {
                self.apply_grid_input(input);
            }
        });

        self.handle_confirm_dialog(ctx);
    }
}

impl SchedulerApp {
    pub fn new(settings: Settings) -> Self {
        log::info!(
            "Starting with {} resource(s), cell width {}px, {:?} colours",
            settings.initial_resources,
            settings.cell_width,
            settings.color_mode
        );

        Self {
            current_date: Local::now().date_naive(),
            resources: ResourceList::with_count(settings.initial_resources),
            store: EventStore::new(color_source_for(settings.color_mode)),
            controller: InteractionController::new(settings.cell_width),
            confirm_dialog: ConfirmDialogState::new(),
            active_gesture: None,
            next_gesture: 1,
            settings,
        }
    }

    fn apply_grid_input(&mut self, input: GridInput) {
        // The grid is frozen behind an open dialog; only a gesture already in
        // progress may finish
        let finishes_gesture =
            matches!(input, GridInput::PointerMoved { .. } | GridInput::Released { .. });
        if self.confirm_dialog.is_open() && !finishes_gesture {
            log::debug!("Grid input ignored while a confirmation is open: {:?}", input);
            return;
        }

        match input {
            GridInput::Begin(start) => {
                let gesture = self.next_gesture;
                self.next_gesture += 1;
                match self.controller.begin(&self.store, gesture, start) {
                    Ok(()) => self.active_gesture = Some(gesture),
                    Err(err) => log::debug!("Gesture not started: {}", err),
                }
            }
            GridInput::PointerMoved { delta } => {
                if let Some(gesture) = self.active_gesture {
                    if let Err(err) = self
                        .controller
                        .pointer_moved(&mut self.store, gesture, delta)
                    {
                        log::debug!("Pointer move ignored: {}", err);
                    }
                }
            }
            GridInput::Released { target } => {
                if let Some(gesture) = self.active_gesture.take() {
                    if let Err(err) = self.controller.end(&mut self.store, gesture, target) {
                        log::debug!("Release ignored: {}", err);
                    }
                }
            }
            GridInput::ActivateCell(target) => {
                if let Err(err) = self.controller.activate_cell(
                    &mut self.store,
                    target.resource_index,
                    target.day_index,
                ) {
                    log::debug!("Cell activation ignored: {}", err);
                }
            }
            GridInput::RequestDelete(event_id) => {
                if let Some(event) = self.store.get(&event_id) {
                    self.confirm_dialog.request(ConfirmAction::delete_event(event));
                }
            }
            GridInput::RequestRemoveResource(index) => {
                let Some(resource) = self.resources.get(index) else {
                    return;
                };
                let event_count = self.store.events_for_resource(index).count();
                if event_count == 0 {
                    let id = resource.id;
                    self.remove_resource(id);
                } else {
                    let action = ConfirmAction::remove_resource(resource, event_count);
                    self.confirm_dialog.request(action);
                }
            }
        }
    }

    fn remove_resource(&mut self, id: ResourceId) {
        if let Err(err) = remove_resource_by_id(&mut self.resources, &mut self.store, id) {
            log::debug!("Resource removal ignored: {}", err);
        }
    }
}
