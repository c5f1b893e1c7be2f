//! Resource-by-day grid rendering and pointer hit testing.
//!
//! The view paints the header row, resource labels, day cells and event
//! blocks, then translates egui pointer input into [`GridInput`] values in
//! model coordinates. It never mutates the store; the app feeds the inputs
//! to the interaction controller.

use chrono::{Datelike, Weekday};
use egui::{pos2, vec2, Align2, CursorIcon, FontId, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

use super::palette::GridPalette;
use crate::models::event::{EventColor, EventId};
use crate::models::resource::ResourceList;
use crate::services::event::EventStore;
use crate::services::grid::DayColumn;
use crate::services::interaction::drag::DropTarget;
use crate::services::interaction::resize::{ResizeHandle, HANDLE_SIZE};
use crate::services::interaction::GestureStart;
use crate::services::layout::{column_at, layout_events, EventBlock};

const HEADER_HEIGHT: f32 = 44.0;
const BLOCK_MARGIN_Y: f32 = 6.0;
const BUTTON_SIZE: f32 = 14.0;

/// Input resolved from one frame of pointer activity
#[derive(Debug, Clone, PartialEq)]
pub enum GridInput {
    Begin(GestureStart),
    PointerMoved { delta: f32 },
    Released { target: Option<DropTarget> },
    ActivateCell(DropTarget),
    RequestDelete(EventId),
    RequestRemoveResource(usize),
}

/// Pixel placement of the grid's parts inside the allocated rect
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridGeometry {
    pub origin: Pos2,
    pub label_width: f32,
    pub header_height: f32,
    pub cell_width: f32,
    pub row_height: f32,
    pub rows: usize,
    pub days: usize,
}

impl GridGeometry {
    pub fn size(&self) -> Vec2 {
        vec2(
            self.label_width + self.days as f32 * self.cell_width,
            self.header_height + self.rows as f32 * self.row_height,
        )
    }

    fn days_left(&self) -> f32 {
        self.origin.x + self.label_width
    }

    fn rows_top(&self) -> f32 {
        self.origin.y + self.header_height
    }

    pub fn header_rect(&self, day: usize) -> Rect {
        Rect::from_min_size(
            pos2(self.days_left() + day as f32 * self.cell_width, self.origin.y),
            vec2(self.cell_width, self.header_height),
        )
    }

    pub fn label_rect(&self, row: usize) -> Rect {
        Rect::from_min_size(
            pos2(self.origin.x, self.rows_top() + row as f32 * self.row_height),
            vec2(self.label_width, self.row_height),
        )
    }

    pub fn cell_rect(&self, row: usize, day: usize) -> Rect {
        Rect::from_min_size(
            pos2(
                self.days_left() + day as f32 * self.cell_width,
                self.rows_top() + row as f32 * self.row_height,
            ),
            vec2(self.cell_width, self.row_height),
        )
    }

    /// Cell under `pos`, if it lies on a visible day of an existing row
    pub fn cell_at(&self, pos: Pos2) -> Option<DropTarget> {
        let day = column_at(pos.x - self.days_left(), self.cell_width)?;
        let row = column_at(pos.y - self.rows_top(), self.row_height)?;
        (day < self.days && row < self.rows).then(|| DropTarget::new(row, day))
    }

    pub fn block_rect(&self, block: &EventBlock) -> Rect {
        Rect::from_min_size(
            pos2(
                self.days_left() + block.left,
                self.rows_top() + block.row as f32 * self.row_height + BLOCK_MARGIN_Y,
            ),
            vec2(block.width, self.row_height - 2.0 * BLOCK_MARGIN_Y),
        )
    }

    pub fn remove_resource_rect(&self, row: usize) -> Rect {
        let label = self.label_rect(row);
        Rect::from_center_size(
            pos2(label.right() - BUTTON_SIZE, label.center().y),
            Vec2::splat(BUTTON_SIZE),
        )
    }
}

/// Close button sitting left of the right-hand resize handle
pub(crate) fn close_button_rect(block_rect: Rect) -> Rect {
    Rect::from_center_size(
        pos2(
            block_rect.right() - HANDLE_SIZE - BUTTON_SIZE / 2.0,
            block_rect.center().y,
        ),
        Vec2::splat(BUTTON_SIZE),
    )
}

fn event_color32(color: EventColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// What the pointer is over, topmost first
enum Hit {
    RemoveResource(usize),
    Close(EventId),
    Handle(EventId, ResizeHandle, f32),
    Block(EventId),
    Cell(DropTarget),
    Nothing,
}

fn hit_test(geometry: &GridGeometry, blocks: &[(EventBlock, Rect)], pos: Pos2) -> Hit {
    let on_remove_button = |row: &usize| geometry.remove_resource_rect(*row).contains(pos);
    if let Some(row) = (0..geometry.rows).find(on_remove_button) {
        return Hit::RemoveResource(row);
    }

    for (block, rect) in blocks.iter().rev() {
        if !rect.contains(pos) {
            continue;
        }
        let grab_offset = pos.x - rect.left();
        if close_button_rect(*rect).contains(pos) {
            return Hit::Close(block.event_id.clone());
        }
        return match ResizeHandle::hit_test(rect.width(), grab_offset) {
            Some(handle) => Hit::Handle(block.event_id.clone(), handle, grab_offset),
            None => Hit::Block(block.event_id.clone()),
        };
    }

    geometry.cell_at(pos).map_or(Hit::Nothing, Hit::Cell)
}

pub struct GridView;

impl GridView {
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        ui: &mut Ui,
        columns: &[DayColumn],
        resources: &ResourceList,
        store: &EventStore,
        cell_width: f32,
        row_height: f32,
        label_width: f32,
        dragging: bool,
    ) -> Vec<GridInput> {
        let mut inputs = Vec::new();
        let palette = GridPalette::from_visuals(ui.visuals());

        let provisional = GridGeometry {
            origin: Pos2::ZERO,
            label_width,
            header_height: HEADER_HEIGHT,
            cell_width,
            row_height,
            rows: resources.len(),
            days: columns.len(),
        };
        let (rect, response) = ui.allocate_exact_size(provisional.size(), Sense::click_and_drag());
        let geometry = GridGeometry {
            origin: rect.min,
            ..provisional
        };
        let painter = ui.painter_at(rect);

        // Header row
        for (day, column) in columns.iter().enumerate() {
            let header = geometry.header_rect(day);
            painter.rect_stroke(header, Rounding::ZERO, Stroke::new(1.0, palette.border));
            let label = format!("{} {}", column.weekday, column.day_of_month);
            let text_color = if column.is_today {
                painter.rect_filled(header.shrink(6.0), Rounding::same(6.0), palette.today_badge);
                palette.today_text
            } else {
                palette.text
            };
            painter.text(
                header.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(14.0),
                text_color,
            );
        }
        let corner = Rect::from_min_size(geometry.origin, vec2(label_width, HEADER_HEIGHT));
        painter.rect_filled(corner, Rounding::ZERO, palette.label_bg);
        painter.rect_stroke(corner, Rounding::ZERO, Stroke::new(1.0, palette.border));
        painter.text(
            corner.center(),
            Align2::CENTER_CENTER,
            "Resources",
            FontId::proportional(14.0),
            palette.text,
        );

        // Resource rows
        for (row, resource) in resources.iter().enumerate() {
            let label = geometry.label_rect(row);
            painter.rect_filled(label, Rounding::ZERO, palette.label_bg);
            painter.rect_stroke(label, Rounding::ZERO, Stroke::new(1.0, palette.border));
            painter.text(
                pos2(label.left() + 8.0, label.center().y),
                Align2::LEFT_CENTER,
                &resource.label,
                FontId::proportional(14.0),
                palette.text,
            );
            painter.text(
                geometry.remove_resource_rect(row).center(),
                Align2::CENTER_CENTER,
                "x",
                FontId::proportional(14.0),
                palette.remove_text,
            );

            for (day, column) in columns.iter().enumerate() {
                let cell = geometry.cell_rect(row, day);
                let weekend = matches!(column.date.weekday(), Weekday::Sat | Weekday::Sun);
                let fill = if weekend { palette.weekend_bg } else { palette.cell_bg };
                painter.rect_filled(cell, Rounding::ZERO, fill);
                painter.rect_stroke(cell, Rounding::ZERO, Stroke::new(1.0, palette.border));
            }
        }

        let pointer = ui.input(|i| i.pointer.latest_pos());

        if dragging {
            if let Some(target) = pointer.and_then(|pos| geometry.cell_at(pos)) {
                let cell = geometry.cell_rect(target.resource_index, target.day_index);
                painter.rect_filled(cell, Rounding::ZERO, palette.drop_highlight);
            }
        }

        // Event blocks
        let blocks: Vec<(EventBlock, Rect)> = layout_events(store.events(), cell_width)
            .into_iter()
            .map(|block| {
                let rect = geometry.block_rect(&block);
                (block, rect)
            })
            .collect();

        for (block, block_rect) in &blocks {
            let Some(event) = store.get(&block.event_id) else {
                continue;
            };
            let fill = event_color32(event.color());
            painter.rect_filled(*block_rect, Rounding::same(4.0), fill);
            painter.text(
                pos2(block_rect.left() + HANDLE_SIZE + 4.0, block_rect.center().y),
                Align2::LEFT_CENTER,
                event.name(),
                FontId::proportional(13.0),
                palette.event_text,
            );
            painter.text(
                close_button_rect(*block_rect).center(),
                Align2::CENTER_CENTER,
                "x",
                FontId::proportional(13.0),
                palette.event_text,
            );
            for x in [
                block_rect.left() + HANDLE_SIZE / 2.0,
                block_rect.right() - HANDLE_SIZE / 2.0,
            ] {
                painter.line_segment(
                    [pos2(x, block_rect.top() + 6.0), pos2(x, block_rect.bottom() - 6.0)],
                    Stroke::new(2.0, palette.handle),
                );
            }
        }

        // Pointer interpretation
        if let Some(pos) = response.hover_pos() {
            if let Hit::Handle(..) = hit_test(&geometry, &blocks, pos) {
                ui.output_mut(|out| out.cursor_icon = CursorIcon::ResizeHorizontal);
            }
        }

        if response.drag_started() {
            let press = ui.input(|i| i.pointer.press_origin());
            match press.map(|pos| hit_test(&geometry, &blocks, pos)) {
                Some(Hit::Handle(event_id, handle, grab_offset)) => {
                    inputs.push(GridInput::Begin(GestureStart::Resize {
                        event_id,
                        handle,
                        grab_offset,
                    }));
                }
                Some(Hit::Block(event_id)) => {
                    inputs.push(GridInput::Begin(GestureStart::Drag { event_id }));
                }
                _ => {}
            }
        }

        if response.dragged() {
            let press = ui.input(|i| i.pointer.press_origin());
            if let (Some(press), Some(pos)) = (press, pointer) {
                inputs.push(GridInput::PointerMoved {
                    delta: pos.x - press.x,
                });
            }
            if dragging {
                ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
            }
        }

        if ui.input(|i| i.pointer.primary_released()) {
            inputs.push(GridInput::Released {
                target: pointer.and_then(|pos| geometry.cell_at(pos)),
            });
        }

        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Hit::Cell(target) = hit_test(&geometry, &blocks, pos) {
                    inputs.push(GridInput::ActivateCell(target));
                }
            }
        } else if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                match hit_test(&geometry, &blocks, pos) {
                    Hit::Close(event_id) => inputs.push(GridInput::RequestDelete(event_id)),
                    Hit::RemoveResource(row) => inputs.push(GridInput::RequestRemoveResource(row)),
                    _ => {}
                }
            }
        }

        inputs
    }
}
