// Integration tests for the gesture-driven scheduling flow
mod fixtures;

use chrono::NaiveDate;
use fixtures::{dates, Grid, CELL_WIDTH};
use mockall::mock;
use mockall::predicate::always;
use pretty_assertions::assert_eq;
use resource_scheduler::services::grid::{
    navigate_from, remove_resource, visible_days, Navigation,
};
use resource_scheduler::services::interaction::confirm::{ConfirmAction, Confirmation};
use resource_scheduler::services::interaction::drag::DropTarget;
use resource_scheduler::services::interaction::resize::ResizeHandle;
use resource_scheduler::services::interaction::GestureStart;

mock! {
    pub Gate {}

    impl Confirmation for Gate {
        fn confirm(&mut self, action: &ConfirmAction) -> bool;
    }
}

#[test]
fn test_create_resize_then_move() {
    let mut grid = Grid::new(2);

    // Double activation on the empty cell (resource 0, day 3)
    let id = grid
        .controller
        .activate_cell(&mut grid.store, 0, 3)
        .expect("idle controller creates");
    assert_eq!(grid.span(&id), (3, 3));
    assert_eq!(grid.resource_of(&id), 0);

    // Grab the right edge and pull it two cells to the right
    grid.controller
        .begin(
            &grid.store,
            1,
            GestureStart::Resize {
                event_id: id.clone(),
                handle: ResizeHandle::Right,
                grab_offset: CELL_WIDTH,
            },
        )
        .unwrap();
    grid.controller
        .pointer_moved(&mut grid.store, 1, CELL_WIDTH)
        .unwrap();
    grid.controller
        .pointer_moved(&mut grid.store, 1, 2.0 * CELL_WIDTH)
        .unwrap();
    grid.controller.end(&mut grid.store, 1, None).unwrap();
    assert_eq!(grid.span(&id), (3, 5));

    // Drag the block onto (resource 1, day 0)
    grid.controller
        .begin(&grid.store, 2, GestureStart::Drag { event_id: id.clone() })
        .unwrap();
    grid.controller
        .pointer_moved(&mut grid.store, 2, -300.0)
        .unwrap();
    let moved = grid
        .controller
        .end(&mut grid.store, 2, Some(DropTarget::new(1, 0)))
        .unwrap()
        .expect("drop on a cell moves the event");

    assert_eq!(moved.resource_index(), 1);
    assert_eq!((moved.start_day(), moved.end_day()), (0, 2));
    assert_eq!(moved.duration_days(), 2);
}

#[test]
fn test_declined_removal_keeps_event() {
    let mut grid = Grid::new(1);
    let id = grid.controller.activate_cell(&mut grid.store, 0, 4).unwrap();
    let before = grid.store.get(&id).cloned();

    let mut gate = MockGate::new();
    gate.expect_confirm()
        .withf(|action| match action {
            ConfirmAction::DeleteEvent { event_name, .. } => event_name == "Event 1",
            _ => false,
        })
        .times(1)
        .return_const(false);

    let removed = grid.controller.request_removal(&mut grid.store, &id, &mut gate);
    assert!(!removed);
    assert_eq!(grid.store.get(&id).cloned(), before);
}

#[test]
fn test_confirmed_removal_deletes_event() {
    let mut grid = Grid::new(1);
    let keep = grid.controller.activate_cell(&mut grid.store, 0, 1).unwrap();
    let id = grid.controller.activate_cell(&mut grid.store, 0, 4).unwrap();

    let mut gate = MockGate::new();
    gate.expect_confirm().with(always()).times(1).return_const(true);

    assert!(grid.controller.request_removal(&mut grid.store, &id, &mut gate));
    assert!(grid.store.get(&id).is_none());
    assert!(grid.store.get(&keep).is_some());
}

#[test]
fn test_next_month_from_march_31_shows_all_of_april() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let anchor = navigate_from(dates::march_31_2025(), Navigation::Next, today);
    let days = visible_days(anchor);

    assert_eq!(days.len(), 30);
    assert_eq!(days.first(), NaiveDate::from_ymd_opt(2025, 4, 1).as_ref());
    assert_eq!(days.last(), NaiveDate::from_ymd_opt(2025, 4, 30).as_ref());
}

#[test]
fn test_navigation_keeps_event_indices() {
    let mut grid = Grid::new(1);
    let id = grid.controller.activate_cell(&mut grid.store, 0, 3).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let anchor = navigate_from(dates::jan_31_2024(), Navigation::Next, today);
    assert_eq!(anchor, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

    // Same index, different calendar date
    assert_eq!(grid.span(&id), (3, 3));
    assert_eq!(visible_days(anchor)[3], NaiveDate::from_ymd_opt(2024, 2, 4).unwrap());
}

#[test]
fn test_year_boundary_navigation() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let anchor = navigate_from(dates::mid_december_2025(), Navigation::Next, today);
    assert_eq!(anchor, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    assert_eq!(visible_days(anchor).len(), 31);
}

#[test]
fn test_removing_a_resource_keeps_events_on_their_rows() {
    let mut grid = Grid::new(3);
    let on_first = grid.controller.activate_cell(&mut grid.store, 0, 0).unwrap();
    let on_second = grid.controller.activate_cell(&mut grid.store, 1, 1).unwrap();
    let on_third = grid.controller.activate_cell(&mut grid.store, 2, 2).unwrap();

    remove_resource(&mut grid.resources, &mut grid.store, 1).unwrap();

    assert!(grid.store.get(&on_second).is_none());
    let first_row = grid.resource_of(&on_first);
    let third_row = grid.resource_of(&on_third);
    assert_eq!(grid.resources.get(first_row).unwrap().label, "Resource 1");
    assert_eq!(grid.resources.get(third_row).unwrap().label, "Resource 3");
}

#[test]
fn test_concurrent_gesture_does_not_interleave() {
    let mut grid = Grid::new(2);
    let first = grid.controller.activate_cell(&mut grid.store, 0, 0).unwrap();
    let second = grid.controller.activate_cell(&mut grid.store, 1, 5).unwrap();

    grid.controller
        .begin(
            &grid.store,
            10,
            GestureStart::Resize {
                event_id: first.clone(),
                handle: ResizeHandle::Right,
                grab_offset: CELL_WIDTH,
            },
        )
        .unwrap();
    // A second touch tries to drag another block
    assert!(grid
        .controller
        .begin(&grid.store, 11, GestureStart::Drag { event_id: second.clone() })
        .is_err());
    assert!(grid
        .controller
        .end(&mut grid.store, 11, Some(DropTarget::new(0, 0)))
        .is_err());

    grid.controller
        .pointer_moved(&mut grid.store, 10, CELL_WIDTH)
        .unwrap();
    grid.controller.end(&mut grid.store, 10, None).unwrap();

    assert_eq!(grid.span(&first), (0, 1));
    assert_eq!(grid.span(&second), (5, 5));
    assert_eq!(grid.resource_of(&second), 1);
}
