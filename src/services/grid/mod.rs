//! Visible month and navigation for the scheduling grid.
//!
//! Everything here is a pure function of the anchor date. Day indices used by
//! events are positions in [`visible_days`], so changing months leaves event
//! indices untouched and only changes which calendar dates they line up with.

use crate::models::resource::{Resource, ResourceId, ResourceList};
use crate::services::error::GridError;
use crate::services::event::EventStore;
use crate::utils::date::{first_of_month, last_of_month, shift_month_preserving_day};
use chrono::{Datelike, Local, NaiveDate};

/// Header navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Today,
}

/// Header cell for one visible day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// Abbreviated weekday, e.g. `Mon`
    pub weekday: String,
    pub day_of_month: u32,
    pub is_today: bool,
}

/// Every day of the anchor's month, first to last, in calendar order
pub fn visible_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(anchor);
    let last = last_of_month(anchor);
    first.iter_days().take_while(|day| *day <= last).collect()
}

/// Apply a navigation action, reading today's date from the local clock
pub fn navigate(anchor: NaiveDate, navigation: Navigation) -> NaiveDate {
    navigate_from(anchor, navigation, Local::now().date_naive())
}

/// Apply a navigation action with an explicit notion of today
pub fn navigate_from(anchor: NaiveDate, navigation: Navigation, today: NaiveDate) -> NaiveDate {
    let target = match navigation {
        Navigation::Previous => shift_month_preserving_day(anchor, -1),
        Navigation::Next => shift_month_preserving_day(anchor, 1),
        Navigation::Today => today,
    };
    log::info!("Navigated {:?}: {} -> {}", navigation, anchor, target);
    target
}

/// Header title such as `March 2025`
pub fn month_title(anchor: NaiveDate) -> String {
    anchor.format("%B %Y").to_string()
}

/// Column headers for `days`, flagging the one equal to `today`
pub fn day_columns(days: &[NaiveDate], today: NaiveDate) -> Vec<DayColumn> {
    days.iter()
        .map(|&date| DayColumn {
            date,
            weekday: date.format("%a").to_string(),
            day_of_month: date.day(),
            is_today: date == today,
        })
        .collect()
}

/// Position of `date` within the visible month of `anchor`, if it is shown
pub fn day_index_of(anchor: NaiveDate, date: NaiveDate) -> Option<usize> {
    let first = first_of_month(anchor);
    if date < first || date > last_of_month(anchor) {
        return None;
    }
    usize::try_from((date - first).num_days()).ok()
}

/// Remove a resource row and detach the events that referenced it.
///
/// Events on the removed row are dropped and later rows' events shift up,
/// so no event is left pointing at the wrong resource.
pub fn remove_resource(
    resources: &mut ResourceList,
    store: &mut EventStore,
    index: usize,
) -> Result<Resource, GridError> {
    let removed = resources.remove(index)?;
    store.detach_resource(index);
    Ok(removed)
}

/// Remove the resource with `id`, wherever its row currently sits
pub fn remove_resource_by_id(
    resources: &mut ResourceList,
    store: &mut EventStore,
    id: ResourceId,
) -> Result<Resource, GridError> {
    let index = resources
        .index_of(id)
        .ok_or(GridError::ResourceNotFound(id))?;
    remove_resource(resources, store, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(date(2025, 4, 17) => 30; "april")]
    #[test_case(date(2025, 2, 1) => 28; "february")]
    #[test_case(date(2024, 2, 29) => 29; "leap february")]
    #[test_case(date(2025, 12, 31) => 31; "december")]
    fn test_visible_days_length(anchor: NaiveDate) -> usize {
        visible_days(anchor).len()
    }

    #[test]
    fn test_visible_days_are_contiguous_and_ordered() {
        let days = visible_days(date(2025, 3, 14));
        assert_eq!(days.first(), Some(&date(2025, 3, 1)));
        assert_eq!(days.last(), Some(&date(2025, 3, 31)));
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_visible_days_is_idempotent() {
        let anchor = date(2025, 6, 9);
        assert_eq!(visible_days(anchor), visible_days(anchor));
        assert_eq!(visible_days(anchor), visible_days(date(2025, 6, 30)));
    }

    #[test_case(date(2025, 3, 31), Navigation::Next => date(2025, 4, 30); "next clamps")]
    #[test_case(date(2025, 3, 31), Navigation::Previous => date(2025, 2, 28); "previous clamps")]
    #[test_case(date(2025, 1, 10), Navigation::Previous => date(2024, 12, 10); "previous year")]
    #[test_case(date(2025, 8, 2), Navigation::Today => date(2026, 10, 19); "today")]
    fn test_navigate_from(anchor: NaiveDate, navigation: Navigation) -> NaiveDate {
        navigate_from(anchor, navigation, date(2026, 10, 19))
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(date(2025, 3, 9)), "March 2025");
        assert_eq!(month_title(date(2024, 12, 1)), "December 2024");
    }

    #[test]
    fn test_day_columns_mark_today() {
        let days = visible_days(date(2025, 3, 1));
        let columns = day_columns(&days, date(2025, 3, 3));

        assert_eq!(columns.len(), 31);
        assert_eq!(columns[0].weekday, "Sat");
        assert_eq!(columns[0].day_of_month, 1);
        assert_eq!(columns.iter().filter(|c| c.is_today).count(), 1);
        assert!(columns[2].is_today);
    }

    #[test]
    fn test_day_columns_without_today_in_range() {
        let days = visible_days(date(2025, 3, 1));
        let columns = day_columns(&days, date(2025, 4, 1));
        assert!(columns.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_remove_resource_keeps_event_rows_aligned() {
        let mut resources = ResourceList::with_count(3);
        let mut store = EventStore::default();
        store.create(1, 0);
        let last = store.create(2, 4).id().clone();

        let removed = remove_resource(&mut resources, &mut store, 1).unwrap();
        assert_eq!(removed.label, "Resource 2");
        assert_eq!(store.len(), 1);
        let event = store.get(&last).unwrap();
        assert_eq!(resources.get(event.resource_index()).unwrap().label, "Resource 3");
    }

    #[test]
    fn test_remove_resource_out_of_range_leaves_events() {
        let mut resources = ResourceList::with_count(1);
        let mut store = EventStore::default();
        store.create(0, 0);

        let result = remove_resource(&mut resources, &mut store, 5);
        assert!(matches!(result, Err(GridError::ResourceOutOfRange { index: 5, len: 1 })));
        assert_eq!(store.len(), 1);
        assert_eq!(resources.len(), 1);
    }

    #[test]
    fn test_remove_resource_by_id_after_earlier_row_removed() {
        let mut resources = ResourceList::with_count(4);
        let mut store = EventStore::default();
        let on_third = store.create(2, 1).id().clone();
        let on_fourth = store.create(3, 2).id().clone();
        let third = resources.get(2).unwrap().id;

        // An earlier row disappears while removal of the third is pending
        remove_resource(&mut resources, &mut store, 0).unwrap();

        let removed = remove_resource_by_id(&mut resources, &mut store, third).unwrap();
        assert_eq!(removed.label, "Resource 3");
        assert!(store.get(&on_third).is_none());
        let survivor = store.get(&on_fourth).unwrap();
        assert_eq!(resources.get(survivor.resource_index()).unwrap().label, "Resource 4");
    }

    #[test]
    fn test_remove_resource_by_id_when_already_gone() {
        let mut resources = ResourceList::with_count(3);
        let mut store = EventStore::default();
        store.create(1, 0);
        let second = resources.get(1).unwrap().id;
        remove_resource(&mut resources, &mut store, 1).unwrap();

        let result = remove_resource_by_id(&mut resources, &mut store, second);
        assert_eq!(result.unwrap_err(), GridError::ResourceNotFound(second));
        assert_eq!(resources.len(), 2);
    }

    #[test]
    fn test_day_index_of() {
        let anchor = date(2025, 3, 20);
        assert_eq!(day_index_of(anchor, date(2025, 3, 1)), Some(0));
        assert_eq!(day_index_of(anchor, date(2025, 3, 31)), Some(30));
        assert_eq!(day_index_of(anchor, date(2025, 4, 1)), None);
        assert_eq!(day_index_of(anchor, date(2025, 2, 28)), None);
    }
}
