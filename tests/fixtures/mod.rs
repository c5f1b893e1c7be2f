// Test fixtures - reusable test data
// Provides consistent grid setups across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use resource_scheduler::models::event::EventId;
use resource_scheduler::models::resource::ResourceList;
use resource_scheduler::services::event::EventStore;
use resource_scheduler::services::interaction::InteractionController;
use resource_scheduler::services::palette::PaletteCycle;

/// Pixel width of one day column in every fixture
pub const CELL_WIDTH: f32 = 100.0;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 31, 2025 (end of a 31-day month followed by a 30-day one)
    pub fn march_31_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    }

    /// Returns Jan 31, 2024 (next month is a leap February)
    pub fn jan_31_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    /// Returns Dec 15, 2025 (next month crosses a year boundary)
    pub fn mid_december_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
    }
}

/// Everything the shell owns, wired with a deterministic colour source
pub struct Grid {
    pub resources: ResourceList,
    pub store: EventStore,
    pub controller: InteractionController,
}

impl Grid {
    pub fn new(resource_count: usize) -> Self {
        Self {
            resources: ResourceList::with_count(resource_count),
            store: EventStore::new(Box::new(PaletteCycle)),
            controller: InteractionController::new(CELL_WIDTH),
        }
    }

    pub fn span(&self, id: &EventId) -> (usize, usize) {
        let event = self.store.get(id).expect("event exists");
        (event.start_day(), event.end_day())
    }

    pub fn resource_of(&self, id: &EventId) -> usize {
        self.store.get(id).expect("event exists").resource_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_grid_starts_empty() {
        let grid = Grid::new(2);
        assert_eq!(grid.resources.len(), 2);
        assert!(grid.store.is_empty());
        assert!(grid.controller.is_idle());
    }
}
