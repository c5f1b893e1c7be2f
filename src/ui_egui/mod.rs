mod app;
pub mod views;

pub use app::SchedulerApp;
