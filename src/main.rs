// Resource Scheduler Application
// Main entry point

use resource_scheduler::services::settings::{load_settings_or_default, SettingsService};
use resource_scheduler::ui_egui::SchedulerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Resource Scheduler");

    let settings_service = SettingsService::from_project_dirs();
    let settings = load_settings_or_default(&settings_service);
    log::info!("Settings loaded from {}", settings_service.path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resource Scheduler",
        options,
        Box::new(move |_cc| Ok(Box::new(SchedulerApp::new(settings)))),
    )
}
