// Settings module
// Grid geometry and event colouring preferences

use serde::{Deserialize, Serialize};

/// How new events get their colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Cycle a fixed palette by creation order (reproducible)
    Palette,
    /// Random hue per event
    #[default]
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixel width of one day column
    pub cell_width: f32,
    /// Pixel height of one resource row
    pub row_height: f32,
    /// Pixel width of the sticky resource label column
    pub resource_column_width: f32,
    /// Number of resources present at startup
    pub initial_resources: usize,
    pub color_mode: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_width: 100.0,
            row_height: 50.0,
            resource_column_width: 150.0,
            initial_resources: 1,
            color_mode: ColorMode::default(),
        }
    }
}

impl Settings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if !(self.cell_width.is_finite() && self.cell_width > 0.0) {
            return Err("Cell width must be a positive number".to_string());
        }

        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err("Row height must be a positive number".to_string());
        }

        if !(self.resource_column_width.is_finite() && self.resource_column_width > 0.0) {
            return Err("Resource column width must be a positive number".to_string());
        }

        if self.initial_resources == 0 {
            return Err("At least one initial resource is required".to_string());
        }

        Ok(())
    }
}
