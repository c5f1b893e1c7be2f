use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8;
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Colours for the resource grid, derived from the active egui visuals
#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub cell_bg: Color32,
    pub weekend_bg: Color32,
    pub label_bg: Color32,
    pub border: Color32,
    pub text: Color32,
    pub today_badge: Color32,
    pub today_text: Color32,
    pub remove_text: Color32,
    pub event_text: Color32,
    pub handle: Color32,
    pub drop_highlight: Color32,
}

impl GridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let base = visuals.extreme_bg_color;
        let accent = Color32::from_rgb(59, 130, 246);
        let weekend_mix = if visuals.dark_mode { 0.6 } else { 0.8 };
        Self {
            cell_bg: base,
            weekend_bg: blend(base, visuals.faint_bg_color, weekend_mix),
            label_bg: visuals.panel_fill,
            border: visuals.widgets.noninteractive.bg_stroke.color,
            text: visuals.text_color(),
            today_badge: accent,
            today_text: Color32::WHITE,
            remove_text: Color32::from_rgb(239, 68, 68),
            event_text: Color32::WHITE,
            handle: with_alpha(Color32::WHITE, 160),
            drop_highlight: with_alpha(accent, if visuals.dark_mode { 80 } else { 50 }),
        }
    }
}
