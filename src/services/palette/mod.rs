//! Colour sources for newly created events.
//!
//! The store asks its [`ColorSource`] for one colour per creation. The
//! palette variant is deterministic so tests and screenshots are
//! reproducible; the random variant spreads hues across the whole wheel.

use crate::models::event::EventColor;
use crate::models::settings::ColorMode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SATURATION: f32 = 0.65;
const LIGHTNESS: f32 = 0.55;

/// Supplies the colour of the `sequence`-th created event (1-based)
pub trait ColorSource {
    fn color_for(&mut self, sequence: u64) -> EventColor;
}

/// Hues stepped by the golden angle so neighbours stay far apart
#[derive(Debug, Clone, Default)]
pub struct PaletteCycle;

impl PaletteCycle {
    const GOLDEN_ANGLE: f32 = 137.507_77;
}

impl ColorSource for PaletteCycle {
    fn color_for(&mut self, sequence: u64) -> EventColor {
        let step = sequence.saturating_sub(1) % 360;
        let hue = (step as f32 * Self::GOLDEN_ANGLE).rem_euclid(360.0);
        EventColor::from_hsl(hue, SATURATION, LIGHTNESS)
    }
}

/// Uniformly random hue per event
#[derive(Debug)]
pub struct RandomHue {
    rng: StdRng,
}

impl RandomHue {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible variant for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomHue {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomHue {
    fn color_for(&mut self, _sequence: u64) -> EventColor {
        let hue = self.rng.gen_range(0.0..360.0);
        EventColor::from_hsl(hue, SATURATION, LIGHTNESS)
    }
}

/// Build the colour source selected in settings
pub fn color_source_for(mode: ColorMode) -> Box<dyn ColorSource> {
    match mode {
        ColorMode::Palette => Box::new(PaletteCycle),
        ColorMode::Random => Box::new(RandomHue::new()),
    }
}
