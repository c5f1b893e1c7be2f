// Event module
// Schedulable block placed on a (resource, day) grid

use std::fmt;

/// Identity of an event within one store's lifetime (`event-1`, `event-2`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

impl EventId {
    /// Build the id for the `sequence`-th event created by a store
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("event-{}", sequence))
    }

    /// Wrap a raw id string, e.g. one read back from a drag payload
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display colour of an event block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl EventColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an HSL triple (hue in degrees, saturation and lightness in 0..=1)
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A block spanning one or more days on a single resource row.
///
/// Day indices are positions in the currently visible month, not calendar
/// dates. Mutation happens only through
/// [`EventStore`](crate::services::event::EventStore), which keeps
/// `start_day <= end_day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub(crate) id: EventId,
    pub(crate) name: String,
    pub(crate) color: EventColor,
    pub(crate) resource_index: usize,
    pub(crate) start_day: usize,
    pub(crate) end_day: usize,
}

impl Event {
    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> EventColor {
        self.color
    }

    pub fn resource_index(&self) -> usize {
        self.resource_index
    }

    pub fn start_day(&self) -> usize {
        self.start_day
    }

    pub fn end_day(&self) -> usize {
        self.end_day
    }

    /// Number of days past the start day covered by this event (0 for a single day)
    pub fn duration_days(&self) -> usize {
        self.end_day - self.start_day
    }

    /// Whether the event covers `day` on its row
    pub fn covers_day(&self, day: usize) -> bool {
        (self.start_day..=self.end_day).contains(&day)
    }
}
