//! Fixed lookup tables the exposure model reads from.
//!
//! Every control in the simulator is a discrete slider: the user picks an
//! index, never a raw value. The four tables below are the whole domain of the
//! model. They are process-wide constants, ordered so that a higher index
//! always means "more" of the quantity (narrower aperture, longer exposure,
//! higher sensitivity), except for [`SCENES`], which runs from brightest to
//! darkest.
//!
//! | Table | Entries | Range |
//! |---|---|---|
//! | [`APERTURES`] | 10 | f/1.4 … f/22 |
//! | [`SHUTTER_SPEEDS`] | 15 | 1/4000 s … 4 s |
//! | [`ISO_VALUES`] | 8 | ISO 100 … ISO 12800 |
//! | [`SCENES`] | 8 | EV 15 (full sun) … EV 3 (city night) |

use serde::Serialize;
use std::fmt;

/// Common full and third stops, ascending f-number.
pub const APERTURES: [f64; 10] = [1.4, 1.8, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0];

/// A shutter speed: exposure duration plus the label printed on a camera dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShutterSpeed {
    /// Exposure duration in seconds.
    pub seconds: f64,
    pub label: &'static str,
}

const fn speed(seconds: f64, label: &'static str) -> ShutterSpeed {
    ShutterSpeed { seconds, label }
}

/// Shutter speeds from 1/4000 s to 4 s, ascending duration.
pub const SHUTTER_SPEEDS: [ShutterSpeed; 15] = [
    speed(1.0 / 4000.0, "1/4000"),
    speed(1.0 / 2000.0, "1/2000"),
    speed(1.0 / 1000.0, "1/1000"),
    speed(1.0 / 500.0, "1/500"),
    speed(1.0 / 250.0, "1/250"),
    speed(1.0 / 125.0, "1/125"),
    speed(1.0 / 60.0, "1/60"),
    speed(1.0 / 30.0, "1/30"),
    speed(1.0 / 15.0, "1/15"),
    speed(1.0 / 8.0, "1/8"),
    speed(1.0 / 4.0, "1/4"),
    speed(1.0 / 2.0, "1/2"),
    speed(1.0, "1s"),
    speed(2.0, "2s"),
    speed(4.0, "4s"),
];

/// Sensor sensitivities, one stop apart.
pub const ISO_VALUES: [u32; 8] = [100, 200, 400, 800, 1600, 3200, 6400, 12800];

/// A lighting condition and the exposure value a correct exposure at ISO 100 needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scene {
    pub name: &'static str,
    /// Reference exposure value at ISO 100.
    pub ev: f64,
    pub icon: &'static str,
}

impl Scene {
    /// Label used in scene pickers: `"☀️ Plein soleil (EV 15)"`.
    pub fn option_label(&self) -> String {
        format!("{} {} (EV {})", self.icon, self.name, self.ev)
    }
}

const fn scene(name: &'static str, ev: f64, icon: &'static str) -> Scene {
    Scene { name, ev, icon }
}

/// Reference scenes, brightest first.
pub const SCENES: [Scene; 8] = [
    scene("Plein soleil", 15.0, "☀️"),
    scene("Légèrement nuageux", 14.0, "🌤️"),
    scene("Nuageux", 13.0, "☁️"),
    scene("Ombre / Couvert", 12.0, "🌥️"),
    scene("Intérieur bien éclairé", 9.0, "🏠"),
    scene("Intérieur normal", 7.0, "💡"),
    scene("Intérieur sombre", 5.0, "🌙"),
    scene("Nuit urbaine", 3.0, "🌃"),
];

/// Identifies one of the four lookup tables (used in errors and listings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Aperture,
    Shutter,
    Iso,
    Scene,
}

impl Table {
    pub const ALL: [Table; 4] = [Table::Aperture, Table::Shutter, Table::Iso, Table::Scene];

    /// Number of entries in the table.
    pub fn len(self) -> usize {
        match self {
            Table::Aperture => APERTURES.len(),
            Table::Shutter => SHUTTER_SPEEDS.len(),
            Table::Iso => ISO_VALUES.len(),
            Table::Scene => SCENES.len(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Table::Aperture => "aperture",
            Table::Shutter => "shutter",
            Table::Iso => "iso",
            Table::Scene => "scene",
        }
    }

    /// Display label for the entry at `index`, or `None` when out of range.
    pub fn entry_label(self, index: usize) -> Option<String> {
        match self {
            Table::Aperture => APERTURES.get(index).map(|&f| format_aperture(f)),
            Table::Shutter => SHUTTER_SPEEDS.get(index).map(|s| s.label.to_string()),
            Table::Iso => ISO_VALUES.get(index).map(|&iso| format_iso(iso)),
            Table::Scene => SCENES.get(index).map(Scene::option_label),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `4.0` → `"f/4"`, `5.6` → `"f/5.6"`.
pub fn format_aperture(f_number: f64) -> String {
    format!("f/{}", f_number)
}

pub fn format_iso(iso: u32) -> String {
    format!("ISO {}", iso)
}

/// Indices that carry a tick label under a slider: every `step`-th entry.
///
/// The aperture slider labels every 2nd stop, the shutter slider every 3rd speed.
pub fn slider_marks(table: Table, step: usize) -> Vec<(usize, String)> {
    let step = step.max(1);
    (0..table.len())
        .step_by(step)
        .filter_map(|i| table.entry_label(i).map(|label| (i, label)))
        .collect()
}
