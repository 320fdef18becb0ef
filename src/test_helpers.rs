//! Shared test utilities for the exposure-triangle test suite.
//!
//! Tests usually think in camera settings ("f/8, 1/125, ISO 400"), not slider
//! indices. These helpers translate one into the other and compare floats.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let sel = selection_for(8.0, "1/125", 400, "Nuageux");
//! let out = compute(&sel).unwrap();
//! assert_close(out.settings_ev, 11.0);
//! ```

use crate::exposure::Selection;
use crate::tables::{APERTURES, ISO_VALUES, SCENES, SHUTTER_SPEEDS};

/// Tolerance used by [`assert_close`].
pub const EPSILON: f64 = 1e-9;

/// Assert two floats are equal within [`EPSILON`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

// =========================================================================
// Selection builders
// =========================================================================

/// Build a selection from camera values. Panics if a value is not in its table.
pub fn selection_for(aperture: f64, shutter_label: &str, iso: u32, scene_name: &str) -> Selection {
    Selection {
        aperture: aperture_index(aperture),
        shutter: shutter_index(shutter_label),
        iso: iso_index(iso),
        scene: scene_index(scene_name),
    }
}

pub fn aperture_index(f_number: f64) -> usize {
    APERTURES
        .iter()
        .position(|&f| f == f_number)
        .unwrap_or_else(|| panic!("f/{f_number} not in aperture table"))
}

pub fn shutter_index(label: &str) -> usize {
    SHUTTER_SPEEDS
        .iter()
        .position(|s| s.label == label)
        .unwrap_or_else(|| panic!("{label} not in shutter table"))
}

pub fn iso_index(iso: u32) -> usize {
    ISO_VALUES
        .iter()
        .position(|&v| v == iso)
        .unwrap_or_else(|| panic!("ISO {iso} not in ISO table"))
}

pub fn scene_index(name: &str) -> usize {
    SCENES
        .iter()
        .position(|s| s.name == name)
        .unwrap_or_else(|| panic!("scene '{name}' not in scene table"))
}
