//! The exposure model: pure and synchronous, with no rendering.
//!
//! | Stage | Function |
//! |---|---|
//! | **Settings EV** | `log2(N² / t) − log2(ISO / 100)` |
//! | **Deviation** | settings EV − scene reference EV |
//! | **Brightness** | `2^(−deviation)`, clamped to `0.05..=3` |
//! | **Motion blur** | linear from 1/30 s, capped at 15 px |
//! | **Noise** | step at ISO 800, linear from ISO 1600 |
//! | **Categories** | depth of field, exposure status, blur risk, noise grade |
//!
//! The module is split into:
//! - **Calculations**: Pure functions over physical quantities (unit testable)
//! - **Categories**: Enums bucketing those quantities, with localized labels
//! - **Model**: [`Selection`] → [`DerivedOutput`] over the lookup tables

mod calculations;
mod categories;
pub mod model;

pub use calculations::{
    MAX_BRIGHTNESS, MAX_MOTION_BLUR, MIN_BRIGHTNESS, brightness, ev_difference, meter_left_percent,
    meter_position, motion_blur, noise_level, noise_opacity, settings_ev,
};
pub use categories::{BlurRisk, DepthOfField, ExposureStatus, Language, NoiseGrade, Severity};
pub use model::{DerivedOutput, ModelError, Selection, Settings, compute, compute_indices};
