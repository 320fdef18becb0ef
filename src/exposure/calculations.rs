//! Pure exposure math.
//!
//! All functions here are pure and testable without any tables or rendering.
//! They take physical quantities (f-number, seconds, ISO), not slider indices;
//! index lookup lives in [`model`](super::model).

/// Lower bound of the brightness multiplier.
pub const MIN_BRIGHTNESS: f64 = 0.05;
/// Upper bound of the brightness multiplier.
pub const MAX_BRIGHTNESS: f64 = 3.0;
/// Largest blur radius the preview ever draws, in pixels.
pub const MAX_MOTION_BLUR: f64 = 15.0;
/// Shutter speeds at or slower than this risk visible camera shake.
pub const HANDHELD_LIMIT_SECONDS: f64 = 1.0 / 30.0;
/// Meter needle offset per stop of deviation, in percent of the meter width.
pub const METER_PERCENT_PER_STOP: f64 = -16.66;
/// The needle never leaves the meter: ±50 % from centre.
pub const METER_HALF_WIDTH: f64 = 50.0;

/// Exposure value of the camera settings, normalized to ISO 100.
///
/// ```text
/// EV = log2(N² / t) − log2(ISO / 100)
/// ```
///
/// Callers guarantee all three inputs are positive; every table entry is.
///
/// # Examples
/// ```
/// # use exposure_triangle::exposure::settings_ev;
/// // f/1, 1 s, ISO 100 is EV 0 by definition
/// assert_eq!(settings_ev(1.0, 1.0, 100), 0.0);
///
/// // Doubling ISO lowers the EV the settings can handle by one stop
/// assert_eq!(settings_ev(1.0, 1.0, 200), -1.0);
/// ```
pub fn settings_ev(aperture: f64, shutter_seconds: f64, iso: u32) -> f64 {
    let ev100 = (aperture * aperture / shutter_seconds).log2();
    ev100 - (f64::from(iso) / 100.0).log2()
}

/// Deviation of the settings from what the scene calls for.
///
/// Positive means the settings admit too little light (under-exposed),
/// negative means too much (over-exposed).
pub fn ev_difference(settings_ev: f64, scene_ev: f64) -> f64 {
    settings_ev - scene_ev
}

/// Brightness multiplier for the rendered preview.
///
/// Each stop of deviation halves or doubles brightness. Clamped to
/// [`MIN_BRIGHTNESS`]..=[`MAX_BRIGHTNESS`] so the preview stays legible.
pub fn brightness(ev_difference: f64) -> f64 {
    2f64.powf(-ev_difference).clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}

/// Motion-blur radius in preview pixels.
///
/// Zero for speeds faster than 1/30 s, then linear in exposure time and
/// capped at [`MAX_MOTION_BLUR`].
pub fn motion_blur(shutter_seconds: f64) -> f64 {
    if shutter_seconds >= HANDHELD_LIMIT_SECONDS {
        (shutter_seconds * 30.0 * 2.0).min(MAX_MOTION_BLUR)
    } else {
        0.0
    }
}

/// Sensor noise strength in `[0, 1]`.
///
/// ```text
/// ISO < 800         → 0
/// 800 ≤ ISO < 1600  → 0.2
/// ISO ≥ 1600        → min((ISO − 1600) / 1000, 1)
/// ```
///
/// ISO 1600 itself yields 0, lower than ISO 800. The step is kept as is.
pub fn noise_level(iso: u32) -> f64 {
    let iso = f64::from(iso);
    if iso >= 1600.0 {
        ((iso - 1600.0) / 1000.0).min(1.0)
    } else if iso >= 800.0 {
        0.2
    } else {
        0.0
    }
}

/// Opacity of the grain overlay drawn over the preview.
pub fn noise_opacity(noise_level: f64) -> f64 {
    noise_level * 0.5
}

/// Meter needle offset from centre, in percent of the meter width.
///
/// Over-exposure (negative deviation) moves the needle right. Roughly three
/// stops either way pin it to the edge.
pub fn meter_position(ev_difference: f64) -> f64 {
    (ev_difference * METER_PERCENT_PER_STOP).clamp(-METER_HALF_WIDTH, METER_HALF_WIDTH)
}

/// Needle position measured from the left edge of the meter, in percent.
pub fn meter_left_percent(ev_difference: f64) -> f64 {
    METER_HALF_WIDTH + meter_position(ev_difference)
}
