//! The exposure model: four slider indices in, every derived quantity out.
//!
//! [`compute`] is the single entry point presentation layers call. It checks
//! that each index is inside its table, resolves the physical values, and runs
//! the [`calculations`](super::calculations). Nothing is cached; the cost is a
//! handful of float operations.

use super::calculations;
use super::categories::{BlurRisk, DepthOfField, ExposureStatus, NoiseGrade, Severity};
use crate::tables::{APERTURES, ISO_VALUES, SCENES, SHUTTER_SPEEDS, Scene, ShutterSpeed, Table};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{table} index {index} out of range (table has {len} entries)")]
    IndexOutOfRange {
        table: Table,
        index: usize,
        len: usize,
    },
}

/// The four slider positions.
///
/// Owned by the caller; the model only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selection {
    pub aperture: usize,
    pub shutter: usize,
    pub iso: usize,
    pub scene: usize,
}

impl Default for Selection {
    /// f/4, 1/60 s, ISO 100 under full sun.
    fn default() -> Self {
        Self {
            aperture: 4,
            shutter: 6,
            iso: 0,
            scene: 0,
        }
    }
}

impl Selection {
    /// Index into `table`.
    pub fn index(&self, table: Table) -> usize {
        match table {
            Table::Aperture => self.aperture,
            Table::Shutter => self.shutter,
            Table::Iso => self.iso,
            Table::Scene => self.scene,
        }
    }

    /// Check every index against its table, reporting the first that is out of range.
    pub fn validate(&self) -> Result<(), ModelError> {
        for table in Table::ALL {
            let index = self.index(table);
            let len = table.len();
            if index >= len {
                return Err(ModelError::IndexOutOfRange { table, index, len });
            }
        }
        Ok(())
    }

    /// Resolve the indices to table entries.
    pub fn resolve(&self) -> Result<Settings, ModelError> {
        self.validate()?;
        Ok(Settings {
            aperture: APERTURES[self.aperture],
            shutter: SHUTTER_SPEEDS[self.shutter],
            iso: ISO_VALUES[self.iso],
            scene: SCENES[self.scene],
        })
    }
}

/// Physical values a [`Selection`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Settings {
    /// f-number.
    pub aperture: f64,
    pub shutter: ShutterSpeed,
    pub iso: u32,
    pub scene: Scene,
}

/// Everything the model derives from one [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedOutput {
    pub settings: Settings,
    /// Exposure value of the settings, normalized to ISO 100.
    pub settings_ev: f64,
    /// `settings_ev − scene.ev`; positive is under-exposed.
    pub ev_difference: f64,
    /// Brightness multiplier, `0.05..=3.0`.
    pub brightness: f64,
    /// Blur radius in preview pixels, `0..=15`.
    pub motion_blur: f64,
    /// Noise strength, `0..=1`.
    pub noise_level: f64,
    pub depth_of_field: DepthOfField,
    pub status: ExposureStatus,
    /// Needle offset from meter centre in percent, `-50..=50`.
    pub meter_position: f64,
    pub blur_risk: BlurRisk,
    pub noise_grade: NoiseGrade,
}

impl DerivedOutput {
    pub fn severity(&self) -> Severity {
        self.status.severity()
    }

    /// Grain overlay opacity for the preview.
    pub fn noise_opacity(&self) -> f64 {
        calculations::noise_opacity(self.noise_level)
    }

    /// Needle position from the meter's left edge, in percent.
    pub fn meter_left_percent(&self) -> f64 {
        calculations::meter_left_percent(self.ev_difference)
    }
}

/// Run the full model for one selection.
///
/// Out-of-range indices are rejected before any formula runs.
pub fn compute(selection: &Selection) -> Result<DerivedOutput, ModelError> {
    let settings = selection.resolve()?;
    let output = derive(settings);
    tracing::debug!(
        ?selection,
        settings_ev = output.settings_ev,
        ev_difference = output.ev_difference,
        status = ?output.status,
        "computed exposure"
    );
    Ok(output)
}

/// [`compute`] with the indices passed individually.
pub fn compute_indices(
    aperture: usize,
    shutter: usize,
    iso: usize,
    scene: usize,
) -> Result<DerivedOutput, ModelError> {
    compute(&Selection {
        aperture,
        shutter,
        iso,
        scene,
    })
}

fn derive(settings: Settings) -> DerivedOutput {
    let settings_ev =
        calculations::settings_ev(settings.aperture, settings.shutter.seconds, settings.iso);
    let ev_difference = calculations::ev_difference(settings_ev, settings.scene.ev);
    let motion_blur = calculations::motion_blur(settings.shutter.seconds);
    let noise_level = calculations::noise_level(settings.iso);

    DerivedOutput {
        settings,
        settings_ev,
        ev_difference,
        brightness: calculations::brightness(ev_difference),
        motion_blur,
        noise_level,
        depth_of_field: DepthOfField::from_aperture(settings.aperture),
        status: ExposureStatus::from_ev_difference(ev_difference),
        meter_position: calculations::meter_position(ev_difference),
        blur_risk: BlurRisk::from_motion_blur(motion_blur),
        noise_grade: NoiseGrade::from_noise_level(noise_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_close, selection_for};

    #[test]
    fn default_selection_is_f4_sixtieth_iso100_sun() {
        let settings = Selection::default().resolve().unwrap();
        assert_eq!(settings.aperture, 4.0);
        assert_eq!(settings.shutter.label, "1/60");
        assert_eq!(settings.iso, 100);
        assert_eq!(settings.scene.name, "Plein soleil");
    }

    #[test]
    fn full_sun_at_f4_sixtieth_is_very_over_exposed() {
        let out = compute(&Selection::default()).unwrap();
        assert_close(out.settings_ev, 9.906_890_595_608_518);
        assert_close(out.ev_difference, -5.093_109_404_391_482);
        assert_eq!(out.brightness, 3.0);
        assert_eq!(out.status, ExposureStatus::VeryOver);
        assert_eq!(out.severity(), Severity::High);
        assert_eq!(out.meter_position, 50.0);
        assert_eq!(out.depth_of_field, DepthOfField::Shallow);
        assert_eq!(out.motion_blur, 0.0);
        assert_eq!(out.noise_level, 0.0);
    }

    #[test]
    fn sunny_sixteen_is_close_to_correct() {
        // f/16, 1/125, ISO 100 under full sun
        let out = compute(&selection_for(16.0, "1/125", 100, "Plein soleil")).unwrap();
        assert_eq!(out.status, ExposureStatus::Correct);
        assert!(out.ev_difference.abs() <= 0.5);
    }

    #[test]
    fn night_street_wide_open_slow_shutter_high_iso() {
        // f/1.4, 1/30, ISO 3200 at EV 3
        let out = compute(&selection_for(1.4, "1/30", 3200, "Nuit urbaine")).unwrap();
        assert_eq!(out.motion_blur, 2.0);
        assert_eq!(out.blur_risk, BlurRisk::Risk);
        assert_eq!(out.noise_level, 1.0);
        assert_eq!(out.noise_grade, NoiseGrade::Significant);
        assert_eq!(out.depth_of_field, DepthOfField::VeryShallow);
    }

    #[test]
    fn compute_indices_matches_compute() {
        let sel = Selection {
            aperture: 7,
            shutter: 10,
            iso: 5,
            scene: 4,
        };
        assert_eq!(compute_indices(7, 10, 5, 4).unwrap(), compute(&sel).unwrap());
    }

    #[test]
    fn compute_is_deterministic() {
        let sel = Selection {
            aperture: 2,
            shutter: 13,
            iso: 6,
            scene: 6,
        };
        let a = compute(&sel).unwrap();
        let b = compute(&sel).unwrap();
        assert_eq!(a.settings_ev.to_bits(), b.settings_ev.to_bits());
        assert_eq!(a.brightness.to_bits(), b.brightness.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn derived_helpers() {
        let out = compute(&selection_for(8.0, "1/125", 800, "Nuageux")).unwrap();
        assert_eq!(out.noise_opacity(), 0.1);
        assert_close(out.meter_left_percent(), 50.0 + out.meter_position);
    }

    // =========================================================================
    // Index validation
    // =========================================================================

    #[test]
    fn rejects_aperture_out_of_range() {
        let err = compute_indices(10, 0, 0, 0).unwrap_err();
        assert_eq!(
            err,
            ModelError::IndexOutOfRange {
                table: Table::Aperture,
                index: 10,
                len: 10
            }
        );
    }

    #[test]
    fn rejects_each_table() {
        assert!(matches!(
            compute_indices(0, 15, 0, 0),
            Err(ModelError::IndexOutOfRange { table: Table::Shutter, .. })
        ));
        assert!(matches!(
            compute_indices(0, 0, 8, 0),
            Err(ModelError::IndexOutOfRange { table: Table::Iso, .. })
        ));
        assert!(matches!(
            compute_indices(0, 0, 0, usize::MAX),
            Err(ModelError::IndexOutOfRange { table: Table::Scene, .. })
        ));
    }

    #[test]
    fn last_index_of_every_table_is_valid() {
        assert!(compute_indices(9, 14, 7, 7).is_ok());
    }

    #[test]
    fn error_message_names_table_and_bounds() {
        let err = compute_indices(0, 0, 12, 0).unwrap_err();
        assert_eq!(err.to_string(), "iso index 12 out of range (table has 8 entries)");
    }
}
