//! Discrete categories derived from the continuous exposure quantities.
//!
//! Each category knows its own display label in every supported
//! [`Language`]. Thresholds live next to the enum they produce so the
//! boundary semantics (strict vs. inclusive) are visible in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for human-readable labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(format!("unknown language '{other}' (expected 'en' or 'fr')")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Fr => f.write_str("fr"),
        }
    }
}

/// How far an exposure is from correct, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Badge colour for this severity.
    pub fn color(self) -> &'static str {
        match self {
            Severity::None => "green",
            Severity::Low => "yellow",
            Severity::Medium => "orange",
            Severity::High => "red",
        }
    }
}

/// Verdict on the exposure, from the settings' deviation to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureStatus {
    VeryUnder,
    Under,
    SlightlyUnder,
    Correct,
    SlightlyOver,
    Over,
    VeryOver,
}

impl ExposureStatus {
    /// Classify a deviation in stops.
    ///
    /// All comparisons are strict: a deviation of exactly ±0.5, ±1 or ±2
    /// lands in the milder bucket, so `0.5` is still [`Correct`](Self::Correct).
    pub fn from_ev_difference(ev_difference: f64) -> Self {
        if ev_difference > 2.0 {
            ExposureStatus::VeryUnder
        } else if ev_difference > 1.0 {
            ExposureStatus::Under
        } else if ev_difference > 0.5 {
            ExposureStatus::SlightlyUnder
        } else if ev_difference < -2.0 {
            ExposureStatus::VeryOver
        } else if ev_difference < -1.0 {
            ExposureStatus::Over
        } else if ev_difference < -0.5 {
            ExposureStatus::SlightlyOver
        } else {
            ExposureStatus::Correct
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ExposureStatus::VeryUnder | ExposureStatus::VeryOver => Severity::High,
            ExposureStatus::Under | ExposureStatus::Over => Severity::Medium,
            ExposureStatus::SlightlyUnder | ExposureStatus::SlightlyOver => Severity::Low,
            ExposureStatus::Correct => Severity::None,
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (ExposureStatus::VeryUnder, Language::En) => "Very under-exposed",
            (ExposureStatus::Under, Language::En) => "Under-exposed",
            (ExposureStatus::SlightlyUnder, Language::En) => "Slightly under-exposed",
            (ExposureStatus::Correct, Language::En) => "Correct exposure",
            (ExposureStatus::SlightlyOver, Language::En) => "Slightly over-exposed",
            (ExposureStatus::Over, Language::En) => "Over-exposed",
            (ExposureStatus::VeryOver, Language::En) => "Very over-exposed",
            (ExposureStatus::VeryUnder, Language::Fr) => "Très sous-exposé",
            (ExposureStatus::Under, Language::Fr) => "Sous-exposé",
            (ExposureStatus::SlightlyUnder, Language::Fr) => "Légèrement sous-exposé",
            (ExposureStatus::Correct, Language::Fr) => "Exposition correcte",
            (ExposureStatus::SlightlyOver, Language::Fr) => "Légèrement surexposé",
            (ExposureStatus::Over, Language::Fr) => "Surexposé",
            (ExposureStatus::VeryOver, Language::Fr) => "Très surexposé",
        }
    }
}

/// Depth of field implied by the f-number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthOfField {
    VeryShallow,
    Shallow,
    Medium,
    Deep,
    VeryDeep,
}

impl DepthOfField {
    /// Bucket an f-number; each bound is inclusive (`f/2` is still very shallow).
    pub fn from_aperture(aperture: f64) -> Self {
        if aperture <= 2.0 {
            DepthOfField::VeryShallow
        } else if aperture <= 4.0 {
            DepthOfField::Shallow
        } else if aperture <= 8.0 {
            DepthOfField::Medium
        } else if aperture <= 11.0 {
            DepthOfField::Deep
        } else {
            DepthOfField::VeryDeep
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (DepthOfField::VeryShallow, Language::En) => "Very shallow",
            (DepthOfField::Shallow, Language::En) => "Shallow",
            (DepthOfField::Medium, Language::En) => "Medium",
            (DepthOfField::Deep, Language::En) => "Deep",
            (DepthOfField::VeryDeep, Language::En) => "Very deep",
            (DepthOfField::VeryShallow, Language::Fr) => "Très faible",
            (DepthOfField::Shallow, Language::Fr) => "Faible",
            (DepthOfField::Medium, Language::Fr) => "Moyenne",
            (DepthOfField::Deep, Language::Fr) => "Grande",
            (DepthOfField::VeryDeep, Language::Fr) => "Très grande",
        }
    }
}

/// Qualitative reading of the motion-blur radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurRisk {
    None,
    Risk,
    Likely,
}

impl BlurRisk {
    pub fn from_motion_blur(blur: f64) -> Self {
        if blur == 0.0 {
            BlurRisk::None
        } else if blur < 5.0 {
            BlurRisk::Risk
        } else {
            BlurRisk::Likely
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (BlurRisk::None, Language::En) => "None",
            (BlurRisk::Risk, Language::En) => "Possible",
            (BlurRisk::Likely, Language::En) => "Likely",
            (BlurRisk::None, Language::Fr) => "Aucun",
            (BlurRisk::Risk, Language::Fr) => "Risque",
            (BlurRisk::Likely, Language::Fr) => "Probable",
        }
    }
}

/// Qualitative reading of the noise level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseGrade {
    Minimal,
    Visible,
    Significant,
}

impl NoiseGrade {
    pub fn from_noise_level(noise: f64) -> Self {
        if noise == 0.0 {
            NoiseGrade::Minimal
        } else if noise < 0.5 {
            NoiseGrade::Visible
        } else {
            NoiseGrade::Significant
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (NoiseGrade::Minimal, Language::En) => "Minimal",
            (NoiseGrade::Visible, Language::En) => "Visible",
            (NoiseGrade::Significant, Language::En) => "Significant",
            (NoiseGrade::Minimal, Language::Fr) => "Minimal",
            (NoiseGrade::Visible, Language::Fr) => "Visible",
            (NoiseGrade::Significant, Language::Fr) => "Important",
        }
    }
}
