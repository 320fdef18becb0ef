//! CLI output formatting.
//!
//! # Information-First Display
//!
//! The report leads with the verdict (exposure status and deviation), then
//! the effects a photographer would notice, each as an indented context line.
//! Raw numbers follow the qualitative label in parentheses so the output reads
//! as advice first and as data second.
//!
//! # Output Format
//!
//! ## Compute
//!
//! ```text
//! Scene ☀️ Plein soleil (EV 15)
//! Settings f/4 · 1/60 · ISO 100 → EV 9.91
//! Very over-exposed (-5.09 EV)
//!     Meter: -3 [------------+-----------o] +3
//!     Brightness: ×3.00
//!     Depth of field: Shallow
//!     Motion blur: None (0.0 px)
//!     Noise: Minimal (0.00)
//! ```
//!
//! ## Tables
//!
//! ```text
//! Aperture
//!      0 f/1.4
//!      1 f/1.8
//!      ...
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::exposure::{DerivedOutput, Language, Selection};
use crate::tables::Table;
use serde::Serialize;

/// Interior width of the text meter, in characters. Odd so there is a centre.
const METER_WIDTH: usize = 25;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Pick the English or French caption.
fn caption(lang: Language, en: &'static str, fr: &'static str) -> &'static str {
    match lang {
        Language::En => en,
        Language::Fr => fr,
    }
}

/// Signed deviation with two decimals: `+1.25 EV`, `-5.09 EV`.
fn format_ev_difference(ev_difference: f64) -> String {
    format!("{:+.2} EV", ev_difference)
}

/// Draw the exposure meter as text.
///
/// The needle (`o`) sits at the same relative position as in the graphical
/// meter; `+` marks the centre when the needle is elsewhere.
///
/// ```text
/// -3 [------------o------------] +3
/// ```
pub fn render_meter(out: &DerivedOutput) -> String {
    let last = METER_WIDTH - 1;
    let needle = ((out.meter_left_percent() / 100.0) * last as f64).round() as usize;
    let needle = needle.min(last);
    let centre = last / 2;

    let bar: String = (0..METER_WIDTH)
        .map(|i| {
            if i == needle {
                'o'
            } else if i == centre {
                '+'
            } else {
                '-'
            }
        })
        .collect();
    format!("-3 [{}] +3", bar)
}

// ============================================================================
// Compute output
// ============================================================================

/// Format the full report for one computed selection.
pub fn format_compute_output(out: &DerivedOutput, lang: Language) -> Vec<String> {
    let s = &out.settings;
    let ctx = indent(1);
    vec![
        format!(
            "{} {}",
            caption(lang, "Scene", "Scène"),
            s.scene.option_label()
        ),
        format!(
            "{} {} · {} · {} → EV {:.2}",
            caption(lang, "Settings", "Réglages"),
            crate::tables::format_aperture(s.aperture),
            s.shutter.label,
            crate::tables::format_iso(s.iso),
            out.settings_ev
        ),
        format!(
            "{} ({})",
            out.status.label(lang),
            format_ev_difference(out.ev_difference)
        ),
        format!(
            "{ctx}{}: {}",
            caption(lang, "Meter", "Posemètre"),
            render_meter(out)
        ),
        format!(
            "{ctx}{}: ×{:.2}",
            caption(lang, "Brightness", "Luminosité"),
            out.brightness
        ),
        format!(
            "{ctx}{}: {}",
            caption(lang, "Depth of field", "Profondeur de champ"),
            out.depth_of_field.label(lang)
        ),
        format!(
            "{ctx}{}: {} ({:.1} px)",
            caption(lang, "Motion blur", "Flou de mouvement"),
            out.blur_risk.label(lang),
            out.motion_blur
        ),
        format!(
            "{ctx}{}: {} ({:.2})",
            caption(lang, "Noise", "Bruit"),
            out.noise_grade.label(lang),
            out.noise_level
        ),
    ]
}

pub fn print_compute_output(out: &DerivedOutput, lang: Language) {
    for line in format_compute_output(out, lang) {
        println!("{}", line);
    }
}

/// Machine-readable report: raw model output plus localized labels.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub selection: &'a Selection,
    pub output: &'a DerivedOutput,
    pub labels: ReportLabels,
    pub meter_left_percent: f64,
    pub noise_opacity: f64,
}

#[derive(Debug, Serialize)]
pub struct ReportLabels {
    pub status: &'static str,
    pub severity_color: &'static str,
    pub depth_of_field: &'static str,
    pub blur_risk: &'static str,
    pub noise_grade: &'static str,
}

impl<'a> Report<'a> {
    pub fn new(selection: &'a Selection, output: &'a DerivedOutput, lang: Language) -> Self {
        Self {
            selection,
            output,
            labels: ReportLabels {
                status: output.status.label(lang),
                severity_color: output.severity().color(),
                depth_of_field: output.depth_of_field.label(lang),
                blur_risk: output.blur_risk.label(lang),
                noise_grade: output.noise_grade.label(lang),
            },
            meter_left_percent: output.meter_left_percent(),
            noise_opacity: output.noise_opacity(),
        }
    }
}

// ============================================================================
// Tables output
// ============================================================================

/// Format every lookup table with its indices.
pub fn format_tables_output(lang: Language) -> Vec<String> {
    let mut lines = Vec::new();
    for table in Table::ALL {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(table_heading(table, lang).to_string());
        for index in 0..table.len() {
            if let Some(label) = table.entry_label(index) {
                lines.push(format!("{}{:>2} {}", indent(1), index, label));
            }
        }
    }
    lines
}

fn table_heading(table: Table, lang: Language) -> &'static str {
    match table {
        Table::Aperture => caption(lang, "Aperture", "Ouverture"),
        Table::Shutter => caption(lang, "Shutter speed", "Vitesse"),
        Table::Iso => "ISO",
        Table::Scene => caption(lang, "Scene", "Conditions"),
    }
}

pub fn print_tables_output(lang: Language) {
    for line in format_tables_output(lang) {
        println!("{}", line);
    }
}
