//! Static HTML preview of one exposure.
//!
//! Renders a single self-contained page: the sample photo with the simulated
//! effects applied as CSS filters, the exposure meter, and the four controls
//! showing where each slider sits. The page carries no script; it is a
//! snapshot of one [`Selection`], regenerated whenever the selection changes.
//!
//! ## Effects
//!
//! | Quantity | Rendering |
//! |---|---|
//! | Brightness | `filter: brightness(b)` on the photo |
//! | Motion blur | `filter: blur(Npx)` on the photo |
//! | Noise | fractal-noise overlay at `opacity = noise × 0.5`, omitted when zero |
//! | Status | badge coloured by severity |
//! | Deviation | meter needle at `50 + meter_position` percent |
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! The stylesheet is embedded at compile time from `static/preview.css`.

use crate::config::ExposureConfig;
use crate::exposure::{DerivedOutput, Language, Selection};
use crate::tables::{self, Table};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/preview.css");

/// Render the preview page and write it to `output`, creating parent directories.
pub fn write_preview(
    output: &Path,
    selection: &Selection,
    out: &DerivedOutput,
    config: &ExposureConfig,
) -> Result<(), PreviewError> {
    let page = render_preview(selection, out, config).into_string();
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, page)?;
    tracing::debug!(path = %output.display(), "wrote preview");
    Ok(())
}

/// Inline CSS filter for the photo.
pub fn photo_filter(out: &DerivedOutput) -> String {
    format!(
        "filter: brightness({:.2}) blur({:.2}px)",
        out.brightness, out.motion_blur
    )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, lang: Language, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang.to_string()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

/// The photo with filters, grain overlay and status badge.
fn render_photo(out: &DerivedOutput, image: &str, lang: Language) -> Markup {
    html! {
        figure.photo {
            img src=(image) alt=(text(lang, "Sample photo", "Photo exemple")) style=(photo_filter(out));
            @if out.noise_level > 0.0 {
                div.grain style={ "opacity: " (format!("{:.2}", out.noise_opacity())) } {}
            }
            span class={ "badge badge-" (out.severity().color()) } {
                (out.status.label(lang))
            }
        }
    }
}

/// Depth of field, motion blur and noise, as label/value pairs.
fn render_effects(out: &DerivedOutput, lang: Language) -> Markup {
    html! {
        dl.effects {
            dt { (text(lang, "Depth of field", "Profondeur de champ")) }
            dd { (out.depth_of_field.label(lang)) }
            dt { (text(lang, "Motion blur", "Flou de mouvement")) }
            dd { (out.blur_risk.label(lang)) }
            dt { (text(lang, "Noise", "Bruit")) }
            dd { (out.noise_grade.label(lang)) }
        }
    }
}

/// The exposure meter: a −3..+3 stop scale with the needle.
fn render_meter(out: &DerivedOutput, lang: Language) -> Markup {
    html! {
        div.meter role="meter" aria-label=(text(lang, "Exposure meter", "Posemètre")) {
            div.meter-scale {
                @for stop in -3i32..=3 {
                    @if stop == 0 {
                        span.zero { "0" }
                    } @else {
                        span { (format!("{:+}", stop)) }
                    }
                }
            }
            div.meter-needle style={ "left: " (format!("{:.2}", out.meter_left_percent())) "%" } {}
        }
    }
}

/// Static description of one slider.
struct Control {
    table: Table,
    title: (&'static str, &'static str),
    tooltip: (&'static str, &'static str),
    hints: [(&'static str, &'static str); 2],
    mark_step: usize,
}

const CONTROLS: [Control; 3] = [
    Control {
        table: Table::Aperture,
        title: ("Aperture", "Ouverture"),
        tooltip: (
            "Amount of light + depth of field",
            "Quantité de lumière + profondeur de champ",
        ),
        hints: [
            ("+ light / − sharpness", "+ lumière / - netteté"),
            ("− light / + sharpness", "- lumière / + netteté"),
        ],
        mark_step: 2,
    },
    Control {
        table: Table::Shutter,
        title: ("Shutter speed", "Vitesse"),
        tooltip: (
            "Amount of light + motion blur",
            "Quantité de lumière + flou de mouvement",
        ),
        hints: [
            ("− light / frozen", "- lumière / figé"),
            ("+ light / blurred", "+ lumière / flou"),
        ],
        mark_step: 3,
    },
    Control {
        table: Table::Iso,
        title: ("ISO", "ISO"),
        tooltip: ("Sensor sensitivity + noise", "Sensibilité du capteur + bruit"),
        hints: [
            ("− noise / − sensitive", "- bruit / - sensible"),
            ("+ sensitive / + noise", "+ sensible / + bruit"),
        ],
        mark_step: 2,
    },
];

fn render_control(control: &Control, selection: &Selection, lang: Language) -> Markup {
    let index = selection.index(control.table);
    let value = control.table.entry_label(index).unwrap_or_default();
    let pick = |pair: (&'static str, &'static str)| text(lang, pair.0, pair.1);

    html! {
        section.control {
            h2 { (pick(control.title)) }
            span.value title=(pick(control.tooltip)) { (value) }
            input type="range" min="0" max=(control.table.len() - 1) value=(index) disabled;
            ul.marks {
                @for (_, label) in tables::slider_marks(control.table, control.mark_step) {
                    li { (label) }
                }
            }
            div.hints {
                span { (pick(control.hints[0])) }
                span { (pick(control.hints[1])) }
            }
        }
    }
}

/// Renders the full preview page.
pub fn render_preview(selection: &Selection, out: &DerivedOutput, config: &ExposureConfig) -> Markup {
    let lang = config.display.language;
    let content = html! {
        main.simulator {
            div.photo-column {
                (render_photo(out, &config.preview.image, lang))
                (render_effects(out, lang))
            }
            div.controls-column {
                p.scene {
                    strong { (text(lang, "Conditions", "Conditions")) ": " }
                    (out.settings.scene.option_label())
                }
                (render_meter(out, lang))
                @for control in &CONTROLS {
                    (render_control(control, selection, lang))
                }
            }
        }
    };
    base_document(&config.preview.title, lang, content)
}

fn text(lang: Language, en: &'static str, fr: &'static str) -> &'static str {
    match lang {
        Language::En => en,
        Language::Fr => fr,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::compute;
    use crate::test_helpers::selection_for;
    use tempfile::TempDir;

    fn render(selection: &Selection, config: &ExposureConfig) -> String {
        let out = compute(selection).unwrap();
        render_preview(selection, &out, config).into_string()
    }

    #[test]
    fn preview_includes_doctype_and_title() {
        let html = render(&Selection::default(), &ExposureConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Exposure triangle</title>"));
        assert!(html.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn photo_filter_carries_brightness_and_blur() {
        let out = compute(&selection_for(8.0, "1/8", 100, "Nuageux")).unwrap();
        assert_eq!(
            photo_filter(&out),
            format!("filter: brightness({:.2}) blur(7.50px)", out.brightness)
        );
    }

    #[test]
    fn default_preview_is_clamped_bright_with_red_badge() {
        let html = render(&Selection::default(), &ExposureConfig::default());
        assert!(html.contains("brightness(3.00) blur(0.00px)"));
        assert!(html.contains("badge badge-red"));
        assert!(html.contains("Very over-exposed"));
    }

    #[test]
    fn grain_overlay_only_when_noisy() {
        let config = ExposureConfig::default();
        let clean = render(&Selection::default(), &config);
        assert!(!clean.contains(r#"class="grain""#));

        let noisy = render(&selection_for(4.0, "1/60", 12800, "Nuit urbaine"), &config);
        assert!(noisy.contains(r#"class="grain""#));
        assert!(noisy.contains(r#"style="opacity: 0.50""#));
    }

    #[test]
    fn meter_needle_position() {
        let html = render(&Selection::default(), &ExposureConfig::default());
        assert!(html.contains(r#"style="left: 100.00%""#));
        assert!(html.contains(r#"<span class="zero">0</span>"#));
        assert!(html.contains("<span>+3</span>"));
        assert!(html.contains("<span>-3</span>"));
    }

    #[test]
    fn controls_reflect_selection() {
        let html = render(&Selection::default(), &ExposureConfig::default());
        assert!(html.contains(r#"max="9" value="4""#));
        assert!(html.contains(r#"max="14" value="6""#));
        assert!(html.contains(">f/4</span>"));
        assert!(html.contains("<li>1/500</li>"));
    }

    #[test]
    fn french_labels() {
        let mut config = ExposureConfig::default();
        config.display.language = Language::Fr;
        let html = render(&Selection::default(), &config);
        assert!(html.contains(r#"<html lang="fr">"#));
        assert!(html.contains("Très surexposé"));
        assert!(html.contains("Profondeur de champ"));
        assert!(html.contains("Ouverture"));
    }

    #[test]
    fn image_url_is_escaped() {
        let mut config = ExposureConfig::default();
        config.preview.image = r#"photo.jpg" onload="x"#.to_string();
        let html = render(&Selection::default(), &config);
        assert!(html.contains("photo.jpg&quot; onload=&quot;x"));
    }

    #[test]
    fn write_preview_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/preview.html");
        let sel = Selection::default();
        let out = compute(&sel).unwrap();
        write_preview(&path, &sel, &out, &ExposureConfig::default()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Plein soleil"));
    }
}
