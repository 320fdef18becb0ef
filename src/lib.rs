//! # Exposure Triangle
//!
//! A teaching simulator for the exposure triangle. Pick an aperture, a shutter
//! speed, an ISO sensitivity and a lighting scene; get back how the photo
//! would come out: brighter or darker, blurred by camera shake, grainy from
//! sensor noise, with a shallow or deep depth of field.
//!
//! # Architecture: Pure Core, Thin Adapters
//!
//! ```text
//! Selection (4 indices) ──► exposure::compute ──► DerivedOutput
//!                                                  │
//!                         ┌────────────────────────┼────────────────┐
//!                         ▼                        ▼                ▼
//!                  output (text report)     output::Report     preview (HTML)
//!                                              (JSON)
//! ```
//!
//! All exposure math lives in [`exposure`] and reads only the constant
//! [`tables`]. It has no I/O, no state and no rendering, so every rule is unit
//! testable in isolation. The adapters format a [`DerivedOutput`] and never
//! compute anything themselves.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`tables`] | The four fixed lookup tables: apertures, shutter speeds, ISO values, scenes |
//! | [`exposure`] | The model: settings EV, deviation, brightness, blur, noise, categories |
//! | [`config`] | `exposure.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI text report, table listing, JSON report |
//! | [`preview`] | Static HTML preview rendered with Maud |
//!
//! # Design Decisions
//!
//! ## Indices, Not Values
//!
//! Callers select table entries by index, exactly like a slider. This keeps
//! every input inside the model's domain: all f-numbers, durations and ISO
//! values are positive, so the logarithms are always defined. The one failure
//! mode left is an index past the end of its table, reported as
//! [`ModelError::IndexOutOfRange`](exposure::ModelError) before any math runs.
//!
//! ## No Caching
//!
//! [`exposure::compute`] recomputes everything on every call. It is a dozen
//! float operations; identical selections produce bit-identical output.
//!
//! ## Faithful Thresholds
//!
//! The category thresholds reproduce the classroom widget exactly, including
//! its rough edges: exposure-status bounds are strict, so a deviation of
//! exactly half a stop still reads as correct, and the noise curve drops back
//! to zero at ISO 1600 before climbing again.
//!
//! [`DerivedOutput`]: exposure::DerivedOutput

pub mod config;
pub mod exposure;
pub mod output;
pub mod preview;
pub mod tables;

#[cfg(test)]
pub(crate) mod test_helpers;
