#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and the AWG gauge transform.
pub mod constants;
/// Shared scalar type and circle geometry helpers.
pub mod math;
/// Unit families, unit tables, tagged values, conversion and autoscaling.
pub mod units;
/// Conductor material table.
pub mod materials;
/// Resistive wire formulas and circle diameter/area conversion.
pub mod wire;
/// Ohm's law and electrical power solver.
pub mod ohm_law;
/// Parsing of interactively entered magnitudes.
pub mod entry;
/// Stateful calculators built on top of the pure engine.
pub mod calculator;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use errors::{ElecError, Result};
