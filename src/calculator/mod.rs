//! Calculators that keep their inputs between edits and recompute derived
//! results, the way an interactive calculator form does.

/// Ohm's law form driven by the two most recently edited fields.
pub mod ohm_law;
/// Resistive wire form: resistance, mass, cross section and diameter.
pub mod wire;

pub use ohm_law::OhmLawSession;
pub use wire::{WireCalculator, WireConfig, WireReport};
