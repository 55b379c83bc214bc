//! Convenience re-exports for building calculators.

pub use crate::calculator::{OhmLawSession, WireCalculator, WireConfig, WireReport};
pub use crate::constants::{awg_diameter, awg_gauge};
pub use crate::entry::{parse_magnitude, Entry, General};
pub use crate::errors::{ElecError, Result};
pub use crate::materials::{Material, MATERIALS};
pub use crate::math::Scalar;
pub use crate::ohm_law::{solve, Quadruple, Quantity, Solution, UnknownPair};
pub use crate::units::{
    autoscale, convert, AreaUnit, CurrentUnit, LengthUnit, MassUnit, PowerUnit, ResistanceUnit,
    Unit, UnitDef, UnitFamily, Value, VoltageUnit,
};
pub use crate::wire::{
    area_from_diameter, diameter_from_area, length_for_resistance, mass_of_wire,
    resistance_at_temperature, resistance_of_wire,
};
