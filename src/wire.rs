//! Round resistive wire formulas.
//!
//! Inputs are tagged values in any unit of the expected family; they are
//! normalized to meters and square meters before the formulas run. Zero or
//! negative geometry is not rejected and produces `NaN` or infinity.

use crate::errors::Result;
use crate::materials::Material;
use crate::math::{circle_area, circle_diameter};
use crate::units::{AreaUnit, LengthUnit, MassUnit, ResistanceUnit, Value};

/// Resistance `ρ L / A` of a wire, in ohms.
///
/// # Errors
///
/// Returns [`crate::ElecError::FamilyMismatch`] when `length` is not a length
/// or `cross_section` is not an area.
pub fn resistance_of_wire(material: &Material, length: Value, cross_section: Value) -> Result<Value> {
    let length = length.magnitude_in(LengthUnit::Meter)?;
    let area = cross_section.magnitude_in(AreaUnit::SquareMeter)?;
    Ok(Value::new(
        material.resistivity * length / area,
        ResistanceUnit::Ohm,
    ))
}

/// Length `R A / ρ` of wire needed for `resistance`, in meters.
///
/// # Errors
///
/// Returns [`crate::ElecError::FamilyMismatch`] when `resistance` is not a
/// resistance or `cross_section` is not an area.
pub fn length_for_resistance(
    material: &Material,
    resistance: Value,
    cross_section: Value,
) -> Result<Value> {
    let area = cross_section.magnitude_in(AreaUnit::SquareMeter)?;
    let ohms = resistance.magnitude_in(ResistanceUnit::Ohm)?;
    Ok(Value::new(ohms * area / material.resistivity, LengthUnit::Meter))
}

/// Mass `density L A` of a wire, in kilograms.
///
/// # Errors
///
/// Returns [`crate::ElecError::FamilyMismatch`] when `length` is not a length
/// or `cross_section` is not an area.
pub fn mass_of_wire(material: &Material, length: Value, cross_section: Value) -> Result<Value> {
    let length = length.magnitude_in(LengthUnit::Meter)?;
    let area = cross_section.magnitude_in(AreaUnit::SquareMeter)?;
    Ok(Value::new(material.density * length * area, MassUnit::Kilogram))
}

/// Diameter of a round conductor with cross section `area`, in `unit`.
///
/// # Errors
///
/// Returns [`crate::ElecError::FamilyMismatch`] when `area` is not an area.
pub fn diameter_from_area(area: Value, unit: LengthUnit) -> Result<Value> {
    let area = area.magnitude_in(AreaUnit::SquareMeter)?;
    Value::new(circle_diameter(area), LengthUnit::Meter).convert(unit)
}

/// Cross section of a round conductor of `diameter`, in `unit`.
///
/// Passing [`AreaUnit::Awg`] yields the gauge number of the wire.
///
/// # Errors
///
/// Returns [`crate::ElecError::FamilyMismatch`] when `diameter` is not a
/// length.
pub fn area_from_diameter(diameter: Value, unit: AreaUnit) -> Result<Value> {
    let diameter = diameter.magnitude_in(LengthUnit::Meter)?;
    Value::new(circle_area(diameter), AreaUnit::SquareMeter).convert(unit)
}

/// Resistance after warming a conductor by `delta_kelvin` from
/// [`crate::constants::REFERENCE_TEMPERATURE_C`],
/// `R (1 + α ΔT)`, in the unit `resistance` was given in.
///
/// # Errors
///
/// Returns [`crate::ElecError::FamilyMismatch`] when `resistance` is not a
/// resistance.
pub fn resistance_at_temperature(
    material: &Material,
    resistance: Value,
    delta_kelvin: f64,
) -> Result<Value> {
    let at_reference = resistance.convert(ResistanceUnit::Ohm)?;
    let factor = material.resistivity_at(delta_kelvin) / material.resistivity;
    Value::new(at_reference.magnitude * factor, ResistanceUnit::Ohm).convert(resistance.unit)
}
