use std::fmt;

use tracing::debug;

use crate::errors::Result;
use crate::materials::Material;
use crate::units::{autoscale, AreaUnit, LengthUnit, UnitFamily, Value};
use crate::wire::{
    area_from_diameter, diameter_from_area, length_for_resistance, mass_of_wire,
    resistance_of_wire,
};

/// Inputs describing a piece of round wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct WireConfig {
    /// Name of an entry in the material table.
    pub material: String,
    /// Length of the wire.
    pub length: Value,
    /// Conductor cross section, possibly as an AWG gauge.
    pub cross_section: Value,
}

impl WireConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(material: impl Into<String>, length: Value, cross_section: Value) -> Self {
        Self {
            material: material.into(),
            length,
            cross_section,
        }
    }

    /// Replaces the cross section with that of a round conductor of
    /// `diameter`, expressed in `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::FamilyMismatch`] when `diameter` is not a
    /// length.
    pub fn with_diameter(mut self, diameter: Value, unit: AreaUnit) -> Result<Self> {
        self.cross_section = area_from_diameter(diameter, unit)?;
        Ok(self)
    }
}

/// Derived properties of a wire, each in its most readable unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct WireReport {
    /// Material name.
    pub material: String,
    /// End-to-end resistance.
    pub resistance: Value,
    /// Mass of the conductor.
    pub mass: Value,
    /// Cross section.
    pub area: Value,
    /// Conductor diameter.
    pub diameter: Value,
}

impl fmt::Display for WireReport {
    /// One line per property. Values print like `%g` unless a precision
    /// asks for fixed decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        writeln!(f, "material:   {}", self.material)?;
        let rows = [
            ("resistance", self.resistance),
            ("mass", self.mass),
            ("area", self.area),
            ("diameter", self.diameter),
        ];
        for (i, (label, value)) in rows.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<12}", format!("{label}:"))?;
            match precision {
                Some(p) => write!(f, "{value:.p$}")?,
                None => write!(f, "{value}")?,
            }
        }
        Ok(())
    }
}

/// Resistive wire calculator bound to a resolved material.
#[derive(Debug, Clone)]
pub struct WireCalculator {
    material: &'static Material,
    config: WireConfig,
}

impl WireCalculator {
    /// Resolves the material and checks the geometry families.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::UnknownMaterial`] for a material missing
    /// from the table and [`crate::ElecError::FamilyMismatch`] when the
    /// length or cross section has the wrong family.
    pub fn new(config: WireConfig) -> Result<Self> {
        let material = Material::require(&config.material)?;
        config.length.expect_family(UnitFamily::Length)?;
        config.cross_section.expect_family(UnitFamily::Area)?;
        Ok(Self { material, config })
    }

    /// Material the calculator uses.
    #[must_use]
    pub const fn material(&self) -> &'static Material {
        self.material
    }

    /// Current inputs.
    #[must_use]
    pub const fn config(&self) -> &WireConfig {
        &self.config
    }

    /// Switches to another material.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::UnknownMaterial`] and leaves the
    /// calculator untouched when `name` is not tabulated.
    pub fn set_material(&mut self, name: &str) -> Result<()> {
        self.material = Material::require(name)?;
        name.clone_into(&mut self.config.material);
        Ok(())
    }

    /// Updates the wire length.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::FamilyMismatch`] unless `length` is a
    /// length.
    pub fn set_length(&mut self, length: Value) -> Result<()> {
        self.config.length = length.expect_family(UnitFamily::Length)?;
        Ok(())
    }

    /// Updates the cross section.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::FamilyMismatch`] unless `area` is an area.
    pub fn set_cross_section(&mut self, area: Value) -> Result<()> {
        self.config.cross_section = area.expect_family(UnitFamily::Area)?;
        Ok(())
    }

    /// Updates the cross section from a diameter, keeping it in `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::FamilyMismatch`] unless `diameter` is a
    /// length.
    pub fn set_diameter(&mut self, diameter: Value, unit: AreaUnit) -> Result<()> {
        self.config.cross_section = area_from_diameter(diameter, unit)?;
        Ok(())
    }

    /// Conductor diameter in `unit`.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors from the stored cross section.
    pub fn diameter(&self, unit: LengthUnit) -> Result<Value> {
        diameter_from_area(self.config.cross_section, unit)
    }

    /// Computes resistance, mass, cross section and diameter.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors from the stored inputs.
    pub fn report(&self) -> Result<WireReport> {
        let WireConfig {
            length,
            cross_section,
            ..
        } = self.config;
        let resistance = resistance_of_wire(self.material, length, cross_section)?;
        let mass = mass_of_wire(self.material, length, cross_section)?;
        let diameter = self.diameter(LengthUnit::Meter)?;
        debug!(
            material = self.material.name,
            %resistance,
            %mass,
            "wire recalculated"
        );
        Ok(WireReport {
            material: self.material.name.to_owned(),
            resistance: autoscale(resistance),
            mass: autoscale(mass),
            area: autoscale(cross_section),
            diameter: autoscale(diameter),
        })
    }

    /// Length of this wire that has `resistance`, in `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::FamilyMismatch`] unless `resistance` is a
    /// resistance.
    pub fn length_for(&self, resistance: Value, unit: LengthUnit) -> Result<Value> {
        length_for_resistance(self.material, resistance, self.config.cross_section)?.convert(unit)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::errors::ElecError;
    use crate::units::{MassUnit, ResistanceUnit, Unit};

    fn copper_run() -> WireCalculator {
        WireCalculator::new(WireConfig::new(
            "copper",
            Value::new(10.0, LengthUnit::Meter),
            Value::new(1.5, AreaUnit::SquareMillimeter),
        ))
        .unwrap()
    }

    #[test]
    fn report_is_autoscaled() {
        let report = copper_run().report().unwrap();
        assert_eq!(report.material, "copper");
        assert_eq!(report.resistance.unit, Unit::Resistance(ResistanceUnit::Milliohm));
        assert_relative_eq!(report.resistance.magnitude, 112.0, max_relative = 1.0e-12);
        assert_eq!(report.mass.unit, Unit::Mass(MassUnit::Gram));
        assert_relative_eq!(report.mass.magnitude, 134.4, max_relative = 1.0e-12);
        assert_eq!(report.area.unit, Unit::Area(AreaUnit::SquareMillimeter));
        assert_eq!(report.diameter.unit, Unit::Length(LengthUnit::Millimeter));
        assert_relative_eq!(report.diameter.magnitude, 1.381_976_597, max_relative = 1.0e-9);
    }

    #[test]
    fn length_for_target_resistance() {
        let calc = copper_run();
        let length = calc
            .length_for(Value::new(1.0, ResistanceUnit::Ohm), LengthUnit::Meter)
            .unwrap();
        assert_relative_eq!(length.magnitude, 1.5e-6 / 1.68e-8, max_relative = 1.0e-12);
    }

    #[test]
    fn unknown_material_is_reported() {
        let err = WireCalculator::new(WireConfig::new(
            "unobtainium",
            Value::new(1.0, LengthUnit::Meter),
            Value::new(1.0, AreaUnit::SquareMillimeter),
        ))
        .unwrap_err();
        assert_eq!(err, ElecError::UnknownMaterial("unobtainium".into()));

        let mut calc = copper_run();
        assert!(calc.set_material("unobtainium").is_err());
        assert_eq!(calc.material().name, "copper");
        calc.set_material("aluminium").unwrap();
        assert_eq!(calc.config().material, "aluminium");
    }

    #[test]
    fn swapped_geometry_is_rejected() {
        let err = WireCalculator::new(WireConfig::new(
            "copper",
            Value::new(1.0, AreaUnit::SquareMillimeter),
            Value::new(1.0, LengthUnit::Meter),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            ElecError::FamilyMismatch {
                expected: UnitFamily::Length,
                found: UnitFamily::Area,
            }
        );
    }

    #[test]
    fn diameter_edit_updates_cross_section() {
        let mut calc = copper_run();
        calc.set_diameter(Value::new(2.0, LengthUnit::Millimeter), AreaUnit::SquareMillimeter)
            .unwrap();
        let area = calc.config().cross_section;
        assert_eq!(area.unit, Unit::Area(AreaUnit::SquareMillimeter));
        assert_relative_eq!(area.magnitude, std::f64::consts::PI, max_relative = 1.0e-12);
        let d = calc.diameter(LengthUnit::Millimeter).unwrap();
        assert_relative_eq!(d.magnitude, 2.0, max_relative = 1.0e-12);
    }

    #[test]
    fn config_from_diameter() {
        let config = WireConfig::new(
            "silver",
            Value::new(1.0, LengthUnit::Meter),
            Value::new(0.0, AreaUnit::SquareMeter),
        )
        .with_diameter(Value::new(0.0320, LengthUnit::Inch), AreaUnit::Awg)
        .unwrap();
        // AWG 20 is nominally 0.0320 inch.
        assert_eq!(config.cross_section.unit, Unit::Area(AreaUnit::Awg));
        assert_relative_eq!(config.cross_section.magnitude, 20.0, epsilon = 0.02);
    }

    #[test]
    fn tiny_resistance_is_not_rounded_away() {
        // 1 mm of 500 mm\u{b2} copper is a few tens of nano-ohms.
        let calc = WireCalculator::new(WireConfig::new(
            "copper",
            Value::new(1.0, LengthUnit::Millimeter),
            Value::new(500.0, AreaUnit::SquareMillimeter),
        ))
        .unwrap();
        let report = calc.report().unwrap();
        assert_eq!(report.resistance.unit, Unit::Resistance(ResistanceUnit::Milliohm));
        assert_relative_eq!(report.resistance.magnitude, 3.36e-5, max_relative = 1.0e-12);
        let text = report.to_string();
        assert!(text.contains("resistance: 3.36e-05 m\u{3a9}"), "got {text}");
        assert!(text.contains("mass:       4.48 g"), "got {text}");
    }

    #[test]
    fn report_display() {
        let text = format!("{:.1}", copper_run().report().unwrap());
        assert!(text.contains("resistance: 112.0 m\u{3a9}"), "got {text}");
        assert!(text.contains("mass:       134.4 g"), "got {text}");
    }
}
