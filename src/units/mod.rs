//! Unit families, unit tables and tagged values.
//!
//! Every family has a table of `(name, scale)` rows where `scale` converts a
//! magnitude in that unit to the family base unit. A [`Unit`] names one row
//! of one table and a [`Value`] pairs a magnitude with its unit.

use std::fmt;

use crate::errors::{ElecError, Result};
use crate::math::Scalar;

/// Picking the most readable unit for a magnitude.
pub mod autoscale;
/// Static unit tables, one enum per family.
pub mod tables;
/// Tagged values and conversion between units.
pub mod value;

pub use autoscale::autoscale;
pub use tables::{
    AreaUnit, CurrentUnit, LengthUnit, MassUnit, PowerUnit, ResistanceUnit, UnitDef, VoltageUnit,
    AREA_UNITS, CURRENT_UNITS, LENGTH_UNITS, MASS_UNITS, POWER_UNITS, RESISTANCE_UNITS,
    VOLTAGE_UNITS,
};
pub use value::{convert, Value};

/// Category of physical quantity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitFamily {
    /// No unit semantics. Kept for callers that exchange raw `(family, index)`
    /// pairs; no [`Unit`] belongs to it.
    #[default]
    Undefined,
    /// Length, based on the meter.
    Length,
    /// Area, based on the square meter.
    Area,
    /// Mass, tabulated relative to the gram.
    Mass,
    /// Resistance, based on the ohm.
    Resistance,
    /// Voltage, based on the volt.
    Voltage,
    /// Current, based on the ampere.
    Current,
    /// Power, based on the watt.
    Power,
}

impl UnitFamily {
    /// Unit table of the family, in selector order. Empty for
    /// [`UnitFamily::Undefined`].
    #[must_use]
    pub fn units(self) -> &'static [UnitDef] {
        match self {
            Self::Undefined => &[],
            Self::Length => LENGTH_UNITS,
            Self::Area => AREA_UNITS,
            Self::Mass => MASS_UNITS,
            Self::Resistance => RESISTANCE_UNITS,
            Self::Voltage => VOLTAGE_UNITS,
            Self::Current => CURRENT_UNITS,
            Self::Power => POWER_UNITS,
        }
    }

    /// The unit with scale factor 1, if the family has one.
    #[must_use]
    pub const fn base_unit(self) -> Option<Unit> {
        match self {
            Self::Undefined => None,
            Self::Length => Some(Unit::Length(LengthUnit::Meter)),
            Self::Area => Some(Unit::Area(AreaUnit::SquareMeter)),
            Self::Mass => Some(Unit::Mass(MassUnit::Gram)),
            Self::Resistance => Some(Unit::Resistance(ResistanceUnit::Ohm)),
            Self::Voltage => Some(Unit::Voltage(VoltageUnit::Volt)),
            Self::Current => Some(Unit::Current(CurrentUnit::Ampere)),
            Self::Power => Some(Unit::Power(PowerUnit::Watt)),
        }
    }

    /// Lower-case name of the family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Length => "length",
            Self::Area => "area",
            Self::Mass => "mass",
            Self::Resistance => "resistance",
            Self::Voltage => "voltage",
            Self::Current => "current",
            Self::Power => "power",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit from one of the family tables.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Length unit.
    Length(LengthUnit),
    /// Area unit, possibly the AWG gauge.
    Area(AreaUnit),
    /// Mass unit.
    Mass(MassUnit),
    /// Resistance unit.
    Resistance(ResistanceUnit),
    /// Voltage unit.
    Voltage(VoltageUnit),
    /// Current unit.
    Current(CurrentUnit),
    /// Power unit.
    Power(PowerUnit),
}

impl Unit {
    /// Resolves a raw `(family, index)` pair as used by unit selectors.
    ///
    /// # Errors
    ///
    /// Returns [`ElecError::InvalidUnit`] when `index` is outside the family
    /// table, which is always the case for [`UnitFamily::Undefined`].
    pub fn from_index(family: UnitFamily, index: usize) -> Result<Self> {
        let unit = match family {
            UnitFamily::Undefined => None,
            UnitFamily::Length => LengthUnit::from_index(index).map(Self::Length),
            UnitFamily::Area => AreaUnit::from_index(index).map(Self::Area),
            UnitFamily::Mass => MassUnit::from_index(index).map(Self::Mass),
            UnitFamily::Resistance => ResistanceUnit::from_index(index).map(Self::Resistance),
            UnitFamily::Voltage => VoltageUnit::from_index(index).map(Self::Voltage),
            UnitFamily::Current => CurrentUnit::from_index(index).map(Self::Current),
            UnitFamily::Power => PowerUnit::from_index(index).map(Self::Power),
        };
        unit.ok_or(ElecError::InvalidUnit { family, index })
    }

    /// Family the unit belongs to.
    #[must_use]
    pub const fn family(self) -> UnitFamily {
        match self {
            Self::Length(_) => UnitFamily::Length,
            Self::Area(_) => UnitFamily::Area,
            Self::Mass(_) => UnitFamily::Mass,
            Self::Resistance(_) => UnitFamily::Resistance,
            Self::Voltage(_) => UnitFamily::Voltage,
            Self::Current(_) => UnitFamily::Current,
            Self::Power(_) => UnitFamily::Power,
        }
    }

    /// Position of the unit in its family table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Length(u) => u.index(),
            Self::Area(u) => u.index(),
            Self::Mass(u) => u.index(),
            Self::Resistance(u) => u.index(),
            Self::Voltage(u) => u.index(),
            Self::Current(u) => u.index(),
            Self::Power(u) => u.index(),
        }
    }

    /// Table row of the unit.
    #[must_use]
    pub fn def(self) -> &'static UnitDef {
        &self.family().units()[self.index()]
    }

    /// Display name including the SI prefix.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Multiplier to the family base unit, `NaN` for AWG.
    #[must_use]
    pub fn scale(self) -> Scalar {
        self.def().scale
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_index_round_trips() {
        for family in [
            UnitFamily::Length,
            UnitFamily::Area,
            UnitFamily::Mass,
            UnitFamily::Resistance,
            UnitFamily::Voltage,
            UnitFamily::Current,
            UnitFamily::Power,
        ] {
            for index in 0..family.units().len() {
                let unit = Unit::from_index(family, index).expect("index is in range");
                assert_eq!(unit.family(), family);
                assert_eq!(unit.index(), index);
            }
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(
            Unit::from_index(UnitFamily::Resistance, 4),
            Err(ElecError::InvalidUnit {
                family: UnitFamily::Resistance,
                index: 4
            })
        );
        assert!(Unit::from_index(UnitFamily::Undefined, 0).is_err());
    }

    #[test]
    fn base_units_have_unit_scale() {
        for family in [UnitFamily::Length, UnitFamily::Mass, UnitFamily::Power] {
            let base = family.base_unit().expect("family has a base unit");
            assert_eq!(base.scale(), 1.0);
        }
        assert_eq!(UnitFamily::Undefined.base_unit(), None);
    }

    #[test]
    fn unit_names_come_from_the_table() {
        assert_eq!(Unit::from(PowerUnit::Horsepower).to_string(), "hp");
        assert_eq!(Unit::from(LengthUnit::Foot).name(), "foot");
    }
}
