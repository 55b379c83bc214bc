//! Per-family unit tables.
//!
//! Each family is an enum whose discriminant is the index into its table, so
//! the order of the variants is the order the units are offered in a unit
//! selector.

use crate::constants::ELECTRICAL_HORSEPOWER;
use crate::math::Scalar;

use super::Unit;

/// A single row of a unit table.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    /// Display name including the SI prefix.
    pub name: &'static str,
    /// Multiplier converting a magnitude in this unit to the family base unit.
    /// `NaN` marks a unit without a linear scale.
    pub scale: Scalar,
}

impl UnitDef {
    /// Returns `true` when the unit converts by a plain multiplication.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        !self.scale.is_nan()
    }
}

macro_rules! unit_table {
    (
        $(#[$meta:meta])*
        $name:ident => $family:ident, $table:ident {
            $( $(#[$vmeta:meta])* $variant:ident = ($label:expr, $scale:expr) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        #[doc = concat!("Names and scale factors of [`", stringify!($name), "`], in selector order.")]
        pub static $table: &[UnitDef] = &[
            $( UnitDef { name: $label, scale: $scale } ),+
        ];

        impl $name {
            /// Every unit of the family, in table order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Position of the unit in its table.
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Looks a unit up by its table position.
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// Table row of the unit.
            #[must_use]
            pub fn def(self) -> &'static UnitDef {
                &$table[self.index()]
            }
        }

        impl From<$name> for Unit {
            fn from(unit: $name) -> Self {
                Self::$family(unit)
            }
        }
    };
}

unit_table! {
    /// Units of length, based on the meter.
    LengthUnit => Length, LENGTH_UNITS {
        /// Kilometer.
        Kilometer = ("km", 1000.0),
        /// Meter.
        Meter = ("m", 1.0),
        /// Decimeter.
        Decimeter = ("dm", 0.1),
        /// Centimeter.
        Centimeter = ("cm", 0.01),
        /// Millimeter.
        Millimeter = ("mm", 0.001),
        /// International inch.
        Inch = ("inch", 0.0254),
        /// International foot.
        Foot = ("foot", 0.3048),
    }
}

unit_table! {
    /// Units of area, based on the square meter.
    ///
    /// [`AreaUnit::Awg`] is the wire gauge number of a round conductor with
    /// that cross section and has no linear scale.
    AreaUnit => Area, AREA_UNITS {
        /// Square meter.
        SquareMeter = ("m\u{b2}", 1.0),
        /// Square decimeter.
        SquareDecimeter = ("dm\u{b2}", 0.01),
        /// Square centimeter.
        SquareCentimeter = ("cm\u{b2}", 0.0001),
        /// Square millimeter.
        SquareMillimeter = ("mm\u{b2}", 0.000_001),
        /// American Wire Gauge number.
        Awg = ("AWG", f64::NAN),
    }
}

unit_table! {
    /// Units of mass. The table is based on the gram.
    MassUnit => Mass, MASS_UNITS {
        /// Metric tonne.
        Tonne = ("t", 1_000_000.0),
        /// Kilogram.
        Kilogram = ("kg", 1000.0),
        /// Gram.
        Gram = ("g", 1.0),
        /// Milligram.
        Milligram = ("mg", 0.001),
        /// Microgram.
        Microgram = ("\u{b5}g", 0.000_001),
    }
}

unit_table! {
    /// Units of resistance, based on the ohm.
    ResistanceUnit => Resistance, RESISTANCE_UNITS {
        /// Megaohm.
        Megaohm = ("M\u{3a9}", 1_000_000.0),
        /// Kiloohm.
        Kiloohm = ("k\u{3a9}", 1000.0),
        /// Ohm.
        Ohm = ("\u{3a9}", 1.0),
        /// Milliohm.
        Milliohm = ("m\u{3a9}", 0.001),
    }
}

unit_table! {
    /// Units of voltage, based on the volt.
    VoltageUnit => Voltage, VOLTAGE_UNITS {
        /// Kilovolt.
        Kilovolt = ("kV", 1000.0),
        /// Volt.
        Volt = ("V", 1.0),
        /// Millivolt.
        Millivolt = ("mV", 0.001),
        /// Microvolt.
        Microvolt = ("\u{b5}V", 0.000_001),
    }
}

unit_table! {
    /// Units of current, based on the ampere.
    CurrentUnit => Current, CURRENT_UNITS {
        /// Kiloampere.
        Kiloampere = ("kA", 1000.0),
        /// Ampere.
        Ampere = ("A", 1.0),
        /// Milliampere.
        Milliampere = ("mA", 0.001),
        /// Microampere.
        Microampere = ("\u{b5}A", 0.000_001),
        /// Picoampere.
        Picoampere = ("pA", 0.000_000_000_001),
    }
}

unit_table! {
    /// Units of power, based on the watt.
    PowerUnit => Power, POWER_UNITS {
        /// Megawatt.
        Megawatt = ("MW", 1_000_000.0),
        /// Kilowatt.
        Kilowatt = ("kW", 1000.0),
        /// Watt.
        Watt = ("W", 1.0),
        /// Milliwatt.
        Milliwatt = ("mW", 0.001),
        /// Microwatt.
        Microwatt = ("\u{b5}W", 0.000_001),
        /// Electrical horsepower.
        Horsepower = ("hp", ELECTRICAL_HORSEPOWER),
    }
}
