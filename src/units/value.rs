use std::fmt;

use crate::constants::{awg_diameter, awg_gauge};
use crate::entry::General;
use crate::errors::{ElecError, Result};
use crate::math::{circle_area, circle_diameter, Scalar};

use super::{AreaUnit, Unit, UnitFamily};

/// A magnitude expressed in a particular unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value {
    /// Magnitude in `unit`. For [`AreaUnit::Awg`] this is the gauge number.
    pub magnitude: Scalar,
    /// Unit the magnitude is expressed in.
    pub unit: Unit,
}

impl Value {
    /// Creates a value.
    #[must_use]
    pub fn new(magnitude: Scalar, unit: impl Into<Unit>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    /// Family of the value's unit.
    #[must_use]
    pub const fn family(&self) -> UnitFamily {
        self.unit.family()
    }

    /// Converts the value into `to`, keeping its physical magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`ElecError::FamilyMismatch`] when `to` belongs to another
    /// family.
    pub fn convert(self, to: impl Into<Unit>) -> Result<Self> {
        let to = to.into();
        self.expect_family(to.family()).map(|v| v.rescale(to))
    }

    /// Passes the value through if it belongs to `family`.
    ///
    /// # Errors
    ///
    /// Returns [`ElecError::FamilyMismatch`] otherwise.
    pub fn expect_family(self, family: UnitFamily) -> Result<Self> {
        if self.family() == family {
            Ok(self)
        } else {
            Err(ElecError::FamilyMismatch {
                expected: family,
                found: self.family(),
            })
        }
    }

    /// Magnitude of the value expressed in `unit`.
    ///
    /// # Errors
    ///
    /// Same as [`Value::convert`].
    pub fn magnitude_in(self, unit: impl Into<Unit>) -> Result<Scalar> {
        self.convert(unit).map(|v| v.magnitude)
    }

    /// Conversion within the family. `to` must share the value's family.
    pub(crate) fn rescale(self, to: Unit) -> Self {
        debug_assert_eq!(to.family(), self.family());
        let magnitude = match (self.unit, to) {
            (Unit::Area(from), Unit::Area(to)) => {
                area_from_square_meters(area_to_square_meters(self.magnitude, from), to)
            }
            (from, to) => self.magnitude * from.scale() / to.scale(),
        };
        Self { magnitude, unit: to }
    }
}

/// Converts `value` into `to`, see [`Value::convert`].
///
/// # Errors
///
/// Returns [`ElecError::FamilyMismatch`] when `to` belongs to another family.
pub fn convert(value: Value, to: impl Into<Unit>) -> Result<Value> {
    value.convert(to)
}

fn area_to_square_meters(area: Scalar, from: AreaUnit) -> Scalar {
    match from {
        AreaUnit::Awg => circle_area(awg_diameter(area)),
        _ => area * from.def().scale,
    }
}

fn area_from_square_meters(area: Scalar, to: AreaUnit) -> Scalar {
    match to {
        AreaUnit::Awg => awg_gauge(circle_diameter(area)),
        _ => area / to.def().scale,
    }
}

impl fmt::Display for Value {
    /// Formats as `"<magnitude> <unit>"`. Without a precision the magnitude
    /// is printed like `%g`; a precision gives that many decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.magnitude, self.unit),
            None => write!(f, "{} {}", General::new(self.magnitude), self.unit),
        }
    }
}
