//! Ohm's law and electrical power.
//!
//! Resistance, current, voltage and power are tied by `U = I R` and
//! `P = U I`; any two of them determine the other two. A [`Quadruple`] holds
//! the two known quantities and [`Quadruple::solve`] fills in the rest.

use tracing::{debug, trace};

use crate::errors::{ElecError, Result};
use crate::math::Scalar;
use crate::units::{CurrentUnit, PowerUnit, ResistanceUnit, Unit, UnitFamily, Value, VoltageUnit};

/// One of the four quantities related by Ohm's law.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Resistance R.
    Resistance,
    /// Current I.
    Current,
    /// Voltage U.
    Voltage,
    /// Power P.
    Power,
}

impl Quantity {
    /// All quantities.
    pub const ALL: [Self; 4] = [Self::Resistance, Self::Current, Self::Voltage, Self::Power];

    /// Unit family of the quantity.
    #[must_use]
    pub const fn family(self) -> UnitFamily {
        match self {
            Self::Resistance => UnitFamily::Resistance,
            Self::Current => UnitFamily::Current,
            Self::Voltage => UnitFamily::Voltage,
            Self::Power => UnitFamily::Power,
        }
    }

    /// SI unit results are reported in.
    #[must_use]
    pub const fn si_unit(self) -> Unit {
        match self {
            Self::Resistance => Unit::Resistance(ResistanceUnit::Ohm),
            Self::Current => Unit::Current(CurrentUnit::Ampere),
            Self::Voltage => Unit::Voltage(VoltageUnit::Volt),
            Self::Power => Unit::Power(PowerUnit::Watt),
        }
    }
}

/// Which two quantities are to be computed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnknownPair {
    /// From current and voltage: `R = U / I`, `P = U I`.
    ResistancePower,
    /// From voltage and power: `I = P / U`, `R = U² / P`.
    ResistanceCurrent,
    /// From current and power: `U = P / I`, `R = P / I²`.
    ResistanceVoltage,
    /// From power and resistance: `I = √(P / R)`, `U = √(P R)`.
    CurrentVoltage,
    /// From current and resistance: `U = I R`, `P = I² R`.
    VoltagePower,
    /// From voltage and resistance: `I = U / R`, `P = U² / R`.
    CurrentPower,
}

impl UnknownPair {
    /// All six pairs.
    pub const ALL: [Self; 6] = [
        Self::ResistancePower,
        Self::ResistanceCurrent,
        Self::ResistanceVoltage,
        Self::CurrentVoltage,
        Self::VoltagePower,
        Self::CurrentPower,
    ];

    /// The two quantities that get computed.
    #[must_use]
    pub const fn unknowns(self) -> [Quantity; 2] {
        use Quantity::{Current, Power, Resistance, Voltage};
        match self {
            Self::ResistancePower => [Resistance, Power],
            Self::ResistanceCurrent => [Resistance, Current],
            Self::ResistanceVoltage => [Resistance, Voltage],
            Self::CurrentVoltage => [Current, Voltage],
            Self::VoltagePower => [Voltage, Power],
            Self::CurrentPower => [Current, Power],
        }
    }

    /// The two quantities that must be given.
    #[must_use]
    pub const fn knowns(self) -> [Quantity; 2] {
        use Quantity::{Current, Power, Resistance, Voltage};
        match self {
            Self::ResistancePower => [Current, Voltage],
            Self::ResistanceCurrent => [Voltage, Power],
            Self::ResistanceVoltage => [Current, Power],
            Self::CurrentVoltage => [Power, Resistance],
            Self::VoltagePower => [Current, Resistance],
            Self::CurrentPower => [Voltage, Resistance],
        }
    }

    /// Pair whose unknowns are `a` and `b`, in either order. `None` when
    /// `a == b`.
    #[must_use]
    pub fn from_unknowns(a: Quantity, b: Quantity) -> Option<Self> {
        Self::ALL.into_iter().find(|pair| {
            let [x, y] = pair.unknowns();
            (x, y) == (a, b) || (x, y) == (b, a)
        })
    }

    /// Pair computed when `a` and `b` are given, in either order. `None` when
    /// `a == b`.
    #[must_use]
    pub fn from_knowns(a: Quantity, b: Quantity) -> Option<Self> {
        Self::ALL.into_iter().find(|pair| {
            let [x, y] = pair.knowns();
            (x, y) == (a, b) || (x, y) == (b, a)
        })
    }
}

/// Resistance, current, voltage and power, each either known or not.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quadruple {
    /// Resistance, if known.
    pub resistance: Option<Value>,
    /// Current, if known.
    pub current: Option<Value>,
    /// Voltage, if known.
    pub voltage: Option<Value>,
    /// Power, if known.
    pub power: Option<Value>,
}

impl Quadruple {
    /// Creates a quadruple with nothing known.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resistance: None,
            current: None,
            voltage: None,
            power: None,
        }
    }

    /// Sets the resistance.
    #[must_use]
    pub fn with_resistance(mut self, resistance: Value) -> Self {
        self.resistance = Some(resistance);
        self
    }

    /// Sets the current.
    #[must_use]
    pub fn with_current(mut self, current: Value) -> Self {
        self.current = Some(current);
        self
    }

    /// Sets the voltage.
    #[must_use]
    pub fn with_voltage(mut self, voltage: Value) -> Self {
        self.voltage = Some(voltage);
        self
    }

    /// Sets the power.
    #[must_use]
    pub fn with_power(mut self, power: Value) -> Self {
        self.power = Some(power);
        self
    }

    /// Returns the slot for `quantity`.
    #[must_use]
    pub const fn get(&self, quantity: Quantity) -> Option<Value> {
        match quantity {
            Quantity::Resistance => self.resistance,
            Quantity::Current => self.current,
            Quantity::Voltage => self.voltage,
            Quantity::Power => self.power,
        }
    }

    /// Overwrites the slot for `quantity`.
    pub fn set(&mut self, quantity: Quantity, value: Option<Value>) {
        match quantity {
            Quantity::Resistance => self.resistance = value,
            Quantity::Current => self.current = value,
            Quantity::Voltage => self.voltage = value,
            Quantity::Power => self.power = value,
        }
    }

    /// Number of known quantities.
    #[must_use]
    pub fn known_count(&self) -> usize {
        Quantity::ALL
            .into_iter()
            .filter(|&q| self.get(q).is_some())
            .count()
    }

    /// Works out which pair is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ElecError::Underdetermined`] or [`ElecError::Overdetermined`]
    /// unless exactly two quantities are known.
    pub fn unknown_pair(&self) -> Result<UnknownPair> {
        let known = self.known_count();
        if known < 2 {
            return Err(ElecError::Underdetermined { known });
        }
        if known > 2 {
            return Err(ElecError::Overdetermined { known });
        }
        let mut missing = Quantity::ALL.into_iter().filter(|&q| self.get(q).is_none());
        match (missing.next(), missing.next()) {
            (Some(a), Some(b)) => {
                UnknownPair::from_unknowns(a, b).ok_or(ElecError::Underdetermined { known })
            }
            _ => Err(ElecError::Overdetermined { known }),
        }
    }

    /// Computes the two unknown quantities.
    ///
    /// Known inputs may be in any unit of their family and are returned as
    /// given. Computed quantities are expressed in ohms, amperes, volts and
    /// watts. Degenerate inputs such as zero current give infinite or `NaN`
    /// results.
    ///
    /// # Errors
    ///
    /// Fails when not exactly two quantities are known, or with
    /// [`ElecError::FamilyMismatch`] when a slot holds a value of the wrong
    /// family.
    pub fn solve(&self) -> Result<Solution> {
        let pair = self.unknown_pair()?;
        debug!(?pair, "solving ohm's law");
        let [r, i, u, p] = match pair {
            UnknownPair::ResistancePower => {
                let i = self.known_si(Quantity::Current)?;
                let u = self.known_si(Quantity::Voltage)?;
                [u / i, i, u, u * i]
            }
            UnknownPair::ResistanceCurrent => {
                let u = self.known_si(Quantity::Voltage)?;
                let p = self.known_si(Quantity::Power)?;
                [u * u / p, p / u, u, p]
            }
            UnknownPair::ResistanceVoltage => {
                let i = self.known_si(Quantity::Current)?;
                let p = self.known_si(Quantity::Power)?;
                [p / (i * i), i, p / i, p]
            }
            UnknownPair::CurrentVoltage => {
                let p = self.known_si(Quantity::Power)?;
                let r = self.known_si(Quantity::Resistance)?;
                [r, (p / r).sqrt(), (p * r).sqrt(), p]
            }
            UnknownPair::VoltagePower => {
                let i = self.known_si(Quantity::Current)?;
                let r = self.known_si(Quantity::Resistance)?;
                [r, i, i * r, i * i * r]
            }
            UnknownPair::CurrentPower => {
                let u = self.known_si(Quantity::Voltage)?;
                let r = self.known_si(Quantity::Resistance)?;
                [r, u / r, u, u * u / r]
            }
        };
        trace!(r, i, u, p, "ohm's law solved");

        let pick = |quantity: Quantity, si: Scalar| {
            self.get(quantity)
                .unwrap_or_else(|| Value::new(si, quantity.si_unit()))
        };
        Ok(Solution {
            resistance: pick(Quantity::Resistance, r),
            current: pick(Quantity::Current, i),
            voltage: pick(Quantity::Voltage, u),
            power: pick(Quantity::Power, p),
        })
    }

    fn known_si(&self, quantity: Quantity) -> Result<Scalar> {
        let value = self.get(quantity).ok_or(ElecError::Underdetermined {
            known: self.known_count(),
        })?;
        value.magnitude_in(quantity.si_unit())
    }
}

/// All four quantities after solving.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Resistance.
    pub resistance: Value,
    /// Current.
    pub current: Value,
    /// Voltage.
    pub voltage: Value,
    /// Power.
    pub power: Value,
}

impl Solution {
    /// Returns the value of `quantity`.
    #[must_use]
    pub const fn get(&self, quantity: Quantity) -> Value {
        match quantity {
            Quantity::Resistance => self.resistance,
            Quantity::Current => self.current,
            Quantity::Voltage => self.voltage,
            Quantity::Power => self.power,
        }
    }
}

/// Solves `quadruple`, see [`Quadruple::solve`].
///
/// # Errors
///
/// Same as [`Quadruple::solve`].
pub fn solve(quadruple: &Quadruple) -> Result<Solution> {
    quadruple.solve()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn ohms(v: f64) -> Value {
        Value::new(v, ResistanceUnit::Ohm)
    }
    fn amps(v: f64) -> Value {
        Value::new(v, CurrentUnit::Ampere)
    }
    fn volts(v: f64) -> Value {
        Value::new(v, VoltageUnit::Volt)
    }
    fn watts(v: f64) -> Value {
        Value::new(v, PowerUnit::Watt)
    }

    fn check(solution: &Solution, r: f64, i: f64, u: f64, p: f64) {
        let si = |q: Quantity| solution.get(q).magnitude_in(q.si_unit()).unwrap();
        assert_relative_eq!(si(Quantity::Resistance), r, max_relative = 1.0e-12);
        assert_relative_eq!(si(Quantity::Current), i, max_relative = 1.0e-12);
        assert_relative_eq!(si(Quantity::Voltage), u, max_relative = 1.0e-12);
        assert_relative_eq!(si(Quantity::Power), p, max_relative = 1.0e-12);
    }

    #[test]
    fn current_and_voltage() {
        let s = Quadruple::new()
            .with_current(amps(2.0))
            .with_voltage(volts(10.0))
            .solve()
            .unwrap();
        assert_eq!(s.resistance.unit, Unit::Resistance(ResistanceUnit::Ohm));
        assert_eq!(s.power.unit, Unit::Power(PowerUnit::Watt));
        check(&s, 5.0, 2.0, 10.0, 20.0);
    }

    #[test]
    fn power_and_resistance() {
        let s = Quadruple::new()
            .with_power(watts(100.0))
            .with_resistance(ohms(4.0))
            .solve()
            .unwrap();
        check(&s, 4.0, 5.0, 20.0, 100.0);
    }

    #[test]
    fn every_pair_reproduces_the_circuit() {
        // 12 V across 8 Ω: 1.5 A, 18 W.
        let full = Solution {
            resistance: ohms(8.0),
            current: amps(1.5),
            voltage: volts(12.0),
            power: watts(18.0),
        };
        for pair in UnknownPair::ALL {
            let mut q = Quadruple::new();
            for known in pair.knowns() {
                q.set(known, Some(full.get(known)));
            }
            assert_eq!(q.unknown_pair().unwrap(), pair);
            check(&q.solve().unwrap(), 8.0, 1.5, 12.0, 18.0);
        }
    }

    #[test]
    fn inputs_in_prefixed_units() {
        let s = Quadruple::new()
            .with_current(Value::new(250.0, CurrentUnit::Milliampere))
            .with_resistance(Value::new(2.2, ResistanceUnit::Kiloohm))
            .solve()
            .unwrap();
        assert_eq!(s.current.unit, Unit::Current(CurrentUnit::Milliampere));
        assert_relative_eq!(s.current.magnitude, 250.0);
        check(&s, 2200.0, 0.25, 550.0, 137.5);
    }

    #[test]
    fn zero_current_gives_infinite_resistance() {
        let s = Quadruple::new()
            .with_current(amps(0.0))
            .with_voltage(volts(10.0))
            .solve()
            .unwrap();
        assert!(s.resistance.magnitude.is_infinite());
        assert_eq!(s.power.magnitude, 0.0);
    }

    #[test]
    fn wrong_number_of_knowns_is_rejected() {
        assert_eq!(
            Quadruple::new().with_current(amps(1.0)).solve(),
            Err(ElecError::Underdetermined { known: 1 })
        );
        let three = Quadruple::new()
            .with_current(amps(1.0))
            .with_voltage(volts(1.0))
            .with_power(watts(1.0));
        assert_eq!(three.solve(), Err(ElecError::Overdetermined { known: 3 }));
        assert_eq!(
            Quadruple::new().solve(),
            Err(ElecError::Underdetermined { known: 0 })
        );
    }

    #[test]
    fn value_in_wrong_slot_is_rejected() {
        let q = Quadruple::new()
            .with_current(volts(1.0))
            .with_voltage(volts(1.0));
        assert_eq!(
            solve(&q),
            Err(ElecError::FamilyMismatch {
                expected: UnitFamily::Current,
                found: UnitFamily::Voltage,
            })
        );
    }

    #[test]
    fn pair_lookup_is_order_insensitive() {
        assert_eq!(
            UnknownPair::from_unknowns(Quantity::Power, Quantity::Resistance),
            Some(UnknownPair::ResistancePower)
        );
        assert_eq!(
            UnknownPair::from_knowns(Quantity::Resistance, Quantity::Power),
            Some(UnknownPair::CurrentVoltage)
        );
        assert_eq!(UnknownPair::from_knowns(Quantity::Power, Quantity::Power), None);
    }
}
