use tracing::{debug, trace};

use crate::entry::parse_magnitude;
use crate::errors::Result;
use crate::math::Scalar;
use crate::ohm_law::{Quadruple, Quantity, UnknownPair};
use crate::units::{Unit, Value};

/// Ohm's law form with one field per quantity.
///
/// Each field has a magnitude and a selected unit. Whenever two different
/// fields have been edited most recently, the other two are recomputed and
/// written back in their selected units.
#[derive(Debug, Clone, PartialEq)]
pub struct OhmLawSession {
    values: [Value; 4],
    edited: [Option<Quantity>; 2],
}

impl Default for OhmLawSession {
    fn default() -> Self {
        Self {
            values: Quantity::ALL.map(|q| Value {
                magnitude: 0.0,
                unit: q.si_unit(),
            }),
            edited: [None, None],
        }
    }
}

const fn slot(quantity: Quantity) -> usize {
    match quantity {
        Quantity::Resistance => 0,
        Quantity::Current => 1,
        Quantity::Voltage => 2,
        Quantity::Power => 3,
    }
}

impl OhmLawSession {
    /// Creates an empty form with every field at zero in its SI unit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a field.
    #[must_use]
    pub const fn value(&self, quantity: Quantity) -> Value {
        self.values[slot(quantity)]
    }

    /// Unit selected for a field.
    #[must_use]
    pub const fn unit(&self, quantity: Quantity) -> Unit {
        self.value(quantity).unit
    }

    /// The two most recently edited fields, newest first.
    #[must_use]
    pub const fn last_edited(&self) -> [Option<Quantity>; 2] {
        self.edited
    }

    /// Sets a field's magnitude in its selected unit and recomputes the two
    /// fields that were not among the last two edits.
    ///
    /// Returns the recomputed pair, or `None` while fewer than two distinct
    /// fields have been edited.
    ///
    /// # Errors
    ///
    /// Propagates solver errors; none occur for a consistent session.
    pub fn edit(&mut self, quantity: Quantity, magnitude: Scalar) -> Result<Option<UnknownPair>> {
        trace!(?quantity, magnitude, "field edited");
        self.values[slot(quantity)].magnitude = magnitude;
        if self.edited[0] != Some(quantity) {
            self.edited = [Some(quantity), self.edited[0]];
        }

        let [Some(a), Some(b)] = self.edited else {
            return Ok(None);
        };
        let Some(pair) = UnknownPair::from_knowns(a, b) else {
            return Ok(None);
        };

        let mut quadruple = Quadruple::new();
        quadruple.set(a, Some(self.value(a)));
        quadruple.set(b, Some(self.value(b)));
        let solution = quadruple.solve()?;
        for unknown in pair.unknowns() {
            let shown = solution.get(unknown).convert(self.unit(unknown))?;
            self.values[slot(unknown)] = shown;
        }
        debug!(?pair, "ohm's law form recomputed");
        Ok(Some(pair))
    }

    /// Like [`OhmLawSession::edit`] but takes the raw field text. Empty
    /// text and a lone `-` count as zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::InvalidNumber`] for text that is not a
    /// number; the session is left unchanged.
    pub fn edit_text(&mut self, quantity: Quantity, text: &str) -> Result<Option<UnknownPair>> {
        let entry = parse_magnitude(text)?;
        self.edit(quantity, entry.magnitude())
    }

    /// Changes the unit shown for a field, converting its content so the
    /// physical value stays the same.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElecError::FamilyMismatch`] when `unit` does not
    /// belong to the field's family.
    pub fn select_unit(&mut self, quantity: Quantity, unit: impl Into<Unit>) -> Result<()> {
        let index = slot(quantity);
        self.values[index] = self.values[index].convert(unit)?;
        Ok(())
    }
}
