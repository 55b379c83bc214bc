//! Shared error types used across submodules.

use thiserror::Error;

use crate::units::UnitFamily;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElecError {
    /// Raised when a material name is not present in the material table.
    #[error("unknown material: {0}")]
    UnknownMaterial(String),
    /// Raised when a raw unit index does not exist in the family's table.
    #[error("unit index {index} is not valid for the {family} family")]
    InvalidUnit {
        /// Family the index was looked up in.
        family: UnitFamily,
        /// Offending index.
        index: usize,
    },
    /// Raised when a value of one family is used where another is required.
    #[error("expected a {expected} value, found {found}")]
    FamilyMismatch {
        /// Family required by the operation.
        expected: UnitFamily,
        /// Family of the value that was supplied.
        found: UnitFamily,
    },
    /// Raised when fewer than two Ohm's law quantities are known.
    #[error("ohm's law needs exactly two known quantities, got {known}")]
    Underdetermined {
        /// Number of known quantities.
        known: usize,
    },
    /// Raised when more than two Ohm's law quantities are known.
    #[error("ohm's law needs exactly two unknown quantities, got {known} known")]
    Overdetermined {
        /// Number of known quantities.
        known: usize,
    },
    /// Raised when entered text is not a decimal number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

/// Convenience alias for results carrying [`ElecError`].
pub type Result<T> = std::result::Result<T, ElecError>;
