//! Parsing and display of magnitudes in text fields.
//!
//! While a number is being typed the text may be incomplete: an empty field
//! or a lone minus sign must be accepted so the user can keep going, but they
//! carry no number yet.
//!
//! Results are shown with [`General`], which keeps a fixed number of
//! significant digits and switches to exponent form for very small or very
//! large magnitudes.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ElecError, Result};
use crate::math::Scalar;

/// State of a numeric text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// Nothing entered.
    Empty,
    /// A lone `-`, the start of a negative number.
    Pending,
    /// A complete number.
    Number(Scalar),
}

impl Entry {
    /// Magnitude to compute with. Incomplete entries count as zero.
    #[must_use]
    pub const fn magnitude(self) -> Scalar {
        match self {
            Self::Empty | Self::Pending => 0.0,
            Self::Number(x) => x,
        }
    }

    /// Returns `true` for [`Entry::Number`].
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl FromStr for Entry {
    type Err = ElecError;

    fn from_str(s: &str) -> Result<Self> {
        parse_magnitude(s)
    }
}

/// Parses a decimal magnitude, surrounding whitespace ignored.
///
/// Accepts everything [`f64::from_str`] does, including exponents, `inf` and
/// `NaN`.
///
/// # Errors
///
/// Returns [`ElecError::InvalidNumber`] for text that is neither a number nor
/// one of the incomplete forms.
pub fn parse_magnitude(text: &str) -> Result<Entry> {
    match text.trim() {
        "" => Ok(Entry::Empty),
        "-" => Ok(Entry::Pending),
        s => s
            .parse::<Scalar>()
            .map(Entry::Number)
            .map_err(|_| ElecError::InvalidNumber(text.to_owned())),
    }
}

/// Significant digits shown by [`General`] unless told otherwise.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Formats a magnitude like C's `%g`.
///
/// The magnitude is rounded to `digits` significant digits. Exponent form is
/// used when the decimal exponent is below -4 or not below `digits`; trailing
/// zeros are dropped either way.
///
/// ```
/// use elec_calc::entry::General;
///
/// assert_eq!(General::new(1.0e-12).to_string(), "1e-12");
/// assert_eq!(General::new(0.112).to_string(), "0.112");
/// assert_eq!(General::new(1_234_567.0).to_string(), "1.23457e+06");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct General {
    value: Scalar,
    digits: usize,
}

impl General {
    /// Formats `value` with [`DEFAULT_SIGNIFICANT_DIGITS`].
    #[must_use]
    pub const fn new(value: Scalar) -> Self {
        Self {
            value,
            digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }

    /// Uses `digits` significant digits instead; zero counts as one.
    #[must_use]
    pub const fn with_digits(mut self, digits: usize) -> Self {
        self.digits = if digits == 0 { 1 } else { digits };
        self
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.value;
        if !x.is_finite() {
            return write!(f, "{x}");
        }
        if x == 0.0 {
            return f.write_str(if x.is_sign_negative() { "-0" } else { "0" });
        }

        // Round first: the exponent after rounding decides the form.
        let scientific = format!("{:.*e}", self.digits - 1, x);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i64 = exponent.parse().unwrap_or_default();
        let digits = self.digits as i64;

        if exponent < -4 || exponent >= digits {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
        } else {
            let decimals = (digits - 1 - exponent) as usize;
            let fixed = format!("{x:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        }
    }
}
