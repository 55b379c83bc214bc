//! Reference constants and the American Wire Gauge transform.
//!
//! ## AWG
//!
//! The gauge is a geometric series anchored at two points: gauge 36 is
//! exactly 0.005 inch (0.127 mm) and gauge 0000 (written here as -3) is
//! 0.46 inch. The 39 steps between them share the ratio 92, giving
//!
//! d(n) = 0.127 mm · 92^((36 - n) / 39)
//!
//! Gauges 00, 000 and 0000 map to -1, -2 and -3. Fractional gauges are
//! accepted and fall between the standard sizes.
//!
//! ## References
//!
//! - ASTM B258, Standard Specification for Standard Nominal Diameters and
//!   Cross-Sectional Areas of AWG Sizes of Solid Round Wires Used as
//!   Electrical Conductors.

/// Diameter of a gauge 36 wire in meters (exactly 0.005 inch).
pub const AWG_REFERENCE_DIAMETER: f64 = 0.000_127;
/// Gauge number the reference diameter belongs to.
pub const AWG_REFERENCE_GAUGE: f64 = 36.0;
/// Diameter ratio between gauge 0000 and gauge 36.
pub const AWG_DIAMETER_RATIO: f64 = 92.0;
/// Number of gauge steps between gauge 0000 and gauge 36.
pub const AWG_STEPS: f64 = 39.0;

/// Power of one electrical horsepower in watts.
pub const ELECTRICAL_HORSEPOWER: f64 = 746.0;

/// Temperature (°C) at which the tabulated resistivities are quoted.
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// Returns the diameter in meters of a wire of the given AWG `gauge`.
#[inline]
#[must_use]
pub fn awg_diameter(gauge: f64) -> f64 {
    AWG_REFERENCE_DIAMETER * AWG_DIAMETER_RATIO.powf((AWG_REFERENCE_GAUGE - gauge) / AWG_STEPS)
}

/// Returns the (fractional) AWG gauge of a wire with `diameter` meters.
///
/// Non-positive diameters produce `NaN` or infinity.
#[inline]
#[must_use]
pub fn awg_gauge(diameter: f64) -> f64 {
    AWG_REFERENCE_GAUGE
        - AWG_STEPS * (diameter / AWG_REFERENCE_DIAMETER).ln() / AWG_DIAMETER_RATIO.ln()
}
