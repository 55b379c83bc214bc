//! Conductor material table.
//!
//! Resistivities are quoted at 20 °C. The temperature coefficient is the
//! linear coefficient α of `R(T) = R₂₀ (1 + α (T - 20 °C))`; it is `NaN` where
//! no meaningful value exists (bismuth, where small impurities dominate) and
//! `0` where the alloy is not characterised.

use std::fmt;

use tracing::debug;

use crate::constants::REFERENCE_TEMPERATURE_C;
use crate::entry::General;
use crate::errors::{ElecError, Result};
use crate::math::Scalar;

/// Electrical and mechanical properties of a conductor, in SI units.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Common name, used for lookup.
    pub name: &'static str,
    /// Chemical composition.
    pub composition: &'static str,
    /// Resistivity ρ in Ω·m.
    pub resistivity: Scalar,
    /// Temperature coefficient of resistance α in 1/K.
    pub temperature_coefficient: Scalar,
    /// Density in kg/m³.
    pub density: Scalar,
}

const fn material(
    name: &'static str,
    resistivity: Scalar,
    temperature_coefficient: Scalar,
    density: Scalar,
    composition: &'static str,
) -> Material {
    Material {
        name,
        composition,
        resistivity,
        temperature_coefficient,
        density,
    }
}

/// Number of entries in [`MATERIALS`].
pub const MATERIAL_COUNT: usize = 26;

/// All known materials, ordered by increasing resistivity.
pub static MATERIALS: [Material; MATERIAL_COUNT] = [
    material("silver", 1.59e-8, 3.80e-3, 10490.0, "Ag"),
    material("copper", 1.68e-8, 4.04e-3, 8960.0, "Cu"),
    material("annealed copper", 1.72e-8, 3.93e-3, 8930.0, "Cu annealed"),
    material("gold", 2.44e-8, 3.40e-3, 19300.0, "Au"),
    material("aluminium", 2.65e-8, 3.90e-3, 2700.0, "Al"),
    material("brass (5% Zn)", 3.00e-8, 0.0, 8860.0, "95% Cu 5% Zn"),
    material("zinc", 5.90e-8, 3.70e-3, 7140.0, "Zn"),
    material("brass (30% Zn)", 5.99e-8, 1.50e-3, 8550.0, "70% Cu 30% Zn"),
    material("nickel", 6.99e-8, 6.00e-3, 8908.0, "Ni"),
    material("iron", 9.70e-8, 5.00e-3, 7874.0, "Fe"),
    material("platinum", 10.6e-8, 3.90e-3, 21450.0, "Pt"),
    material("tin", 10.9e-8, 4.50e-3, 7265.0, "Sn"),
    // NASA TM-2009-215802, cryogenic phosphor bronze data.
    material("phosphor bronze", 11.2e-8, 0.92e-3, 8860.0, "94.8% Cu 5% Sn 0.2% P"),
    material("carbon steel", 14.3e-8, 0.0, 7870.0, "~0.1% C ~0.45%Mn ~99%Fe"),
    material("lead", 22.0e-8, 3.90e-3, 11340.0, "Pb"),
    material("titanium", 42.0e-8, 3.80e-3, 4506.0, "Ti"),
    material("manganin", 43.0e-8, 0.002e-3, 8400.0, "86% Cu 12%Mn 2%Ni"),
    material("constantan", 49.0e-8, 0.008e-3, 8885.0, "55% Cu 45% Ni"),
    material(
        "stainless steel 201/202",
        70.0e-8,
        0.94e-3,
        7800.0,
        "71-68% Fe 18-17% Cr 9-7%Mn 5% Ni",
    ),
    material(
        "stainless steel 301/303, A1",
        73.0e-8,
        0.94e-3,
        7900.0,
        "74-73% Fe 18% Cr 9-8% Ni",
    ),
    material(
        "stainless steel 304, A2",
        73.0e-8,
        0.94e-3,
        7900.0,
        "73-70% Fe 19-18% Cr 11-9% Ni",
    ),
    material(
        "stainless steel 316, A4",
        75.0e-8,
        0.94e-3,
        8000.0,
        "70-65% Fe 18-17% Cr 14-11% Ni 3-2% Mo",
    ),
    material("mercury", 98.0e-8, 0.90e-3, 13534.0, "Hg"),
    material("nichrome (20% Cr)", 110e-8, 0.40e-3, 8310.0, "80% Ni 20% Cr"),
    // Impurities swing the resistance and its coefficient too much to tabulate.
    material("bismuth", 129e-8, f64::NAN, 9780.0, "Bi"),
    material("manganese", 144e-8, 0.01e-3, 7210.0, "Mn"),
];

impl Material {
    /// Looks a material up by its exact name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Self> {
        let found = MATERIALS.iter().find(|m| m.name == name);
        if found.is_none() {
            debug!(name, "material not found");
        }
        found
    }

    /// Like [`Material::by_name`] but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ElecError::UnknownMaterial`] when no entry has that name.
    pub fn require(name: &str) -> Result<&'static Self> {
        Self::by_name(name).ok_or_else(|| ElecError::UnknownMaterial(name.to_owned()))
    }

    /// Material at `index` in [`MATERIALS`].
    #[must_use]
    pub fn get(index: usize) -> Option<&'static Self> {
        MATERIALS.get(index)
    }

    /// Position of the named material in [`MATERIALS`].
    #[must_use]
    pub fn position(name: &str) -> Option<usize> {
        MATERIALS.iter().position(|m| m.name == name)
    }

    /// Every material, in table order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &MATERIALS
    }

    /// Conductivity σ = 1/ρ in S/m.
    #[must_use]
    pub fn conductivity(&self) -> Scalar {
        self.resistivity.recip()
    }

    /// Resistivity after a temperature change of `delta_kelvin` from
    /// [`REFERENCE_TEMPERATURE_C`], using the linear coefficient. `NaN` when
    /// the coefficient is unknown.
    #[must_use]
    pub fn resistivity_at(&self, delta_kelvin: Scalar) -> Scalar {
        self.resistivity * self.temperature_coefficient.mul_add(delta_kelvin, 1.0)
    }

    /// Resistivity at an absolute temperature in °C.
    #[must_use]
    pub fn resistivity_at_celsius(&self, celsius: Scalar) -> Scalar {
        self.resistivity_at(celsius - REFERENCE_TEMPERATURE_C)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} \u{3a9}\u{b7}m, {} 1/K, {} kg/m\u{b3}",
            self.name,
            self.composition,
            General::new(self.resistivity),
            General::new(self.temperature_coefficient),
            General::new(self.density)
        )
    }
}
