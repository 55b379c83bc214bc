//! Property-based tests for conversions, wire formulas and the Ohm's law
//! solver.

use elec_calc::prelude::*;
use proptest::prelude::*;

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

fn linear_unit() -> impl Strategy<Value = Unit> {
    let linear: Vec<Unit> = [
        UnitFamily::Length,
        UnitFamily::Area,
        UnitFamily::Mass,
        UnitFamily::Resistance,
        UnitFamily::Voltage,
        UnitFamily::Current,
        UnitFamily::Power,
    ]
    .into_iter()
    .flat_map(|family| {
        (0..family.units().len()).filter_map(move |index| Unit::from_index(family, index).ok())
    })
    .filter(|unit| unit.def().is_linear())
    .collect();
    proptest::sample::select(linear)
}

fn material() -> impl Strategy<Value = &'static Material> {
    (0..MATERIALS.len()).prop_map(|index| &MATERIALS[index])
}

// ── Unit conversion ──────────────────────────────────────────────────

proptest! {
    /// Converting to any unit of the family and back recovers the magnitude.
    #[test]
    fn linear_round_trip(
        from in linear_unit(),
        to_index in 0usize..8,
        magnitude in -1.0e6f64..1.0e6,
    ) {
        let family = from.family();
        let units = family.units();
        let to = Unit::from_index(family, to_index % units.len()).unwrap();
        prop_assume!(to.def().is_linear());

        let v = Value::new(magnitude, from);
        let back = v.convert(to).unwrap().convert(from).unwrap();
        prop_assert_eq!(back.unit, from);
        prop_assert!(close(back.magnitude, magnitude, 1.0e-12));
    }

    /// Gauges survive a trip through square millimeters.
    #[test]
    fn gauge_round_trip(gauge in -3.0f64..50.0) {
        let mm2 = Value::new(gauge, AreaUnit::Awg)
            .convert(AreaUnit::SquareMillimeter)
            .unwrap();
        let back = mm2.convert(AreaUnit::Awg).unwrap();
        prop_assert!((back.magnitude - gauge).abs() < 1.0e-9);
    }

    /// Thicker gauges (smaller numbers) always have larger cross sections.
    #[test]
    fn gauge_area_is_monotonic(gauge in -3.0f64..50.0, step in 0.1f64..5.0) {
        let thick = Value::new(gauge, AreaUnit::Awg).magnitude_in(AreaUnit::SquareMeter).unwrap();
        let thin = Value::new(gauge + step, AreaUnit::Awg).magnitude_in(AreaUnit::SquareMeter).unwrap();
        prop_assert!(thick > thin);
    }

    /// Autoscaling never changes the physical magnitude.
    #[test]
    fn autoscale_preserves_value(unit in linear_unit(), magnitude in 1.0e-9f64..1.0e9) {
        let v = Value::new(magnitude, unit);
        let scaled = autoscale(v);
        prop_assert_eq!(scaled.family(), v.family());
        let back = scaled.convert(unit).unwrap();
        prop_assert!(close(back.magnitude, magnitude, 1.0e-12));
    }
}

// ── Wire formulas ────────────────────────────────────────────────────

proptest! {
    /// The length formula inverts the resistance formula.
    #[test]
    fn length_inverts_resistance(
        m in material(),
        length_m in 1.0e-3f64..1.0e4,
        area_mm2 in 1.0e-3f64..500.0,
    ) {
        let length = Value::new(length_m, LengthUnit::Meter);
        let area = Value::new(area_mm2, AreaUnit::SquareMillimeter);
        let r = resistance_of_wire(m, length, area).unwrap();
        let back = length_for_resistance(m, r, area).unwrap();
        prop_assert!(close(back.magnitude, length_m, 1.0e-12));
    }

    /// Diameter and area conversions invert each other for gauge values.
    #[test]
    fn diameter_area_round_trip(gauge in -3.0f64..50.0) {
        let d = diameter_from_area(Value::new(gauge, AreaUnit::Awg), LengthUnit::Millimeter).unwrap();
        let back = area_from_diameter(d, AreaUnit::Awg).unwrap();
        prop_assert!((back.magnitude - gauge).abs() < 1.0e-9);
    }

    /// Mass scales linearly with length.
    #[test]
    fn mass_is_linear_in_length(m in material(), length_m in 1.0e-3f64..1.0e3) {
        let area = Value::new(1.0, AreaUnit::SquareMillimeter);
        let one = mass_of_wire(m, Value::new(length_m, LengthUnit::Meter), area).unwrap();
        let two = mass_of_wire(m, Value::new(2.0 * length_m, LengthUnit::Meter), area).unwrap();
        prop_assert!(close(two.magnitude, 2.0 * one.magnitude, 1.0e-12));
    }
}

// ── Ohm's law ────────────────────────────────────────────────────────

proptest! {
    /// Every pair of knowns reproduces the other two quantities.
    #[test]
    fn solver_is_consistent(r in 1.0e-3f64..1.0e6, i in 1.0e-6f64..1.0e3) {
        let u = i * r;
        let p = u * i;
        let truth = [
            (Quantity::Resistance, r),
            (Quantity::Current, i),
            (Quantity::Voltage, u),
            (Quantity::Power, p),
        ];
        for pair in UnknownPair::ALL {
            let mut q = Quadruple::new();
            for known in pair.knowns() {
                let (_, si) = truth.iter().copied().find(|(k, _)| *k == known).unwrap();
                q.set(known, Some(Value::new(si, known.si_unit())));
            }
            let solved = q.solve().unwrap();
            for (quantity, expected) in truth {
                let got = solved.get(quantity).magnitude_in(quantity.si_unit()).unwrap();
                prop_assert!(close(got, expected, 1.0e-9), "{:?} {:?}: {} vs {}", pair, quantity, got, expected);
            }
        }
    }
}
