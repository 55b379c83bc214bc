use super::{AreaUnit, LengthUnit, MassUnit, ResistanceUnit, Unit, Value};

/// Re-expresses `value` in the unit of its family that reads best.
///
/// The value is first normalized to the family base unit and the target is
/// picked from that magnitude, the tightest matching threshold winning:
///
/// | family | base | rules |
/// |---|---|---|
/// | length | m | `< 0.01` mm, `< 0.1` cm, `< 1` dm, `> 1000` km |
/// | area | m² | `< 0.0001` mm², `< 0.01` cm², `< 1` dm² |
/// | mass | g | `< 0.001` µg, `< 1` mg, `> 1e6` t, `> 1000` kg |
/// | resistance | Ω | `< 1` mΩ, `> 1e6` MΩ, `> 1000` kΩ |
///
/// Values outside these rules stay in the base unit. Voltage, current and
/// power values are returned unchanged.
#[must_use]
pub fn autoscale(value: Value) -> Value {
    match value.unit {
        Unit::Length(_) => length(value),
        Unit::Area(_) => area(value),
        Unit::Mass(_) => mass(value),
        Unit::Resistance(_) => resistance(value),
        Unit::Voltage(_) | Unit::Current(_) | Unit::Power(_) => value,
    }
}

fn length(value: Value) -> Value {
    let meters = value.rescale(LengthUnit::Meter.into());
    let m = meters.magnitude;
    let to = if m < 0.01 {
        LengthUnit::Millimeter
    } else if m < 0.1 {
        LengthUnit::Centimeter
    } else if m < 1.0 {
        LengthUnit::Decimeter
    } else if m > 1000.0 {
        LengthUnit::Kilometer
    } else {
        LengthUnit::Meter
    };
    meters.rescale(to.into())
}

fn area(value: Value) -> Value {
    let square_meters = value.rescale(AreaUnit::SquareMeter.into());
    let a = square_meters.magnitude;
    let to = if a < 0.0001 {
        AreaUnit::SquareMillimeter
    } else if a < 0.01 {
        AreaUnit::SquareCentimeter
    } else if a < 1.0 {
        AreaUnit::SquareDecimeter
    } else {
        AreaUnit::SquareMeter
    };
    square_meters.rescale(to.into())
}

fn mass(value: Value) -> Value {
    let grams = value.rescale(MassUnit::Gram.into());
    let g = grams.magnitude;
    let to = if g < 0.001 {
        MassUnit::Microgram
    } else if g < 1.0 {
        MassUnit::Milligram
    } else if g > 1_000_000.0 {
        MassUnit::Tonne
    } else if g > 1000.0 {
        MassUnit::Kilogram
    } else {
        MassUnit::Gram
    };
    grams.rescale(to.into())
}

fn resistance(value: Value) -> Value {
    let ohms = value.rescale(ResistanceUnit::Ohm.into());
    let r = ohms.magnitude;
    let to = if r < 1.0 {
        ResistanceUnit::Milliohm
    } else if r > 1_000_000.0 {
        ResistanceUnit::Megaohm
    } else if r > 1000.0 {
        ResistanceUnit::Kiloohm
    } else {
        ResistanceUnit::Ohm
    };
    ohms.rescale(to.into())
}
