use elec_calc::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 25 m extension cord, AWG 14 copper.
    let mut calc = WireCalculator::new(WireConfig::new(
        "copper",
        Value::new(25.0, LengthUnit::Meter),
        Value::new(14.0, AreaUnit::Awg),
    ))?;
    println!("{}\n", calc.material());
    println!("{}\n", calc.report()?);

    // Same run in aluminium.
    calc.set_material("aluminium")?;
    println!("{}\n", calc.report()?);

    // How much 0.5 mm² nichrome makes a 10 Ω heater?
    let nichrome = Material::require("nichrome (20% Cr)")?;
    let length = length_for_resistance(
        nichrome,
        Value::new(10.0, ResistanceUnit::Ohm),
        Value::new(0.5, AreaUnit::SquareMillimeter),
    )?;
    println!("10 \u{3a9} of 0.5 mm\u{b2} nichrome: {:.3}", autoscale(length));

    println!("\nmaterial, resistivity (\u{3a9}\u{b7}m), at 80 \u{b0}C, conductivity (S/m)");
    for m in Material::all() {
        println!(
            "{}, {}, {}, {}",
            m.name,
            General::new(m.resistivity),
            General::new(m.resistivity_at_celsius(80.0)),
            General::new(m.conductivity())
        );
    }
    Ok(())
}
