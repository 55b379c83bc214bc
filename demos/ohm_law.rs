use elec_calc::prelude::*;
use tracing_subscriber::EnvFilter;

fn show(form: &OhmLawSession) {
    for q in Quantity::ALL {
        print!("{:>16}", format!("{:.4}", form.value(q)));
    }
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A 12 V, 55 W headlight bulb.
    let solved = Quadruple::new()
        .with_voltage(Value::new(12.0, VoltageUnit::Volt))
        .with_power(Value::new(55.0, PowerUnit::Watt))
        .solve()?;
    println!(
        "bulb: {:.3}, {:.3}",
        autoscale(solved.resistance),
        solved.current
    );

    // The same form a user would type into.
    let mut form = OhmLawSession::new();
    form.select_unit(Quantity::Current, CurrentUnit::Milliampere)?;
    form.select_unit(Quantity::Power, PowerUnit::Milliwatt)?;
    for (quantity, text) in [
        (Quantity::Voltage, "5"),
        (Quantity::Resistance, "-"),
        (Quantity::Resistance, "220"),
        (Quantity::Current, "10"),
    ] {
        let pair = form.edit_text(quantity, text)?;
        print!("{quantity:?} <- {text:<4} solved {pair:?}: ");
        show(&form);
    }
    Ok(())
}
