use mono_uuid7::{Uuid7Config, Uuid7Error, Uuid7Generator};

fn main() -> Result<(), Uuid7Error> {
    let now = chrono::Utc::now().timestamp_millis();

    // Clamp: never run more than 3 ms ahead of the supplied time
    let config = Uuid7Config::builder().max_drift_ms(3)?.build();
    let generator = Uuid7Generator::from_seed(now, config)?;

    println!("Clamping generator (max drift 3 ms), 6 IDs at a fixed instant:");
    for _ in 0..6 {
        let id = generator.get_next_at(now)?;
        println!("  {id} drift={} ms", id.unix_ts_ms().unwrap_or_default() - now);
    }

    // Throw: report backpressure instead of clamping
    let config = Uuid7Config::builder()
        .max_drift_ms(3)?
        .throw_on_drift_cap(true)
        .build();
    let generator = Uuid7Generator::from_seed(now, config)?;

    println!("\nThrowing generator (max drift 3 ms):");
    for i in 0..6 {
        match generator.get_next_at(now) {
            Ok(id) => println!("  #{i}: {id}"),
            Err(err) => println!("  #{i}: {err}"),
        }
    }

    // Resume from an identifier persisted elsewhere
    let persisted = generator.get_next_at(now + 100)?;
    let resumed = Uuid7Generator::from_seed(persisted, Uuid7Config::default())?;
    println!("\nResumed after {persisted}: next is {}", resumed.get_next_at(now)?);
    Ok(())
}
