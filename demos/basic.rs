use mono_uuid7::{Uuid, Uuid7Error, Uuid7Generator};

fn main() -> Result<(), Uuid7Error> {
    let generator = Uuid7Generator::new();

    // Generate some IDs
    let id1 = generator.get_next()?;
    let id2 = generator.get_next()?;
    let id3 = generator.get_next()?;

    println!("Generated IDs (guaranteed to be strictly monotonic):");
    print_id(&id1);
    print_id(&id2);
    print_id(&id3);

    // Parse an identifier back and inspect it
    let parsed: Uuid = id2.to_string().parse().expect("canonical form parses");
    println!("\nParsed back: {parsed} (equal: {})", parsed == id2);
    println!("Last issued timestamp: {:?}", generator.last_issued_unix_ms());

    // The process-wide generator needs no setup
    println!("\nFrom the global generator: {}", mono_uuid7::uuid7());
    Ok(())
}

fn print_id(id: &Uuid) {
    let timestamp = id.unix_ts_ms().unwrap_or_default();
    let datetime = id
        .datetime()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "n/a".to_owned());

    println!("  ID: {id}, Timestamp: {timestamp}, Human date: {datetime}, Version: {}", id.version());
}
