use mono_uuid7::{Uuid, Uuid7Generator};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn main() {
    // No Mutex needed: the generator is lock-free
    let generator = Arc::new(Uuid7Generator::new());
    let mut handles = vec![];

    for thread_id in 0..4 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = Vec::new();
            for i in 0..5 {
                let id = generator.get_next().expect("no drift cap configured");
                println!(
                    "Thread {} generated ID {} ({}, ts={:?})",
                    thread_id,
                    i,
                    id,
                    id.unix_ts_ms()
                );
                ids.push(id);
            }
            ids
        }));
    }

    let mut all_ids: Vec<Uuid> = Vec::new();
    for handle in handles {
        all_ids.extend(handle.join().expect("thread panicked"));
    }

    let unique: HashSet<_> = all_ids.iter().filter_map(Uuid::unix_ts_ms).collect();
    println!("\nTotal IDs: {}, distinct timestamps: {}", all_ids.len(), unique.len());
    assert_eq!(unique.len(), all_ids.len(), "timestamps must never repeat");
    println!("All timestamps are unique!");
}
