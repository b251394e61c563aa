//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wordlist_core` linkage.
//! - Exercise one insert/observe cycle with deterministic output.

use wordlist_core::{Word, WordService, WordStore};

fn main() {
    println!("wordlist_core version={}", wordlist_core::core_version());

    let store = match WordStore::open_in_memory() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };
    let service = WordService::new(store);
    let feed = service.words();

    // First emission is the empty snapshot of a fresh store.
    let initial = feed.recv().unwrap_or_default();
    println!("initial={}", initial.len());

    for text in ["Hello", "World!"] {
        match Word::new(text) {
            Ok(word) => service.add(word),
            Err(err) => eprintln!("skipping `{text}`: {err}"),
        }
    }

    // Two distinct inserts produce one emission each: first the snapshot
    // with "Hello" alone, then the one reflecting both.
    let after_first = feed.recv().unwrap_or_default();
    println!("after_first={}", after_first.len());
    if let Some(words) = feed.recv() {
        for word in &words {
            println!("word={}", word.text);
        }
    }

    service.close();
}
