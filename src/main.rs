//! ordered-skipset - demo binary
//!
//! Walks through a short insert/erase/find session and prints the results.

use ordered_skipset::{SkipSet, SkipSetConfig};

fn main() {
    println!("===========================================");
    println!("  ordered-skipset");
    println!("===========================================");
    println!();

    let config = SkipSetConfig::new(4).with_seed(2024);
    let mut set = match SkipSet::with_config(config) {
        Ok(set) => set,
        Err(e) => {
            println!("  ERROR: {e}");
            return;
        }
    };

    println!("Inserting 5, 3, 8, 1 (max_level = {})...", set.max_level());
    for value in [5, 3, 8, 1] {
        match set.insert(value) {
            Ok(inserted) => println!("  insert({value}) -> {inserted}"),
            Err(e) => println!("  insert({value}) failed: {e}"),
        }
    }
    println!("  contents: {set:?}");
    println!("  levels in use: {}", set.level());
    println!();

    println!("Re-inserting 5...");
    match set.insert(5) {
        Ok(inserted) => println!("  insert(5) -> {inserted}"),
        Err(e) => println!("  insert(5) failed: {e}"),
    }
    println!();

    println!("Erasing 3 and 99...");
    println!("  erase(3)  -> {}", set.erase(&3));
    println!("  erase(99) -> {}", set.erase(&99));
    println!("  contents: {set:?} (size {})", set.len());
    println!();

    println!("Lookups...");
    println!("  find(8)  -> {:?}", set.find(&8));
    println!("  find(99) -> {:?}", set.find(&99));
    println!();

    println!("Walking with a cursor...");
    let mut cursor = set.begin();
    while cursor != set.end() {
        match set.value_at(&cursor) {
            Ok(Some(value)) => println!("  at {value}"),
            Ok(None) => break,
            Err(e) => {
                println!("  ERROR: {e}");
                break;
            }
        }
        if let Err(e) = set.advance(&mut cursor) {
            println!("  ERROR: {e}");
            break;
        }
    }
}
