use anyhow::{bail, Result};
use scrabble_solver::{candidates, Deadline, Dictionary, Rack};
use std::convert::TryFrom;
use std::env;
use std::time::{Duration, Instant};

/// Load a word list and show what racks can spell with it.
/// Usage: `cargo run --example lexicon <wordfile> [rack...]`
/// With the `bincode` feature the dictionary is also written next to the
/// word list as `<wordfile>.bin`, and read back.
fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let wordfile = match args.next() {
        Some(wordfile) => wordfile,
        None => bail!("usage: lexicon <wordfile> [rack...]"),
    };
    let t0 = Instant::now();
    let dictionary = Dictionary::from_file(&wordfile)?;
    println!(
        "Read {} words, {} trie nodes, in {:?}",
        dictionary.len(),
        dictionary.prefixes().node_count(),
        t0.elapsed()
    );

    #[cfg(feature = "bincode")]
    let dictionary = {
        let binfile = format!("{}.bin", wordfile);
        dictionary.serialize_to(&binfile)?;
        let t0 = Instant::now();
        let dictionary = Dictionary::deserialize_from(&binfile)?;
        println!("Deserialized {} in {:?}", binfile, t0.elapsed());
        dictionary
    };

    let racks: Vec<String> = args.collect();
    let racks = if racks.is_empty() {
        vec![String::from("retains"), String::from("qzxeio_")]
    } else {
        racks
    };
    for letters in &racks {
        let rack = Rack::try_from(letters.as_str())?;
        let t0 = Instant::now();
        let deadline = Deadline::new(Duration::from_secs(10), 16);
        let words = candidates::prefix_walk(&dictionary, &rack.counts(), 20, &deadline);
        println!("{}: {} best of the formable words in {:?}", rack, words.len(), t0.elapsed());
        for word in &words {
            println!("  {:<8} {}", word, candidates::estimate_word_value(word));
        }
    }
    Ok(())
}
