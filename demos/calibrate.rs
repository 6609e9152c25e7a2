use anyhow::Result;
use scrabble_solver::{calibrate, Dictionary, Difficulty, SearchConfig};

const LEXICON: &str = include_str!("../src/candidates/medium.txt");

fn main() -> Result<()> {
    let words: Vec<&str> = LEXICON.split_whitespace().collect();
    let dictionary = Dictionary::from_words(&words)?;
    let profile = calibrate(&dictionary);
    println!(
        "Benchmark took {:?}: score {:.2}, {} machine{}",
        profile.elapsed,
        profile.performance_score,
        profile.tier(),
        if profile.is_low_end { " (low end)" } else { "" }
    );
    for &difficulty in Difficulty::all().iter() {
        let config = SearchConfig::new(difficulty).with_time_multiplier(profile.time_multiplier);
        println!(
            "{:>6}: budget {:?} -> {:?}",
            difficulty,
            config.time_budget,
            config.effective_budget()
        );
    }
    Ok(())
}
