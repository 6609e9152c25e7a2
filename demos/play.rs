use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scrabble_solver::{Board, Bot, Dictionary, Difficulty, Rack, SearchConfig, Tile, TileBag};
use std::env;
use std::time::Instant;

const LEXICON: &str = include_str!("../src/candidates/medium.txt");

/// Let one bot of every difficulty play against the others until the bag is
/// empty and nobody can move.
/// Usage: `cargo run --example play [wordfile]`
fn main() -> Result<()> {
    let t0 = Instant::now();
    let dictionary = match env::args().nth(1) {
        Some(wordfile) => Dictionary::from_file(&wordfile)?,
        None => {
            let words: Vec<&str> = LEXICON.split_whitespace().collect();
            Dictionary::from_words(&words)?
        }
    };
    println!("Loaded {} words in {:?}", dictionary.len(), t0.elapsed());

    let mut rng = StdRng::seed_from_u64(2024);
    let mut bag = TileBag::standard();
    let mut board = Board::default();
    let mut players: Vec<(Bot, Rack, u32)> = Vec::new();
    for (i, &difficulty) in Difficulty::all().iter().enumerate() {
        let config = SearchConfig::new(difficulty)
            .with_seed(i as u64)
            .with_time_budget_ms(2000);
        let mut rack = Rack::new();
        bag.refill(&mut rack, &mut rng)?;
        players.push((Bot::with_config(config), rack, 0));
    }

    let mut passes = 0;
    while passes < players.len() {
        for (bot, rack, score) in players.iter_mut() {
            let t0 = Instant::now();
            let is_first_move = board.is_first_move();
            match bot.find_move(rack, &board, &dictionary, is_first_move) {
                Some(mv) => {
                    board.play_move(&mv)?;
                    for tile in &mv.tiles {
                        let taken = if tile.is_blank {
                            rack.remove(Tile::Blank)
                        } else {
                            rack.remove(Tile::Letter(tile.letter))
                        };
                        debug_assert!(taken);
                    }
                    bag.refill(rack, &mut rng)?;
                    *score += mv.score;
                    passes = 0;
                    println!(
                        "{:>6}: {} ({:?}), rack {}, total {}",
                        bot.difficulty(),
                        mv,
                        t0.elapsed(),
                        rack,
                        score
                    );
                }
                None => {
                    passes += 1;
                    println!("{:>6}: pass, rack {}", bot.difficulty(), rack);
                }
            }
        }
    }
    println!("{}", board);
    for (bot, rack, score) in &players {
        println!("{:>6}: {} points, left {}", bot.difficulty(), score, rack);
    }
    Ok(())
}
