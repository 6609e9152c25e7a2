use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Board, Bot, Dictionary, Difficulty, Rack, SearchConfig};
use std::convert::TryFrom;

const LEXICON: &str = include_str!("../src/candidates/medium.txt");

const TEST_STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "......quiet....",
    "..........a....",
    "..........r....",
    ".....stone.....",
    "......r........",
    "......a........",
    "......c........",
    "......e........",
    "...............",
    "...............",
    "...............",
];

fn bench_find_move(c: &mut Criterion, difficulty: Difficulty, letters: &str) {
    let words: Vec<&str> = LEXICON.split_whitespace().collect();
    let dictionary = Dictionary::from_words(&words).unwrap();
    let board = Board::default().with_state_from_strings(TEST_STATE).unwrap();
    let rack = Rack::try_from(letters).unwrap();
    let config = SearchConfig::new(difficulty).with_seed(1).with_time_budget_ms(2000);
    c.bench_function(&format!("find_move.{}.{}", difficulty, letters), |b| {
        b.iter(|| Bot::with_config(config.clone()).find_move(&rack, &board, &dictionary, false))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    for &difficulty in Difficulty::all().iter() {
        bench_find_move(c, difficulty, "retains");
    }
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_find_move(c, Difficulty::Expert, "sdeyr__");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
