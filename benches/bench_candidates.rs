use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scrabble_solver::candidates::{dictionary_scan, hook_plays, prefix_walk};
use scrabble_solver::{Board, Deadline, Dictionary, Rack};
use std::convert::TryFrom;
use std::time::Duration;

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

fn dictionary() -> Dictionary {
    let words: Vec<&str> = LEXICON.split_whitespace().collect();
    Dictionary::from_words(&words).unwrap()
}

fn bench_rack(c: &mut Criterion, dictionary: &Dictionary, letters: &str) {
    let counts = Rack::try_from(letters).unwrap().counts();
    c.bench_function(&format!("scan.{}", letters), |b| {
        b.iter(|| {
            let deadline = Deadline::new(Duration::from_secs(60), 16);
            dictionary_scan(dictionary, black_box(&counts), 100, &deadline, 0.4)
        })
    });
    c.bench_function(&format!("walk.{}", letters), |b| {
        b.iter(|| {
            let deadline = Deadline::new(Duration::from_secs(60), 16);
            prefix_walk(dictionary, black_box(&counts), 200, &deadline)
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let dictionary = dictionary();
    bench_rack(c, &dictionary, "retains");
    bench_rack(c, &dictionary, "qzxeio_");

    let board = Board::default().with_state_from_strings(TEST_STATE).unwrap();
    let counts = Rack::try_from("sdeyr__").unwrap().counts();
    c.bench_function("hooks", |b| {
        b.iter(|| {
            let deadline = Deadline::new(Duration::from_secs(60), 16);
            hook_plays(&board, black_box(&counts), &dictionary, &deadline)
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_main!(benches);
