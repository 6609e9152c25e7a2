use anyhow::Result;
use std::convert::TryFrom;
use std::time::{Duration, Instant};
use scrabble_solver::{
    find_move, score_move, score_words, validate_submission, Board, Bot, Difficulty, Dictionary,
    Direction, Error, Letter, PlacedTile, PlacementError, Rack, SearchConfig, BINGO_BONUS,
};

const WORDS: &[&str] = &[
    "AT", "TA", "AS", "IS", "IT", "TI", "CAT", "CATS", "ACT", "ACTS", "SCAT", "TAN", "ANT", "RAT",
    "ART", "TAR", "STAR", "RATS", "ARTS", "TSAR", "CART", "CARTS", "SCAR", "RACE", "CARE", "ACRE",
    "TRACE", "CRATE", "REACT", "CARET", "CATER", "STAIR", "SITAR", "ASTIR", "TRIES", "TIRES",
];

fn board_with(row: usize, text: &str) -> Result<Board> {
    let mut state = vec![String::from("..............."); 15];
    state[row] = String::from(text);
    Ok(Board::default().with_state_from_strings(&state)?)
}

fn tiles_for(word: &str, row: usize, col: usize, direction: Direction) -> Result<Vec<PlacedTile>> {
    let (dr, dc) = direction.delta();
    word.chars()
        .enumerate()
        .map(|(i, ch)| -> Result<PlacedTile> {
            let letter = Letter::try_from(ch)?;
            Ok(PlacedTile::new(row + i * dr, col + i * dc, letter, ch.is_ascii_lowercase()))
        })
        .collect()
}

#[test]
fn first_move_cat_with_blanks() -> Result<()> {
    let dictionary = Dictionary::from_words(&["CAT"])?;
    let board = Board::default();
    let rack = Rack::try_from("CAT____")?;
    let mv = find_move(&rack, &board, &dictionary, true, 2000).expect("CAT");
    assert_eq!(mv.word, "CAT");
    assert_eq!(mv.score, 10);
    assert_eq!(mv.tiles.len(), 3);
    assert!(mv.tiles.iter().all(|t| !t.is_blank));
    assert!(mv.tiles.iter().any(|t| (t.row, t.col) == (7, 7)));
    Ok(())
}

#[test]
fn hook_cats() -> Result<()> {
    let dictionary = Dictionary::from_words(&["CAT", "CATS"])?;
    let board = board_with(7, ".......CAT.....")?;
    let rack = Rack::try_from("S")?;
    let mv = find_move(&rack, &board, &dictionary, false, 2000).expect("CATS");
    assert_eq!(mv.word, "CATS");
    assert_eq!(mv.tiles, vec![PlacedTile::new(7, 10, Letter::try_from('S')?, false)]);
    assert_eq!(mv.score, 6);
    Ok(())
}

#[test]
fn bingo_adds_fifty() -> Result<()> {
    let dictionary = Dictionary::from_words(&["JUKEBOX"])?;
    let board = Board::default();
    let rack = Rack::try_from("JUKEBOX")?;
    let tiles = tiles_for("JUKEBOX", 7, 4, Direction::Horizontal)?;
    let submission = validate_submission(&board, &tiles, &rack, &dictionary, true)?;
    let words: u32 = score_words(&board, &tiles).iter().map(|w| w.score).sum();
    assert_eq!(submission.mv.score, words + BINGO_BONUS);
    assert_eq!(submission.mv.score, 27 * 2 + 50);
    assert!(submission.mv.is_bingo());
    Ok(())
}

#[test]
fn consonants_only_is_a_pass() -> Result<()> {
    let dictionary = Dictionary::from_words(WORDS)?;
    let rack = Rack::try_from("BCDFGHJ")?;
    let start = Instant::now();
    let mv = find_move(&rack, &Board::default(), &dictionary, true, 1000);
    assert_eq!(mv, None);
    assert!(start.elapsed() < Duration::from_millis(1200));
    Ok(())
}

#[test]
fn first_move_must_cover_center() -> Result<()> {
    let dictionary = Dictionary::from_words(WORDS)?;
    let rack = Rack::try_from("CAT")?;
    let tiles = tiles_for("CAT", 3, 3, Direction::Horizontal)?;
    let result = validate_submission(&Board::default(), &tiles, &rack, &dictionary, true);
    assert!(matches!(
        result,
        Err(Error::InvalidPlacement(PlacementError::MissesCenter))
    ));
    // a permissive dictionary changes nothing about placement rules
    let result = validate_submission(&Board::default(), &tiles, &rack, &Dictionary::permissive(), true);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn commit_is_monotonic() -> Result<()> {
    let dictionary = Dictionary::from_words(WORDS)?;
    let mut board = Board::default();
    let mut bot = Bot::with_config(SearchConfig::new(Difficulty::Hard).with_seed(9));
    let mut occupied = board.occupied_count();
    for letters in &["CARTS", "TIRES", "STAR"] {
        let rack = Rack::try_from(*letters)?;
        let before = board.clone();
        let is_first_move = board.is_first_move();
        let mv = match bot.find_move(&rack, &board, &dictionary, is_first_move) {
            Some(mv) => mv,
            None => continue,
        };
        board.play_move(&mv)?;
        assert_eq!(board.occupied_count(), occupied + mv.tiles.len());
        occupied = board.occupied_count();
        // cells that were occupied still hold the same letters
        for (row, col) in (0..15).flat_map(|r| (0..15).map(move |c| (r, c))) {
            if before.is_occupied(row, col) {
                assert_eq!(before.cell_at(row, col)?, board.cell_at(row, col)?);
            }
        }
        // replaying the same tiles is refused and leaves the board as it was
        let after = board.clone();
        assert!(matches!(board.play_move(&mv), Err(Error::TileReplaceError { .. })));
        assert_eq!(board, after);
    }
    assert!(occupied > 0);
    Ok(())
}

#[test]
fn word_round_trip_after_commit() -> Result<()> {
    let dictionary = Dictionary::from_words(WORDS)?;
    let mut board = board_with(7, ".......CAT.....")?;
    let rack = Rack::try_from("SRTAE")?;
    let mv = find_move(&rack, &board, &dictionary, false, 2000).expect("a move");
    board.play_move(&mv)?;
    for tile in &mv.tiles {
        let span = board
            .word_at(tile.row, tile.col, mv.direction)
            .expect("tile on the board");
        if span.len() > 1 {
            assert_eq!(span.word, mv.word);
        }
    }
    Ok(())
}

#[test]
fn scoring_is_reproducible() -> Result<()> {
    let dictionary = Dictionary::from_words(WORDS)?;
    let board = board_with(7, ".......CAT.....")?;
    let rack = Rack::try_from("SRTAE")?;
    let mv = find_move(&rack, &board, &dictionary, false, 2000).expect("a move");
    assert_eq!(score_move(&board, &mv.tiles), mv.score);
    assert_eq!(score_move(&board, &mv.tiles), score_move(&board, &mv.tiles));
    Ok(())
}

#[test]
fn seeded_bots_agree() -> Result<()> {
    let dictionary = Dictionary::from_words(WORDS)?;
    let board = board_with(7, ".......CAT.....")?;
    let rack = Rack::try_from("SRTAEIC")?;
    for difficulty in Difficulty::all().iter() {
        let config = SearchConfig::new(*difficulty).with_seed(2024);
        let first = Bot::with_config(config.clone()).find_move(&rack, &board, &dictionary, false);
        let second = Bot::with_config(config).find_move(&rack, &board, &dictionary, false);
        assert_eq!(first, second, "{}", difficulty);
    }
    Ok(())
}

#[test]
fn every_tier_plays_valid_words() -> Result<()> {
    let dictionary = Dictionary::from_words(WORDS)?;
    let board = board_with(7, ".......CAT.....")?;
    let rack = Rack::try_from("SRTAEIC")?;
    for difficulty in Difficulty::all().iter() {
        let config = SearchConfig::new(*difficulty).with_seed(1).with_time_budget_ms(3000);
        let mv = Bot::with_config(config)
            .find_move(&rack, &board, &dictionary, false)
            .expect("a move");
        for word in score_words(&board, &mv.tiles) {
            assert!(dictionary.contains(&word.word), "{}: {}", difficulty, word.word);
        }
        // the bot's move passes the human validation as well
        let submission = validate_submission(&board, &mv.tiles, &rack, &dictionary, false)?;
        assert_eq!(submission.mv.score, mv.score);
    }
    Ok(())
}
