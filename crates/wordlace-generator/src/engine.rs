//! Randomized word placement.
//!
//! Each random attempt rolls a start cell and a single direction together and
//! tests only that pair; a failed attempt is discarded whole and re-rolled.
//! After `max_attempts` failures the engine enumerates every placement that
//! is still valid and picks one uniformly, so a word that fits is always
//! placed and a word that no longer fits fails cleanly instead of spinning.

use log::{debug, trace};
use rand::{RngExt as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64;
use wordlace_core::{Cell, Direction, LetterGrid, Placement, Word};

/// Rolls one `(start, direction)` pair and tests it.
///
/// Returns the placement if the rolled span stays on the board and every cell
/// in it is unfilled. A cell already holding a letter blocks the span even
/// when that letter matches the word; words never share cells.
fn random_attempt(word: &Word, grid: &LetterGrid, rng: &mut Pcg64) -> Option<Placement> {
    let size = grid.size();
    let start = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
    let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];

    let placement = Placement::from_start(direction, start, word.len(), size)?;
    placement
        .cells()
        .iter()
        .all(|&cell| grid.get(cell).is_none())
        .then_some(placement)
}

/// Enumerates every placement of `word` that is currently valid, in
/// deterministic row, column, direction order.
fn exhaustive_placements(word: &Word, grid: &LetterGrid) -> Vec<Placement> {
    let size = grid.size();
    let mut placements = Vec::new();
    for row in 0..size {
        for col in 0..size {
            for direction in Direction::ALL {
                let Some(placement) =
                    Placement::from_start(direction, Cell::new(row, col), word.len(), size)
                else {
                    continue;
                };
                if placement.cells().iter().all(|&cell| grid.get(cell).is_none()) {
                    placements.push(placement);
                }
            }
        }
    }
    placements
}

/// Writes the word's letters along the placement's cells.
fn commit(word: &Word, grid: &mut LetterGrid, placement: &Placement) {
    for (letter, &cell) in word.letters().zip(placement.cells()) {
        grid.set(cell, letter);
    }
}

/// Places `word` somewhere on `grid`, or returns `None` when the board has no
/// room left for it.
pub(crate) fn place_word(
    word: &Word,
    grid: &mut LetterGrid,
    rng: &mut Pcg64,
    max_attempts: u32,
) -> Option<Placement> {
    for _ in 0..max_attempts {
        if let Some(placement) = random_attempt(word, grid, rng) {
            trace!(
                "placed {word} {} from {}",
                placement.direction(),
                placement.start()
            );
            commit(word, grid, &placement);
            return Some(placement);
        }
    }

    debug!("random placement of {word} exhausted {max_attempts} attempts, scanning exhaustively");
    let candidates = exhaustive_placements(word, grid);
    let placement = candidates.choose(rng)?.clone();
    commit(word, grid, &placement);
    Some(placement)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    fn rng() -> Pcg64 {
        Pcg64::from_seed([7; 32])
    }

    fn word(text: &str) -> Word {
        text.parse().unwrap()
    }

    #[test]
    fn test_place_word_spells_the_word_on_the_grid() {
        let mut grid = LetterGrid::new(10);
        let word = word("kotlin");
        let placement = place_word(&word, &mut grid, &mut rng(), 1000).unwrap();

        assert_eq!(placement.len(), 6);
        let spelled: String = placement
            .cells()
            .iter()
            .map(|&cell| grid.get(cell).unwrap().as_char())
            .collect();
        assert_eq!(spelled, "KOTLIN");

        // Only the placement's cells were written
        let filled = (0..grid.cell_count())
            .filter(|&index| grid.get(Cell::from_flat_index(index, 10)).is_some())
            .count();
        assert_eq!(filled, 6);
    }

    #[test]
    fn test_full_length_word_is_placeable() {
        // Length exactly N leaves a single valid start per direction; the
        // engine must still terminate and stay in bounds.
        let mut grid = LetterGrid::new(10);
        let word = word("javascript");
        let placement = place_word(&word, &mut grid, &mut rng(), 1000).unwrap();
        assert_eq!(placement.len(), 10);
        for &cell in placement.cells() {
            assert!(grid.contains(cell));
        }
    }

    #[test]
    fn test_occupied_cells_block_placement_even_on_matching_letters() {
        // Fill everything except the top row, whose letters spell CAT...
        let mut grid: LetterGrid = "
            CAT
            XXX
            XXX
        "
        .parse()
        .unwrap();
        // ...so CAT has nowhere to go: matching letters still block
        assert!(place_word(&word("cat"), &mut grid, &mut rng(), 100).is_none());

        let mut open = LetterGrid::new(3);
        assert!(place_word(&word("cat"), &mut open, &mut rng(), 100).is_some());
    }

    #[test]
    fn test_zero_attempt_cap_falls_back_to_exhaustive_scan() {
        let mut grid = LetterGrid::new(4);
        let placement = place_word(&word("word"), &mut grid, &mut rng(), 0).unwrap();
        assert_eq!(placement.len(), 4);
    }

    #[test]
    fn test_exhaustive_placements_cover_all_valid_spots() {
        // On a 3x3 grid a 3-letter word fits 3 right + 3 down + 3 left +
        // 3 up + 1 diagonal = 13 ways
        let grid = LetterGrid::new(3);
        assert_eq!(exhaustive_placements(&word("cat"), &grid).len(), 13);

        // A word longer than the grid has none
        assert!(exhaustive_placements(&word("mobile"), &grid).is_empty());
    }

    #[test]
    fn test_saturated_board_fails_instead_of_hanging() {
        // A single free cell cannot host a 2-letter word
        let mut grid: LetterGrid = "
            AB
            C.
        "
        .parse()
        .unwrap();
        assert!(place_word(&word("ef"), &mut grid, &mut rng(), 100).is_none());

        // Two free collinear cells can
        let mut grid: LetterGrid = "
            A.
            C.
        "
        .parse()
        .unwrap();
        assert!(place_word(&word("ef"), &mut grid, &mut rng(), 100).is_some());
    }
}
