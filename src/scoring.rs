//! Category scoring for a five-die roll.
//!
//! Scores are raw category values; the upper-section bonus is derived from the
//! scorecard and never included here.

use crate::{
    category::{Category, CATEGORY_COUNT},
    dice::{face_counts, Dice},
};

pub const YACHT_SCORE: u32 = 50;
pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;

const SMALL_STRAIGHTS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];
const LARGE_STRAIGHTS: [[u8; 5]; 2] = [[1, 2, 3, 4, 5], [2, 3, 4, 5, 6]];

/// Dice are expected in `1..=6`; other values add to sums but match no face.
pub fn score(category: Category, dice: &Dice) -> u32 {
    let counts = face_counts(dice);
    let total: u32 = dice.iter().map(|&d| d as u32).sum();

    if let Some(face) = category.face() {
        return face as u32 * counts[face as usize] as u32;
    }

    match category {
        Category::Chance => total,
        Category::Yacht => {
            if has_count(&counts, |n| n == 5) {
                YACHT_SCORE
            } else {
                0
            }
        }
        Category::ThreeKind => {
            if has_count(&counts, |n| n >= 3) {
                total
            } else {
                0
            }
        }
        Category::FourKind => {
            if has_count(&counts, |n| n >= 4) {
                total
            } else {
                0
            }
        }
        Category::FullHouse => {
            if has_count(&counts, |n| n == 3) && has_count(&counts, |n| n == 2) {
                FULL_HOUSE_SCORE
            } else {
                0
            }
        }
        Category::SmallStraight => {
            let straight = SMALL_STRAIGHTS
                .iter()
                .any(|run| run.iter().all(|&face| counts[face as usize] > 0));
            if straight {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            let distinct = counts[1..].iter().filter(|&&n| n > 0).count();
            let straight = distinct == 5
                && LARGE_STRAIGHTS
                    .iter()
                    .any(|run| run.iter().all(|&face| counts[face as usize] == 1));
            if straight {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        // Upper categories returned above.
        _ => 0,
    }
}

/// Scores by category name; names outside the category set score 0.
pub fn score_by_name(name: &str, dice: &Dice) -> u32 {
    Category::from_name(name)
        .map(|category| score(category, dice))
        .unwrap_or(0)
}

/// What every category would score with `dice`, in scorecard order.
pub fn candidate_scores(dice: &Dice) -> [u32; CATEGORY_COUNT] {
    let mut scores = [0; CATEGORY_COUNT];
    for category in Category::ALL {
        scores[category.index()] = score(category, dice);
    }
    scores
}

fn has_count(counts: &[u8], pred: impl Fn(u8) -> bool) -> bool {
    counts[1..].iter().any(|&n| pred(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rolls() -> impl Iterator<Item = Dice> {
        (0..6u32.pow(5)).map(|mut n| {
            let mut dice = [0u8; 5];
            for die in &mut dice {
                *die = (n % 6) as u8 + 1;
                n /= 6;
            }
            dice
        })
    }

    #[test]
    fn upper_scores_face_times_count_exhaustive() {
        for dice in all_rolls() {
            for category in Category::UPPER {
                let face = category.face().unwrap();
                let count = dice.iter().filter(|&&d| d == face).count() as u32;
                assert_eq!(score(category, &dice), face as u32 * count, "dice {:?}", dice);
            }
        }
    }

    #[test]
    fn scores_never_exceed_category_maximum() {
        for dice in all_rolls() {
            let scores = candidate_scores(&dice);
            assert!(scores[Category::Chance.index()] <= 30);
            assert!(scores[Category::Sixes.index()] <= 30);
            assert!(scores[Category::Yacht.index()] == 0 || scores[Category::Yacht.index()] == 50);
        }
    }

    #[test]
    fn yacht() {
        assert_eq!(score(Category::Yacht, &[3, 3, 3, 3, 3]), 50);
        assert_eq!(score(Category::Yacht, &[3, 3, 3, 3, 4]), 0);
    }

    #[test]
    fn full_house() {
        assert_eq!(score(Category::FullHouse, &[2, 2, 3, 3, 3]), 25);
        assert_eq!(score(Category::FullHouse, &[3, 2, 3, 2, 3]), 25);
        assert_eq!(score(Category::FullHouse, &[2, 2, 2, 2, 3]), 0);
        assert_eq!(score(Category::FullHouse, &[4, 4, 4, 4, 4]), 0);
    }

    #[test]
    fn straights() {
        assert_eq!(score(Category::SmallStraight, &[1, 2, 3, 4, 4]), 30);
        assert_eq!(score(Category::SmallStraight, &[6, 3, 5, 1, 4]), 30);
        assert_eq!(score(Category::SmallStraight, &[1, 2, 3, 5, 6]), 0);
        assert_eq!(score(Category::LargeStraight, &[1, 2, 3, 4, 5]), 40);
        assert_eq!(score(Category::LargeStraight, &[6, 5, 4, 3, 2]), 40);
        assert_eq!(score(Category::LargeStraight, &[1, 2, 3, 4, 4]), 0);
        assert_eq!(score(Category::LargeStraight, &[1, 2, 3, 4, 6]), 0);
        // A large straight also counts as a small one.
        assert_eq!(score(Category::SmallStraight, &[2, 3, 4, 5, 6]), 30);
    }

    #[test]
    fn of_a_kind_scores_full_sum() {
        assert_eq!(score(Category::ThreeKind, &[4, 4, 4, 1, 2]), 15);
        assert_eq!(score(Category::ThreeKind, &[4, 4, 1, 1, 2]), 0);
        assert_eq!(score(Category::ThreeKind, &[5, 5, 5, 5, 5]), 25);
        assert_eq!(score(Category::FourKind, &[6, 6, 6, 6, 1]), 25);
        assert_eq!(score(Category::FourKind, &[6, 6, 6, 1, 1]), 0);
    }

    #[test]
    fn out_of_range_die_does_not_panic() {
        assert_eq!(score(Category::Chance, &[7, 1, 1, 1, 1]), 11);
        assert_eq!(score(Category::Ones, &[7, 1, 1, 1, 1]), 4);
        assert_eq!(score(Category::Yacht, &[7, 7, 7, 7, 7]), 0);
    }

    #[test]
    fn chance_is_sum() {
        assert_eq!(score(Category::Chance, &[1, 3, 5, 6, 2]), 17);
    }

    #[test]
    fn unknown_name_scores_zero() {
        assert_eq!(score_by_name("bonus", &[5, 5, 5, 5, 5]), 0);
        assert_eq!(score_by_name("yacht", &[5, 5, 5, 5, 5]), 50);
    }

    #[test]
    fn candidates_follow_category_order() {
        let dice = [2, 2, 3, 3, 3];
        let scores = candidate_scores(&dice);
        assert_eq!(scores, [0, 4, 9, 0, 0, 0, 13, 0, 13, 0, 25, 0, 0]);
    }
}
