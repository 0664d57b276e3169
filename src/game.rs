use serde::Serialize;

use crate::{
    category::{Category, Section},
    dice::{Dice, DiceSource, DICE_COUNT},
    scorecard::Scorecard,
    scoring::{candidate_scores, score},
};

/// Rolls per turn; the first happens when the turn starts.
pub const MAX_ROLLS: u8 = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Rolling,
    AwaitingCommit,
    GameOver,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub category: Category,
    pub label: &'static str,
    pub section: Section,
    pub committed: Option<u32>,
    pub candidate: u32,
    pub available: bool,
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub dice: Dice,
    pub held: [bool; DICE_COUNT],
    pub rolls_left: u8,
    pub phase: Phase,
    pub game_over: bool,
    pub categories: Vec<CategoryRow>,
    pub upper_subtotal: u32,
    pub upper_bonus: u32,
    pub upper_remaining: u32,
    pub base_total: u32,
    pub total: u32,
}

pub struct YachtGame<D: DiceSource> {
    dice: Dice,
    held: [bool; DICE_COUNT],
    rolls_left: u8,
    scorecard: Scorecard,
    source: D,
}

impl<D: DiceSource> YachtGame<D> {
    pub fn new(mut source: D) -> Self {
        let dice = source.roll_all();
        YachtGame {
            dice,
            held: [false; DICE_COUNT],
            rolls_left: MAX_ROLLS - 1,
            scorecard: Scorecard::new(),
            source,
        }
    }

    pub fn dice(&self) -> Dice {
        self.dice
    }

    pub fn held(&self) -> [bool; DICE_COUNT] {
        self.held
    }

    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    pub fn is_game_over(&self) -> bool {
        self.scorecard.is_full()
    }

    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::GameOver
        } else if self.rolls_left > 0 {
            Phase::Rolling
        } else {
            Phase::AwaitingCommit
        }
    }

    /// Re-rolls every die that is not held.
    pub fn roll(&mut self) -> bool {
        if self.phase() != Phase::Rolling {
            return false;
        }
        for (die, &held) in self.dice.iter_mut().zip(&self.held) {
            if !held {
                *die = self.source.roll_die();
            }
        }
        self.rolls_left -= 1;
        true
    }

    pub fn toggle_hold(&mut self, index: usize) -> bool {
        if self.is_game_over() {
            return false;
        }
        match self.held.get_mut(index) {
            Some(held) => {
                *held = !*held;
                true
            }
            None => false,
        }
    }

    /// Scores the current dice into `category` and starts the next turn.
    pub fn commit(&mut self, category: Category) -> bool {
        if self.is_game_over() || self.scorecard.is_committed(category) {
            return false;
        }
        let points = score(category, &self.dice);
        self.scorecard.commit(category, points);
        self.start_turn();
        true
    }

    pub fn restart(&mut self) {
        self.scorecard.clear();
        self.start_turn();
    }

    fn start_turn(&mut self) {
        self.held = [false; DICE_COUNT];
        self.rolls_left = MAX_ROLLS - 1;
        self.dice = self.source.roll_all();
    }

    pub fn snapshot(&self) -> GameView {
        let game_over = self.is_game_over();
        let candidates = candidate_scores(&self.dice);
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let committed = self.scorecard.get(category);
                CategoryRow {
                    category,
                    label: category.label(),
                    section: category.section(),
                    committed,
                    candidate: candidates[category.index()],
                    available: committed.is_none() && !game_over,
                }
            })
            .collect();

        GameView {
            dice: self.dice,
            held: self.held,
            rolls_left: self.rolls_left,
            phase: self.phase(),
            game_over,
            categories,
            upper_subtotal: self.scorecard.upper_subtotal(),
            upper_bonus: self.scorecard.upper_bonus(),
            upper_remaining: self.scorecard.remaining_to_bonus(),
            base_total: self.scorecard.base_total(),
            total: self.scorecard.grand_total(),
        }
    }
}
