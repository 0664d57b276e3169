use std::collections::BTreeMap;

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod category;
mod config;
mod console;
mod dice;
mod game;
mod scorecard;
mod scoring;

pub use category::{Category, Section, CATEGORY_COUNT};
pub use config::SessionConfig;
pub use dice::{Dice, DiceSource, ScriptedDice, SeededDice, DICE_COUNT};
pub use game::{CategoryRow, GameView, Phase, YachtGame, MAX_ROLLS};
pub use scorecard::{Scorecard, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
pub use scoring::score;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

fn parse_dice(values: &[u8]) -> Result<Dice, JsValue> {
    dice::parse_dice(values).map_err(|err| JsValue::from_str(&format!("Invalid dice: {err}")))
}

#[wasm_bindgen]
pub fn score_category(category: &str, dice: &[u8]) -> Result<u32, JsValue> {
    console_error_panic_hook::set_once();
    let dice = parse_dice(dice)?;
    Ok(scoring::score_by_name(category, &dice))
}

#[wasm_bindgen]
pub fn candidate_scores(dice: &[u8]) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let dice = parse_dice(dice)?;
    let scores = scoring::candidate_scores(&dice);
    let by_name: BTreeMap<&str, u32> = Category::ALL
        .iter()
        .map(|category| (category.as_name(), scores[category.index()]))
        .collect();
    to_js(&by_name)
}

/// One game as seen by the view. Actions return whether they were applied.
#[wasm_bindgen]
pub struct YachtSession {
    game: YachtGame<SeededDice>,
    verbose: bool,
    on_change: Option<Function>,
}

#[wasm_bindgen]
impl YachtSession {
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> Result<YachtSession, JsValue> {
        console_error_panic_hook::set_once();
        let config: SessionConfig = if params.is_undefined() || params.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(params.clone())
                .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?
        };
        Ok(YachtSession::from_config(config))
    }

    /// Registers a callback that receives the new `GameView` after every
    /// applied action. The session is still borrowed while it runs: render
    /// from the argument and do not call back into the session.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: Option<Function>) {
        self.on_change = callback;
    }

    pub fn roll(&mut self) -> bool {
        let accepted = self.game.roll();
        let reason = if self.game.is_game_over() {
            "game is over"
        } else {
            "no rolls left"
        };
        self.finish("roll", accepted, reason)
    }

    #[wasm_bindgen(js_name = toggleHold)]
    pub fn toggle_hold(&mut self, index: usize) -> bool {
        let accepted = self.game.toggle_hold(index);
        let reason = if self.game.is_game_over() {
            "game is over"
        } else {
            "no such die"
        };
        self.finish("toggle hold", accepted, reason)
    }

    pub fn commit(&mut self, category: &str) -> bool {
        let Some(parsed) = Category::from_name(category) else {
            return self.finish("commit", false, "unknown category");
        };
        let accepted = self.game.commit(parsed);
        let reason = if self.game.is_game_over() {
            "game is over"
        } else {
            "category already committed"
        };
        self.finish("commit", accepted, reason)
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.finish("restart", true, "");
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.snapshot())
    }
}

impl YachtSession {
    pub fn from_config(config: SessionConfig) -> Self {
        YachtSession {
            game: YachtGame::new(config.dice_source()),
            verbose: config.verbose,
            on_change: None,
        }
    }

    fn finish(&self, action: &str, accepted: bool, reason: &str) -> bool {
        if !accepted {
            if self.verbose {
                console::warn(&format!("{action} rejected: {reason}"));
            }
            return false;
        }
        if self.verbose {
            console::log(&format!(
                "{action}: dice {:?}, rolls left {}, total {}",
                self.game.dice(),
                self.game.rolls_left(),
                self.game.scorecard().grand_total()
            ));
        }
        if let Some(callback) = &self.on_change {
            match self.state() {
                Ok(view) => {
                    if let Err(err) = callback.call1(&JsValue::NULL, &view) {
                        console::warn(&format!("{action}: change callback failed: {err:?}"));
                    }
                }
                Err(err) => console::warn(&format!("{action}: {err:?}")),
            }
        }
        true
    }
}
