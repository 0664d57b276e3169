use rand::{rngs::SmallRng, Rng, SeedableRng};

pub const DICE_COUNT: usize = 5;
pub const FACES: u8 = 6;

pub type Dice = [u8; DICE_COUNT];

/// Where die faces come from. Every call yields one value in `1..=6`.
pub trait DiceSource {
    fn roll_die(&mut self) -> u8;

    fn roll_all(&mut self) -> Dice {
        let mut dice = [0; DICE_COUNT];
        for die in &mut dice {
            *die = self.roll_die();
        }
        dice
    }
}

pub struct SeededDice {
    rng: SmallRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        SeededDice {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        SeededDice {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl DiceSource for SeededDice {
    fn roll_die(&mut self) -> u8 {
        self.rng.gen_range(1..=FACES)
    }
}

/// Replays a fixed list of faces, wrapping around at the end.
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        ScriptedDice {
            faces: faces.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(1, FACES)
    }
}

/// Occurrences of each face, indexed by face value (slot 0 unused).
/// Values outside `1..=6` are not counted.
pub fn face_counts(dice: &Dice) -> [u8; FACES as usize + 1] {
    let mut counts = [0; FACES as usize + 1];
    for &die in dice {
        if let Some(count) = counts.get_mut(die as usize).filter(|_| die >= 1) {
            *count += 1;
        }
    }
    counts
}

pub fn parse_dice(values: &[u8]) -> Result<Dice, String> {
    let dice: Dice = values
        .try_into()
        .map_err(|_| format!("expected {DICE_COUNT} dice, got {}", values.len()))?;
    if let Some(bad) = dice.iter().find(|&&d| !(1..=FACES).contains(&d)) {
        return Err(format!("die value {bad} is outside 1..={FACES}"));
    }
    Ok(dice)
}
