use serde::Deserialize;

use crate::dice::SeededDice;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Fixed seed for reproducible dice. Entropy is used when absent.
    pub seed: Option<u64>,
    /// Log every accepted and rejected action to the console.
    pub verbose: bool,
}

impl SessionConfig {
    pub fn dice_source(&self) -> SeededDice {
        match self.seed {
            Some(seed) => SeededDice::new(seed),
            None => SeededDice::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceSource;

    #[test]
    fn missing_fields_use_defaults() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.seed, None);
        assert!(!config.verbose);
    }

    #[test]
    fn reads_camel_case_fields() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"seed": 1234, "verbose": true}"#).unwrap();
        assert_eq!(config.seed, Some(1234));
        assert!(config.verbose);
    }

    #[test]
    fn seeded_config_gives_repeatable_dice() {
        let config = SessionConfig {
            seed: Some(5),
            verbose: false,
        };
        assert_eq!(config.dice_source().roll_all(), config.dice_source().roll_all());
    }
}
