use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::globals::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Tunable amounts and board positions for a game.
/// Missing fields fall back to the standard rules.
pub struct GameConfig {
    /// Money each player starts with.
    pub start_money: u32,
    /// Salary for passing or landing on 'Go'.
    pub go_salary: u32,
    /// Paid when flying over 'Bonus'.
    pub bonus_pass: u32,
    /// Paid when landing on 'Bonus'.
    pub bonus_land: u32,
    /// Turns a player sits out when jailed. Between 1 and 3.
    pub jail_sentence: u8,
    /// Holland Tunnel end on the outer track.
    pub tunnel_outer: Location,
    /// Holland Tunnel end on the inner track.
    pub tunnel_inner: Location,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_money: START_MONEY,
            go_salary: GO_SALARY,
            bonus_pass: BONUS_PASS_AMOUNT,
            bonus_land: BONUS_LAND_AMOUNT,
            jail_sentence: MAX_JAIL_TIME,
            tunnel_outer: TUNNEL_OUTER,
            tunnel_inner: TUNNEL_INNER,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or describes an unusable config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config can be played with.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jail_sentence == 0 || self.jail_sentence > MAX_JAIL_TIME {
            return Err(ConfigError::JailSentence(self.jail_sentence));
        }

        if self.tunnel_outer.layer == self.tunnel_inner.layer {
            return Err(ConfigError::TunnelLayers(self.tunnel_outer.layer));
        }

        for &end in &[self.tunnel_outer, self.tunnel_inner] {
            let on_track = TRACK_LENGTHS
                .get(usize::from(end.layer))
                .map_or(false, |&len| end.position < len);

            if !on_track || end.layer == CLASSIC_LAYER || end == BONUS_LOCATION {
                return Err(ConfigError::TunnelPlacement(end));
            }
        }

        Ok(())
    }
}
