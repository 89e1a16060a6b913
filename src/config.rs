use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFENSE_WEIGHT, HOME_COURT_ADVANTAGE, MAX_LUCK_FACTOR, OFFENSE_WEIGHT, SHOOTING_WEIGHT,
    WIN_PCT_WEIGHT,
};
use crate::error::{Error, Result};

/// Weights applied to each stat rank when building a team's weighted rating.
///
/// Weights are fractional and need not sum to 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingWeights {
    pub defense: f64,
    pub shooting: f64,
    pub offense: f64,
    pub win_percentage: f64,
}

impl Default for RatingWeights {
    fn default() -> Self {
        RatingWeights {
            defense: DEFENSE_WEIGHT,
            shooting: SHOOTING_WEIGHT,
            offense: OFFENSE_WEIGHT,
            win_percentage: WIN_PCT_WEIGHT,
        }
    }
}

/// Validated, immutable settings for one simulation call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    pub weights: RatingWeights,
    pub home_court_advantage: f64,
    pub luck_factor: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            weights: RatingWeights::default(),
            home_court_advantage: HOME_COURT_ADVANTAGE,
            luck_factor: MAX_LUCK_FACTOR,
        }
    }
}

/// Percent-style weighting input as it arrives from a caller.
///
/// Every value is on a 0-100 scale, e.g. `{"offense": 20, "defense": 40,
/// "threePoint": 25}`. Optional fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weightings {
    pub offense: f64,
    pub defense: f64,
    pub three_point: f64,
    #[serde(default)]
    pub win_percentage: Option<f64>,
    #[serde(default)]
    pub home_court_advantage: Option<f64>,
    #[serde(default)]
    pub luck_factor: Option<f64>,
}

impl Weightings {
    /// Parse a JSON weighting payload. Shape errors surface as [`Error::Json`].
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Check ranges and convert percents to fractions.
    pub fn validate(&self) -> Result<SimulationConfig> {
        let defaults = SimulationConfig::default();

        let weights = RatingWeights {
            defense: percent("defense", self.defense)?,
            shooting: percent("threePoint", self.three_point)?,
            offense: percent("offense", self.offense)?,
            win_percentage: match self.win_percentage {
                Some(value) => percent("winPercentage", value)?,
                None => defaults.weights.win_percentage,
            },
        };

        let home_court_advantage = match self.home_court_advantage {
            Some(value) => percent("homeCourtAdvantage", value)?,
            None => defaults.home_court_advantage,
        };
        let luck_factor = match self.luck_factor {
            Some(value) => percent("luckFactor", value)?,
            None => defaults.luck_factor,
        };

        Ok(SimulationConfig {
            weights,
            home_court_advantage,
            luck_factor,
        })
    }
}

impl TryFrom<Weightings> for SimulationConfig {
    type Error = Error;

    fn try_from(weightings: Weightings) -> Result<Self> {
        weightings.validate()
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON weighting payload in one step.
    pub fn from_json(payload: &str) -> Result<Self> {
        Weightings::from_json(payload)?.validate()
    }
}

fn percent(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidWeight { field, value });
    }
    Ok(value / 100.0)
}
