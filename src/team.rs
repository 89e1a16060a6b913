use serde::{Deserialize, Serialize};
use std::fmt;

/// Conference a team plays in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::Eastern, Conference::Western];
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conference::Eastern => f.write_str("Eastern"),
            Conference::Western => f.write_str("Western"),
        }
    }
}

/// Team with season statistics and a derived composite rating.
///
/// `weighted_rating` is rank-based, so lower means stronger. It is zero until
/// [`crate::rating::compute_weighted_ratings`] has run over the roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,

    /// Points scored per 100 possessions
    pub offensive_rating: f64,

    /// Points allowed per 100 possessions (lower is better)
    pub defensive_rating: f64,

    /// Three-point attempts per game
    pub three_point_volume: f64,

    pub conference: Conference,

    /// Regular-season win percentage (0.0-1.0)
    pub win_percentage: f64,

    pub weighted_rating: f64,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        offensive_rating: f64,
        defensive_rating: f64,
        three_point_volume: f64,
        conference: Conference,
        win_percentage: f64,
    ) -> Self {
        Team {
            name: name.into(),
            offensive_rating,
            defensive_rating,
            three_point_volume,
            conference,
            win_percentage,
            weighted_rating: 0.0,
        }
    }

    /// Reciprocal of the weighted rating, used as the pre-game strength.
    ///
    /// A zero or subnormal weighted rating is read as 1 so the result stays
    /// finite.
    pub fn baseline_rating(&self) -> f64 {
        let rating = if !self.weighted_rating.is_normal() {
            1.0
        } else {
            self.weighted_rating
        };
        1.0 / rating
    }
}
