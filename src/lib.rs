//! Playoffs Core - NBA playoff bracket simulation.
//!
//! Rates a fixed 20-team roster from season stats, plays the play-in, four
//! playoff rounds and the Finals series by series, and aggregates many runs
//! into championship odds. Python bindings are available with the `python`
//! feature.

pub mod bracket;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod monte_carlo;
pub mod rating;
pub mod roster;
pub mod series;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use bracket::{
    simulate_bracket, simulate_playoffs, ConferencePlayoffs, PlayInGame, PlayInResult,
    PlayoffResults,
};
pub use config::{RatingWeights, SimulationConfig, Weightings};
pub use error::{Error, Result};
pub use game::{resolve_game, GameContext, GameOutcome, Side};
pub use monte_carlo::{
    run_multiple_simulations, ChampionshipOdds, SeriesLengthDistribution, SimulationSummary,
};
pub use rating::{compute_weighted_ratings, rank_teams, Stat};
pub use roster::{fetch_teams, DEFAULT_ROSTER};
pub use series::{simulate_series, SeriesFormat, SeriesResult};
pub use team::{Conference, Team};
