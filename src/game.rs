use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::constants::{
    DESPERATION_BONUS, MARGIN_JITTER, MARGIN_SCALE, MOMENTUM_CAP, MOMENTUM_PER_GAME,
    MOMENTUM_PER_UNDERDOG_WIN, SIDE_A_HOME_GAMES, WINLESS_MOMENTUM_CAP,
};

/// One of the two contestants in a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Series state a single game is played under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameContext {
    /// 1-based position of this game in the series
    pub game_number: u32,
    pub a_wins: u32,
    pub b_wins: u32,
    /// Wins required to take the series (1 for play-in)
    pub wins_needed: u32,
    /// Side with the lower baseline rating, fixed for the series
    pub underdog: Side,
    /// Momentum bonus the underdog carries into this game
    pub momentum: f64,
}

/// A resolved game. Ratings are the final effective ratings the winner was
/// decided on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    pub game_number: u32,
    pub winner: Side,
    pub side_a_rating: f64,
    pub side_b_rating: f64,
    pub home: Side,
    /// Cosmetic point margin, at least 1
    pub margin: u32,
}

/// Home side for a game number under the 2-2-1-1-1 format.
///
/// Single-game play-in contests are game 1, so side A hosts them.
pub fn home_side(game_number: u32) -> Side {
    if SIDE_A_HOME_GAMES.contains(&game_number) {
        Side::A
    } else {
        Side::B
    }
}

/// Bonus for each side that faces elimination this game, as `(a, b)`.
pub fn desperation(a_wins: u32, b_wins: u32, wins_needed: u32) -> (f64, f64) {
    let on_brink = wins_needed.saturating_sub(1);
    let a = if b_wins == on_brink { DESPERATION_BONUS } else { 0.0 };
    let b = if a_wins == on_brink { DESPERATION_BONUS } else { 0.0 };
    (a, b)
}

/// Momentum the underdog carries into the next game.
///
/// Each underdog win adds to the accumulator up to [`MOMENTUM_CAP`]; until the
/// underdog wins a game it only creeps up with series length, capped lower.
pub fn next_momentum(current: f64, underdog: Side, a_wins: u32, b_wins: u32) -> f64 {
    let underdog_wins = match underdog {
        Side::A => a_wins,
        Side::B => b_wins,
    };
    if underdog_wins > 0 {
        MOMENTUM_CAP.min(current + MOMENTUM_PER_UNDERDOG_WIN * underdog_wins as f64)
    } else {
        let played = (a_wins + b_wins) as f64;
        WINLESS_MOMENTUM_CAP.min(current + MOMENTUM_PER_GAME * played)
    }
}

fn luck<R: Rng>(rng: &mut R, max: f64) -> f64 {
    (rng.gen::<f64>() * 2.0 - 1.0) * max
}

/// Decide one game between two sides with the given baseline ratings.
///
/// Draws, in order: side A luck, side B luck, margin jitter. An exact tie goes
/// to the home side.
pub fn resolve_game<R: Rng>(
    baseline_a: f64,
    baseline_b: f64,
    ctx: &GameContext,
    config: &SimulationConfig,
    rng: &mut R,
) -> GameOutcome {
    let home = home_side(ctx.game_number);
    let (desperation_a, desperation_b) = desperation(ctx.a_wins, ctx.b_wins, ctx.wins_needed);

    let mut rating_a = baseline_a + desperation_a;
    let mut rating_b = baseline_b + desperation_b;

    match home {
        Side::A => rating_a += config.home_court_advantage,
        Side::B => rating_b += config.home_court_advantage,
    }
    match ctx.underdog {
        Side::A => rating_a += ctx.momentum,
        Side::B => rating_b += ctx.momentum,
    }

    rating_a += luck(rng, config.luck_factor);
    rating_b += luck(rng, config.luck_factor);

    let winner = if rating_a > rating_b {
        Side::A
    } else if rating_b > rating_a {
        Side::B
    } else {
        home
    };

    let scaled = ((rating_a - rating_b).abs() * MARGIN_SCALE).floor();
    let jitter = rng.gen_range(0..MARGIN_JITTER) as f64 - (MARGIN_JITTER / 2) as f64;
    let margin = (scaled + jitter).clamp(1.0, u32::MAX as f64) as u32;

    GameOutcome {
        game_number: ctx.game_number,
        winner,
        side_a_rating: rating_a,
        side_b_rating: rating_b,
        home,
        margin,
    }
}
