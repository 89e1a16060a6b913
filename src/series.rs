use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SimulationConfig;
use crate::constants::{PLAY_IN_WINS, SERIES_WINS};
use crate::game::{next_momentum, resolve_game, GameContext, GameOutcome, Side};
use crate::team::Team;

/// Length of a contest between two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesFormat {
    /// Single elimination game
    PlayIn,
    /// First to four wins
    BestOfSeven,
}

impl SeriesFormat {
    pub fn wins_needed(self) -> u32 {
        match self {
            SeriesFormat::PlayIn => PLAY_IN_WINS,
            SeriesFormat::BestOfSeven => SERIES_WINS,
        }
    }

    /// Longest the series can run.
    pub fn max_games(self) -> u32 {
        2 * self.wins_needed() - 1
    }
}

/// Outcome of a series, games in the order they were played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResult {
    pub team_a: Team,
    pub team_b: Team,
    pub a_wins: u32,
    pub b_wins: u32,
    pub winner: Side,
    pub games: Vec<GameOutcome>,
}

impl SeriesResult {
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn winning_team(&self) -> &Team {
        self.team(self.winner)
    }

    pub fn losing_team(&self) -> &Team {
        self.team(self.winner.opponent())
    }

    pub fn total_games(&self) -> u32 {
        self.a_wins + self.b_wins
    }
}

/// Play games until one side reaches the format's win threshold.
///
/// The favorite is fixed from the baseline ratings before game 1; equal
/// baselines make side A the underdog. Every game produces exactly one winner,
/// so the loop ends within [`SeriesFormat::max_games`] games.
pub fn simulate_series<R: Rng>(
    team_a: &Team,
    team_b: &Team,
    format: SeriesFormat,
    config: &SimulationConfig,
    rng: &mut R,
) -> SeriesResult {
    let wins_needed = format.wins_needed();
    let baseline_a = team_a.baseline_rating();
    let baseline_b = team_b.baseline_rating();
    let underdog = if baseline_a > baseline_b { Side::B } else { Side::A };

    let mut a_wins = 0;
    let mut b_wins = 0;
    let mut momentum = 0.0;
    let mut games = Vec::with_capacity(format.max_games() as usize);

    while a_wins < wins_needed && b_wins < wins_needed {
        momentum = next_momentum(momentum, underdog, a_wins, b_wins);
        let ctx = GameContext {
            game_number: a_wins + b_wins + 1,
            a_wins,
            b_wins,
            wins_needed,
            underdog,
            momentum,
        };

        let outcome = resolve_game(baseline_a, baseline_b, &ctx, config, rng);
        match outcome.winner {
            Side::A => a_wins += 1,
            Side::B => b_wins += 1,
        }
        games.push(outcome);
    }

    let winner = if a_wins > b_wins { Side::A } else { Side::B };
    let result = SeriesResult {
        team_a: team_a.clone(),
        team_b: team_b.clone(),
        a_wins,
        b_wins,
        winner,
        games,
    };

    debug!(
        winner = %result.winning_team().name,
        loser = %result.losing_team().name,
        a_wins,
        b_wins,
        "series complete"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::compute_weighted_ratings;
    use crate::roster::fetch_teams;
    use crate::team::Conference;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rated(name: &str, weighted_rating: f64) -> Team {
        let mut team = Team::new(name, 115.0, 112.0, 36.0, Conference::Eastern, 0.6);
        team.weighted_rating = weighted_rating;
        team
    }

    #[test]
    fn test_series_reaches_threshold() {
        let a = rated("A", 3.0);
        let b = rated("B", 9.0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let config = SimulationConfig::default();

        for _ in 0..200 {
            let series = simulate_series(&a, &b, SeriesFormat::BestOfSeven, &config, &mut rng);
            let (winner_wins, loser_wins) = match series.winner {
                Side::A => (series.a_wins, series.b_wins),
                Side::B => (series.b_wins, series.a_wins),
            };
            assert_eq!(winner_wins, 4);
            assert!(loser_wins < 4);
            assert!((4..=7).contains(&series.total_games()));
            assert_eq!(series.games.len() as u32, series.total_games());
        }
    }

    #[test]
    fn test_games_are_chronological() {
        let a = rated("A", 5.0);
        let b = rated("B", 5.5);
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let series = simulate_series(&a, &b, SeriesFormat::BestOfSeven, &config, &mut rng);

        for (index, game) in series.games.iter().enumerate() {
            assert_eq!(game.game_number, index as u32 + 1);
        }
        let a_count = series.games.iter().filter(|g| g.winner == Side::A).count() as u32;
        assert_eq!(a_count, series.a_wins);
    }

    #[test]
    fn test_play_in_is_single_game() {
        let a = rated("A", 8.0);
        let b = rated("B", 8.0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let config = SimulationConfig::default();

        for _ in 0..50 {
            let series = simulate_series(&a, &b, SeriesFormat::PlayIn, &config, &mut rng);
            assert_eq!(series.total_games(), 1);
            assert_eq!(series.games[0].home, Side::A);
            assert_eq!(series.winning_team().name, series.team(series.games[0].winner).name);
        }
    }

    #[test]
    fn test_seeded_series_is_reproducible() {
        let a = rated("A", 4.0);
        let b = rated("B", 6.0);
        let config = SimulationConfig::default();

        let mut rng1 = ChaCha8Rng::seed_from_u64(2025);
        let mut rng2 = ChaCha8Rng::seed_from_u64(2025);
        let first: Vec<SeriesResult> = (0..5)
            .map(|_| simulate_series(&a, &b, SeriesFormat::BestOfSeven, &config, &mut rng1))
            .collect();
        let second: Vec<SeriesResult> = (0..5)
            .map(|_| simulate_series(&a, &b, SeriesFormat::BestOfSeven, &config, &mut rng2))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_dominant_team_sweeps_without_luck() {
        // 1/1 vs 1/20: the gap dwarfs home court, momentum and desperation
        let a = rated("A", 1.0);
        let b = rated("B", 20.0);
        let config = SimulationConfig {
            luck_factor: 0.0,
            ..SimulationConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let series = simulate_series(&a, &b, SeriesFormat::BestOfSeven, &config, &mut rng);
        assert_eq!(series.winner, Side::A);
        assert_eq!((series.a_wins, series.b_wins), (4, 0));
    }

    #[test]
    fn test_zero_ratings_still_terminate() {
        let a = rated("A", 0.0);
        let b = rated("B", 0.0);
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let series = simulate_series(&a, &b, SeriesFormat::BestOfSeven, &config, &mut rng);
        assert!(series.total_games() <= 7);
        assert!(series
            .games
            .iter()
            .all(|g| g.side_a_rating.is_finite() && g.side_b_rating.is_finite()));
    }

    #[test]
    fn test_tiny_weights_do_not_overflow() {
        let config = SimulationConfig::from_json(
            r#"{"offense": 1e-300, "defense": 0, "threePoint": 0, "winPercentage": 0}"#,
        )
        .unwrap();
        let mut teams = fetch_teams();
        compute_weighted_ratings(&mut teams, &config.weights);

        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let (a, b) = (&teams[1], &teams[9]);
        let series = simulate_series(a, b, SeriesFormat::BestOfSeven, &config, &mut rng);
        assert!((4..=7).contains(&series.total_games()));
        for game in &series.games {
            assert!(game.side_a_rating.is_finite() && game.side_b_rating.is_finite());
            assert!(game.margin >= 1);
        }
    }

    #[test]
    fn test_equal_baselines_make_side_a_underdog() {
        // No luck and no home court: game 1 is a tie that goes to A at home, then
        // momentum only ever accrues to A.
        let a = rated("A", 5.0);
        let b = rated("B", 5.0);
        let config = SimulationConfig {
            home_court_advantage: 0.0,
            luck_factor: 0.0,
            ..SimulationConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let series = simulate_series(&a, &b, SeriesFormat::BestOfSeven, &config, &mut rng);

        assert_eq!((series.a_wins, series.b_wins), (4, 0));
        assert!((series.games[1].side_a_rating - 0.21).abs() < 1e-12);
        assert!((series.games[1].side_b_rating - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_underdog_momentum_decides_game() {
        // A is the underdog (baseline 0.1 vs ~0.104) and loses game 1; the
        // 0.005 winless momentum carries it past B in game 2.
        let a = rated("A", 10.0);
        let b = rated("B", 1.0 / 0.104);
        let config = SimulationConfig {
            home_court_advantage: 0.0,
            luck_factor: 0.0,
            ..SimulationConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let series = simulate_series(&a, &b, SeriesFormat::BestOfSeven, &config, &mut rng);

        assert_eq!(series.games[0].winner, Side::B);
        assert_eq!(series.games[1].winner, Side::A);
        assert!((series.games[1].side_a_rating - 0.105).abs() < 1e-12);
        assert_eq!(series.winner, Side::A);
        assert_eq!((series.a_wins, series.b_wins), (4, 1));
    }

    proptest! {
        #[test]
        fn prop_series_terminates_within_bound(
            rating_a in 0.0f64..20.0,
            rating_b in 0.0f64..20.0,
            luck in 0.0f64..0.5,
            seed in any::<u64>(),
            play_in in any::<bool>(),
        ) {
            let a = rated("A", rating_a);
            let b = rated("B", rating_b);
            let config = SimulationConfig { luck_factor: luck, ..SimulationConfig::default() };
            let format = if play_in { SeriesFormat::PlayIn } else { SeriesFormat::BestOfSeven };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let series = simulate_series(&a, &b, format, &config, &mut rng);
            let needed = format.wins_needed();

            prop_assert!(series.total_games() <= format.max_games());
            prop_assert_eq!(series.a_wins.max(series.b_wins), needed);
            prop_assert!(series.a_wins.min(series.b_wins) < needed);
            prop_assert!(series.games.iter().all(|g| g.margin >= 1));
        }
    }
}
