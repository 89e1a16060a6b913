use std::collections::HashMap;

use crate::config::RatingWeights;
use crate::constants::WORST_RANK;
use crate::team::Team;

/// Season stat a team can be ranked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stat {
    OffensiveRating,
    DefensiveRating,
    ThreePointVolume,
    WinPercentage,
}

impl Stat {
    pub fn value(self, team: &Team) -> f64 {
        match self {
            Stat::OffensiveRating => team.offensive_rating,
            Stat::DefensiveRating => team.defensive_rating,
            Stat::ThreePointVolume => team.three_point_volume,
            Stat::WinPercentage => team.win_percentage,
        }
    }

    /// Whether a smaller value ranks better.
    pub fn lower_is_better(self) -> bool {
        matches!(self, Stat::DefensiveRating)
    }
}

/// Rank every team on one stat, 1 being best.
///
/// The sort is stable, so ties keep roster order.
pub fn rank_teams(teams: &[Team], stat: Stat) -> HashMap<String, usize> {
    let mut sorted: Vec<&Team> = teams.iter().collect();
    sorted.sort_by(|a, b| {
        let ord = stat.value(a).total_cmp(&stat.value(b));
        if stat.lower_is_better() {
            ord
        } else {
            ord.reverse()
        }
    });

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, team)| (team.name.clone(), index + 1))
        .collect()
}

/// Fill in `weighted_rating` for every team from its four stat ranks.
///
/// Lower results are stronger. No other field is touched.
pub fn compute_weighted_ratings(teams: &mut [Team], weights: &RatingWeights) {
    let ortg_ranks = rank_teams(teams, Stat::OffensiveRating);
    let drtg_ranks = rank_teams(teams, Stat::DefensiveRating);
    let tpa_ranks = rank_teams(teams, Stat::ThreePointVolume);
    let win_pct_ranks = rank_teams(teams, Stat::WinPercentage);

    let rank_of = |ranks: &HashMap<String, usize>, name: &str| -> f64 {
        ranks.get(name).copied().unwrap_or(WORST_RANK) as f64
    };

    for team in teams.iter_mut() {
        team.weighted_rating = weights.defense * rank_of(&drtg_ranks, &team.name)
            + weights.shooting * rank_of(&tpa_ranks, &team.name)
            + weights.offense * rank_of(&ortg_ranks, &team.name)
            + weights.win_percentage * rank_of(&win_pct_ranks, &team.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::fetch_teams;
    use crate::team::Conference;
    use proptest::prelude::*;

    fn make_teams() -> Vec<Team> {
        vec![
            Team::new("A", 120.0, 108.0, 40.0, Conference::Eastern, 0.80),
            Team::new("B", 115.0, 112.0, 35.0, Conference::Eastern, 0.60),
            Team::new("C", 110.0, 104.0, 38.0, Conference::Western, 0.70),
        ]
    }

    #[test]
    fn test_offense_ranks_descending() {
        let ranks = rank_teams(&make_teams(), Stat::OffensiveRating);
        assert_eq!(ranks["A"], 1);
        assert_eq!(ranks["B"], 2);
        assert_eq!(ranks["C"], 3);
    }

    #[test]
    fn test_defense_ranks_ascending() {
        let ranks = rank_teams(&make_teams(), Stat::DefensiveRating);
        assert_eq!(ranks["C"], 1);
        assert_eq!(ranks["A"], 2);
        assert_eq!(ranks["B"], 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let teams = vec![
            Team::new("First", 110.0, 110.0, 36.0, Conference::Eastern, 0.5),
            Team::new("Second", 110.0, 110.0, 36.0, Conference::Eastern, 0.5),
        ];
        for stat in [Stat::OffensiveRating, Stat::DefensiveRating] {
            let ranks = rank_teams(&teams, stat);
            assert_eq!(ranks["First"], 1);
            assert_eq!(ranks["Second"], 2);
        }
    }

    #[test]
    fn test_weighted_rating_is_weighted_rank_sum() {
        let mut teams = make_teams();
        compute_weighted_ratings(&mut teams, &RatingWeights::default());

        // A: drtg 2, tpa 1, ortg 1, win 1
        let expected_a = 0.40 * 2.0 + 0.25 * 1.0 + 0.20 * 1.0 + 0.15 * 1.0;
        assert!((teams[0].weighted_rating - expected_a).abs() < 1e-12);

        // B: drtg 3, tpa 3, ortg 2, win 3
        let expected_b = 0.40 * 3.0 + 0.25 * 3.0 + 0.20 * 2.0 + 0.15 * 3.0;
        assert!((teams[1].weighted_rating - expected_b).abs() < 1e-12);
    }

    #[test]
    fn test_only_weighted_rating_changes() {
        let fresh = fetch_teams();
        let mut rated = fresh.clone();
        compute_weighted_ratings(&mut rated, &RatingWeights::default());
        for (before, after) in fresh.iter().zip(&rated) {
            let mut restored = after.clone();
            restored.weighted_rating = before.weighted_rating;
            assert_eq!(&restored, before);
        }
    }

    #[test]
    fn test_zero_weights_collapse_to_zero() {
        let mut teams = fetch_teams();
        let zero = RatingWeights {
            defense: 0.0,
            shooting: 0.0,
            offense: 0.0,
            win_percentage: 0.0,
        };
        compute_weighted_ratings(&mut teams, &zero);
        assert!(teams.iter().all(|t| t.weighted_rating == 0.0));
        assert!(teams.iter().all(|t| t.baseline_rating() == 1.0));
    }

    #[test]
    fn test_rating_is_deterministic() {
        let mut first = fetch_teams();
        let mut second = fetch_teams();
        compute_weighted_ratings(&mut first, &RatingWeights::default());
        compute_weighted_ratings(&mut second, &RatingWeights::default());
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_ranks_are_bijection(
            stats in prop::collection::vec(
                (100.0f64..125.0, 100.0f64..125.0, 30.0f64..45.0, 0.0f64..1.0),
                1..30,
            )
        ) {
            let teams: Vec<Team> = stats
                .iter()
                .enumerate()
                .map(|(i, &(o, d, t, w))| {
                    Team::new(format!("T{}", i), o, d, t, Conference::Eastern, w)
                })
                .collect();

            for stat in [
                Stat::OffensiveRating,
                Stat::DefensiveRating,
                Stat::ThreePointVolume,
                Stat::WinPercentage,
            ] {
                let ranks = rank_teams(&teams, stat);
                prop_assert_eq!(ranks.len(), teams.len());
                let mut values: Vec<usize> = ranks.values().copied().collect();
                values.sort_unstable();
                let expected: Vec<usize> = (1..=teams.len()).collect();
                prop_assert_eq!(values, expected);
            }
        }
    }
}
