use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use std::collections::{BTreeMap, HashMap};
use tracing::info;

use crate::bracket::{simulate_bracket, PlayoffResults};
use crate::config::SimulationConfig;
use crate::constants::{CONFIDENCE_LEVEL, SERIES_LENGTHS};
use crate::error::{Error, Result};
use crate::roster::fetch_teams;
use crate::team::Conference;

/// Empirical championship odds for one team.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionshipOdds {
    pub team: String,
    pub conference: Conference,
    pub championships: u64,
    /// Share of runs won, in percent
    pub probability: f64,
    /// Half-width of the normal-approximation confidence interval, in percent
    pub margin_of_error: f64,
}

/// How many best-of-seven series went 4, 5, 6 and 7 games.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SeriesLengthDistribution {
    pub counts: BTreeMap<u32, u64>,
}

impl SeriesLengthDistribution {
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, games: u32) -> u64 {
        self.counts.get(&games).copied().unwrap_or(0)
    }

    /// Share of all observed series that lasted `games` games, in percent.
    pub fn percentage(&self, games: u32) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(games) as f64 / total as f64 * 100.0
    }

    pub fn percentages(&self) -> BTreeMap<u32, f64> {
        SERIES_LENGTHS
            .iter()
            .map(|&games| (games, self.percentage(games)))
            .collect()
    }
}

/// Aggregate of many independent bracket runs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub simulations: usize,
    /// Every roster team, highest probability first
    pub odds: Vec<ChampionshipOdds>,
    pub series_lengths: SeriesLengthDistribution,
}

impl SimulationSummary {
    pub fn favorite(&self) -> Option<&ChampionshipOdds> {
        self.odds.first()
    }

    pub fn probability_of(&self, team: &str) -> Option<f64> {
        self.odds
            .iter()
            .find(|odds| odds.team == team)
            .map(|odds| odds.probability)
    }
}

#[derive(Debug, Default)]
struct Tally {
    championships: HashMap<String, u64>,
    series_lengths: BTreeMap<u32, u64>,
}

impl Tally {
    fn record(&mut self, results: &PlayoffResults) {
        *self
            .championships
            .entry(results.champion().name.clone())
            .or_insert(0) += 1;
        for series in results.series() {
            *self.series_lengths.entry(series.total_games()).or_insert(0) += 1;
        }
    }

    fn merge(mut self, other: Tally) -> Tally {
        for (team, wins) in other.championships {
            *self.championships.entry(team).or_insert(0) += wins;
        }
        for (games, count) in other.series_lengths {
            *self.series_lengths.entry(games).or_insert(0) += count;
        }
        self
    }
}

/// z-score for the two-sided [`CONFIDENCE_LEVEL`] interval.
fn confidence_z() -> f64 {
    Normal::new(0.0, 1.0)
        .map(|normal| normal.inverse_cdf(1.0 - (1.0 - CONFIDENCE_LEVEL) / 2.0))
        .unwrap_or(1.959_963_984_540_054)
}

/// Run the full bracket `count` times and tabulate championships and series
/// lengths.
///
/// Runs are spread over the rayon pool. A master RNG (seeded, or from entropy
/// when `seed` is `None`) hands each run its own seed, so a fixed seed yields
/// the same summary regardless of how runs are scheduled.
pub fn run_multiple_simulations(
    count: usize,
    config: &SimulationConfig,
    seed: Option<u64>,
) -> Result<SimulationSummary> {
    if count == 0 {
        return Err(Error::NoSimulations);
    }

    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let run_seeds: Vec<u64> = (0..count).map(|_| rng.gen::<u64>()).collect();

    let tally = run_seeds
        .into_par_iter()
        .map(|run_seed| {
            let mut run_rng = ChaCha8Rng::seed_from_u64(run_seed);
            simulate_bracket(fetch_teams(), config, &mut run_rng)
        })
        .try_fold(Tally::default, |mut tally, results| {
            tally.record(&results?);
            Ok::<_, Error>(tally)
        })
        .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?;

    let summary = summarize(count, tally);
    log_summary(&summary);
    Ok(summary)
}

fn summarize(count: usize, tally: Tally) -> SimulationSummary {
    let n = count as f64;
    let z = confidence_z();

    let mut odds: Vec<ChampionshipOdds> = fetch_teams()
        .into_iter()
        .map(|team| {
            let championships = tally.championships.get(&team.name).copied().unwrap_or(0);
            let share = championships as f64 / n;
            ChampionshipOdds {
                team: team.name,
                conference: team.conference,
                championships,
                probability: share * 100.0,
                margin_of_error: z * (share * (1.0 - share) / n).sqrt() * 100.0,
            }
        })
        .collect();
    odds.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    SimulationSummary {
        simulations: count,
        odds,
        series_lengths: SeriesLengthDistribution {
            counts: tally.series_lengths,
        },
    }
}

fn log_summary(summary: &SimulationSummary) {
    let lengths = &summary.series_lengths;
    info!(
        sweep = %format!("{:.2}%", lengths.percentage(4)),
        five = %format!("{:.2}%", lengths.percentage(5)),
        six = %format!("{:.2}%", lengths.percentage(6)),
        seven = %format!("{:.2}%", lengths.percentage(7)),
        series = lengths.total(),
        "series length distribution"
    );
    if let Some(top) = summary.favorite() {
        info!(
            simulations = summary.simulations,
            team = %top.team,
            probability = %format!("{:.2}%", top.probability),
            "completed playoff simulations"
        );
    }
}
