//! Fixed two-conference playoff bracket.
//!
//! Per conference: a play-in among seeds 7-10, then round 1 as 1 v 8, 2 v 7,
//! 3 v 6, 4 v 5 with the play-in survivors slotted directly into the 7 and 8
//! lines (no re-seeding), round 2 as (1/8 winner v 4/5 winner) and
//! (2/7 winner v 3/6 winner), then the conference finals. The two conference
//! champions meet in the Finals with the Eastern champion as side A.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::config::SimulationConfig;
use crate::constants::CONFERENCE_SIZE;
use crate::error::{Error, Result};
use crate::rating::compute_weighted_ratings;
use crate::roster::{conference_teams, fetch_teams};
use crate::series::{simulate_series, SeriesFormat, SeriesResult};
use crate::team::{Conference, Team};

/// One play-in game, recorded by name only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayInGame {
    pub matchup: String,
    pub winner: String,
    pub loser: String,
}

impl PlayInGame {
    fn from_series(series: &SeriesResult) -> Self {
        PlayInGame {
            matchup: format!("{} vs. {}", series.team_a.name, series.team_b.name),
            winner: series.winning_team().name.clone(),
            loser: series.losing_team().name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayInResult {
    pub seventh_seed: Team,
    pub eighth_seed: Team,
    pub games: Vec<PlayInGame>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferencePlayoffs {
    pub play_in: Option<PlayInResult>,
    pub round1: Vec<SeriesResult>,
    pub round2: Vec<SeriesResult>,
    pub finals: SeriesResult,
}

impl ConferencePlayoffs {
    pub fn champion(&self) -> &Team {
        self.finals.winning_team()
    }

    /// Every best-of-seven series in bracket order.
    pub fn series(&self) -> impl Iterator<Item = &SeriesResult> {
        self.round1
            .iter()
            .chain(self.round2.iter())
            .chain(std::iter::once(&self.finals))
    }
}

/// Full bracket for one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayoffResults {
    #[serde(rename = "Eastern")]
    pub eastern: ConferencePlayoffs,
    #[serde(rename = "Western")]
    pub western: ConferencePlayoffs,
    #[serde(rename = "Finals")]
    pub finals: SeriesResult,
    /// Rated teams the run was played with
    pub teams: Vec<Team>,
}

impl PlayoffResults {
    pub fn conference(&self, conference: Conference) -> &ConferencePlayoffs {
        match conference {
            Conference::Eastern => &self.eastern,
            Conference::Western => &self.western,
        }
    }

    pub fn champion(&self) -> &Team {
        self.finals.winning_team()
    }

    /// Every best-of-seven series, Eastern first, ending with the Finals.
    pub fn series(&self) -> impl Iterator<Item = &SeriesResult> {
        self.eastern
            .series()
            .chain(self.western.series())
            .chain(std::iter::once(&self.finals))
    }
}

/// Play-in among seeds 7-10 of a conference in seed order.
///
/// 9 v 10 eliminates its loser; the 7 v 8 winner takes the 7th seed; the 7 v 8
/// loser then meets the 9 v 10 winner for the 8th seed. `seeds` must hold at
/// least ten teams; [`simulate_bracket`] checks this.
pub(crate) fn simulate_play_in<R: Rng>(
    seeds: &[Team],
    config: &SimulationConfig,
    rng: &mut R,
) -> PlayInResult {
    let lower = simulate_series(&seeds[8], &seeds[9], SeriesFormat::PlayIn, config, rng);
    let upper = simulate_series(&seeds[6], &seeds[7], SeriesFormat::PlayIn, config, rng);
    let decider = simulate_series(
        upper.losing_team(),
        lower.winning_team(),
        SeriesFormat::PlayIn,
        config,
        rng,
    );

    PlayInResult {
        seventh_seed: upper.winning_team().clone(),
        eighth_seed: decider.winning_team().clone(),
        games: vec![
            PlayInGame::from_series(&lower),
            PlayInGame::from_series(&upper),
            PlayInGame::from_series(&decider),
        ],
    }
}

/// Run one conference bracket from at least ten seeded teams.
pub(crate) fn simulate_conference<R: Rng>(
    seeds: &[Team],
    config: &SimulationConfig,
    rng: &mut R,
) -> ConferencePlayoffs {
    let play_in = simulate_play_in(seeds, config, rng);
    let format = SeriesFormat::BestOfSeven;

    let round1 = vec![
        simulate_series(&seeds[0], &play_in.eighth_seed, format, config, rng),
        simulate_series(&seeds[1], &play_in.seventh_seed, format, config, rng),
        simulate_series(&seeds[2], &seeds[5], format, config, rng),
        simulate_series(&seeds[3], &seeds[4], format, config, rng),
    ];

    let round2 = vec![
        simulate_series(round1[0].winning_team(), round1[3].winning_team(), format, config, rng),
        simulate_series(round1[1].winning_team(), round1[2].winning_team(), format, config, rng),
    ];

    let finals = simulate_series(
        round2[0].winning_team(),
        round2[1].winning_team(),
        format,
        config,
        rng,
    );

    ConferencePlayoffs {
        play_in: Some(play_in),
        round1,
        round2,
        finals,
    }
}

/// Rate `teams` and play the whole bracket.
///
/// Each conference needs at least ten teams, listed in seed order; extra teams
/// are rated but do not play.
pub fn simulate_bracket<R: Rng>(
    mut teams: Vec<Team>,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<PlayoffResults> {
    compute_weighted_ratings(&mut teams, &config.weights);

    let eastern_seeds = seeded(&teams, Conference::Eastern)?;
    let western_seeds = seeded(&teams, Conference::Western)?;

    let eastern = simulate_conference(&eastern_seeds, config, rng);
    let western = simulate_conference(&western_seeds, config, rng);
    let finals = simulate_series(
        eastern.champion(),
        western.champion(),
        SeriesFormat::BestOfSeven,
        config,
        rng,
    );

    Ok(PlayoffResults {
        eastern,
        western,
        finals,
        teams,
    })
}

/// Simulate the full playoffs from the default season table.
pub fn simulate_playoffs<R: Rng>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<PlayoffResults> {
    let results = simulate_bracket(fetch_teams(), config, rng)?;
    info!(
        champion = %results.champion().name,
        games = results.finals.total_games(),
        "playoffs simulated"
    );
    Ok(results)
}

fn seeded(teams: &[Team], conference: Conference) -> Result<Vec<Team>> {
    let seeds = conference_teams(teams, conference);
    if seeds.len() < CONFERENCE_SIZE {
        return Err(Error::IncompleteConference {
            conference,
            found: seeds.len(),
        });
    }
    Ok(seeds)
}
