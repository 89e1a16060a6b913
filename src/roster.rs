//! Static season table the simulator draws its teams from.
//!
//! Entries are listed per conference in standings order, so a team's position
//! within its conference is its seed.

use tracing::info;

use crate::team::{Conference, Team};

/// One row of the season table: name, ORtg, DRtg, 3PA, conference, win%.
pub type TeamRecord = (&'static str, f64, f64, f64, Conference, f64);

pub const DEFAULT_ROSTER: [TeamRecord; 20] = [
    ("Cleveland Cavaliers", 116.5, 107.8, 36.5, Conference::Eastern, 0.820),
    ("Boston Celtics", 123.0, 109.0, 39.0, Conference::Eastern, 0.780),
    ("New York Knicks", 117.8, 111.5, 37.0, Conference::Eastern, 0.710),
    ("Milwaukee Bucks", 118.5, 113.5, 37.5, Conference::Eastern, 0.690),
    ("Indiana Pacers", 119.0, 114.8, 38.0, Conference::Eastern, 0.670),
    ("Detroit Pistons", 114.0, 111.0, 35.0, Conference::Eastern, 0.650),
    ("Atlanta Hawks", 116.0, 117.0, 36.8, Conference::Eastern, 0.620),
    ("Orlando Magic", 113.8, 110.0, 35.5, Conference::Eastern, 0.590),
    ("Miami Heat", 114.2, 113.0, 36.0, Conference::Eastern, 0.570),
    ("Chicago Bulls", 112.8, 115.0, 36.0, Conference::Eastern, 0.550),
    ("Oklahoma City Thunder", 119.8, 109.5, 39.5, Conference::Western, 0.810),
    ("Denver Nuggets", 118.8, 111.0, 37.5, Conference::Western, 0.760),
    ("Los Angeles Lakers", 116.0, 113.5, 36.0, Conference::Western, 0.740),
    ("Memphis Grizzlies", 117.0, 112.5, 37.0, Conference::Western, 0.720),
    ("Houston Rockets", 116.5, 113.0, 36.5, Conference::Western, 0.700),
    ("Golden State Warriors", 117.5, 114.0, 39.0, Conference::Western, 0.680),
    ("Minnesota Timberwolves", 115.2, 107.0, 38.0, Conference::Western, 0.660),
    ("Los Angeles Clippers", 116.5, 112.5, 38.5, Conference::Western, 0.640),
    ("Sacramento Kings", 117.3, 114.5, 36.5, Conference::Western, 0.620),
    ("Dallas Mavericks", 119.5, 114.0, 37.0, Conference::Western, 0.600),
];

/// Build fresh, unrated teams from the static table.
///
/// Every call returns new values, so ratings computed for one run never leak
/// into the next.
pub fn fetch_teams() -> Vec<Team> {
    let teams: Vec<Team> = DEFAULT_ROSTER
        .iter()
        .map(|&(name, ortg, drtg, tpa, conference, win_pct)| {
            Team::new(name, ortg, drtg, tpa, conference, win_pct)
        })
        .collect();
    info!(count = teams.len(), "loaded teams from season table");
    teams
}

/// Teams of one conference in seed order.
pub fn conference_teams(teams: &[Team], conference: Conference) -> Vec<Team> {
    teams
        .iter()
        .filter(|team| team.conference == conference)
        .cloned()
        .collect()
}
