/// Default weight of the defensive-rating rank
pub const DEFENSE_WEIGHT: f64 = 0.40;

/// Default weight of the three-point-volume rank
pub const SHOOTING_WEIGHT: f64 = 0.25;

/// Default weight of the offensive-rating rank
pub const OFFENSE_WEIGHT: f64 = 0.20;

/// Default weight of the win-percentage rank
pub const WIN_PCT_WEIGHT: f64 = 0.15;

/// Effective-rating bonus for the home side of a game
pub const HOME_COURT_ADVANTAGE: f64 = 0.05;

/// Maximum magnitude of the per-side luck perturbation
pub const MAX_LUCK_FACTOR: f64 = 0.08;

/// Bonus for a side whose opponent is one win from taking the series
pub const DESPERATION_BONUS: f64 = 0.03;

/// Momentum gained per underdog win, applied before every game
pub const MOMENTUM_PER_UNDERDOG_WIN: f64 = 0.01;

/// Momentum cap once the underdog has won a game
pub const MOMENTUM_CAP: f64 = 0.05;

/// Momentum gained per game played while the underdog is still winless
pub const MOMENTUM_PER_GAME: f64 = 0.005;

/// Momentum cap while the underdog is still winless
pub const WINLESS_MOMENTUM_CAP: f64 = 0.03;

/// Points of margin per unit of effective-rating difference
pub const MARGIN_SCALE: f64 = 30.0;

/// Width of the integer jitter added to a game margin
pub const MARGIN_JITTER: u32 = 8;

/// Rank assigned to a team missing from a rank table
pub const WORST_RANK: usize = 20;

/// Games needed to win a standard playoff series
pub const SERIES_WINS: u32 = 4;

/// Games needed to win a play-in contest
pub const PLAY_IN_WINS: u32 = 1;

/// Seeds per conference that take part in the playoffs and play-in
pub const CONFERENCE_SIZE: usize = 10;

/// Default number of Monte-Carlo bracket runs
pub const DEFAULT_SIMULATIONS: usize = 1000;

/// Two-sided confidence level reported with championship probabilities
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Home games for side A in a best-of-seven (2-2-1-1-1 format)
pub const SIDE_A_HOME_GAMES: [u32; 4] = [1, 2, 5, 7];

/// Series lengths tracked by the Monte-Carlo aggregator
pub const SERIES_LENGTHS: [u32; 4] = [4, 5, 6, 7];
