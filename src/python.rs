//! Python bindings, enabled with the `python` feature.
//!
//! Results cross the boundary as JSON strings so the Python side sees the same
//! payload an HTTP client would.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use crate::config::SimulationConfig;
use crate::constants::DEFAULT_SIMULATIONS;
use crate::error::Error;
use crate::rating::compute_weighted_ratings;
use crate::roster::fetch_teams;

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn load_config(weightings_json: Option<&str>) -> Result<SimulationConfig, Error> {
    match weightings_json {
        Some(payload) => SimulationConfig::from_json(payload),
        None => Ok(SimulationConfig::default()),
    }
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Simulate one full playoff bracket.
///
/// `weightings_json` takes the percent-style payload, e.g.
/// `{"offense": 20, "defense": 40, "threePoint": 25}`.
#[pyfunction]
#[pyo3(signature = (weightings_json = None, seed = None))]
fn simulate_playoffs(weightings_json: Option<&str>, seed: Option<u64>) -> PyResult<String> {
    let config = load_config(weightings_json)?;
    let results = crate::bracket::simulate_playoffs(&config, &mut make_rng(seed))?;
    Ok(serde_json::to_string(&results).map_err(Error::from)?)
}

/// Run many brackets.
///
/// Returns `([(team, probability)], {series_length: percent})`.
#[pyfunction]
#[pyo3(signature = (count = DEFAULT_SIMULATIONS, weightings_json = None, seed = None))]
fn run_simulations(
    count: usize,
    weightings_json: Option<&str>,
    seed: Option<u64>,
) -> PyResult<(Vec<(String, f64)>, HashMap<u32, f64>)> {
    let config = load_config(weightings_json)?;
    let summary = crate::monte_carlo::run_multiple_simulations(count, &config, seed)?;

    let odds = summary
        .odds
        .into_iter()
        .map(|odds| (odds.team, odds.probability))
        .collect();
    let lengths = summary.series_lengths.percentages().into_iter().collect();
    Ok((odds, lengths))
}

/// The season table with weighted ratings filled in, as JSON.
#[pyfunction]
#[pyo3(signature = (weightings_json = None))]
fn default_teams(weightings_json: Option<&str>) -> PyResult<String> {
    let config = load_config(weightings_json)?;
    let mut teams = fetch_teams();
    compute_weighted_ratings(&mut teams, &config.weights);
    Ok(serde_json::to_string(&teams).map_err(Error::from)?)
}

/// Python module definition
#[pymodule]
fn playoffs_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate_playoffs, m)?)?;
    m.add_function(wrap_pyfunction!(run_simulations, m)?)?;
    m.add_function(wrap_pyfunction!(default_teams, m)?)?;

    m.add("DEFAULT_SIMULATIONS", DEFAULT_SIMULATIONS)?;

    Ok(())
}
