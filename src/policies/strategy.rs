use super::bayesian_dp::BayesianDp;
use super::errors::PolicyError;
use super::greedy::Greedy;
use super::ucb::Ucb;

use crate::environment::Bandit;

use rand::seq::IteratorRandom;
use serde::Deserialize;

/// A decision policy run against a bandit environment.
///
/// Implementations interact with the environment exclusively through its
/// public operations, pull until the horizon is exhausted, and call
/// `store_strategy` exactly once with their label.
pub trait Strategy {
    fn run(&mut self, world: &mut Bandit) -> Result<(), PolicyError>;
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyType {
    Greedy,
    Ucb {
        #[serde(default = "default_ucb_c")]
        c: f64,
        #[serde(default)]
        decay: bool,
    },
    BayesianDp,
}

fn default_ucb_c() -> f64 {
    1.0
}

impl StrategyType {
    pub fn into_inner(self) -> Box<dyn Strategy> {
        match self {
            StrategyType::Greedy => Box::new(Greedy),
            StrategyType::Ucb { c, decay } => Box::new(Ucb::new(c, decay)),
            StrategyType::BayesianDp => Box::new(BayesianDp),
        }
    }
}

/// Indices of all entries tied for the maximum value.
pub(super) fn argmax_candidates(values: &[f64]) -> Vec<usize> {
    let best = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .enumerate()
        .filter(|(_, &value)| value == best)
        .map(|(arm, _)| arm)
        .collect()
}

/// Pick one arm among the tied candidates, uniformly at random from the
/// environment's random source. A single candidate is returned as-is without
/// consuming randomness.
pub(super) fn break_tie(world: &mut Bandit, candidates: Vec<usize>) -> Result<usize, PolicyError> {
    match candidates.len() {
        0 => Err(PolicyError::NoBestArm {
            remaining: world.remaining_pulls(),
        }),
        1 => Ok(candidates[0]),
        _ => candidates
            .into_iter()
            .choose(world.rng())
            .ok_or(PolicyError::NoBestArm {
                remaining: world.remaining_pulls(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_returns_all_tied_indices() {
        assert_eq!(argmax_candidates(&[0.5, 1.0, 1.0, 0.0]), vec![1, 2]);
    }

    #[test]
    fn argmax_handles_infinities() {
        let values = [f64::INFINITY, 0.5, f64::INFINITY];
        assert_eq!(argmax_candidates(&values), vec![0, 2]);
    }

    #[test]
    fn strategy_type_deserializes_with_defaults() {
        let strategy: StrategyType = serde_json::from_str(r#"{"type": "ucb"}"#).unwrap();
        match strategy {
            StrategyType::Ucb { c, decay } => {
                assert_eq!(c, 1.0);
                assert!(!decay);
            }
            _ => panic!("expected ucb strategy"),
        }

        let strategy: StrategyType = serde_json::from_str(r#"{"type": "bayesian_dp"}"#).unwrap();
        assert!(matches!(strategy, StrategyType::BayesianDp));
    }
}
