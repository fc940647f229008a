use super::arm::ArmState;
use super::errors::EnvironmentError;
use super::rng::MaybeSeededRng;

use rand::rngs::SmallRng;
use rand::Rng;
use rand_distr::{Beta, Distribution};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Distribution the true per-arm success probabilities are drawn from at
/// construction.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProbDistribution {
    Uniform,
    Beta { a: Option<f64>, b: Option<f64> },
}

impl ProbDistribution {
    fn sample_probs(self, arms: usize, rng: &mut SmallRng) -> Result<Vec<f64>, EnvironmentError> {
        match self {
            ProbDistribution::Uniform => Ok((0..arms).map(|_| rng.random::<f64>()).collect()),
            ProbDistribution::Beta { a, b } => {
                let (a, b) = (a.unwrap_or(1.0), b.unwrap_or(1.0));
                let beta =
                    Beta::new(a, b).map_err(|_| EnvironmentError::InvalidBetaParams { a, b })?;
                Ok((0..arms).map(|_| beta.sample(rng)).collect())
            }
        }
    }
}

/// One environment interaction: which arm was pulled on which turn, and the
/// reward it returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PullRecord {
    pub turn: u32,
    pub arm: usize,
    pub reward: u32,
}

/// Total payout one strategy achieved over a full horizon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Score {
    pub strategy: String,
    pub payout: u32,
}

/// A k-armed Bernoulli bandit environment.
///
/// The true success probabilities are sampled once at construction and stay
/// hidden from policies; every observable quantity flows through [`pull`].
/// The environment owns the single random source used for reward sampling
/// and for tie-breaking in the heuristic policies.
///
/// [`pull`]: Bandit::pull
#[derive(Debug)]
pub struct Bandit {
    arms: usize,
    horizon: u32,
    turn: u32,
    true_probs: Vec<f64>,
    state: Vec<ArmState>,
    history: Vec<PullRecord>,
    scores: Vec<Score>,
    rng: MaybeSeededRng,
}

impl Bandit {
    pub fn new(
        arms: usize,
        horizon: u32,
        seed: Option<u64>,
        distribution: ProbDistribution,
    ) -> Result<Self, EnvironmentError> {
        if arms == 0 {
            return Err(EnvironmentError::InvalidArmCount);
        }
        if horizon == 0 {
            return Err(EnvironmentError::InvalidHorizon);
        }

        let mut rng = MaybeSeededRng::new(seed);
        let true_probs = distribution.sample_probs(arms, rng.get_rng())?;
        debug!(arms, horizon, seed = ?rng.seed(), probs = ?true_probs, "initialized bandit");

        Ok(Self {
            arms,
            horizon,
            turn: 1,
            true_probs,
            state: vec![ArmState::default(); arms],
            history: Vec::new(),
            scores: Vec::new(),
            rng,
        })
    }

    pub fn arms(&self) -> usize {
        self.arms
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Current turn, 1-indexed. Pulls are valid while `turn <= horizon`.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Pulls left in the horizon including the current turn, 0 once the
    /// horizon is exhausted.
    pub fn remaining_pulls(&self) -> u32 {
        (self.horizon + 1).saturating_sub(self.turn)
    }

    /// Simulate pulling `arm`: one Bernoulli trial with that arm's hidden
    /// success probability. Updates the arm's counts, appends a history
    /// record and advances the turn by exactly one. Fails without any side
    /// effect when the horizon is exhausted or the index is out of range.
    pub fn pull(&mut self, arm: usize) -> Result<u32, EnvironmentError> {
        if !(1..=self.horizon).contains(&self.turn) {
            return Err(EnvironmentError::HorizonExhausted {
                turn: self.turn,
                horizon: self.horizon,
            });
        }
        if arm >= self.arms {
            return Err(EnvironmentError::ArmOutOfRange {
                arm,
                arms: self.arms,
            });
        }

        let reward = self.rng.get_rng().random_bool(self.true_probs[arm]) as u32;

        let counts = &mut self.state[arm];
        counts.pulls += 1;
        counts.rewards += reward;

        self.history.push(PullRecord {
            turn: self.turn,
            arm,
            reward,
        });
        debug!(
            turn = self.turn,
            arm,
            reward,
            pulls = self.state[arm].pulls,
            rewards = self.state[arm].rewards,
            "pulled arm"
        );
        self.turn += 1;

        Ok(reward)
    }

    /// Snapshot of the per-arm counts. A copy, so callers can freely feed it
    /// into simulated lookahead without touching the real state.
    pub fn state(&self) -> Vec<ArmState> {
        self.state.clone()
    }

    pub fn history(&self) -> &[PullRecord] {
        &self.history
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub(crate) fn rng(&mut self) -> &mut SmallRng {
        self.rng.get_rng()
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: Vec<ArmState>) {
        self.state = state;
    }

    /// Restore state, history and turn to their initial values. The true
    /// probabilities are not resampled.
    pub fn reset(&mut self) {
        self.state = vec![ArmState::default(); self.arms];
        self.history.clear();
        self.turn = 1;
    }

    /// Record the payout of a completed strategy run, report the score log
    /// and reset the environment for the next strategy.
    pub fn store_strategy(&mut self, name: &str) {
        let payout = self.state.iter().map(|arm| arm.rewards).sum();
        self.scores.push(Score {
            strategy: name.to_string(),
            payout,
        });

        self.report_scores();
        self.reset();
    }

    /// Report the payouts of all strategies run against this environment so
    /// far.
    pub fn report_scores(&self) {
        for Score { strategy, payout } in &self.scores {
            info!(
                strategy = %strategy,
                payout,
                turns = self.horizon,
                "strategy performance"
            );
        }
    }
}
