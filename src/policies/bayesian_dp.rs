use super::errors::PolicyError;
use super::strategy::Strategy;

use crate::environment::{ArmState, Bandit};

use std::collections::HashMap;

const LABEL: &str = "Bayesian DP";

/// Memoization table for the backward induction: canonical state snapshot
/// plus remaining pulls, mapped to the best expected value and the arm that
/// achieves it. Many action/outcome sequences converge on the same aggregate
/// counts, which is what makes the search tractable.
type MemoTable = HashMap<(Vec<ArmState>, u32), (f64, usize)>;

/// Exact-inference Bayesian policy. Each turn it runs a backward induction
/// over every reachable outcome sequence in the remaining horizon, scoring
/// arms by their Beta(1, 1)-posterior expected cumulative reward. The search
/// is exponential in the horizon without the memo table, so it is only
/// practical for small horizons.
pub struct BayesianDp;

/// Maximum expected future reward achievable from `state` with `remaining`
/// pulls left, and the arm to pull now to achieve it.
///
/// Ties go to the lowest arm index, so the result is fully deterministic.
/// The memo table is a pure performance optimization: recomputing from
/// scratch yields the same values and selections.
fn value(memo: &mut MemoTable, state: &[ArmState], remaining: u32) -> (f64, Option<usize>) {
    if remaining == 0 {
        return (0.0, None);
    }

    let key = (state.to_vec(), remaining);
    if let Some(&(best_value, best_arm)) = memo.get(&key) {
        return (best_value, Some(best_arm));
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_arm = None;

    for (arm, counts) in state.iter().enumerate() {
        // Beta-Bernoulli posterior mean under the uniform prior
        let p = counts.posterior_mean();

        let mut on_success = state.to_vec();
        on_success[arm] = ArmState {
            pulls: counts.pulls + 1,
            rewards: counts.rewards + 1,
        };
        let (value_success, _) = value(memo, &on_success, remaining - 1);

        let mut on_failure = state.to_vec();
        on_failure[arm] = ArmState {
            pulls: counts.pulls + 1,
            rewards: counts.rewards,
        };
        let (value_failure, _) = value(memo, &on_failure, remaining - 1);

        let expected = p * (1.0 + value_success) + (1.0 - p) * value_failure;
        if expected > best_value {
            best_value = expected;
            best_arm = Some(arm);
        }
    }

    if let Some(arm) = best_arm {
        memo.insert(key, (best_value, arm));
    }

    (best_value, best_arm)
}

impl Strategy for BayesianDp {
    fn run(&mut self, world: &mut Bandit) -> Result<(), PolicyError> {
        // One table for the whole horizon: sub-problems recur across turns.
        let mut memo = MemoTable::new();

        while world.turn() <= world.horizon() {
            let state = world.state();
            let remaining = world.remaining_pulls();

            let (_, best_arm) = value(&mut memo, &state, remaining);
            let arm = best_arm.ok_or(PolicyError::NoBestArm { remaining })?;
            world.pull(arm)?;
        }

        world.store_strategy(LABEL);
        Ok(())
    }
}
