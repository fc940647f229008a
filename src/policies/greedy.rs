use super::errors::PolicyError;
use super::strategy::{argmax_candidates, break_tie, Strategy};

use crate::environment::{ArmState, Bandit};

const LABEL: &str = "Basic Greedy";

/// Pure greedy policy: always pull the arm with the highest empirical
/// success rate, breaking ties uniformly at random.
pub struct Greedy;

impl Greedy {
    fn select_arm(&self, world: &mut Bandit) -> Result<usize, PolicyError> {
        let rates: Vec<f64> = world.state().iter().map(ArmState::mean_reward).collect();
        break_tie(world, argmax_candidates(&rates))
    }
}

impl Strategy for Greedy {
    fn run(&mut self, world: &mut Bandit) -> Result<(), PolicyError> {
        while world.turn() <= world.horizon() {
            let arm = self.select_arm(world)?;
            world.pull(arm)?;
        }

        world.store_strategy(LABEL);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ProbDistribution;

    const SEED: u64 = 1234;

    #[test]
    fn runs_to_horizon_and_stores_one_score() {
        let mut world = Bandit::new(2, 3, Some(SEED), ProbDistribution::Uniform).unwrap();
        Greedy.run(&mut world).unwrap();

        let scores = world.scores();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].strategy, LABEL);
        assert!(scores[0].payout <= 3);

        // store_strategy resets the environment for the next policy
        assert_eq!(world.turn(), 1);
        assert!(world.history().is_empty());
        assert!(world.state().iter().all(|arm| arm.pulls == 0));
    }

    #[test]
    fn single_arm_payout_matches_manual_replay() {
        // With one arm there is never a real tie, so the policy consumes
        // randomness only through pull() and a same-seeded manual replay
        // observes the identical reward trace.
        let mut world = Bandit::new(1, 5, Some(SEED), ProbDistribution::Uniform).unwrap();
        Greedy.run(&mut world).unwrap();

        let mut replay = Bandit::new(1, 5, Some(SEED), ProbDistribution::Uniform).unwrap();
        let mut payout = 0;
        for _ in 0..5 {
            payout += replay.pull(0).unwrap();
        }
        assert!(replay.history().iter().all(|record| record.arm == 0));
        assert_eq!(world.scores()[0].payout, payout);
    }

    #[test]
    fn prefers_arm_with_highest_success_rate() {
        let mut world = Bandit::new(3, 20, Some(SEED), ProbDistribution::Uniform).unwrap();
        world.set_state(vec![
            ArmState {
                pulls: 2,
                rewards: 1,
            },
            ArmState {
                pulls: 2,
                rewards: 2,
            },
            ArmState {
                pulls: 2,
                rewards: 0,
            },
        ]);

        assert_eq!(Greedy.select_arm(&mut world).unwrap(), 1);
    }
}
