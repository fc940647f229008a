use super::errors::PolicyError;
use super::strategy::{argmax_candidates, break_tie, Strategy};

use crate::environment::{ArmState, Bandit};

const LABEL: &str = "Upper Confidence Bound (UCB)";

/// Upper Confidence Bound policy. Unpulled arms get an infinite exploration
/// bonus so every arm is tried at least once before the confidence values
/// start to discriminate.
pub struct Ucb {
    c: f64,
    decay: bool,
}

impl Ucb {
    pub fn new(c: f64, decay: bool) -> Self {
        Self { c, decay }
    }

    /// Effective confidence coefficient for a turn. With decay enabled it is
    /// recomputed from the base constant every turn, so the decay never
    /// compounds across turns.
    fn coefficient(&self, turn: u32) -> f64 {
        if self.decay {
            self.c / (turn as f64).sqrt()
        } else {
            self.c
        }
    }

    fn select_arm(&self, world: &mut Bandit) -> Result<usize, PolicyError> {
        let c = self.coefficient(world.turn());
        let confidences = confidence_values(&world.state(), world.turn(), c);
        break_tie(world, argmax_candidates(&confidences))
    }
}

impl Default for Ucb {
    fn default() -> Self {
        Self::new(1.0, false)
    }
}

fn confidence_values(state: &[ArmState], turn: u32, c: f64) -> Vec<f64> {
    state
        .iter()
        .map(|arm| {
            let exploration = if arm.pulls > 0 {
                (c * (turn as f64).ln() / arm.pulls as f64).sqrt()
            } else {
                f64::INFINITY
            };
            arm.mean_reward() + c * exploration
        })
        .collect()
}

impl Strategy for Ucb {
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
    fn unpulled_arm_gets_infinite_confidence() {
        let state = [
            ArmState::default(),
            ArmState {
                pulls: 3,
                rewards: 2,
            },
        ];
        let confidences = confidence_values(&state, 4, 1.0);
        assert_eq!(confidences[0], f64::INFINITY);
        assert!(confidences[1].is_finite());
    }

    #[test]
    fn confidence_formula() {
        let state = [ArmState {
            pulls: 4,
            rewards: 2,
        }];
        let confidences = confidence_values(&state, 4, 1.0);
        let expected = 0.5 + (4.0f64.ln() / 4.0).sqrt();
        assert!((confidences[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn first_selections_visit_every_arm() {
        let mut world = Bandit::new(3, 6, Some(SEED), ProbDistribution::Uniform).unwrap();
        let ucb = Ucb::default();

        for _ in 0..3 {
            let arm = ucb.select_arm(&mut world).unwrap();
            assert_eq!(world.state()[arm].pulls, 0);
            world.pull(arm).unwrap();
        }
        assert!(world.state().iter().all(|arm| arm.pulls == 1));
    }

    #[test]
    fn decay_is_recomputed_from_the_base_constant() {
        let ucb = Ucb::new(1.0, true);
        assert_eq!(ucb.coefficient(1), 1.0);
        assert_eq!(ucb.coefficient(4), 0.5);
        // asking twice for the same turn must not compound
        assert_eq!(ucb.coefficient(4), 0.5);

        let fixed = Ucb::new(1.0, false);
        assert_eq!(fixed.coefficient(4), 1.0);
    }

    #[test]
    fn runs_to_horizon_and_stores_one_score() {
        let mut world = Bandit::new(2, 4, Some(SEED), ProbDistribution::Uniform).unwrap();
        Ucb::default().run(&mut world).unwrap();

        let scores = world.scores();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].strategy, LABEL);
        assert_eq!(world.turn(), 1);
        assert!(world.history().is_empty());
    }
}
