use serde::Serialize;

/// Observed counts for one arm: how often it was pulled and how much
/// cumulative reward it returned. Rewards are Bernoulli, so
/// `rewards <= pulls` always holds.
///
/// Structural equality and hashing make a snapshot of these usable as a
/// memoization key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ArmState {
    pub pulls: u32,
    pub rewards: u32,
}

impl ArmState {
    /// Empirical success rate, 0 for an arm that was never pulled.
    pub fn mean_reward(&self) -> f64 {
        if self.pulls > 0 {
            self.rewards as f64 / self.pulls as f64
        } else {
            0.0
        }
    }

    /// Posterior mean of the success probability under a Beta(1, 1) prior:
    /// (w + 1) / (n + 2).
    pub fn posterior_mean(&self) -> f64 {
        (self.rewards as f64 + 1.0) / (self.pulls as f64 + 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_reward_of_unpulled_arm_is_zero() {
        let arm = ArmState::default();
        assert_eq!(arm.mean_reward(), 0.0);
    }

    #[test]
    fn mean_reward() {
        let arm = ArmState {
            pulls: 4,
            rewards: 3,
        };
        assert_eq!(arm.mean_reward(), 0.75);
    }

    #[test]
    fn posterior_mean_of_unpulled_arm_is_half() {
        let arm = ArmState::default();
        assert_eq!(arm.posterior_mean(), 0.5);
    }

    #[test]
    fn posterior_mean() {
        let arm = ArmState {
            pulls: 3,
            rewards: 3,
        };
        assert_eq!(arm.posterior_mean(), 0.8);
    }
}
