pub mod arm;
pub mod bandit;
pub mod errors;
mod rng;

pub use arm::ArmState;
pub use bandit::{Bandit, ProbDistribution, PullRecord, Score};
pub use errors::EnvironmentError;
